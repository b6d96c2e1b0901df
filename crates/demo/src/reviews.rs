use leptos::{ev::SubmitEvent, prelude::*};

use potion_shop::{
    reviews::{
        Rating, Review,
        panel::ProductTab,
    },
    storefront::Storefront,
};

use crate::announce;

/// Display line for a review's rating.
pub fn format_rating(rating: Rating) -> String {
    format!("Rating: {rating}")
}

/// Value for the rating picker; empty when nothing is picked.
pub fn rating_value(rating: Option<Rating>) -> String {
    rating.as_ref().map(ToString::to_string).unwrap_or_default()
}

/// Parse the rating picker value; an empty or invalid value clears the rating.
pub fn parse_rating(value: &str) -> Option<Rating> {
    value.parse().ok()
}

/// CSS `display` value for a tab body; hidden tabs stay mounted.
fn tab_display(visible: bool) -> &'static str {
    if visible { "block" } else { "none" }
}

#[component]
fn ReviewList(storefront: RwSignal<Storefront>) -> impl IntoView {
    let reviews = Memo::new(move |_| storefront.with(|storefront| storefront.page().reviews()));
    let empty_message =
        Memo::new(move |_| storefront.with(|storefront| storefront.page().empty_reviews_message()));

    view! {
        {move || {
            if let Some(message) = empty_message.get() {
                view! { <p class="no-reviews">{message}</p> }.into_any()
            } else {
                let reviews = reviews.get();

                view! {
                    <ul class="reviews">
                        {reviews
                            .into_iter()
                            .map(|Review { name, review, rating }| {
                                view! {
                                    <li>
                                        <p class="review-name">{name}</p>
                                        <p class="review-rating">{format_rating(rating)}</p>
                                        <p class="review-text">{review}</p>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                }
                .into_any()
            }
        }}
    }
}

#[component]
fn ReviewFormView(
    storefront: RwSignal<Storefront>,
    live_message: RwSignal<(u64, String)>,
) -> impl IntoView {
    let errors = Memo::new(move |_| {
        storefront.with(|storefront| storefront.page().form().error_messages())
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();

        let result = storefront.try_update(|storefront| storefront.page_mut().submit_review());

        match result {
            Some(Ok(review)) => {
                announce(live_message, format!("Thanks for your review, {}.", review.name));
            }
            Some(Err(rejected)) => announce(live_message, rejected.to_string()),
            None => {}
        }
    };

    view! {
        <form class="review-form" on:submit=on_submit>
            {move || {
                let errors = errors.get();

                if errors.is_empty() {
                    ().into_any()
                } else {
                    view! {
                        <div class="form-errors">
                            <b>"Please correct the following error(s):"</b>
                            <ul>
                                {errors
                                    .into_iter()
                                    .map(|error| view! { <li>{error}</li> })
                                    .collect_view()}
                            </ul>
                        </div>
                    }
                    .into_any()
                }
            }}
            <p>
                <label for="name">"Name:"</label>
                <input
                    id="name"
                    prop:value=move || {
                        storefront.with(|storefront| storefront.page().form().name().to_string())
                    }
                    on:input=move |event| {
                        let value = event_target_value(&event);

                        storefront
                            .update(|storefront| storefront.page_mut().form_mut().set_name(value));
                    }
                />
            </p>
            <p>
                <label for="review">"Review:"</label>
                <textarea
                    id="review"
                    prop:value=move || {
                        storefront.with(|storefront| storefront.page().form().review().to_string())
                    }
                    on:input=move |event| {
                        let value = event_target_value(&event);

                        storefront
                            .update(|storefront| storefront.page_mut().form_mut().set_review(value));
                    }
                ></textarea>
            </p>
            <p>
                <label for="rating">"Rating:"</label>
                <select
                    id="rating"
                    prop:value=move || {
                        storefront.with(|storefront| rating_value(storefront.page().form().rating()))
                    }
                    on:change=move |event| {
                        let rating = parse_rating(&event_target_value(&event));

                        storefront
                            .update(|storefront| storefront.page_mut().form_mut().set_rating(rating));
                    }
                >
                    <option value="" disabled=true>""</option>
                    {Rating::all()
                        .map(|rating| {
                            view! { <option value=rating.to_string()>{rating.to_string()}</option> }
                        })
                        .collect_view()}
                </select>
            </p>
            <p>
                <input type="submit" value="Submit" class="button" />
            </p>
        </form>
    }
}

/// Tabbed reviews panel: the review list and the review form.
#[component]
pub fn ProductTabs(
    /// Storefront state holding the product page.
    storefront: RwSignal<Storefront>,
    /// Screen reader announcements.
    live_message: RwSignal<(u64, String)>,
) -> impl IntoView {
    let selected_tab =
        Memo::new(move |_| storefront.with(|storefront| storefront.page().selected_tab()));

    view! {
        <section class="product-tabs">
            <div class="tab-headers">
                {ProductTab::ALL
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <span
                                class="tab"
                                class:active-tab=move || selected_tab.get() == tab
                                on:click=move |_| {
                                    storefront.update(|storefront| storefront.page_mut().select_tab(tab));
                                }
                            >
                                {tab.label()}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
            <div style:display=move || tab_display(selected_tab.get() == ProductTab::Reviews)>
                <ReviewList storefront=storefront />
            </div>
            <div style:display=move || tab_display(selected_tab.get() == ProductTab::MakeAReview)>
                <ReviewFormView storefront=storefront live_message=live_message />
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn rating_line() -> TestResult {
        assert_eq!(format_rating(Rating::new(4)?), "Rating: 4");

        Ok(())
    }

    #[test]
    fn rating_picker_round_trips_selection() -> TestResult {
        let rating = Rating::new(3)?;

        assert_eq!(rating_value(Some(rating)), "3");
        assert_eq!(rating_value(None), "");
        assert_eq!(parse_rating("3"), Some(rating));

        Ok(())
    }

    #[test]
    fn empty_picker_value_clears_rating() {
        assert_eq!(parse_rating(""), None);
        assert_eq!(parse_rating("7"), None);
    }

    #[test]
    fn hidden_tabs_stay_mounted() {
        assert_eq!(tab_display(true), "block");
        assert_eq!(tab_display(false), "none");
    }
}
