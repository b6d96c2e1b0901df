use leptos::prelude::*;

use potion_shop::{
    cart::CartLine,
    inventory::StockStatus,
    products::Variant,
    storefront::Storefront,
};

use crate::announce;

/// Price line under the product title, e.g. `Red - 40 Gold`.
pub fn format_display_price(display_price: &str) -> String {
    format!("{display_price} Gold")
}

/// Inline style for a colour swatch.
pub fn swatch_style(color: &str) -> String {
    format!("background-color: {}", color.to_lowercase())
}

/// CSS class for a stock status line.
pub fn stock_class(status: StockStatus) -> &'static str {
    match status {
        StockStatus::OutOfStock => "stock-status stock-status-out",
        StockStatus::AlmostOut => "stock-status stock-status-low",
        StockStatus::InStock => "stock-status",
    }
}

#[component]
fn StockLine(status: Memo<StockStatus>, link: String) -> impl IntoView {
    view! {
        {move || {
            let status = status.get();

            if status == StockStatus::OutOfStock {
                view! {
                    <p class=stock_class(status)>
                        <a href=link.clone() target="_blank" rel="noopener">{status.label()}</a>
                    </p>
                }
                .into_any()
            } else {
                view! { <p class=stock_class(status)>{status.label()}</p> }.into_any()
            }
        }}
    }
}

#[component]
fn Swatches(
    storefront: RwSignal<Storefront>,
    live_message: RwSignal<(u64, String)>,
) -> impl IntoView {
    let variants: Vec<Variant> = storefront.with_untracked(|storefront| {
        storefront
            .page()
            .product()
            .variants()
            .iter()
            .cloned()
            .collect()
    });

    view! {
        <div class="swatches">
            {variants
                .into_iter()
                .enumerate()
                .map(|(index, variant)| {
                    let label = format!("Show {} variant", variant.color);

                    view! {
                        <div
                            class="color-box"
                            class:color-box-selected=move || {
                                storefront.with(|storefront| {
                                    storefront.page().product().variants().is_selected(index)
                                })
                            }
                            style=swatch_style(&variant.color)
                            aria-label=label
                            on:mouseover=move |_| {
                                let result = storefront
                                    .try_update(|storefront| storefront.page_mut().select_variant(index));

                                if let Some(Err(error)) = result {
                                    announce(live_message, error.to_string());
                                }
                            }
                        ></div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn CartButtons(
    storefront: RwSignal<Storefront>,
    live_message: RwSignal<(u64, String)>,
    can_add: Memo<bool>,
) -> impl IntoView {
    let has_lines =
        Memo::new(move |_| storefront.with(|storefront| !storefront.cart().is_empty()));

    view! {
        <div class="cart-buttons">
            <button
                type="button"
                class="button"
                class:disabled-button=move || !can_add.get()
                disabled=move || !can_add.get()
                on:click=move |_| {
                    let result = storefront
                        .try_update(|storefront| storefront.add_to_cart().map(CartLine::item_label));

                    match result {
                        Some(Ok(label)) => announce(live_message, format!("Added {label} to cart.")),
                        Some(Err(error)) => announce(live_message, error.to_string()),
                        None => {}
                    }
                }
            >
                "Add to Cart"
            </button>
            <button
                type="button"
                class="button"
                class:disabled-button=move || !has_lines.get()
                disabled=move || !has_lines.get()
                on:click=move |_| {
                    let removed = storefront
                        .try_update(Storefront::remove_from_cart)
                        .flatten();

                    if let Some(line) = removed {
                        announce(live_message, format!("Removed {} from cart.", line.item_label()));
                    }
                }
            >
                "Remove from Cart"
            </button>
        </div>
    }
}

/// Product panel: image, product metadata, derived stock and sale state, swatches and cart
/// buttons.
#[component]
pub fn ProductPanel(
    /// Storefront state shared with the cart and reviews.
    storefront: RwSignal<Storefront>,
    /// Screen reader announcements.
    live_message: RwSignal<(u64, String)>,
) -> impl IntoView {
    let total_inventory = Memo::new(move |_| {
        storefront.with(|storefront| storefront.page().product().total_inventory())
    });
    let on_sale = Memo::new(move |_| {
        storefront.with(|storefront| storefront.page().product().is_on_sale())
    });
    let stock_status = Memo::new(move |_| {
        storefront.with(|storefront| storefront.page().product().stock_status())
    });
    let can_add = Memo::new(move |_| storefront.with(Storefront::can_add_to_cart));

    let (link, details, rarity, effect, description) = storefront.with_untracked(|storefront| {
        let product = storefront.page().product();

        (
            product.link.clone(),
            product.details.clone(),
            product.rarity_line(),
            product.effect_line(),
            product.description.clone(),
        )
    });

    view! {
        <section class="product">
            <div class="product-image">
                <img
                    src=move || storefront.with(|storefront| storefront.page().product().image().to_string())
                    alt=move || storefront.with(|storefront| storefront.page().product().alt_text().to_string())
                />
            </div>
            <div class="product-info">
                <h1>{move || storefront.with(|storefront| storefront.page().product().title())}</h1>
                <p class="sale-message" class:on-sale=move || on_sale.get()>
                    {move || storefront.with(|storefront| storefront.page().product().sale_message())}
                </p>
                <p class="price">
                    {move || {
                        storefront.with(|storefront| {
                            format_display_price(&storefront.page().product().display_price())
                        })
                    }}
                </p>
                <StockLine status=stock_status link=link />
                <p class="inventory">
                    {move || format!("{} in stock across all colours", total_inventory.get())}
                </p>
                <p class="premium-status">{move || storefront.with(Storefront::premium_status)}</p>
                <p class="shipping">{move || storefront.with(Storefront::shipping_message)}</p>
                <p class="rarity">{rarity}</p>
                <p class="effect">{effect}</p>
                <p class="description">{description}</p>
                <ul class="details">
                    {details.into_iter().map(|detail| view! { <li>{detail}</li> }).collect_view()}
                </ul>
                <Swatches storefront=storefront live_message=live_message />
                <CartButtons storefront=storefront live_message=live_message can_add=can_add />
            </div>
        </section>
    }
}
