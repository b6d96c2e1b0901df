use leptos::prelude::*;

use potion_shop::{
    cart::Cart,
    pricing::{format_gold, format_money},
    storefront::Storefront,
};

/// Label for the cart toggle, e.g. `Cart (2)`.
pub fn cart_button_label(lines: usize) -> String {
    format!("Cart ({lines})")
}

/// Row number cell, e.g. `1.`.
pub fn line_number(index: usize) -> String {
    format!("{}.", index.saturating_add(1))
}

/// Subtotal cell; shows the error when the total cannot be computed.
fn format_subtotal(cart: &Cart) -> String {
    match cart.subtotal() {
        Ok(subtotal) => format_money(&subtotal),
        Err(error) => format!("Unavailable: {error}"),
    }
}

#[component]
fn CartTable(storefront: RwSignal<Storefront>) -> impl IntoView {
    let lines =
        Memo::new(move |_| storefront.with(|storefront| storefront.cart().lines().to_vec()));
    let subtotal =
        Memo::new(move |_| storefront.with(|storefront| format_subtotal(storefront.cart())));

    view! {
        {move || {
            let lines = lines.get();

            if lines.is_empty() {
                view! { <p class="cart-empty">"Your cart is empty."</p> }.into_any()
            } else {
                view! {
                    <table class="cart-table">
                        <thead>
                            <tr>
                                <th>"Num."</th>
                                <th>"Item"</th>
                                <th>"Price"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {lines
                                .iter()
                                .enumerate()
                                .map(|(index, line)| {
                                    view! {
                                        <tr>
                                            <td>{line_number(index)}</td>
                                            <td>{line.item_label()}</td>
                                            <td>{format_gold(line.price)}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                        <tfoot>
                            <tr>
                                <td></td>
                                <td>"Subtotal"</td>
                                <td>{move || subtotal.get()}</td>
                            </tr>
                        </tfoot>
                    </table>
                }
                .into_any()
            }
        }}
    }
}

/// Cart toggle and, when shown, the cart table.
#[component]
pub fn CartPanel(
    /// Storefront state holding the cart.
    storefront: RwSignal<Storefront>,
) -> impl IntoView {
    let show_cart = Memo::new(move |_| storefront.with(Storefront::show_cart));

    view! {
        <div class="cart">
            <button
                type="button"
                class="button"
                aria-expanded=move || show_cart.get().to_string()
                on:click=move |_| {
                    storefront.update(|storefront| {
                        storefront.toggle_cart();
                    });
                }
            >
                {move || storefront.with(|storefront| cart_button_label(storefront.cart().len()))}
            </button>
            <Show when=move || show_cart.get()>
                <CartTable storefront=storefront />
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use potion_shop::{cart::CartLine, products::VariantId};

    use super::*;

    fn cart(prices: &[u32]) -> Cart {
        let mut cart = Cart::new();

        for &price in prices {
            cart.add_line(CartLine {
                variant_id: VariantId(2234),
                product_name: "Potion of Healing".to_string(),
                color: "Red".to_string(),
                price,
            });
        }

        cart
    }

    #[test]
    fn cart_button_counts_lines() {
        assert_eq!(cart_button_label(0), "Cart (0)");
        assert_eq!(cart_button_label(3), "Cart (3)");
    }

    #[test]
    fn line_numbers_start_at_one() {
        assert_eq!(line_number(0), "1.");
        assert_eq!(line_number(9), "10.");
    }

    #[test]
    fn subtotal_uses_cart_total() {
        assert_eq!(format_subtotal(&cart(&[40, 30])), "70 Gold");
        assert_eq!(format_subtotal(&cart(&[])), "0 Gold");
    }

    #[test]
    fn subtotal_of_largest_prices_does_not_overflow() {
        assert_eq!(format_subtotal(&cart(&[u32::MAX, u32::MAX])), "8589934590 Gold");
    }
}
