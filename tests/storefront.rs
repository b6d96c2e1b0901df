//! Integration tests for the storefront built from the bundled potion fixture.
//!
//! The fixture has four variants (Red, Yellow, Orange at 5 units each and Purple at 0), so the
//! product holds 15 units in total and is not on sale.

use std::sync::{Arc, Mutex};

use testresult::TestResult;

use potion_shop::{
    fixtures::POTION_OF_HEALING_YAML,
    prelude::*,
    storefront::{PREMIUM_SHIPPING, STANDARD_SHIPPING},
};

fn storefront() -> Result<Storefront, FixtureError> {
    Storefront::from_fixture(POTION_OF_HEALING_YAML)
}

#[test]
fn fixture_product_derivations() -> TestResult {
    let mut storefront = storefront()?;

    let product = storefront.page().product();

    assert_eq!(product.total_inventory(), 15);
    assert!(!product.is_on_sale());
    assert!(product.is_in_stock());
    assert_eq!(product.stock_status(), StockStatus::InStock);
    assert_eq!(
        product.sale_message(),
        "Extra Life® Potion of Healing are not on sale"
    );
    assert_eq!(product.rarity_line(), "Rarity: Common");
    assert_eq!(product.effect_line(), "Effect: Gain 2d4 + 2 Hitpoints");

    storefront.page_mut().select_variant(3)?;

    let product = storefront.page().product();

    assert!(!product.is_in_stock());
    assert_eq!(product.stock_status(), StockStatus::OutOfStock);
    assert_eq!(
        product.stock_status().to_string(),
        "Out of Stock! Click For More!"
    );
    assert_eq!(product.image(), "./assets/potgrape.png");
    assert_eq!(product.display_price(), "Purple - 100");

    Ok(())
}

#[test]
fn shipping_for_premium_and_standard_members() -> TestResult {
    let storefront = storefront()?;

    assert_eq!(storefront.premium_status(), "Premium Status: true");
    assert_eq!(storefront.shipping_message(), PREMIUM_SHIPPING);

    let storefront = storefront.with_premium(false);

    assert_eq!(storefront.premium_status(), "Premium Status: false");
    assert_eq!(storefront.shipping_message(), STANDARD_SHIPPING);

    Ok(())
}

#[test]
fn cart_fills_up_to_total_inventory() -> TestResult {
    let mut storefront = storefront()?;

    for _ in 0..15 {
        storefront.add_to_cart()?;
    }

    assert!(storefront.is_cart_full());
    assert!(matches!(
        storefront.add_to_cart(),
        Err(CartError::CartFull {
            lines: 15,
            inventory: 15
        })
    ));

    assert!(storefront.remove_from_cart().is_some());
    assert!(storefront.can_add_to_cart());

    Ok(())
}

#[test]
fn cart_subtotal_and_table() -> TestResult {
    let mut storefront = storefront()?;

    storefront.add_to_cart()?;
    storefront.page_mut().select_variant(2)?;
    storefront.add_to_cart()?;

    assert_eq!(storefront.cart().subtotal()?, gold_pieces(70));

    let mut table = Vec::new();

    storefront.cart().write_to(&mut table)?;

    let table = String::from_utf8(table)?;

    assert!(table.contains("Num."));
    assert!(table.contains("Potion of Healing – Red"));
    assert!(table.contains("Potion of Healing – Orange"));
    assert!(table.contains("30 Gold"));

    Ok(())
}

#[test]
fn out_of_stock_variant_cannot_be_added() -> TestResult {
    let mut storefront = storefront()?;

    storefront.page_mut().select_variant(3)?;

    assert!(!storefront.can_add_to_cart());
    assert!(matches!(
        storefront.add_to_cart(),
        Err(CartError::OutOfStock(VariantId(2237)))
    ));
    assert!(storefront.cart().is_empty());

    Ok(())
}

#[test]
fn review_flow_through_channel() -> TestResult {
    let mut storefront = storefront()?;
    let page = storefront.page_mut();

    let observed = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&observed);

    page.review_channel().subscribe(move |review: &Review| {
        if let Ok(mut observed) = sink.lock() {
            observed.push(review.name.clone());
        }
    });

    page.select_tab(ProductTab::MakeAReview);

    assert!(matches!(
        page.submit_review(),
        Err(ReviewRejected { ref missing }) if missing.len() == 3
    ));
    assert_eq!(page.review_count(), 0);

    page.form_mut().set_name("Gimble");
    page.form_mut().set_review("Tastes like strawberries and regret.");
    page.form_mut().set_rating(Some("4".parse()?));

    let review = page.submit_review()?;

    page.select_tab(ProductTab::Reviews);

    assert_eq!(page.reviews(), [review]);
    assert_eq!(page.form().name(), "");
    assert_eq!(page.form().rating(), None);
    assert_eq!(page.form().errors().len(), 3);

    let observed = observed.lock().map(|names| names.clone()).unwrap_or_default();

    assert_eq!(observed, ["Gimble"]);

    Ok(())
}
