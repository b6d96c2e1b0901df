//! Potion Shop prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError, CartLine},
    events::{EventChannel, SubscriptionKey, Topic},
    fixtures::{FixtureError, load_product, load_product_file},
    inventory::StockStatus,
    pricing::{Gold, GoldPieces, gold_pieces},
    products::{Product, Variant, VariantId},
    reviews::{
        Rating, RatingError, Review, ReviewSubmitted,
        form::{FormState, MissingField, ReviewForm, ReviewRejected},
        panel::{ProductTab, ReviewsPanel},
    },
    storefront::{ProductPage, Storefront, shipping_message},
    variants::{SelectionError, VariantError, VariantSelection},
};
