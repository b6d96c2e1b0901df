//! Potion Shop
//!
//! Storefront state for a single product page: colour variants with derived stock and sale
//! status, a validated review form feeding a tabbed reviews panel, and a shopping cart.
//!
//! Everything here is plain data plus pure derivations, so it can be bound to any UI runtime.
//! The `potion-shop-demo` crate binds it to Leptos signals.

pub mod cart;
pub mod events;
pub mod fixtures;
pub mod inventory;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod reviews;
pub mod storefront;
pub mod variants;
