//! Inventory
//!
//! Pure derivations over a variant list. Nothing here is cached: callers recompute on every
//! state change, or wrap these in their UI runtime's memoisation.

use std::fmt;

use crate::products::Variant;

/// Products holding more than this many units in total go on sale.
pub const SALE_INVENTORY_THRESHOLD: u64 = 50;

/// At or below this many units in total, an in-stock product is shown as almost out.
pub const ALMOST_OUT_THRESHOLD: u64 = 10;

/// Stock status shown for the selected variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StockStatus {
    /// The selected variant has no units.
    OutOfStock,

    /// The selected variant has units, but few remain across the product.
    AlmostOut,

    /// Plenty of units remain.
    InStock,
}

impl StockStatus {
    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "Out of Stock! Click For More!",
            StockStatus::AlmostOut => "Almost Out!",
            StockStatus::InStock => "In Stock",
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Sum of the quantities of every variant.
pub fn total_inventory(variants: &[Variant]) -> u64 {
    variants
        .iter()
        .map(|variant| u64::from(variant.quantity))
        .sum()
}

/// Whether a product with `total_inventory` units is on sale.
pub fn is_on_sale(total_inventory: u64) -> bool {
    total_inventory > SALE_INVENTORY_THRESHOLD
}

/// Whether the variant has any units.
pub fn is_in_stock(variant: &Variant) -> bool {
    variant.quantity > 0
}

/// Whether a cart of `cart_len` lines has reached the product's total inventory.
pub fn is_cart_full(cart_len: usize, total_inventory: u64) -> bool {
    u64::try_from(cart_len).unwrap_or(u64::MAX) >= total_inventory
}

/// Stock status for the selected variant of a product with `total_inventory` units.
pub fn stock_status(selected: &Variant, total_inventory: u64) -> StockStatus {
    if !is_in_stock(selected) {
        StockStatus::OutOfStock
    } else if total_inventory > ALMOST_OUT_THRESHOLD {
        StockStatus::InStock
    } else {
        StockStatus::AlmostOut
    }
}
