//! Cart

use std::io;

use rusty_money::MoneyError;
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use thiserror::Error;
use tracing::debug;

use crate::{
    pricing::{Gold, GoldPieces, format_gold, format_money, total_price},
    products::VariantId,
};

/// Errors related to cart changes or totals.
#[derive(Debug, Error)]
pub enum CartError {
    /// The selected variant has no stock.
    #[error("Variant {0} is out of stock")]
    OutOfStock(VariantId),

    /// The cart already holds as many lines as the product has units.
    #[error("Cart is full: {lines} lines for {inventory} units in stock")]
    CartFull {
        /// Lines in the cart
        lines: usize,

        /// Total units across every variant
        inventory: u64,
    },

    /// Wrapper for money errors.
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// IO error writing the cart table.
    #[error("Failed to write cart: {0}")]
    Io(#[from] io::Error),
}

/// A line in the cart, captured when the variant was added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    /// Variant that was added
    pub variant_id: VariantId,

    /// Product name at add time
    pub product_name: String,

    /// Variant colour at add time
    pub color: String,

    /// Unit price at add time
    pub price: GoldPieces,
}

impl CartLine {
    /// Item label, e.g. `Potion of Healing – Red`.
    pub fn item_label(&self) -> String {
        format!("{} – {}", self.product_name, self.color)
    }
}

/// Cart
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line to the end of the cart and return it.
    #[expect(clippy::indexing_slicing, reason = "Index of the line just pushed")]
    pub fn add_line(&mut self, line: CartLine) -> &CartLine {
        let index = self.lines.len();

        debug!(variant = %line.variant_id, lines = index + 1, "added cart line");

        self.lines.push(line);

        &self.lines[index]
    }

    /// Remove the most recently added line, if any.
    pub fn remove_last(&mut self) -> Option<CartLine> {
        let removed = self.lines.pop();

        if let Some(line) = &removed {
            debug!(variant = %line.variant_id, lines = self.lines.len(), "removed cart line");
        }

        removed
    }

    /// Lines in the order they were added.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Iterate over the lines.
    pub fn iter(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.iter()
    }

    /// Get the most recently added line.
    pub fn last(&self) -> Option<&CartLine> {
        self.lines.last()
    }

    /// Get the number of lines in the cart.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Calculate the subtotal of the cart.
    ///
    /// # Errors
    ///
    /// Returns a [`MoneyError`] if the money arithmetic fails.
    pub fn subtotal(&self) -> Result<Gold, MoneyError> {
        total_price(self.lines.iter().map(|line| line.price))
    }

    /// Writes the cart as a numbered table followed by the subtotal.
    ///
    /// # Errors
    ///
    /// Returns an error if the subtotal cannot be computed or the output cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), CartError> {
        if self.is_empty() {
            writeln!(out, "Your cart is empty.")?;

            return Ok(());
        }

        let mut builder = Builder::default();

        builder.push_record(["Num.", "Item", "Price"]);

        for (index, line) in self.lines.iter().enumerate() {
            builder.push_record([
                format!("{}.", index + 1),
                line.item_label(),
                format_gold(line.price),
            ]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Columns::new(2..3), Alignment::right());

        writeln!(out, "{table}")?;
        writeln!(out, "Subtotal: {}", format_money(&self.subtotal()?))?;

        Ok(())
    }
}
