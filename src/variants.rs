//! Variants
//!
//! The variant store for a product: an immutable, non-empty list of variants and the index of
//! the selected one. The index is only changed through [`VariantSelection::select`], which keeps
//! it in range.

use rustc_hash::FxHashSet;
use thiserror::Error;
use tracing::debug;

use crate::products::{Variant, VariantId};

/// Errors building a variant store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VariantError {
    /// A product needs at least one variant.
    #[error("Product has no variants")]
    NoVariants,

    /// Two variants share an identifier.
    #[error("Duplicate variant id {0}")]
    DuplicateId(VariantId),
}

/// Errors changing the selected variant.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// The requested index is past the end of the variant list (index, variant count).
    #[error("Variant {0} is out of range, product has {1} variants")]
    OutOfRange(usize, usize),
}

/// Variant list with a selected index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantSelection {
    variants: Vec<Variant>,
    selected: usize,
}

impl VariantSelection {
    /// Create a store with the first variant selected.
    ///
    /// # Errors
    ///
    /// Returns a [`VariantError`] if the list is empty or contains duplicate ids.
    pub fn new(variants: impl Into<Vec<Variant>>) -> Result<Self, VariantError> {
        let variants = variants.into();

        if variants.is_empty() {
            return Err(VariantError::NoVariants);
        }

        let mut seen = FxHashSet::default();

        variants.iter().try_for_each(|variant| {
            if seen.insert(variant.id) {
                Ok(())
            } else {
                Err(VariantError::DuplicateId(variant.id))
            }
        })?;

        Ok(Self {
            variants,
            selected: 0,
        })
    }

    /// Select the variant at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::OutOfRange`] and keeps the current selection if `index` is not
    /// a valid variant index.
    pub fn select(&mut self, index: usize) -> Result<&Variant, SelectionError> {
        let variant = self
            .variants
            .get(index)
            .ok_or(SelectionError::OutOfRange(index, self.variants.len()))?;

        self.selected = index;

        debug!(index, variant = %variant.id, "selected variant");

        Ok(variant)
    }

    /// The selected variant.
    #[expect(
        clippy::indexing_slicing,
        reason = "selection index is kept in range by construction and `select`"
    )]
    pub fn selected(&self) -> &Variant {
        &self.variants[self.selected]
    }

    /// Index of the selected variant.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Whether `index` is the selected variant.
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == index
    }

    /// All variants, in display order.
    pub fn as_slice(&self) -> &[Variant] {
        &self.variants
    }

    /// Iterate over the variants.
    pub fn iter(&self) -> impl Iterator<Item = &Variant> {
        self.variants.iter()
    }

    /// Number of variants; never zero.
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Always `false`, a store cannot be built without variants.
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}
