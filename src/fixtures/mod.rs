//! Fixtures

use std::{fs, path::Path};

use thiserror::Error;
use tracing::debug;

use crate::{fixtures::products::ProductFileFixture, products::Product, variants::VariantError};

pub mod products;

/// Product fixture bundled with the crate.
pub const POTION_OF_HEALING_YAML: &str =
    include_str!("../../fixtures/products/potion-of-healing.yml");

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Variant list rejected by the variant store
    #[error(transparent)]
    Variant(#[from] VariantError),

    /// Variant data that cannot be shown
    #[error("Invalid variant {id}: {reason}")]
    InvalidVariant {
        /// Identifier of the offending variant
        id: u32,

        /// What is wrong with it
        reason: &'static str,
    },
}

/// Parse a product from fixture YAML.
///
/// # Errors
///
/// Returns an error if the YAML cannot be parsed or the product is invalid.
pub fn load_product(yaml: &str) -> Result<Product, FixtureError> {
    let fixture: ProductFileFixture = serde_norway::from_str(yaml)?;
    let product = Product::try_from(fixture.product)?;

    debug!(
        product = %product.title(),
        variants = product.variants().len(),
        "loaded product fixture"
    );

    Ok(product)
}

/// Read and parse a product fixture file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed, or the product is invalid.
pub fn load_product_file(path: impl AsRef<Path>) -> Result<Product, FixtureError> {
    let contents = fs::read_to_string(path)?;

    load_product(&contents)
}
