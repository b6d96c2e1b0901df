//! Product Fixtures

use serde::Deserialize;

use crate::{
    fixtures::FixtureError,
    products::{Product, Variant, VariantId},
    variants::VariantSelection,
};

/// Wrapper for the product in YAML
#[derive(Debug, Deserialize)]
pub struct ProductFileFixture {
    /// The product
    pub product: ProductFixture,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Brand name
    pub brand: String,

    /// Product name
    pub name: String,

    /// Rarity label
    #[serde(default)]
    pub rarity: String,

    /// Effect description
    #[serde(default)]
    pub effect: String,

    /// Flavour description
    #[serde(default)]
    pub description: String,

    /// Bullet-point details
    #[serde(default)]
    pub details: Vec<String>,

    /// External link
    #[serde(default)]
    pub link: String,

    /// Variants, in display order
    pub variants: Vec<VariantFixture>,
}

/// Variant Fixture
#[derive(Debug, Deserialize)]
pub struct VariantFixture {
    /// Variant identifier
    pub id: u32,

    /// Price in gold pieces
    pub price: u32,

    /// Colour label
    pub color: String,

    /// Image path
    pub image: String,

    /// Units available
    pub quantity: u32,
}

impl TryFrom<VariantFixture> for Variant {
    type Error = FixtureError;

    fn try_from(fixture: VariantFixture) -> Result<Self, Self::Error> {
        if fixture.color.trim().is_empty() {
            return Err(FixtureError::InvalidVariant {
                id: fixture.id,
                reason: "colour label is empty",
            });
        }

        Ok(Variant {
            id: VariantId(fixture.id),
            price: fixture.price,
            color: fixture.color,
            image: fixture.image,
            quantity: fixture.quantity,
        })
    }
}

impl TryFrom<ProductFixture> for Product {
    type Error = FixtureError;

    fn try_from(fixture: ProductFixture) -> Result<Self, Self::Error> {
        let variants = fixture
            .variants
            .into_iter()
            .map(Variant::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let mut product = Product::new(
            fixture.brand,
            fixture.name,
            VariantSelection::new(variants)?,
        );

        product.rarity = fixture.rarity;
        product.effect = fixture.effect;
        product.description = fixture.description;
        product.details = fixture.details;
        product.link = fixture.link;

        Ok(product)
    }
}
