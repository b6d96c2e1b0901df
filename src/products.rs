//! Products

use std::fmt;

use crate::{
    cart::CartLine,
    inventory::{self, StockStatus},
    pricing::GoldPieces,
    variants::VariantSelection,
};

/// Variant identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VariantId(pub u32);

impl fmt::Display for VariantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A purchasable variant of a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    /// Variant identifier
    pub id: VariantId,

    /// Unit price in gold pieces
    pub price: GoldPieces,

    /// Colour label, also used as the swatch colour
    pub color: String,

    /// Image path
    pub image: String,

    /// Units available
    pub quantity: u32,
}

/// Product
///
/// Display metadata plus the variant store and its current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Brand name
    pub brand: String,

    /// Product name
    pub name: String,

    /// Rarity label
    pub rarity: String,

    /// Effect description
    pub effect: String,

    /// Flavour description
    pub description: String,

    /// Bullet-point details
    pub details: Vec<String>,

    /// External link shown when the selected variant is out of stock
    pub link: String,

    variants: VariantSelection,
}

impl Product {
    /// Create a product with the given variants and empty metadata.
    pub fn new(
        brand: impl Into<String>,
        name: impl Into<String>,
        variants: VariantSelection,
    ) -> Self {
        Self {
            brand: brand.into(),
            name: name.into(),
            rarity: String::new(),
            effect: String::new(),
            description: String::new(),
            details: Vec::new(),
            link: String::new(),
            variants,
        }
    }

    /// The variant store.
    pub fn variants(&self) -> &VariantSelection {
        &self.variants
    }

    /// Mutable access to the variant store, for changing the selection.
    pub fn variants_mut(&mut self) -> &mut VariantSelection {
        &mut self.variants
    }

    /// The selected variant.
    pub fn selected(&self) -> &Variant {
        self.variants.selected()
    }

    /// Total units across every variant.
    pub fn total_inventory(&self) -> u64 {
        inventory::total_inventory(self.variants.as_slice())
    }

    /// Whether the product is on sale.
    pub fn is_on_sale(&self) -> bool {
        inventory::is_on_sale(self.total_inventory())
    }

    /// Whether the selected variant has stock.
    pub fn is_in_stock(&self) -> bool {
        inventory::is_in_stock(self.selected())
    }

    /// Whether a cart holding `cart_len` lines is full.
    ///
    /// Measured against the total inventory of every variant, not only the selected one.
    pub fn is_cart_full(&self, cart_len: usize) -> bool {
        inventory::is_cart_full(cart_len, self.total_inventory())
    }

    /// Whether the selected variant can be added to a cart holding `cart_len` lines.
    pub fn can_add_to_cart(&self, cart_len: usize) -> bool {
        self.is_in_stock() && !self.is_cart_full(cart_len)
    }

    /// Stock status shown for the selected variant.
    pub fn stock_status(&self) -> StockStatus {
        inventory::stock_status(self.selected(), self.total_inventory())
    }

    /// Brand and product name, e.g. `Extra Life® Potion of Healing`.
    pub fn title(&self) -> String {
        format!("{} {}", self.brand, self.name)
    }

    /// Colour and price of the selected variant, e.g. `Red - 40`.
    pub fn display_price(&self) -> String {
        let selected = self.selected();

        format!("{} - {}", selected.color, selected.price)
    }

    /// Sale banner text.
    pub fn sale_message(&self) -> String {
        if self.is_on_sale() {
            format!("{} are on sale!", self.title())
        } else {
            format!("{} are not on sale", self.title())
        }
    }

    /// Rarity line, e.g. `Rarity: Common`.
    pub fn rarity_line(&self) -> String {
        format!("Rarity: {}", self.rarity)
    }

    /// Effect line, e.g. `Effect: Gain 2d4 + 2 Hitpoints`.
    pub fn effect_line(&self) -> String {
        format!("Effect: {}", self.effect)
    }

    /// Image of the selected variant.
    pub fn image(&self) -> &str {
        &self.selected().image
    }

    /// Alternative text for the product image.
    pub fn alt_text(&self) -> &str {
        &self.name
    }

    /// Snapshot of the selected variant for the cart.
    pub fn cart_line(&self) -> CartLine {
        let selected = self.selected();

        CartLine {
            variant_id: selected.id,
            product_name: self.name.clone(),
            color: selected.color.clone(),
            price: selected.price,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use testresult::TestResult;

    use super::*;

    pub(crate) fn variant(id: u32, price: GoldPieces, color: &str, quantity: u32) -> Variant {
        Variant {
            id: VariantId(id),
            price,
            color: color.to_string(),
            image: format!("./assets/{}.png", color.to_lowercase()),
            quantity,
        }
    }

    pub(crate) fn potion(quantities: &[u32]) -> TestResult<Product> {
        let colors = ["Red", "Yellow", "Orange", "Purple", "Green", "Blue"];

        let variants = quantities
            .iter()
            .zip(colors)
            .zip(2234..)
            .map(|((quantity, color), id)| variant(id, 40, color, *quantity))
            .collect::<Vec<_>>();

        Ok(Product::new(
            "Extra Life®",
            "Potion of Healing",
            VariantSelection::new(variants)?,
        ))
    }

    #[test]
    fn total_inventory_sums_all_variants() -> TestResult {
        let product = potion(&[5, 5, 5, 0])?;

        assert_eq!(product.total_inventory(), 15);
        assert!(!product.is_on_sale());

        Ok(())
    }

    #[test]
    fn on_sale_above_fifty_units() -> TestResult {
        assert!(potion(&[20, 20, 11])?.is_on_sale());
        assert!(!potion(&[20, 20, 10])?.is_on_sale());

        Ok(())
    }

    #[test]
    fn selecting_empty_variant_is_out_of_stock() -> TestResult {
        let mut product = potion(&[5, 5, 5, 0])?;

        assert!(product.is_in_stock());

        product.variants_mut().select(3)?;

        assert!(!product.is_in_stock());
        assert_eq!(product.stock_status(), StockStatus::OutOfStock);

        Ok(())
    }

    #[test]
    fn cart_full_compares_against_total_inventory() -> TestResult {
        let mut product = potion(&[1, 2])?;

        product.variants_mut().select(0)?;

        // Only one red potion exists, but the cart limit counts every variant.
        assert!(!product.is_cart_full(1));
        assert!(!product.is_cart_full(2));
        assert!(product.is_cart_full(3));

        Ok(())
    }

    #[test]
    fn can_add_requires_stock_and_room() -> TestResult {
        let mut product = potion(&[2, 0])?;

        assert!(product.can_add_to_cart(0));
        assert!(!product.can_add_to_cart(2));

        product.variants_mut().select(1)?;

        assert!(!product.can_add_to_cart(0));

        Ok(())
    }

    #[test]
    fn display_strings() -> TestResult {
        let mut product = potion(&[5, 5])?;

        product.variants_mut().select(1)?;

        assert_eq!(product.title(), "Extra Life® Potion of Healing");
        assert_eq!(product.display_price(), "Yellow - 40");
        assert_eq!(
            product.sale_message(),
            "Extra Life® Potion of Healing are not on sale"
        );
        assert_eq!(product.image(), "./assets/yellow.png");
        assert_eq!(product.alt_text(), "Potion of Healing");

        Ok(())
    }

    #[test]
    fn rarity_and_effect_lines() -> TestResult {
        let mut product = potion(&[5])?;

        product.rarity = "Common".to_string();
        product.effect = "Gain 2d4 + 2 Hitpoints".to_string();

        assert_eq!(product.rarity_line(), "Rarity: Common");
        assert_eq!(product.effect_line(), "Effect: Gain 2d4 + 2 Hitpoints");

        Ok(())
    }

    #[test]
    fn sale_message_when_on_sale() -> TestResult {
        let product = potion(&[30, 30])?;

        assert_eq!(
            product.sale_message(),
            "Extra Life® Potion of Healing are on sale!"
        );

        Ok(())
    }

    #[test]
    fn cart_line_snapshots_selected_variant() -> TestResult {
        let mut product = potion(&[5, 5])?;

        product.variants_mut().select(1)?;

        let line = product.cart_line();

        assert_eq!(line.variant_id, VariantId(2235));
        assert_eq!(line.product_name, "Potion of Healing");
        assert_eq!(line.color, "Yellow");
        assert_eq!(line.price, 40);

        Ok(())
    }
}
