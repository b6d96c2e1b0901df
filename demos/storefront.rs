//! Storefront Example
//!
//! Loads a potion fixture, adds units of one variant to the cart and prints the product summary
//! followed by the cart.
//!
//! Use `-f` to load a product fixture file instead of the bundled potion
//! Use `-v` to pick the variant index to add
//! Use `-n` to specify how many units to add
//! Use `--standard` to show prices for a customer without premium membership
//!
//! Set `RUST_LOG=debug` to trace variant selection and cart changes.

use std::{io, path::PathBuf};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use potion_shop::{
    fixtures::{POTION_OF_HEALING_YAML, load_product, load_product_file},
    pricing::format_gold,
    storefront::Storefront,
};

/// Arguments for the storefront example
#[derive(Debug, Parser)]
struct Args {
    /// Product fixture file, defaults to the bundled Potion of Healing
    #[clap(short, long)]
    fixture: Option<PathBuf>,

    /// Index of the variant to add
    #[clap(short, long, default_value_t = 0)]
    variant: usize,

    /// Number of units to add
    #[clap(short, default_value_t = 1)]
    n: usize,

    /// Customer is not a premium member
    #[clap(long)]
    standard: bool,
}

/// Storefront Example
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let product = match &args.fixture {
        Some(path) => load_product_file(path)?,
        None => load_product(POTION_OF_HEALING_YAML)?,
    };

    let mut storefront = Storefront::new(product).with_premium(!args.standard);

    storefront.page_mut().select_variant(args.variant)?;

    for _ in 0..args.n {
        if let Err(error) = storefront.add_to_cart() {
            println!("Stopped adding: {error}");

            break;
        }
    }

    let product = storefront.page().product();

    println!("{}", product.title());
    println!("{}", product.sale_message());
    println!(
        "{} Gold ({})",
        product.display_price(),
        product.stock_status()
    );
    println!("{}", product.rarity_line());
    println!("{}", product.effect_line());
    println!("{}", product.description);
    println!("{}", storefront.premium_status());
    println!("Shipping: {}", storefront.shipping_message());
    println!(
        "Inventory: {} units across {} variants",
        product.total_inventory(),
        product.variants().len()
    );

    for (index, variant) in product.variants().iter().enumerate() {
        let marker = if product.variants().is_selected(index) {
            '*'
        } else {
            ' '
        };

        println!(
            "  {marker} {index}. {} {} ({} left)",
            variant.color,
            format_gold(variant.price),
            variant.quantity
        );
    }

    println!();

    storefront.cart().write_to(io::stdout().lock())?;

    Ok(())
}
