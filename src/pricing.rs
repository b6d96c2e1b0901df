//! Prices

use rusty_money::{Money, MoneyError};

pub use currency::gold;

/// Currency sets for shop prices.
#[expect(missing_docs, reason = "Items generated by define_currency_set!")]
pub mod currency {
    use rusty_money::define_currency_set;

    define_currency_set!(
        gold {
            GP: {
                code: "GP",
                exponent: 0,
                locale: EnUs,
                minor_units: 1,
                name: "Gold Piece",
                symbol: "gp",
                symbol_first: false,
            }
        }
    );
}

/// A price in whole gold pieces.
pub type GoldPieces = u32;

/// Gold money amount.
pub type Gold = Money<'static, gold::Currency>;

/// Converts a whole gold-piece price into money.
pub fn gold_pieces(amount: GoldPieces) -> Gold {
    Money::from_minor(i64::from(amount), gold::GP)
}

/// Calculates the total of a list of prices.
///
/// An empty list totals zero gold.
///
/// # Errors
///
/// Returns a [`MoneyError`] if the money arithmetic fails.
pub fn total_price(prices: impl IntoIterator<Item = GoldPieces>) -> Result<Gold, MoneyError> {
    prices
        .into_iter()
        .try_fold(Money::from_minor(0, gold::GP), |acc, price| {
            acc.add(gold_pieces(price))
        })
}

/// Formats a price for display, e.g. `40 Gold`.
pub fn format_gold(amount: GoldPieces) -> String {
    format!("{amount} Gold")
}

/// Formats a money amount for display, e.g. `70 Gold`.
pub fn format_money(amount: &Gold) -> String {
    format!("{} Gold", amount.to_minor_units())
}
