//! Money types with precise decimal arithmetic
//!
//! Product and warranty prices are carried as `Money`, backed by
//! rust_decimal so percentage calculations stay exact. Amounts keep the full
//! precision of the decimal they were built from; only `Display` shows them
//! at the currency's minor unit.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Currency codes following ISO 4217
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    COP,
    USD,
    EUR,
    MXN,
    CLP,
    PEN,
}

impl Currency {
    /// Returns the number of decimal places for this currency
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::CLP => 0,
            _ => 2,
        }
    }

    /// Returns the currency symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::COP => "COL$",
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::MXN => "MX$",
            Currency::CLP => "CLP$",
            Currency::PEN => "S/",
        }
    }

    /// Returns the ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::COP => "COP",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::MXN => "MXN",
            Currency::CLP => "CLP",
            Currency::PEN => "PEN",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors raised when building a price
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}

/// A price in a given currency
///
/// The amount is never rounded on construction or by rate application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Builds a price, rejecting negative amounts
    pub fn non_negative(amount: Decimal, currency: Currency) -> Result<Self, MoneyError> {
        if amount < Decimal::ZERO {
            return Err(MoneyError::InvalidAmount(format!(
                "a price cannot be negative, got {}",
                amount
            )));
        }
        Ok(Self::new(amount, currency))
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }
}

/// Shows the amount at the currency's minor-unit precision, e.g. `COL$ 156000.00`
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dp = self.currency.decimal_places() as usize;
        write!(f, "{} {:.dp$}", self.currency.symbol(), self.amount, dp = dp)
    }
}

/// A share of a price, stored as a fraction (0.20 is twenty percent)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rate(Decimal);

impl Rate {
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// True when the share lies within [0, 1]
    pub fn is_fraction(&self) -> bool {
        (Decimal::ZERO..=Decimal::ONE).contains(&self.0)
    }

    /// Takes this share of a price, in the price's currency
    pub fn apply(&self, price: &Money) -> Money {
        Money::new(price.amount * self.0, price.currency)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", (self.0 * dec!(100)).normalize())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn rate_application_matches_decimal_product(
            amount in 0i64..1_000_000_000i64,
            percent in 0u32..=100u32
        ) {
            let price = Money::new(Decimal::from(amount), Currency::COP);
            let rate = Rate::new(Decimal::from(percent) / dec!(100));

            prop_assert!(rate.is_fraction());
            prop_assert_eq!(
                rate.apply(&price).amount(),
                Decimal::from(amount) * Decimal::from(percent) / dec!(100)
            );
        }

        #[test]
        fn non_negative_accepts_exactly_the_non_negative_amounts(cents in any::<i64>()) {
            let amount = Decimal::new(cents, 2);
            prop_assert_eq!(
                Money::non_negative(amount, Currency::COP).is_ok(),
                cents >= 0
            );
        }
    }
}
