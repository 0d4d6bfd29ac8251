//! Warranty pricing
//!
//! The warranty price is a flat share of the product price. The share
//! depends on which side of the tier threshold the product price falls.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{Money, Rate};

use crate::config::WarrantyRules;

/// Price tier of a warranty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WarrantyTier {
    /// Product price strictly above the threshold
    High,
    /// Product price at or below the threshold
    Low,
}

impl WarrantyTier {
    /// Selects the tier for a product price
    ///
    /// The comparison is strict: a price equal to the threshold is `Low`.
    pub fn for_price(product_price: Decimal, threshold: Decimal) -> Self {
        if product_price > threshold {
            WarrantyTier::High
        } else {
            WarrantyTier::Low
        }
    }

    /// Returns the share of the product price charged for this tier
    pub fn rate(&self, rules: &WarrantyRules) -> Rate {
        match self {
            WarrantyTier::High => Rate::new(rules.high_tier_rate),
            WarrantyTier::Low => Rate::new(rules.low_tier_rate),
        }
    }
}

/// Outcome of pricing a warranty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub tier: WarrantyTier,
    pub rate: Rate,
    pub price: Money,
}

/// Multiplies a product price by a rate, without tier selection
pub fn warranty_price(product_price: Decimal, rate: Decimal) -> Decimal {
    product_price * rate
}

/// Computes `(rate, warranty price)` for a bare product price
///
/// # Example
///
/// ```rust
/// use domain_warranty::{pricing, WarrantyRules};
/// use rust_decimal_macros::dec;
///
/// let (rate, price) = pricing::price(dec!(650000), &WarrantyRules::default());
/// assert_eq!(rate, dec!(0.20));
/// assert_eq!(price, dec!(130000));
/// ```
pub fn price(product_price: Decimal, rules: &WarrantyRules) -> (Decimal, Decimal) {
    let rate = WarrantyTier::for_price(product_price, rules.tier_threshold)
        .rate(rules)
        .value();
    (rate, warranty_price(product_price, rate))
}

/// Prices a warranty for a product price, keeping its currency
pub fn quote(product_price: &Money, rules: &WarrantyRules) -> PriceQuote {
    let tier = WarrantyTier::for_price(product_price.amount(), rules.tier_threshold);
    let rate = tier.rate(rules);
    PriceQuote {
        tier,
        rate,
        price: rate.apply(product_price),
    }
}
