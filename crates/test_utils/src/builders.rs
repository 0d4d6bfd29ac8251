//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! Tests specify only the fields they care about.

use core_kernel::{Currency, Money};
use domain_warranty::Product;
use rust_decimal::Decimal;

use crate::fixtures::{MoneyFixtures, StringFixtures};

/// Builder for catalogue products
pub struct ProductTestDataBuilder {
    code: String,
    name: String,
    price: Money,
}

impl Default for ProductTestDataBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductTestDataBuilder {
    /// Creates a builder for an eligible, high-tier product
    pub fn new() -> Self {
        Self {
            code: StringFixtures::eligible_code().to_string(),
            name: StringFixtures::product_name().to_string(),
            price: MoneyFixtures::high_tier_price(),
        }
    }

    /// Sets the product code
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets the product name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the price amount, keeping the current currency
    pub fn with_price(mut self, amount: Decimal) -> Self {
        self.price = Money::new(amount, self.price.currency());
        self
    }

    /// Sets the price currency, keeping the current amount
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.price = Money::new(self.price.amount(), currency);
        self
    }

    /// Builds the product
    ///
    /// # Panics
    ///
    /// Panics if the configured data is not a valid product.
    pub fn build(self) -> Product {
        Product::new(self.code, self.name, self.price).expect("invalid test product")
    }
}
