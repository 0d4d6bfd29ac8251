//! Retail products offered with an extended warranty
//!
//! Products are owned by the catalogue; the warranty engine only reads them.

use serde::{Deserialize, Serialize};

use core_kernel::{CoreError, Currency, Money, ProductId};
use rust_decimal::Decimal;

/// A catalogue product, identified by its unique code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    /// Unique, non-empty product code
    pub code: String,
    /// Display name
    pub name: String,
    /// Sale price, never negative
    pub price: Money,
}

impl Product {
    /// Creates a product, rejecting an empty code or a negative price
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        price: Money,
    ) -> Result<Self, CoreError> {
        let code = code.into();
        if code.is_empty() {
            return Err(CoreError::validation("Product code must not be empty"));
        }
        let price = Money::non_negative(price.amount(), price.currency())?;

        Ok(Self {
            id: ProductId::new_v7(),
            code,
            name: name.into(),
            price,
        })
    }

    /// Creates a product priced in the given currency
    pub fn priced(
        code: impl Into<String>,
        name: impl Into<String>,
        amount: Decimal,
        currency: Currency,
    ) -> Result<Self, CoreError> {
        Self::new(code, name, Money::new(amount, currency))
    }

    /// Returns the price amount used by the tier rules
    pub fn price_amount(&self) -> Decimal {
        self.price.amount()
    }
}
