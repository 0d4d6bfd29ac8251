//! The extended warranty record
//!
//! A warranty is built once, by `WarrantySeller::register`, and never
//! modified afterwards. Fields are read through accessors.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{Money, Rate, WarrantyId};

use crate::pricing::{PriceQuote, WarrantyTier};
use crate::product::Product;

/// An extended warranty sold for a single product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warranty {
    id: WarrantyId,
    product: Product,
    request_date: DateTime<Utc>,
    expiration_date: NaiveDate,
    price: Money,
    tier: WarrantyTier,
    rate: Rate,
    customer_name: String,
}

impl Warranty {
    pub(crate) fn new(
        product: Product,
        request_date: DateTime<Utc>,
        expiration_date: NaiveDate,
        quote: PriceQuote,
        customer_name: impl Into<String>,
    ) -> Self {
        Self {
            id: WarrantyId::new_v7(),
            product,
            request_date,
            expiration_date,
            price: quote.price,
            tier: quote.tier,
            rate: quote.rate,
            customer_name: customer_name.into(),
        }
    }

    pub fn id(&self) -> WarrantyId {
        self.id
    }

    /// The insured product
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Shorthand for the insured product's code
    pub fn product_code(&self) -> &str {
        &self.product.code
    }

    /// The instant the warranty was requested
    pub fn request_date(&self) -> DateTime<Utc> {
        self.request_date
    }

    /// Last calendar day of coverage
    pub fn expiration_date(&self) -> NaiveDate {
        self.expiration_date
    }

    /// Price charged for the warranty
    pub fn price(&self) -> Money {
        self.price
    }

    pub fn tier(&self) -> WarrantyTier {
        self.tier
    }

    pub fn rate(&self) -> Rate {
        self.rate
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }
}
