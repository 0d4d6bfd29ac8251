//! Warranty domain services
//!
//! `WarrantySeller` runs the full pipeline for a warranty request: it checks
//! eligibility, prices and dates the warranty, and hands the record to the
//! warranty store.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, instrument, warn};

use crate::config::WarrantyConfig;
use crate::eligibility;
use crate::error::WarrantyError;
use crate::expiration::compute_expiration;
use crate::ports::{ProductPort, WarrantyPort};
use crate::pricing;
use crate::product::Product;
use crate::warranty::Warranty;

/// A request to sell an extended warranty
///
/// Either field may be absent; absence is reported as a rejection rather
/// than being impossible to express.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WarrantyRequest {
    pub product_code: Option<String>,
    pub customer_name: Option<String>,
}

impl WarrantyRequest {
    /// Creates a request with both fields supplied
    pub fn new(product_code: impl Into<String>, customer_name: impl Into<String>) -> Self {
        Self {
            product_code: Some(product_code.into()),
            customer_name: Some(customer_name.into()),
        }
    }
}

/// Service that sells and registers extended warranties
///
/// Holds no state between calls beyond its collaborators and configuration.
pub struct WarrantySeller {
    products: Arc<dyn ProductPort>,
    warranties: Arc<dyn WarrantyPort>,
    config: WarrantyConfig,
}

impl WarrantySeller {
    /// Creates a new seller over the given collaborators
    pub fn new(
        products: Arc<dyn ProductPort>,
        warranties: Arc<dyn WarrantyPort>,
        config: WarrantyConfig,
    ) -> Self {
        Self {
            products,
            warranties,
            config,
        }
    }

    /// Returns true if the warranty store already holds a warranty for `code`
    #[instrument(skip(self))]
    pub fn has_warranty(&self, code: &str) -> Result<bool, WarrantyError> {
        Ok(self.warranties.get_insured_product_by_code(code)?.is_some())
    }

    /// Sells a warranty for the requested product
    ///
    /// This method:
    /// 1. Checks whether the product is already insured, once both code and
    ///    customer name are present
    /// 2. Validates the request (required data, existing warranty, vowel rule)
    /// 3. Looks the product up in the catalogue
    /// 4. Registers the priced and dated warranty
    ///
    /// # Arguments
    ///
    /// * `request` - Product code and customer name
    /// * `now` - Instant of the request; its calendar date starts the coverage
    ///
    /// # Errors
    ///
    /// `WarrantyError::Rejected` when a sales rule fails, `WarrantyError::Port`
    /// when a collaborator fails (including an unknown product code).
    #[instrument(
        skip(self, request),
        fields(product_code = request.product_code.as_deref().unwrap_or_default())
    )]
    pub fn generate(
        &self,
        request: WarrantyRequest,
        now: DateTime<Utc>,
    ) -> Result<Warranty, WarrantyError> {
        let code = request.product_code.as_deref();
        let customer_name = request.customer_name.as_deref();

        // missing data is rejected without touching the warranty store
        let has_existing_warranty = match (code, customer_name) {
            (Some(code), Some(name)) if !code.is_empty() && !name.is_empty() => {
                self.has_warranty(code)?
            }
            _ => false,
        };

        if let Err(reason) = eligibility::validate(code, customer_name, has_existing_warranty) {
            warn!(?reason, "warranty request rejected");
            return Err(reason.into());
        }

        // both present and non-empty past validate()
        let code = code.unwrap_or_default();
        let customer_name = customer_name.unwrap_or_default();

        let product = self.products.get_by_code(code)?;
        self.register(product, customer_name, now)
    }

    /// Prices, dates, and stores a warranty for an already validated product
    ///
    /// Returns the warranty exactly as it was handed to the store.
    #[instrument(skip(self, product, customer_name), fields(product_code = %product.code))]
    pub fn register(
        &self,
        product: Product,
        customer_name: &str,
        now: DateTime<Utc>,
    ) -> Result<Warranty, WarrantyError> {
        let rules = &self.config.rules;

        let quote = pricing::quote(&product.price, rules);
        let start = self.config.timezone.local_date(now);
        let expiration_date = compute_expiration(start, product.price_amount(), rules)?;

        let warranty = Warranty::new(product, now, expiration_date, quote, customer_name);
        self.warranties.add(&warranty)?;

        info!(
            warranty_id = %warranty.id(),
            tier = ?warranty.tier(),
            price = %warranty.price(),
            expiration_date = %warranty.expiration_date(),
            "warranty registered"
        );

        Ok(warranty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RejectionReason;
    use crate::ports::mock::{InMemoryProductPort, InMemoryWarrantyPort};
    use crate::pricing::WarrantyTier;
    use chrono::{NaiveDate, TimeZone};
    use core_kernel::{Currency, Money};
    use rust_decimal_macros::dec;

    fn seller_with(products: Vec<Product>) -> (WarrantySeller, Arc<InMemoryWarrantyPort>) {
        let warranties = Arc::new(InMemoryWarrantyPort::new());
        let seller = WarrantySeller::new(
            Arc::new(InMemoryProductPort::with_products(products)),
            warranties.clone(),
            WarrantyConfig::default(),
        );
        (seller, warranties)
    }

    fn product(code: &str, price: rust_decimal::Decimal) -> Product {
        Product::priced(code, "Computador Lenovo", price, Currency::COP).unwrap()
    }

    #[test]
    fn test_generate_registers_high_tier_warranty() {
        let (seller, store) = seller_with(vec![product("C001", dec!(780000))]);
        let now = Utc.with_ymd_and_hms(2018, 8, 16, 15, 0, 0).unwrap();

        let warranty = seller.generate(WarrantyRequest::new("C001", "Ricardo Ayala"), now).unwrap();

        assert_eq!(warranty.tier(), WarrantyTier::High);
        assert_eq!(warranty.price(), Money::new(dec!(156000), Currency::COP));
        assert_eq!(warranty.expiration_date(), NaiveDate::from_ymd_opt(2019, 4, 6).unwrap());
        assert_eq!(warranty.request_date(), now);
        assert_eq!(store.get_by_code("C001").unwrap(), Some(warranty));
    }

    #[test]
    fn test_generate_twice_is_already_insured() {
        let (seller, _) = seller_with(vec![product("C001", dec!(780000))]);
        let now = Utc.with_ymd_and_hms(2018, 8, 16, 15, 0, 0).unwrap();

        seller.generate(WarrantyRequest::new("C001", "Ricardo Ayala"), now).unwrap();
        let second = seller.generate(WarrantyRequest::new("C001", "Ricardo Ayala"), now);

        assert_eq!(second.unwrap_err().rejection(), Some(RejectionReason::AlreadyInsured));
    }

    #[test]
    fn test_missing_code_is_rejected_without_lookup() {
        let (seller, store) = seller_with(vec![]);
        let request = WarrantyRequest {
            product_code: None,
            customer_name: Some(String::new()),
        };

        let result = seller.generate(request, Utc::now());

        assert_eq!(result.unwrap_err().rejection(), Some(RejectionReason::MissingRequiredData));
        assert!(store.is_empty().unwrap());
    }
}
