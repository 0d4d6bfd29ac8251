//! Warranty Domain Ports
//!
//! The engine reads products from the catalogue and reads/writes warranties
//! through the two traits below. Any storage can sit behind them:
//!
//! - **Database adapter**: must enforce a unique warranty per product code,
//!   since the "already insured" lookup and the `add` write are separate calls
//! - **External API adapter**: a point-of-sale or ERP system
//! - **In-memory adapter**: for tests and local runs (`mock` feature)
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use domain_warranty::{ProductPort, WarrantyPort, WarrantySeller};
//!
//! let products: Arc<dyn ProductPort> = Arc::new(InMemoryProductPort::new());
//! let warranties: Arc<dyn WarrantyPort> = Arc::new(InMemoryWarrantyPort::new());
//! let seller = WarrantySeller::new(products, warranties, config);
//! ```

use core_kernel::{DomainPort, PortError};

use crate::product::Product;
use crate::warranty::Warranty;

/// Read access to the product catalogue
pub trait ProductPort: DomainPort {
    /// Retrieves a product by its code
    ///
    /// # Returns
    ///
    /// The product if found, or `PortError::NotFound`
    fn get_by_code(&self, code: &str) -> Result<Product, PortError>;

    /// Adds a product to the catalogue
    fn add(&self, product: Product) -> Result<(), PortError>;
}

/// Storage for issued warranties
pub trait WarrantyPort: DomainPort {
    /// Returns the insured product if a warranty exists for `code`
    ///
    /// Only the presence of a value matters to the eligibility rules.
    fn get_insured_product_by_code(&self, code: &str) -> Result<Option<Product>, PortError>;

    /// Returns the warranty stored for the product `code`, if any
    fn get_by_code(&self, code: &str) -> Result<Option<Warranty>, PortError>;

    /// Persists a new warranty
    ///
    /// # Errors
    ///
    /// Any storage failure is returned as a `PortError`; nothing is retried.
    fn add(&self, warranty: &Warranty) -> Result<(), PortError>;
}

/// In-memory implementations of the warranty ports
///
/// These adapters keep everything in process and are used by the test
/// suites. The warranty store enforces one warranty per product code.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{PoisonError, RwLock};
    use tracing::debug;

    fn poisoned<T>(_: PoisonError<T>) -> PortError {
        PortError::internal("in-memory store lock poisoned")
    }

    /// In-memory product catalogue keyed by product code
    #[derive(Debug, Default)]
    pub struct InMemoryProductPort {
        products: RwLock<HashMap<String, Product>>,
    }

    impl InMemoryProductPort {
        /// Creates an empty catalogue
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates the catalogue
        pub fn with_products(products: Vec<Product>) -> Self {
            let products = products
                .into_iter()
                .map(|product| (product.code.clone(), product))
                .collect();
            Self {
                products: RwLock::new(products),
            }
        }
    }

    impl DomainPort for InMemoryProductPort {}

    impl ProductPort for InMemoryProductPort {
        fn get_by_code(&self, code: &str) -> Result<Product, PortError> {
            self.products
                .read()
                .map_err(poisoned)?
                .get(code)
                .cloned()
                .ok_or_else(|| PortError::not_found("Product", code))
        }

        fn add(&self, product: Product) -> Result<(), PortError> {
            debug!(product_code = %product.code, "storing product");
            self.products
                .write()
                .map_err(poisoned)?
                .insert(product.code.clone(), product);
            Ok(())
        }
    }

    /// In-memory warranty store keyed by product code
    #[derive(Debug, Default)]
    pub struct InMemoryWarrantyPort {
        warranties: RwLock<HashMap<String, Warranty>>,
    }

    impl InMemoryWarrantyPort {
        /// Creates an empty store
        pub fn new() -> Self {
            Self::default()
        }

        /// Number of stored warranties
        pub fn len(&self) -> Result<usize, PortError> {
            Ok(self.warranties.read().map_err(poisoned)?.len())
        }

        pub fn is_empty(&self) -> Result<bool, PortError> {
            Ok(self.len()? == 0)
        }
    }

    impl DomainPort for InMemoryWarrantyPort {}

    impl WarrantyPort for InMemoryWarrantyPort {
        fn get_insured_product_by_code(&self, code: &str) -> Result<Option<Product>, PortError> {
            Ok(self
                .warranties
                .read()
                .map_err(poisoned)?
                .get(code)
                .map(|warranty| warranty.product().clone()))
        }

        fn get_by_code(&self, code: &str) -> Result<Option<Warranty>, PortError> {
            Ok(self.warranties.read().map_err(poisoned)?.get(code).cloned())
        }

        fn add(&self, warranty: &Warranty) -> Result<(), PortError> {
            let mut warranties = self.warranties.write().map_err(poisoned)?;
            let code = warranty.product_code();
            if warranties.contains_key(code) {
                return Err(PortError::conflict(format!(
                    "a warranty is already stored for product {}",
                    code
                )));
            }
            debug!(product_code = %code, warranty_id = %warranty.id(), "storing warranty");
            warranties.insert(code.to_string(), warranty.clone());
            Ok(())
        }
    }

}

#[cfg(test)]
mod tests {
    use super::mock::{InMemoryProductPort, InMemoryWarrantyPort};
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use core_kernel::Currency;
    use rust_decimal_macros::dec;

    use crate::config::WarrantyRules;
    use crate::pricing;

    fn sample_product(code: &str) -> Product {
        Product::priced(code, "Computador Lenovo", dec!(780000), Currency::COP).unwrap()
    }

    fn sample_warranty(code: &str) -> Warranty {
        let product = sample_product(code);
        let quote = pricing::quote(&product.price, &WarrantyRules::default());
        Warranty::new(
            product,
            Utc.with_ymd_and_hms(2018, 8, 16, 10, 0, 0).unwrap(),
            NaiveDate::from_ymd_opt(2019, 4, 6).unwrap(),
            quote,
            "Ricardo Ayala",
        )
    }

    #[test]
    fn test_product_lookup_not_found() {
        let port = InMemoryProductPort::new();
        let result = port.get_by_code("C001");
        assert!(result.unwrap_err().is_not_found());
    }

    #[test]
    fn test_product_add_and_get() {
        let port = InMemoryProductPort::new();
        port.add(sample_product("C001")).unwrap();
        assert_eq!(port.get_by_code("C001").unwrap().name, "Computador Lenovo");
    }

    #[test]
    fn test_warranty_add_and_lookup() {
        let port = InMemoryWarrantyPort::new();
        assert!(port.get_insured_product_by_code("C001").unwrap().is_none());

        port.add(&sample_warranty("C001")).unwrap();

        assert_eq!(port.get_insured_product_by_code("C001").unwrap().unwrap().code, "C001");
        assert_eq!(port.get_by_code("C001").unwrap().unwrap().customer_name(), "Ricardo Ayala");
        assert_eq!(port.len().unwrap(), 1);
    }

    #[test]
    fn test_second_warranty_for_same_product_conflicts() {
        let port = InMemoryWarrantyPort::new();
        port.add(&sample_warranty("C001")).unwrap();

        let result = port.add(&sample_warranty("C001"));
        assert!(result.unwrap_err().is_conflict());
        assert_eq!(port.len().unwrap(), 1);
    }
}
