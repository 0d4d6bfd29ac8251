//! Extended Warranty Domain
//!
//! This crate decides whether a retail product may carry an extended
//! warranty, prices it, dates it, and hands the resulting record to the
//! warranty store. Storage lives behind port traits so the rules stay
//! testable without a database.
//!
//! # Pipeline
//!
//! ```text
//! eligibility::validate -> pricing::quote ----------> WarrantySeller::register -> WarrantyPort::add
//!                       \-> expiration::compute_expiration -/
//! ```
//!
//! # Tiers
//!
//! | Product price        | Rate | Coverage                                   |
//! |----------------------|------|--------------------------------------------|
//! | `> 500000`           | 20%  | 200 counted days, Mondays skipped, Sunday end deferred to Tuesday |
//! | `<= 500000`          | 10%  | 100 calendar days                          |
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_warranty::{WarrantySeller, WarrantyRequest, WarrantyConfig};
//!
//! let seller = WarrantySeller::new(products, warranties, WarrantyConfig::default());
//! let warranty = seller.generate(WarrantyRequest::new("C001", "Ricardo Ayala"), Utc::now())?;
//! println!("expires on {}", warranty.expiration_date());
//! ```

pub mod product;
pub mod warranty;
pub mod eligibility;
pub mod pricing;
pub mod expiration;
pub mod config;
pub mod error;
pub mod ports;
pub mod services;

pub use product::Product;
pub use warranty::Warranty;
pub use eligibility::validate;
pub use pricing::{PriceQuote, WarrantyTier};
pub use expiration::compute_expiration;
pub use config::{ConfigError, WarrantyConfig, WarrantyRules};
pub use error::{RejectionReason, WarrantyError};
pub use ports::{ProductPort, WarrantyPort};
pub use services::{WarrantyRequest, WarrantySeller};
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::{InMemoryProductPort, InMemoryWarrantyPort};
