//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for the warranty engine. Values are
//! fixed so expected dates and prices can be asserted exactly.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use core_kernel::{Currency, Money};
use domain_warranty::{InMemoryProductPort, InMemoryWarrantyPort, WarrantyConfig, WarrantySeller};
use rust_decimal_macros::dec;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Default product price, above the tier threshold
    pub fn high_tier_price() -> Money {
        Money::new(dec!(780000), Currency::COP)
    }

    /// Product price below the tier threshold
    pub fn low_tier_price() -> Money {
        Money::new(dec!(450000), Currency::COP)
    }

    /// Product price exactly on the tier threshold
    pub fn threshold_price() -> Money {
        Money::new(dec!(500000), Currency::COP)
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Thursday 2018-08-16; a 200-day count from here ends on a Saturday
    pub fn thursday_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2018, 8, 16).unwrap()
    }

    /// Friday 2018-08-17; a 200-day count from here ends on a Sunday
    pub fn friday_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2018, 8, 17).unwrap()
    }

    /// Monday 2018-08-20
    pub fn monday_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2018, 8, 20).unwrap()
    }

    /// Mid-afternoon UTC on the given date
    pub fn instant_on(date: NaiveDate) -> DateTime<Utc> {
        Utc.from_utc_datetime(&date.and_hms_opt(15, 0, 0).unwrap())
    }
}

/// Fixture for string test data
pub struct StringFixtures;

impl StringFixtures {
    /// A product code with one vowel, eligible for a warranty
    pub fn eligible_code() -> &'static str {
        "F01TSA0150"
    }

    /// A product code with exactly three vowels
    pub fn three_vowel_code() -> &'static str {
        "a123ebI213"
    }

    pub fn product_name() -> &'static str {
        "Computador Lenovo"
    }

    pub fn customer_name() -> &'static str {
        "Ricardo Ayala Martínez"
    }
}

/// A seller wired to in-memory ports, with handles to both stores
pub struct TestSeller {
    pub seller: WarrantySeller,
    pub products: Arc<InMemoryProductPort>,
    pub warranties: Arc<InMemoryWarrantyPort>,
}

impl TestSeller {
    /// Creates a seller with empty stores and default configuration
    pub fn new() -> Self {
        Self::with_config(WarrantyConfig::default())
    }

    /// Creates a seller with empty stores and the given configuration
    pub fn with_config(config: WarrantyConfig) -> Self {
        let products = Arc::new(InMemoryProductPort::new());
        let warranties = Arc::new(InMemoryWarrantyPort::new());
        let seller = WarrantySeller::new(products.clone(), warranties.clone(), config);
        Self {
            seller,
            products,
            warranties,
        }
    }
}

impl Default for TestSeller {
    fn default() -> Self {
        Self::new()
    }
}
