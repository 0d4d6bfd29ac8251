//! Custom Test Assertions
//!
//! Provides assertion helpers for warranty results that give more
//! meaningful failure messages than bare `assert!`.

use chrono::{Datelike, NaiveDate, Weekday};
use core_kernel::Money;
use domain_warranty::{RejectionReason, Warranty, WarrantyError};

/// Asserts that a result is a business rejection with the given reason
///
/// # Panics
///
/// Panics if the result is `Ok` or fails for another reason
pub fn assert_rejected<T: std::fmt::Debug>(
    result: &Result<T, WarrantyError>,
    expected: RejectionReason,
) {
    match result {
        Err(WarrantyError::Rejected(reason)) => assert_eq!(
            *reason, expected,
            "Expected rejection {:?}, got {:?}",
            expected, reason
        ),
        other => panic!("Expected rejection {:?}, got {:?}", expected, other),
    }
}

/// Asserts the price and expiration date of a warranty
pub fn assert_warranty_terms(warranty: &Warranty, price: Money, expiration_date: NaiveDate) {
    assert_eq!(
        warranty.price(),
        price,
        "Warranty price mismatch for product {}",
        warranty.product_code()
    );
    assert_eq!(
        warranty.expiration_date(),
        expiration_date,
        "Warranty expiration mismatch for product {}",
        warranty.product_code()
    );
}

/// Asserts that a date does not fall on the given weekday
pub fn assert_not_on(date: NaiveDate, weekday: Weekday) {
    assert_ne!(
        date.weekday(),
        weekday,
        "Expected {} not to fall on {:?}",
        date,
        weekday
    );
}
