//! Warranty expiration dates
//!
//! High-tier warranties run for a number of counted days. Counting walks
//! forward one calendar day at a time from the start date; every day landed
//! on counts except Mondays. When the last counted day is a Sunday the
//! coverage is pushed two more days, past Sunday and Monday, to Tuesday.
//! That check is made once and not repeated after the push.
//!
//! Low-tier warranties simply run for a fixed number of calendar days.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use rust_decimal::Decimal;

use crate::config::WarrantyRules;
use crate::error::WarrantyError;
use crate::pricing::WarrantyTier;

/// Weekday stepped over without being counted
pub const EXCLUDED_WEEKDAY: Weekday = Weekday::Mon;

/// Weekday on which high-tier coverage may not end
pub const DEFERRED_WEEKDAY: Weekday = Weekday::Sun;

/// Days added when coverage would end on `DEFERRED_WEEKDAY`
pub const DEFERRAL_DAYS: u64 = 2;

/// Computes the expiration date of a warranty starting on `start`
///
/// # Arguments
///
/// * `start` - First calendar day of the warranty
/// * `product_price` - Price of the insured product, selects the tier
/// * `rules` - Threshold and day counts
///
/// # Errors
///
/// Returns `WarrantyError::Calculation` if the result falls outside the
/// representable calendar.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use domain_warranty::{compute_expiration, WarrantyRules};
/// use rust_decimal_macros::dec;
///
/// let start = NaiveDate::from_ymd_opt(2018, 8, 16).unwrap();
/// let end = compute_expiration(start, dec!(650000), &WarrantyRules::default()).unwrap();
/// assert_eq!(end, NaiveDate::from_ymd_opt(2019, 4, 6).unwrap());
/// ```
pub fn compute_expiration(
    start: NaiveDate,
    product_price: Decimal,
    rules: &WarrantyRules,
) -> Result<NaiveDate, WarrantyError> {
    match WarrantyTier::for_price(product_price, rules.tier_threshold) {
        WarrantyTier::High => {
            let last_counted =
                count_days_excluding(start, rules.high_tier_counted_days, EXCLUDED_WEEKDAY)?;
            defer_from_sunday(last_counted)
        }
        WarrantyTier::Low => add_calendar_days(start, rules.low_tier_calendar_days),
    }
}

/// Walks forward from `start` until `days` non-`excluded` days have been
/// landed on, returning the last one
pub fn count_days_excluding(
    start: NaiveDate,
    days: u32,
    excluded: Weekday,
) -> Result<NaiveDate, WarrantyError> {
    if days == 0 {
        return Ok(start);
    }
    start
        .iter_days()
        .skip(1)
        .filter(|date| date.weekday() != excluded)
        .nth(days as usize - 1)
        .ok_or_else(|| out_of_range(start, days))
}

/// Pushes a Sunday end date to the following Tuesday
pub fn defer_from_sunday(date: NaiveDate) -> Result<NaiveDate, WarrantyError> {
    if date.weekday() != DEFERRED_WEEKDAY {
        return Ok(date);
    }
    date.checked_add_days(Days::new(DEFERRAL_DAYS))
        .ok_or_else(|| out_of_range(date, DEFERRAL_DAYS))
}

/// Adds plain calendar days, no exclusions
pub fn add_calendar_days(start: NaiveDate, days: u32) -> Result<NaiveDate, WarrantyError> {
    start
        .checked_add_days(Days::new(u64::from(days)))
        .ok_or_else(|| out_of_range(start, days))
}

fn out_of_range(start: NaiveDate, days: impl std::fmt::Display) -> WarrantyError {
    WarrantyError::calculation(format!(
        "{} days after {} is outside the supported calendar",
        days, start
    ))
}
