//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random warranty requests
//! that keep the properties a test relies on (vowel count, tier, dates).

use chrono::{Duration, NaiveDate};
use core_kernel::{Currency, Money};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for a run of code characters that are never vowels
fn consonant_run() -> impl Strategy<Value = String> {
    "[b-df-hj-np-tv-zB-DF-HJ-NP-TV-Z0-9]{0,3}"
}

/// Strategy for a single vowel in either case
fn vowel() -> impl Strategy<Value = String> {
    "[aeiouAEIOU]"
}

/// Strategy for product codes containing exactly `vowels` vowels
pub fn code_with_vowels_strategy(vowels: usize) -> impl Strategy<Value = String> {
    (
        proptest::collection::vec((consonant_run(), vowel()), vowels..=vowels),
        consonant_run(),
    )
        .prop_map(|(segments, tail)| {
            let mut code: String = segments
                .into_iter()
                .map(|(run, vowel)| run + &vowel)
                .collect();
            code.push_str(&tail);
            code
        })
        .prop_filter("product code must not be empty", |code| !code.is_empty())
}

/// Strategy for product codes whose vowel count is anything but three
pub fn eligible_code_strategy() -> impl Strategy<Value = String> {
    (0usize..8)
        .prop_filter("three vowels disqualify", |n| *n != 3)
        .prop_flat_map(code_with_vowels_strategy)
}

/// Strategy for product codes with exactly three vowels
pub fn three_vowel_code_strategy() -> impl Strategy<Value = String> {
    code_with_vowels_strategy(3)
}

/// Strategy for product prices strictly above the default threshold
pub fn high_tier_price_strategy() -> impl Strategy<Value = Decimal> {
    (50_000_001i64..100_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for product prices at or below the default threshold
pub fn low_tier_price_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=50_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for any non-negative product price in COP
pub fn product_price_strategy() -> impl Strategy<Value = Money> {
    prop_oneof![high_tier_price_strategy(), low_tier_price_strategy()]
        .prop_map(|amount| Money::new(amount, Currency::COP))
}

/// Strategy for warranty start dates between 2000 and roughly 2080
pub fn start_date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..30_000).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2000, 1, 1).unwrap() + Duration::days(offset)
    })
}

/// Strategy for customer names
pub fn customer_name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{2,10} [A-Z][a-z]{2,10}"
}
