//! Eligibility rules for extended warranties
//!
//! Checks run in a fixed order and the first failure wins:
//!
//! 1. product code and customer name must be present and non-empty
//! 2. the product must not already carry a warranty
//! 3. the product code must not contain exactly three vowels
//!
//! Rule 3 is applied literally: a code with exactly three vowels is
//! rejected, every other count is accepted.

use crate::error::RejectionReason;

/// Number of vowels that disqualifies a product code
pub const DISQUALIFYING_VOWEL_COUNT: usize = 3;

/// Validates a warranty request
///
/// # Arguments
///
/// * `code` - Product code, `None` when the caller did not supply one
/// * `customer_name` - Name of the buyer, `None` when not supplied
/// * `has_existing_warranty` - Whether the warranty store already holds a
///   warranty for this product
///
/// # Errors
///
/// Returns the first `RejectionReason` that applies.
pub fn validate(
    code: Option<&str>,
    customer_name: Option<&str>,
    has_existing_warranty: bool,
) -> Result<(), RejectionReason> {
    let code = match (code, customer_name) {
        (Some(code), Some(name)) if !code.is_empty() && !name.is_empty() => code,
        _ => return Err(RejectionReason::MissingRequiredData),
    };

    if has_existing_warranty {
        return Err(RejectionReason::AlreadyInsured);
    }

    if has_disqualifying_vowel_count(code) {
        return Err(RejectionReason::NotEligible);
    }

    Ok(())
}

/// Counts the ASCII vowels in `code`, ignoring case
pub fn vowel_count(code: &str) -> usize {
    code.chars()
        .filter(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
        .count()
}

/// Returns true if `code` contains exactly three vowels
pub fn has_disqualifying_vowel_count(code: &str) -> bool {
    vowel_count(code) == DISQUALIFYING_VOWEL_COUNT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vowel_count_is_case_insensitive() {
        assert_eq!(vowel_count("A213e98i"), 3);
        assert_eq!(vowel_count("AEIOUaeiou"), 10);
        assert_eq!(vowel_count("C001"), 0);
    }

    #[test]
    fn test_accented_vowels_are_not_counted() {
        assert_eq!(vowel_count("áéí"), 0);
    }

    #[test]
    fn test_two_vowels_do_not_disqualify() {
        assert!(!has_disqualifying_vowel_count("A213398i"));
    }

    #[test]
    fn test_three_vowels_disqualify() {
        assert!(has_disqualifying_vowel_count("A213e98i"));
    }

    #[test]
    fn test_missing_data_wins_over_other_rules() {
        assert_eq!(validate(None, Some(""), true), Err(RejectionReason::MissingRequiredData));
        assert_eq!(validate(Some("aei"), None, true), Err(RejectionReason::MissingRequiredData));
    }

    #[test]
    fn test_already_insured_wins_over_vowel_rule() {
        assert_eq!(validate(Some("aei"), Some("Ana"), true), Err(RejectionReason::AlreadyInsured));
    }

    #[test]
    fn test_valid_request_passes() {
        assert_eq!(validate(Some("C001"), Some("Ana"), false), Ok(()));
    }
}
