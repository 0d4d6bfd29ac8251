//! Warranty Pricing Tests

use core_kernel::{Currency, Money};
use domain_warranty::pricing::{self, warranty_price};
use domain_warranty::{WarrantyRules, WarrantyTier};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use test_utils::{high_tier_price_strategy, low_tier_price_strategy, MoneyFixtures};

mod tiers {
    use super::*;

    #[test]
    fn test_high_tier_charges_twenty_percent() {
        let (rate, price) = pricing::price(dec!(650000), &WarrantyRules::default());
        assert_eq!(rate, dec!(0.20));
        assert_eq!(price, dec!(130000));
    }

    #[test]
    fn test_low_tier_charges_ten_percent() {
        let (rate, price) = pricing::price(dec!(450000), &WarrantyRules::default());
        assert_eq!(rate, dec!(0.10));
        assert_eq!(price, dec!(45000));
    }

    #[test]
    fn test_threshold_price_is_low_tier() {
        let quote = pricing::quote(&MoneyFixtures::threshold_price(), &WarrantyRules::default());
        assert_eq!(quote.tier, WarrantyTier::Low);
        assert_eq!(quote.price.amount(), dec!(50000));
    }

    #[test]
    fn test_just_above_threshold_is_high_tier() {
        assert_eq!(
            WarrantyTier::for_price(dec!(500000.01), dec!(500000)),
            WarrantyTier::High
        );
    }

    #[test]
    fn test_zero_price_is_free() {
        let (_, price) = pricing::price(Decimal::ZERO, &WarrantyRules::default());
        assert!(price.is_zero());
    }
}

mod quotes {
    use super::*;

    #[test]
    fn test_quote_for_default_product() {
        let quote = pricing::quote(&MoneyFixtures::high_tier_price(), &WarrantyRules::default());
        assert_eq!(quote.tier, WarrantyTier::High);
        assert_eq!(quote.rate.to_string(), "20%");
        assert_eq!(quote.price, Money::new(dec!(156000), Currency::COP));
    }

    #[test]
    fn test_fractional_price_is_not_rounded() {
        let quote = pricing::quote(
            &Money::new(dec!(123.45), Currency::USD),
            &WarrantyRules::default(),
        );
        assert_eq!(quote.price.amount(), dec!(12.345));
        assert_eq!(quote.price.currency(), Currency::USD);
    }

    #[test]
    fn test_custom_rules() {
        let rules = WarrantyRules {
            tier_threshold: dec!(1000),
            high_tier_rate: dec!(0.25),
            ..Default::default()
        };
        assert_eq!(pricing::price(dec!(2000), &rules), (dec!(0.25), dec!(500)));
        assert_eq!(pricing::price(dec!(1000), &rules), (dec!(0.10), dec!(100)));
    }
}

proptest! {
    #[test]
    fn high_tier_prices_cost_a_fifth(amount in high_tier_price_strategy()) {
        let (rate, price) = pricing::price(amount, &WarrantyRules::default());
        prop_assert_eq!(rate, dec!(0.20));
        prop_assert_eq!(price, warranty_price(amount, dec!(0.20)));
    }

    #[test]
    fn low_tier_prices_cost_a_tenth(amount in low_tier_price_strategy()) {
        let (rate, price) = pricing::price(amount, &WarrantyRules::default());
        prop_assert_eq!(rate, dec!(0.10));
        prop_assert_eq!(price, amount * dec!(0.10));
    }

    #[test]
    fn warranty_never_costs_more_than_product(amount in prop_oneof![
        high_tier_price_strategy(),
        low_tier_price_strategy(),
    ]) {
        let (_, price) = pricing::price(amount, &WarrantyRules::default());
        prop_assert!(price <= amount);
        prop_assert!(price >= Decimal::ZERO);
    }
}
