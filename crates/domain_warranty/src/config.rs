//! Warranty engine configuration
//!
//! Defaults reproduce the standard sales rules. Any value can be overridden
//! from the environment with the `WARRANTY_` prefix and `__` between nested
//! keys, e.g. `WARRANTY_RULES__TIER_THRESHOLD=750000` or
//! `WARRANTY_TIMEZONE=America/Bogota`.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use thiserror::Error;

use core_kernel::{Rate, Timezone};

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Pricing and coverage rules
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WarrantyRules {
    /// Prices strictly above this fall in the high tier
    pub tier_threshold: Decimal,
    /// Share of the product price charged in the high tier
    pub high_tier_rate: Decimal,
    /// Share of the product price charged in the low tier
    pub low_tier_rate: Decimal,
    /// Non-Monday days counted for high-tier coverage
    pub high_tier_counted_days: u32,
    /// Calendar days of low-tier coverage
    pub low_tier_calendar_days: u32,
}

impl Default for WarrantyRules {
    fn default() -> Self {
        Self {
            tier_threshold: dec!(500000),
            high_tier_rate: dec!(0.20),
            low_tier_rate: dec!(0.10),
            high_tier_counted_days: 200,
            low_tier_calendar_days: 100,
        }
    }
}

impl WarrantyRules {
    /// Checks the rules are usable
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` for a negative threshold, a rate
    /// outside [0, 1], or a zero day count.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tier_threshold.is_sign_negative() && !self.tier_threshold.is_zero() {
            return Err(ConfigError::Invalid(format!(
                "tier_threshold must not be negative, got {}",
                self.tier_threshold
            )));
        }
        for (name, rate) in [
            ("high_tier_rate", self.high_tier_rate),
            ("low_tier_rate", self.low_tier_rate),
        ] {
            if !Rate::new(rate).is_fraction() {
                return Err(ConfigError::Invalid(format!(
                    "{} must be between 0 and 1, got {}",
                    name, rate
                )));
            }
        }
        if self.high_tier_counted_days == 0 || self.low_tier_calendar_days == 0 {
            return Err(ConfigError::Invalid(
                "coverage day counts must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Top-level configuration for the warranty engine
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WarrantyConfig {
    pub rules: WarrantyRules,
    /// Timezone whose calendar dates start the coverage period
    pub timezone: Timezone,
}

impl Default for WarrantyConfig {
    fn default() -> Self {
        Self {
            rules: WarrantyRules::default(),
            timezone: Timezone::default(),
        }
    }
}

impl WarrantyConfig {
    /// Loads a `.env` file if present, then reads the environment
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// Loads configuration from `WARRANTY_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = config::Config::builder()
            .add_source(
                config::Environment::with_prefix("WARRANTY")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;
        Self::from_config(config)
    }

    /// Deserializes and validates an already-built configuration
    pub fn from_config(config: config::Config) -> Result<Self, ConfigError> {
        let loaded: Self = config.try_deserialize()?;
        loaded.rules.validate()?;
        Ok(loaded)
    }
}
