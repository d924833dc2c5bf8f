//! Configuration for validating and valuing vault status records.
//!
//! Values are read from environment variables, optionally seeded from a
//! `.env` file:
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `VAULT_STATUS_PRICE_TOLERANCE` | max relative reciprocal error | `0.000001` |
//! | `VAULT_STATUS_TIMESTAMP_UNIT` | `seconds` or `milliseconds` | `seconds` |
//! | `VAULT_STATUS_ENFORCE_TOKEN_ORDER` | require `token0 < token1` | `true` |
//! | `STABLE_TOKEN_ADDRESSES` | comma separated stablecoin addresses | empty |

use crate::enums::TimestampUnit;
use crate::error::ConfigError;
use crate::value_objects::address::Address;
use rust_decimal::Decimal;
use std::env;
use std::str::FromStr;
use tracing::debug;

pub const PRICE_TOLERANCE_VAR: &str = "VAULT_STATUS_PRICE_TOLERANCE";
pub const TIMESTAMP_UNIT_VAR: &str = "VAULT_STATUS_TIMESTAMP_UNIT";
pub const ENFORCE_TOKEN_ORDER_VAR: &str = "VAULT_STATUS_ENFORCE_TOKEN_ORDER";
pub const STABLE_TOKEN_ADDRESSES_VAR: &str = "STABLE_TOKEN_ADDRESSES";

/// Settings consulted by validation and valuation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusConfig {
    /// Maximum relative deviation of `p_t0_t1` from `1 / p_t1_t0`.
    pub price_tolerance: Decimal,
    /// Unit used to interpret `last_rebalance_ts`.
    pub timestamp_unit: TimestampUnit,
    /// Require `token0.address < token1.address`.
    pub enforce_token_order: bool,
    /// Token addresses valued 1:1 with USD.
    pub stable_token_addresses: Vec<Address>,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            price_tolerance: Decimal::new(1, 6), // 0.0001%
            timestamp_unit: TimestampUnit::Seconds,
            enforce_token_order: true,
            stable_token_addresses: Vec::new(),
        }
    }
}

impl StatusConfig {
    /// Loads `.env` if present, then reads the environment.
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenv::dotenv() {
            debug!(path = %path.display(), "Loaded .env file");
        }
        Self::from_env()
    }

    /// Reads the process environment. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = non_empty(lookup(PRICE_TOLERANCE_VAR)) {
            let tolerance = Decimal::from_str(raw.trim())
                .map_err(|e| ConfigError::invalid(PRICE_TOLERANCE_VAR, &raw, e.to_string()))?;
            if tolerance.is_sign_negative() {
                return Err(ConfigError::invalid(
                    PRICE_TOLERANCE_VAR,
                    &raw,
                    "must not be negative",
                ));
            }
            config.price_tolerance = tolerance;
        }

        if let Some(raw) = non_empty(lookup(TIMESTAMP_UNIT_VAR)) {
            config.timestamp_unit = raw
                .parse()
                .map_err(|_| ConfigError::invalid(TIMESTAMP_UNIT_VAR, &raw, "expected seconds or milliseconds"))?;
        }

        if let Some(raw) = non_empty(lookup(ENFORCE_TOKEN_ORDER_VAR)) {
            config.enforce_token_order = parse_bool(&raw)
                .ok_or_else(|| ConfigError::invalid(ENFORCE_TOKEN_ORDER_VAR, &raw, "expected a boolean"))?;
        }

        if let Some(raw) = non_empty(lookup(STABLE_TOKEN_ADDRESSES_VAR)) {
            config.stable_token_addresses = raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(Address::new)
                .collect();
        }

        debug!(
            price_tolerance = %config.price_tolerance,
            timestamp_unit = ?config.timestamp_unit,
            enforce_token_order = config.enforce_token_order,
            stable_tokens = config.stable_token_addresses.len(),
            "Status configuration loaded"
        );

        Ok(config)
    }

    pub fn with_price_tolerance(mut self, tolerance: Decimal) -> Self {
        self.price_tolerance = tolerance;
        self
    }

    pub fn with_timestamp_unit(mut self, unit: TimestampUnit) -> Self {
        self.timestamp_unit = unit;
        self
    }

    pub fn with_token_order(mut self, enforce: bool) -> Self {
        self.enforce_token_order = enforce;
        self
    }

    pub fn with_stable_tokens(mut self, addresses: Vec<Address>) -> Self {
        self.stable_token_addresses = addresses;
        self
    }

    /// Returns true if the address is configured as a stablecoin.
    pub fn is_stable_token(&self, address: &Address) -> bool {
        self.stable_token_addresses
            .iter()
            .any(|stable| stable.same_as(address))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
