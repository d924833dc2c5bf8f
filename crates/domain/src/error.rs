//! Error types for vault status handling.

use crate::enums::{PositionLocation, RangeSide};
use crate::math::tick::{MAX_TICK, MIN_TICK};
use crate::value_objects::address::Address;
use primitive_types::U256;
use rust_decimal::Decimal;

/// Result type for this crate.
pub type Result<T> = std::result::Result<T, VaultStatusError>;

/// Top-level error for vault status operations.
#[derive(Debug, thiserror::Error)]
pub enum VaultStatusError {
    /// The record violates an invariant.
    #[error("Invalid vault status: {0}")]
    Validation(#[from] ValidationError),
    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// A raw amount could not be scaled.
    #[error("Amount error: {0}")]
    Amount(#[from] AmountError),
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// A single violated invariant of a vault status record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Tick spacing is zero or negative.
    #[error("tick_spacing must be positive, got {0}")]
    NonPositiveTickSpacing(i32),
    /// A tick lies outside the representable tick range.
    #[error("{field} {tick} is outside [{min}, {max}]", min = MIN_TICK, max = MAX_TICK)]
    TickOutOfBounds { field: &'static str, tick: i32 },
    /// Lower bound is above upper bound.
    #[error("lower_tick {lower} is above upper_tick {upper}")]
    InvertedTickRange { lower: i32, upper: i32 },
    /// A position bound is not aligned to the tick spacing.
    #[error("{field} {tick} is not a multiple of tick_spacing {spacing}")]
    MisalignedTick {
        field: &'static str,
        tick: i32,
        spacing: i32,
    },
    /// Both tokens refer to the same asset.
    #[error("token0 and token1 share the address {0}")]
    DuplicateToken(Address),
    /// Tokens are not in canonical order.
    #[error("token0 {token0} must sort before token1 {token1}")]
    TokenOrder { token0: Address, token1: Address },
    /// The range side does not match the current tick.
    #[error("range_side is {actual} but tick {tick} against [{lower}, {upper}) is {expected}")]
    RangeSideMismatch {
        actual: RangeSide,
        expected: RangeSide,
        tick: i32,
        lower: i32,
        upper: i32,
    },
    /// The out-of-range flag disagrees with the range side.
    #[error("out_of_range is {out_of_range} but range_side is {range_side}")]
    OutOfRangeFlagMismatch {
        out_of_range: bool,
        range_side: RangeSide,
    },
    /// A price point carries a zero or negative price.
    #[error("prices.{point}.p_t1_t0 must be positive, got {value}")]
    NonPositivePrice { point: &'static str, value: Decimal },
    /// The two prices of a price point are not reciprocal.
    #[error("prices.{point}: p_t0_t1 {p_t0_t1} is not the reciprocal of p_t1_t0 {p_t1_t0}")]
    PriceNotReciprocal {
        point: &'static str,
        p_t1_t0: Decimal,
        p_t0_t1: Decimal,
    },
    /// A price point refers to the wrong tick.
    #[error("prices.{point}.tick is {actual}, expected {expected}")]
    PriceTickMismatch {
        point: &'static str,
        expected: i32,
        actual: i32,
    },
    /// An amount is negative.
    #[error("{field} is negative: {value}")]
    NegativeAmount { field: &'static str, value: Decimal },
    /// Holdings totals do not equal idle plus in-position amounts.
    #[error("holdings.totals.{token} is {total}, expected {expected}")]
    TotalsMismatch {
        token: &'static str,
        total: Decimal,
        expected: Decimal,
    },
    /// Idle plus in-position amounts overflow.
    #[error("holdings.{token}: idle plus in-position amount overflows")]
    TotalsOverflow { token: &'static str },
    /// A holdings label disagrees with the token metadata.
    #[error("{field} is {actual}, expected {expected}")]
    HoldingsLabelMismatch {
        field: &'static str,
        expected: String,
        actual: String,
    },
    /// `has_gauge` disagrees with the gauge address.
    #[error("has_gauge is {has_gauge} but gauge is {gauge}")]
    GaugeFlagMismatch { has_gauge: bool, gauge: Address },
    /// The position is staked in a gauge the vault does not have.
    #[error("staked is true but the vault has no gauge")]
    StakedWithoutGauge,
    /// The position location disagrees with the position and staking state.
    #[error("position_location is {actual}, expected {expected}")]
    PositionLocationMismatch {
        actual: PositionLocation,
        expected: PositionLocation,
    },
}

/// Errors raised while scaling raw on-chain amounts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    /// Token decimals exceed the precision of `Decimal`.
    #[error("decimals {0} exceed the maximum supported scale")]
    ScaleTooLarge(u8),
    /// The raw amount does not fit in a `Decimal`.
    #[error("raw amount {0} does not fit in a decimal")]
    Overflow(U256),
}

/// Errors raised while loading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable holds an unusable value.
    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(key: &str, value: &str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}
