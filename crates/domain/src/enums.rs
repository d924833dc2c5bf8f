use crate::error::ConfigError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Position of the current tick relative to a position's tick bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeSide {
    /// `lower_tick <= tick < upper_tick`.
    Inside,
    /// `tick < lower_tick`.
    Below,
    /// `tick >= upper_tick`.
    Above,
}

impl RangeSide {
    /// Classifies a tick against the half-open range `[lower, upper)`.
    pub fn classify(tick: i32, lower: i32, upper: i32) -> Self {
        if tick < lower {
            Self::Below
        } else if tick >= upper {
            Self::Above
        } else {
            Self::Inside
        }
    }

    /// Like [`RangeSide::classify`], but a vault without a position is
    /// always inside.
    pub fn for_position(has_position: bool, tick: i32, lower: i32, upper: i32) -> Self {
        if has_position {
            Self::classify(tick, lower, upper)
        } else {
            Self::Inside
        }
    }

    pub fn is_out_of_range(&self) -> bool {
        *self != Self::Inside
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inside => "inside",
            Self::Below => "below",
            Self::Above => "above",
        }
    }
}

impl fmt::Display for RangeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the vault's liquidity position currently lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionLocation {
    /// The vault holds no position.
    #[serde(rename = "none")]
    NoPosition,
    /// The position NFT sits in the vault, earning pool fees.
    Pool,
    /// The position NFT is staked in the gauge, earning rewards.
    Gauge,
}

impl PositionLocation {
    pub fn derive(position_token_id: u128, staked: bool) -> Self {
        match (position_token_id, staked) {
            (0, _) => Self::NoPosition,
            (_, true) => Self::Gauge,
            (_, false) => Self::Pool,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoPosition => "none",
            Self::Pool => "pool",
            Self::Gauge => "gauge",
        }
    }
}

impl fmt::Display for PositionLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unit of `last_rebalance_ts`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimestampUnit {
    /// Seconds since the Unix epoch, as EVM `block.timestamp` reports.
    #[default]
    Seconds,
    /// Milliseconds since the Unix epoch.
    Milliseconds,
}

impl TimestampUnit {
    /// Interprets a raw timestamp in this unit.
    ///
    /// Returns `None` if the value is out of range for `DateTime<Utc>`.
    pub fn to_datetime(&self, raw: u64) -> Option<DateTime<Utc>> {
        let raw = i64::try_from(raw).ok()?;
        match self {
            Self::Seconds => DateTime::from_timestamp(raw, 0),
            Self::Milliseconds => DateTime::from_timestamp_millis(raw),
        }
    }
}

impl FromStr for TimestampUnit {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "s" | "sec" | "secs" | "seconds" => Ok(Self::Seconds),
            "ms" | "millis" | "milliseconds" => Ok(Self::Milliseconds),
            _ => Err(ConfigError::invalid(
                "timestamp unit",
                s,
                "expected seconds or milliseconds",
            )),
        }
    }
}
