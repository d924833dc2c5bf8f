//! The vault status snapshot.
//!
//! [`VaultStatusRecord`] is the wire shape: a plain record that a producer
//! fills in field by field. [`VaultStatus`] wraps a record that passed
//! validation; deserializing one validates with the default
//! [`StatusConfig`].

use crate::config::StatusConfig;
use crate::entities::token::TokenMeta;
use crate::enums::{PositionLocation, RangeSide, TimestampUnit};
use crate::error::{Result, ValidationError};
use crate::validation;
use crate::value_objects::{
    Address, FeesUncollected, GaugeRewardBalances, GaugeRewards, Holdings, PricePanel,
};
use chrono::{DateTime, Utc};
use primitive_types::U256;
use serde::{Deserialize, Serialize, Serializer};
use std::ops::Deref;
use tracing::{debug, warn};

/// Snapshot of one vault's on-chain and economic state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultStatusRecord {
    // identity
    pub vault: Address,
    pub owner: Address,
    pub executor: Address,
    pub adapter: Address,
    pub dex_router: Address,
    pub fee_collector: Address,
    pub strategy_id: u64,

    // pool linkage
    pub pool: Address,
    pub nfpm: Address,
    pub gauge: Address,

    pub token0: TokenMeta,
    pub token1: TokenMeta,

    // position, 0 when the vault holds none
    pub position_token_id: u128,
    pub liquidity: u128,
    pub lower_tick: i32,
    pub upper_tick: i32,
    pub tick_spacing: i32,

    // pool price
    pub tick: i32,
    #[serde(with = "crate::serde_u256")]
    pub sqrt_price_x96: U256,
    pub prices: PricePanel,

    pub out_of_range: bool,
    pub range_side: RangeSide,

    pub holdings: Holdings,
    pub fees_uncollected: FeesUncollected,

    /// Raw value as reported by the vault; see [`TimestampUnit`].
    pub last_rebalance_ts: u64,

    // gauge and staking
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_gauge: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staked: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_location: Option<PositionLocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gauge_rewards: Option<GaugeRewards>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gauge_reward_balances: Option<GaugeRewardBalances>,
}

impl VaultStatusRecord {
    /// Returns true if the vault holds a liquidity position.
    pub fn has_position(&self) -> bool {
        self.position_token_id != 0
    }

    /// The range side implied by `tick` and the position bounds.
    pub fn expected_range_side(&self) -> RangeSide {
        RangeSide::for_position(
            self.has_position(),
            self.tick,
            self.lower_tick,
            self.upper_tick,
        )
    }

    /// Sets `range_side` and `out_of_range` from the current tick.
    pub fn sync_range(&mut self) {
        self.range_side = self.expected_range_side();
        self.out_of_range = self.range_side.is_out_of_range();
    }

    /// Sets `has_gauge` and `position_location` from the gauge address,
    /// the position id and `staked`.
    pub fn sync_gauge_flags(&mut self) {
        self.has_gauge = Some(!self.gauge.is_zero());
        self.position_location = Some(PositionLocation::derive(
            self.position_token_id,
            self.staked.unwrap_or(false),
        ));
    }
}

/// A vault status record that satisfies every invariant.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "VaultStatusRecord")]
pub struct VaultStatus(VaultStatusRecord);

impl VaultStatus {
    /// Validates the record against `config`.
    pub fn new(
        record: VaultStatusRecord,
        config: &StatusConfig,
    ) -> std::result::Result<Self, ValidationError> {
        match validation::validate(&record, config) {
            Ok(()) => {
                debug!(
                    vault = %record.vault,
                    tick = record.tick,
                    range_side = %record.range_side,
                    "Vault status validated"
                );
                Ok(Self(record))
            }
            Err(e) => {
                warn!(vault = %record.vault, error = %e, "Rejected vault status");
                Err(e)
            }
        }
    }

    /// Decodes and validates a JSON document.
    pub fn from_json(json: &str, config: &StatusConfig) -> Result<Self> {
        let record: VaultStatusRecord = serde_json::from_str(json)?;
        Ok(Self::new(record, config)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.0)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.0)?)
    }

    pub fn record(&self) -> &VaultStatusRecord {
        &self.0
    }

    pub fn into_record(self) -> VaultStatusRecord {
        self.0
    }

    pub fn is_in_range(&self) -> bool {
        !self.0.out_of_range
    }

    /// Interprets `last_rebalance_ts` in the given unit. `None` when the
    /// vault never rebalanced or the value does not fit a date.
    pub fn last_rebalance_at(&self, unit: TimestampUnit) -> Option<DateTime<Utc>> {
        match self.0.last_rebalance_ts {
            0 => None,
            ts => unit.to_datetime(ts),
        }
    }
}

impl TryFrom<VaultStatusRecord> for VaultStatus {
    type Error = ValidationError;

    fn try_from(record: VaultStatusRecord) -> std::result::Result<Self, Self::Error> {
        Self::new(record, &StatusConfig::default())
    }
}

impl Serialize for VaultStatus {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl Deref for VaultStatus {
    type Target = VaultStatusRecord;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<VaultStatus> for VaultStatusRecord {
    fn from(status: VaultStatus) -> Self {
        status.0
    }
}
