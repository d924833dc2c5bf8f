use crate::value_objects::address::Address;
use primitive_types::U256;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Rewards pending for the position in the vault's gauge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GaugeRewards {
    pub reward_token: Address,
    pub reward_symbol: String,
    #[serde(with = "crate::serde_u256")]
    pub pending_raw: U256,
    pub pending_amount: Decimal,
    #[serde(default)]
    pub pending_usd_est: Option<Decimal>,
}

impl GaugeRewards {
    /// True for the placeholder block emitted when no rewards could be read.
    pub fn is_empty(&self) -> bool {
        self.reward_token.is_zero() && self.pending_raw.is_zero()
    }
}

/// Reward tokens already harvested and held by the vault.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GaugeRewardBalances {
    pub token: Address,
    pub symbol: String,
    pub decimals: u8,
    #[serde(with = "crate::serde_u256")]
    pub in_vault_raw: U256,
    pub in_vault: Decimal,
}
