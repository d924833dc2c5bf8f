//! Shared sample snapshots for unit tests.

use crate::entities::token::TokenMeta;
use crate::enums::RangeSide;
use crate::value_objects::{
    Address, FeesUncollected, Holdings, PricePanel, PricePoint, TokenAmounts,
};
use crate::vault_status::VaultStatusRecord;
use primitive_types::U256;
use rust_decimal_macros::dec;
use serde_json::{Value, json};

pub const TOKEN0: &str = "0x1111111111111111111111111111111111111111";
pub const TOKEN1: &str = "0x2222222222222222222222222222222222222222";

/// A vault with a live position at tick 100 inside `[0, 200)`.
pub fn sample_record() -> VaultStatusRecord {
    VaultStatusRecord {
        vault: Address::new("0x00000000000000000000000000000000000000a1"),
        owner: Address::new("0x00000000000000000000000000000000000000a2"),
        executor: Address::new("0x00000000000000000000000000000000000000a3"),
        adapter: Address::new("0x00000000000000000000000000000000000000a4"),
        dex_router: Address::new("0x00000000000000000000000000000000000000a5"),
        fee_collector: Address::new("0x00000000000000000000000000000000000000a6"),
        strategy_id: 1,
        pool: Address::new("0x00000000000000000000000000000000000000b1"),
        nfpm: Address::new("0x00000000000000000000000000000000000000b2"),
        gauge: Address::zero(),
        token0: TokenMeta::new(TOKEN0, "USDC", 6),
        token1: TokenMeta::new(TOKEN1, "WETH", 18),
        position_token_id: 42,
        liquidity: 1_000_000,
        lower_tick: 0,
        upper_tick: 200,
        tick_spacing: 10,
        tick: 100,
        sqrt_price_x96: U256::from(79_623_317_895_830_914_510_639_640_423u128),
        prices: PricePanel {
            current: PricePoint::new(100, dec!(1.25), dec!(0.8)),
            lower: PricePoint::new(0, dec!(1), dec!(1)),
            upper: PricePoint::new(200, dec!(1.6), dec!(0.625)),
        },
        out_of_range: false,
        range_side: RangeSide::Inside,
        holdings: Holdings {
            vault_idle: TokenAmounts::new(dec!(1), dec!(2)),
            in_position: TokenAmounts::new(dec!(3), dec!(4)),
            totals: TokenAmounts::new(dec!(4), dec!(6)),
            symbols: None,
            addresses: None,
        },
        fees_uncollected: FeesUncollected::new(dec!(0.1), dec!(0.2)),
        last_rebalance_ts: 1_700_000_000,
        has_gauge: None,
        staked: None,
        position_location: None,
        gauge_rewards: None,
        gauge_reward_balances: None,
    }
}

/// The wire form of [`sample_record`], as a producer would emit it.
pub fn sample_json() -> Value {
    json!({
        "vault": "0x00000000000000000000000000000000000000a1",
        "owner": "0x00000000000000000000000000000000000000a2",
        "executor": "0x00000000000000000000000000000000000000a3",
        "adapter": "0x00000000000000000000000000000000000000a4",
        "dex_router": "0x00000000000000000000000000000000000000a5",
        "fee_collector": "0x00000000000000000000000000000000000000a6",
        "strategy_id": 1,
        "pool": "0x00000000000000000000000000000000000000b1",
        "nfpm": "0x00000000000000000000000000000000000000b2",
        "gauge": "0x0000000000000000000000000000000000000000",
        "token0": { "address": TOKEN0, "symbol": "USDC", "decimals": 6 },
        "token1": { "address": TOKEN1, "symbol": "WETH", "decimals": 18 },
        "position_token_id": 42,
        "liquidity": 1_000_000,
        "lower_tick": 0,
        "upper_tick": 200,
        "tick_spacing": 10,
        "tick": 100,
        "sqrt_price_x96": "79623317895830914510639640423",
        "prices": {
            "current": { "tick": 100, "p_t1_t0": "1.25", "p_t0_t1": "0.8" },
            "lower": { "tick": 0, "p_t1_t0": "1", "p_t0_t1": "1" },
            "upper": { "tick": 200, "p_t1_t0": "1.6", "p_t0_t1": "0.625" }
        },
        "out_of_range": false,
        "range_side": "inside",
        "holdings": {
            "vault_idle": { "token0": 1, "token1": "2" },
            "in_position": { "token0": "3", "token1": "4" },
            "totals": { "token0": "4", "token1": "6" }
        },
        "fees_uncollected": { "token0": "0.1", "token1": "0.2" },
        "last_rebalance_ts": 1_700_000_000u64
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_json_matches_record() {
        let parsed: VaultStatusRecord = serde_json::from_value(sample_json()).unwrap();
        assert_eq!(parsed, sample_record());
    }
}
