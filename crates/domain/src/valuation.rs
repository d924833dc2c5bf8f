//! USD-like valuation of a token0/token1 inventory.
//!
//! If token1 is USD-like the inventory is worth `amount0 * p_t1_t0 + amount1`;
//! if only token0 is, `amount1 * p_t0_t1 + amount0`. Otherwise token1 is
//! treated as the quote asset.

use crate::config::StatusConfig;
use crate::entities::token::TokenMeta;
use crate::value_objects::{PricePoint, TokenAmounts};
use crate::vault_status::VaultStatusRecord;
use rust_decimal::Decimal;
use tracing::debug;

/// Symbols valued 1:1 with USD, compared in upper case.
pub const USD_SYMBOLS: [&str; 8] = [
    "USDC", "USDBC", "USDCE", "USDT", "DAI", "USDD", "USDP", "BUSD",
];

/// Which side of the pair prices the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteSide {
    /// Token1 is USD-like.
    Token1,
    /// Token0 is USD-like.
    Token0,
    /// Neither is; token1 is used as the quote.
    Fallback,
}

/// Values inventories using the current pool price.
pub struct Valuation<'a> {
    config: &'a StatusConfig,
}

impl<'a> Valuation<'a> {
    pub fn new(config: &'a StatusConfig) -> Self {
        Self { config }
    }

    /// Returns true if the token is a stablecoin by symbol or configured address.
    pub fn is_usd_like(&self, token: &TokenMeta) -> bool {
        let symbol = token.symbol.trim().to_ascii_uppercase();
        USD_SYMBOLS.contains(&symbol.as_str()) || self.config.is_stable_token(&token.address)
    }

    pub fn quote_side(&self, token0: &TokenMeta, token1: &TokenMeta) -> QuoteSide {
        if self.is_usd_like(token1) {
            QuoteSide::Token1
        } else if self.is_usd_like(token0) {
            QuoteSide::Token0
        } else {
            QuoteSide::Fallback
        }
    }

    /// Values `amount0` and `amount1` at `price`. `None` on overflow.
    pub fn value_usd(
        &self,
        token0: &TokenMeta,
        token1: &TokenMeta,
        amount0: Decimal,
        amount1: Decimal,
        price: &PricePoint,
    ) -> Option<Decimal> {
        match self.quote_side(token0, token1) {
            QuoteSide::Token0 => amount1.checked_mul(price.p_t0_t1)?.checked_add(amount0),
            QuoteSide::Token1 | QuoteSide::Fallback => {
                amount0.checked_mul(price.p_t1_t0)?.checked_add(amount1)
            }
        }
    }

    fn value_amounts(&self, record: &VaultStatusRecord, amounts: &TokenAmounts) -> Option<Decimal> {
        self.value_usd(
            &record.token0,
            &record.token1,
            amounts.token0,
            amounts.token1,
            &record.prices.current,
        )
    }

    /// Fills `total_usd` on every holdings bucket and `usd` on the
    /// uncollected fees, valued at `prices.current`.
    pub fn annotate(&self, record: &mut VaultStatusRecord) {
        let side = self.quote_side(&record.token0, &record.token1);
        if side == QuoteSide::Fallback {
            debug!(
                vault = %record.vault,
                token0 = %record.token0.symbol,
                token1 = %record.token1.symbol,
                "No USD-like token in pair, quoting in token1"
            );
        }

        record.holdings.vault_idle.total_usd = self.value_amounts(record, &record.holdings.vault_idle);
        record.holdings.in_position.total_usd =
            self.value_amounts(record, &record.holdings.in_position);
        record.holdings.totals.total_usd = self.value_amounts(record, &record.holdings.totals);
        record.fees_uncollected.usd = self.value_usd(
            &record.token0,
            &record.token1,
            record.fees_uncollected.token0,
            record.fees_uncollected.token1,
            &record.prices.current,
        );
    }
}
