use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Price of the pair at a given tick, quoted both ways.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePoint {
    pub tick: i32,
    /// Token1 per token0.
    pub p_t1_t0: Decimal,
    /// Token0 per token1.
    pub p_t0_t1: Decimal,
}

impl PricePoint {
    pub fn new(tick: i32, p_t1_t0: Decimal, p_t0_t1: Decimal) -> Self {
        Self {
            tick,
            p_t1_t0,
            p_t0_t1,
        }
    }

    /// Builds a price point from the token1-per-token0 price, deriving the
    /// reciprocal. A zero price yields a zero reciprocal.
    pub fn from_price(tick: i32, p_t1_t0: Decimal) -> Self {
        let p_t0_t1 = Decimal::ONE.checked_div(p_t1_t0).unwrap_or(Decimal::ZERO);
        Self::new(tick, p_t1_t0, p_t0_t1)
    }

    /// Relative deviation of `p_t0_t1` from `1 / p_t1_t0`, i.e.
    /// `|p_t1_t0 * p_t0_t1 - 1|`. `None` if the product overflows.
    pub fn reciprocal_error(&self) -> Option<Decimal> {
        self.p_t1_t0
            .checked_mul(self.p_t0_t1)
            .map(|product| (product - Decimal::ONE).abs())
    }

    /// Returns true if the two quotes are reciprocal within `tolerance`.
    pub fn is_reciprocal(&self, tolerance: Decimal) -> bool {
        self.reciprocal_error()
            .is_some_and(|error| error <= tolerance)
    }
}

/// Prices at the current tick and at both position bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePanel {
    pub current: PricePoint,
    pub lower: PricePoint,
    pub upper: PricePoint,
}

impl PricePanel {
    /// Price points paired with their wire names.
    pub fn points(&self) -> [(&'static str, &PricePoint); 3] {
        [
            ("current", &self.current),
            ("lower", &self.lower),
            ("upper", &self.upper),
        ]
    }
}
