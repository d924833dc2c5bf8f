use crate::error::AmountError;
use primitive_types::U256;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Largest scale a `Decimal` can carry.
const MAX_SCALE: u8 = 28;

/// A raw on-chain integer amount together with its token precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RawAmount {
    #[serde(with = "crate::serde_u256")]
    pub raw: U256,
    pub decimals: u8,
}

impl RawAmount {
    pub fn new(raw: impl Into<U256>, decimals: u8) -> Self {
        Self {
            raw: raw.into(),
            decimals,
        }
    }

    /// Scales the raw amount down by `10^decimals` without rounding.
    pub fn to_decimal(&self) -> Result<Decimal, AmountError> {
        if self.decimals > MAX_SCALE {
            return Err(AmountError::ScaleTooLarge(self.decimals));
        }
        if self.raw > U256::from(i128::MAX as u128) {
            return Err(AmountError::Overflow(self.raw));
        }
        let mantissa = self.raw.as_u128() as i128;
        Decimal::try_from_i128_with_scale(mantissa, u32::from(self.decimals))
            .map_err(|_| AmountError::Overflow(self.raw))
    }
}
