use crate::error::AmountError;
use crate::value_objects::address::Address;
use crate::value_objects::amount::RawAmount;
use primitive_types::U256;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// ERC20 metadata of one side of the vault's token pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenMeta {
    pub address: Address,
    pub symbol: String,
    pub decimals: u8,
}

impl TokenMeta {
    pub fn new(address: impl Into<Address>, symbol: impl Into<String>, decimals: u8) -> Self {
        Self {
            address: address.into(),
            symbol: symbol.into(),
            decimals,
        }
    }

    /// Returns true if both tokens share an address, ignoring case.
    pub fn is_same_asset(&self, other: &TokenMeta) -> bool {
        self.address.same_as(&other.address)
    }

    /// Converts a raw balance of this token to a human amount.
    pub fn to_human(&self, raw: impl Into<U256>) -> Result<Decimal, AmountError> {
        RawAmount::new(raw, self.decimals).to_decimal()
    }
}
