use crate::entities::TokenMeta;
use crate::error::ValidationError;
use crate::value_objects::Address;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Human-readable amounts of token0 and token1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenAmounts {
    pub token0: Decimal,
    pub token1: Decimal,
    /// USD-like value of both amounts, when a valuation was attached.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_usd: Option<Decimal>,
}

impl TokenAmounts {
    pub fn new(token0: Decimal, token1: Decimal) -> Self {
        Self {
            token0,
            token1,
            total_usd: None,
        }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn with_total_usd(mut self, total_usd: Decimal) -> Self {
        self.total_usd = Some(total_usd);
        self
    }

    /// Token-wise sum. The valuation is not carried over.
    pub fn checked_add(&self, other: &TokenAmounts) -> Result<TokenAmounts, ValidationError> {
        let token0 = self
            .token0
            .checked_add(other.token0)
            .ok_or(ValidationError::TotalsOverflow { token: "token0" })?;
        let token1 = self
            .token1
            .checked_add(other.token1)
            .ok_or(ValidationError::TotalsOverflow { token: "token1" })?;
        Ok(Self::new(token0, token1))
    }

    /// Compares token amounts only, ignoring any attached valuation.
    pub fn same_amounts(&self, other: &TokenAmounts) -> bool {
        self.token0 == other.token0 && self.token1 == other.token1
    }
}

/// A token0/token1 pair of labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair<T> {
    pub token0: T,
    pub token1: T,
}

impl<T> TokenPair<T> {
    pub fn new(token0: T, token1: T) -> Self {
        Self { token0, token1 }
    }
}

/// Vault inventory split between idle balances and the live position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holdings {
    pub vault_idle: TokenAmounts,
    pub in_position: TokenAmounts,
    pub totals: TokenAmounts,
    /// Token symbols, echoed from the token metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbols: Option<TokenPair<String>>,
    /// Token addresses, echoed from the token metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addresses: Option<TokenPair<Address>>,
}

impl Holdings {
    /// Builds holdings with totals derived from the two buckets.
    pub fn from_parts(
        vault_idle: TokenAmounts,
        in_position: TokenAmounts,
    ) -> Result<Self, ValidationError> {
        let totals = vault_idle.checked_add(&in_position)?;
        Ok(Self {
            vault_idle,
            in_position,
            totals,
            symbols: None,
            addresses: None,
        })
    }

    /// Attaches the symbols and addresses of the pair.
    pub fn with_labels(mut self, token0: &TokenMeta, token1: &TokenMeta) -> Self {
        self.symbols = Some(TokenPair::new(token0.symbol.clone(), token1.symbol.clone()));
        self.addresses = Some(TokenPair::new(
            token0.address.clone(),
            token1.address.clone(),
        ));
        self
    }
}

/// Fees accrued to the position and not yet collected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeesUncollected {
    pub token0: Decimal,
    pub token1: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usd: Option<Decimal>,
}

impl FeesUncollected {
    pub fn new(token0: Decimal, token1: Decimal) -> Self {
        Self {
            token0,
            token1,
            usd: None,
        }
    }
}
