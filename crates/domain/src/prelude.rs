//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate.
//!
//! # Example
//!
//! ```rust
//! use vault_status_domain::prelude::*;
//! ```

// Configuration
pub use crate::config::StatusConfig;

// Entities
pub use crate::entities::TokenMeta;

// Enums
pub use crate::enums::{PositionLocation, RangeSide, TimestampUnit};

// Errors
pub use crate::error::{AmountError, ConfigError, ValidationError, VaultStatusError};

// Validation
pub use crate::validation::{validate, violations};

// Valuation
pub use crate::valuation::{QuoteSide, Valuation};

// Value objects
pub use crate::value_objects::{
    Address, FeesUncollected, GaugeRewardBalances, GaugeRewards, Holdings, PricePanel,
    PricePoint, RawAmount, TokenAmounts, TokenPair, ZERO_ADDRESS,
};

// Vault status
pub use crate::vault_status::{VaultStatus, VaultStatusRecord};
