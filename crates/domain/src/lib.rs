//! Status snapshot of a concentrated-liquidity vault.
//!
//! This crate provides the data contract exchanged between the component that
//! reads a vault's on-chain state and the components that consume it:
//! - Token, address, amount and price value objects
//! - The wire record (`VaultStatusRecord`) and its validated form (`VaultStatus`)
//! - Invariant checks over ticks, prices, range flags, holdings and gauge state
//! - USD-like valuation of vault inventory
//! - Configuration loaded from the environment

/// Prelude module for convenient imports.
pub mod prelude;

/// Configuration for validation and valuation.
pub mod config;
/// Token entities.
pub mod entities;
/// Enumerations used across the crate.
pub mod enums;
/// Error types.
pub mod error;
/// Tick helpers.
pub mod math;
/// Lossless serde codec for 256-bit integers.
pub mod serde_u256;
/// Invariant checks for vault status records.
pub mod validation;
/// USD-like valuation of token inventories.
pub mod valuation;
/// Value objects.
pub mod value_objects;
/// The vault status record.
pub mod vault_status;

#[cfg(test)]
pub(crate) mod test_fixtures;
