use serde::{Deserialize, Serialize};
use std::fmt;

/// The all-zero EVM address used for unset contract references.
pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// Opaque address-like identifier of an account or contract.
///
/// The inner string is kept as received; comparisons that matter for
/// invariants go through [`Address::same_as`], which ignores case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into().trim().to_string())
    }

    pub fn zero() -> Self {
        Self(ZERO_ADDRESS.to_string())
    }

    /// Returns true for the empty string and the zero address.
    pub fn is_zero(&self) -> bool {
        let trimmed = self.0.trim();
        trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ZERO_ADDRESS)
    }

    /// Case-insensitive equality.
    pub fn same_as(&self, other: &Address) -> bool {
        self.0.trim().eq_ignore_ascii_case(other.0.trim())
    }

    pub fn to_lowercase(&self) -> String {
        self.0.trim().to_ascii_lowercase()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Address {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Address {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
