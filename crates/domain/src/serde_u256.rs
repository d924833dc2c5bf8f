//! Serializes `U256` as a decimal string.
//!
//! Values such as `sqrt_price_x96` routinely exceed what JSON numbers carry
//! without loss. Input may be a decimal string, a `0x` hex string or a bare
//! JSON integer of any size; integers are read from their exact digits, so
//! the crate builds `serde_json` with `arbitrary_precision`.
//!
//! ```rust
//! use primitive_types::U256;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Slot0 {
//!     #[serde(with = "vault_status_domain::serde_u256")]
//!     sqrt_price_x96: U256,
//! }
//! ```

use primitive_types::U256;
use serde::de::{self, Deserialize};
use serde::{Deserializer, Serializer};
use serde_json::Value;

pub fn serialize<S>(value: &U256, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(value)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<U256, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => parse_str(&s),
        // Number keeps the original digits; fractions, exponents and signs
        // fail the decimal parse.
        Value::Number(n) => {
            let digits = n.to_string();
            U256::from_dec_str(&digits).map_err(|e| {
                de::Error::custom(format!("invalid unsigned integer {digits}: {e:?}"))
            })
        }
        other => Err(de::Error::custom(format!(
            "expected an unsigned 256-bit integer as a decimal string, hex string or integer, got {other}"
        ))),
    }
}

fn parse_str<E: de::Error>(v: &str) -> Result<U256, E> {
    let v = v.trim();
    match v.strip_prefix("0x").or_else(|| v.strip_prefix("0X")) {
        Some(hex) => U256::from_str_radix(hex, 16)
            .map_err(|e| E::custom(format!("invalid hex integer {v:?}: {e:?}"))),
        None => U256::from_dec_str(v)
            .map_err(|e| E::custom(format!("invalid decimal integer {v:?}: {e:?}"))),
    }
}
