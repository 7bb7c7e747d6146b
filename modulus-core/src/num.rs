//! Decimal wire representation of arbitrary-precision integers.
//!
//! Numbers cross the wire as unprefixed decimal JSON numerals and may be
//! thousands of bits wide, far beyond what fits a machine word or an
//! `f64` mantissa. Exactness relies on `serde_json`'s
//! `arbitrary_precision` feature, which carries numbers as their source
//! text instead of forcing them through a native type. Quoted decimal
//! strings are accepted on input as well; output is always a bare
//! numeral. Negative, fractional and exponent-notation values are
//! rejected.

use std::str::FromStr;

use num_bigint::{BigUint, ParseBigIntError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Render a number in the wire convention.
pub fn encode(n: &BigUint) -> String {
    n.to_str_radix(10)
}

/// Parse a number from the wire convention.
pub fn decode(text: &str) -> Result<BigUint, ParseBigIntError> {
    BigUint::from_str(text)
}

fn from_value(value: &Value) -> Result<BigUint, String> {
    let text = match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        other => return Err(format!("expected a number, found {other}")),
    };
    decode(&text).map_err(|_| format!("not a non-negative integer: {text}"))
}

/// Serde adapter for `BigUint` fields.
pub mod decimal {
    use super::*;

    pub fn serialize<S>(n: &BigUint, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde_json::Number::from_str(&encode(n))
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BigUint, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        from_value(&value).map_err(serde::de::Error::custom)
    }
}

/// Serde adapter for `Option<BigUint>` fields.
pub mod decimal_opt {
    use super::*;

    pub fn serialize<S>(n: &Option<BigUint>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match n {
            Some(n) => decimal::serialize(n, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<BigUint>, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match Option::<Value>::deserialize(deserializer)? {
            None => Ok(None),
            Some(value) => from_value(&value).map(Some).map_err(serde::de::Error::custom),
        }
    }
}
