use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::num;

/// A single modular exponentiation.
///
/// Operand fields left out on the wire inherit the query-level defaults.
/// A field that is present with value zero is not the same as an absent
/// field, which is why every operand is an `Option` rather than
/// zero-defaulted. `result` is absent until the query has been evaluated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ModExp {
    /// Modulus, falls back to the query default when absent
    #[serde(rename = "m", default, skip_serializing_if = "Option::is_none", with = "num::decimal_opt")]
    #[schema(value_type = Option<u64>, example = 17)]
    pub modulus: Option<BigUint>,

    /// Base, falls back to the query default when absent
    #[serde(rename = "b", default, skip_serializing_if = "Option::is_none", with = "num::decimal_opt")]
    #[schema(value_type = Option<u64>, example = 3)]
    pub base: Option<BigUint>,

    /// Exponent, falls back to the query default when absent
    #[serde(rename = "e", default, skip_serializing_if = "Option::is_none", with = "num::decimal_opt")]
    #[schema(value_type = Option<u64>, example = 5)]
    pub exponent: Option<BigUint>,

    /// Computed result, set by evaluation
    #[serde(rename = "r", default, skip_serializing_if = "Option::is_none", with = "num::decimal_opt")]
    #[schema(value_type = Option<u64>)]
    pub result: Option<BigUint>,
}

impl ModExp {
    /// A modexp with all three operands spelled out.
    pub fn new(modulus: BigUint, base: BigUint, exponent: BigUint) -> Self {
        Self {
            modulus: Some(modulus),
            base: Some(base),
            exponent: Some(exponent),
            result: None,
        }
    }
}

/// One request: a batch of modexps plus optional shared defaults.
///
/// Field declaration order mirrors the wire form (defaults, then the
/// brief flag, then the modexps) so serialized responses are byte-stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ModExpQuery {
    /// Default modulus for all modexps which do not specify a modulus
    #[serde(rename = "m", default, skip_serializing_if = "Option::is_none", with = "num::decimal_opt")]
    #[schema(value_type = Option<u64>)]
    pub modulus: Option<BigUint>,

    /// Default base for all modexps which do not specify a base
    #[serde(rename = "b", default, skip_serializing_if = "Option::is_none", with = "num::decimal_opt")]
    #[schema(value_type = Option<u64>)]
    pub base: Option<BigUint>,

    /// Default exponent for all modexps which do not specify an exponent
    #[serde(rename = "e", default, skip_serializing_if = "Option::is_none", with = "num::decimal_opt")]
    #[schema(value_type = Option<u64>)]
    pub exponent: Option<BigUint>,

    /// Return only the results (true, the default) or the full query
    /// including results (false)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brief: Option<bool>,

    /// The modexps to calculate, in request order
    #[serde(alias = "items", default)]
    pub modexps: Vec<ModExp>,
}

impl ModExpQuery {
    /// A query over the given modexps, without defaults, brief by default.
    pub fn new(modexps: Vec<ModExp>) -> Self {
        Self {
            modexps,
            ..Self::default()
        }
    }

    /// Response shape selected by the query.
    pub fn is_brief(&self) -> bool {
        self.brief.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_stay_absent_through_a_round_trip() {
        let query: ModExpQuery =
            serde_json::from_str(r#"{"m":23,"modexps":[{"b":2,"e":3}]}"#).unwrap();
        assert_eq!(query.modulus, Some(BigUint::from(23u8)));
        assert_eq!(query.base, None);
        assert_eq!(query.modexps[0].modulus, None);

        let json = serde_json::to_string(&query).unwrap();
        assert_eq!(json, r#"{"m":23,"modexps":[{"b":2,"e":3}]}"#);
    }

    #[test]
    fn items_is_accepted_as_an_alias() {
        let query: ModExpQuery =
            serde_json::from_str(r#"{"items":[{"m":3,"b":2,"e":3}]}"#).unwrap();
        assert_eq!(query.modexps.len(), 1);
    }

    #[test]
    fn brief_defaults_to_true() {
        let query: ModExpQuery = serde_json::from_str(r#"{"modexps":[{}]}"#).unwrap();
        assert!(query.is_brief());

        let query: ModExpQuery =
            serde_json::from_str(r#"{"brief":false,"modexps":[{}]}"#).unwrap();
        assert!(!query.is_brief());
    }
}
