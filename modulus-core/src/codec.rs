//! JSON wire codec for queries and responses.
//!
//! Decoding accepts numbers as bare decimal numerals or quoted decimal
//! strings and takes `items` as an alias for the `modexps` key. Encoding
//! always emits bare numerals and the `modexps` key, with fields ordered
//! m, b, e, brief, modexps so responses are byte-stable.

use num_bigint::BigUint;
use serde::Serialize;

use crate::error::ParseError;
use crate::num;
use crate::query::ModExpQuery;

/// Decode a query from a request body.
///
/// Fails on an empty or all-whitespace body, malformed JSON, or any
/// numeric field that is not a non-negative decimal integer. A missing
/// or empty `modexps` array decodes fine and is rejected later by the
/// evaluator.
pub fn decode(body: &[u8]) -> Result<ModExpQuery, ParseError> {
    if body.iter().all(|b| b.is_ascii_whitespace()) {
        return Err(ParseError::EmptyBody);
    }
    Ok(serde_json::from_slice(body)?)
}

/// Encode an evaluated query in its response shape.
///
/// A brief response carries only the per-item results. A full response
/// echoes the query-level defaults that were present on input, an
/// explicit `brief: false`, and every item exactly as the client sent it
/// plus its result.
pub fn encode(response: &ModExpQuery, brief: bool) -> Result<Vec<u8>, ParseError> {
    if brief {
        let modexps = response
            .modexps
            .iter()
            .map(|modexp| BriefModExp {
                result: modexp.result.clone(),
            })
            .collect();
        Ok(serde_json::to_vec(&BriefResponse { modexps })?)
    } else {
        let full = ModExpQuery {
            brief: Some(false),
            ..response.clone()
        };
        Ok(serde_json::to_vec(&full)?)
    }
}

#[derive(Serialize)]
struct BriefResponse {
    modexps: Vec<BriefModExp>,
}

#[derive(Serialize)]
struct BriefModExp {
    #[serde(rename = "r", skip_serializing_if = "Option::is_none", with = "num::decimal_opt")]
    result: Option<BigUint>,
}
