//! Modulus core: batch modular exponentiation.
//!
//! A query carries one or more modexps, each an optional
//! `(modulus, base, exponent)` triple that falls back to query-level
//! defaults for whatever it leaves out. The [`evaluator`] resolves every
//! item to concrete operands and computes `base^exponent mod modulus`;
//! the [`codec`] translates queries and responses from and to their JSON
//! wire form, including the brief/full response shaping. Nothing in this
//! crate knows about HTTP.

pub mod codec;
pub mod error;
pub mod evaluator;
pub mod num;
pub mod query;

pub use error::{EvalError, ParseError};
pub use evaluator::evaluate;
pub use query::{ModExp, ModExpQuery};
