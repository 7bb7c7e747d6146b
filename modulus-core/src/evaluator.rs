//! Resolves and computes the modular exponentiations of a query.

use num_bigint::BigUint;
use num_traits::Zero;
use tracing::trace;

use crate::error::EvalError;
use crate::query::ModExpQuery;

/// Evaluate every modexp of a query, in order.
///
/// Item-level operands strictly override the query-level defaults; a
/// default is only consulted when the item leaves the field out. The
/// computed result is stored on each item while the operand fields stay
/// exactly as the client sent them, so the response encoder can still
/// tell item-level values from inherited defaults.
///
/// The arithmetic follows [`BigUint::modpow`]: a modulus of one yields
/// zero, and a zero exponent yields `1 % modulus`, so `0^0 mod m` is
/// `1 % m`.
///
/// An unresolved operand or a zero modulus fails the whole batch; there
/// is no partial-success mode.
pub fn evaluate(mut query: ModExpQuery) -> Result<ModExpQuery, EvalError> {
    if query.modexps.is_empty() {
        return Err(EvalError::EmptyQuery);
    }

    let default_modulus = query.modulus.clone();
    let default_base = query.base.clone();
    let default_exponent = query.exponent.clone();

    for (index, modexp) in query.modexps.iter_mut().enumerate() {
        let m = effective(&modexp.modulus, &default_modulus, index, "modulus")?;
        let b = effective(&modexp.base, &default_base, index, "base")?;
        let e = effective(&modexp.exponent, &default_exponent, index, "exponent")?;
        if m.is_zero() {
            return Err(EvalError::ZeroModulus { index });
        }

        let r = b.modpow(e, m);
        trace!("calculated modexp, m: {}, b: {}, e: {}, r: {}", m, b, e, r);
        modexp.result = Some(r);
    }

    Ok(query)
}

fn effective<'a>(
    item: &'a Option<BigUint>,
    default: &'a Option<BigUint>,
    index: usize,
    operand: &'static str,
) -> Result<&'a BigUint, EvalError> {
    item.as_ref()
        .or(default.as_ref())
        .ok_or(EvalError::MissingOperand { index, operand })
}
