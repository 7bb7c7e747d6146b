use thiserror::Error;

/// Errors raised while decoding a query from its wire form.
///
/// All of these abort the request before any computation happens.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("empty request body")]
    EmptyBody,
    #[error("malformed query: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while evaluating a decoded query.
///
/// A query is evaluated as a whole: the first failing item aborts the
/// batch and no partial results are returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("query contains no modexps")]
    EmptyQuery,
    #[error("modexp {index} resolves to no {operand}")]
    MissingOperand { index: usize, operand: &'static str },
    #[error("modexp {index} has modulus zero")]
    ZeroModulus { index: usize },
}
