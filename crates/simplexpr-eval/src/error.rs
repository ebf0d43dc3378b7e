//! Evaluation error types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while evaluating an expression.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum EvalError {
    /// A variable has no binding in the supplied environment.
    #[error("lookup error: variable `{0}` is not bound")]
    Lookup(String),
}

impl EvalError {
    /// Name of the variable that failed to resolve.
    pub fn variable(&self) -> &str {
        match self {
            Self::Lookup(name) => name,
        }
    }
}

/// Result alias for evaluator operations.
pub type EvalResult<T> = Result<T, EvalError>;
