//! simplexpr engine: evaluation and simplification of arithmetic expressions.
//!
//! Works on the [`simplexpr_types::Expr`] tree. Every operation here is a
//! pure structural recursion; nothing mutates its input.

pub mod env;
pub mod error;
pub mod evaluator;
pub mod simplify;

mod proptests;

pub use env::Environment;
pub use error::{EvalError, EvalResult};
pub use evaluator::{evaluate, Evaluator};
pub use simplify::{simplify, simplify_with, simplify_with_steps, RewriteStep, Rule, StepSink};
