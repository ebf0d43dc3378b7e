//! Tree-walking evaluator.

use crate::env::Environment;
use crate::error::{EvalError, EvalResult};
use simplexpr_types::{BinOp, Expr};
use tracing::{debug, trace};

/// Evaluate `expr` under `env`.
///
/// Arithmetic wraps on `i32` overflow. The left operand is evaluated
/// before the right one, so the first unbound variable in left-to-right
/// order is the one reported.
pub fn evaluate(expr: &Expr, env: &Environment) -> EvalResult<i32> {
    let result = Evaluator::new(env).eval_expr(expr);
    debug!(expr = %expr, ?result, "evaluated");
    result
}

/// Walks an expression tree against a borrowed environment.
pub struct Evaluator<'env> {
    env: &'env Environment,
}

impl<'env> Evaluator<'env> {
    pub fn new(env: &'env Environment) -> Self {
        Self { env }
    }

    /// Evaluate an expression to a value.
    pub fn eval_expr(&self, expr: &Expr) -> EvalResult<i32> {
        match expr {
            Expr::Constant(v) => Ok(*v),
            Expr::Variable(name) => self.eval_variable(name),
            Expr::Add(l, r) => self.eval_binary(BinOp::Add, l, r),
            Expr::Subtract(l, r) => self.eval_binary(BinOp::Subtract, l, r),
            Expr::Multiply(l, r) => self.eval_binary(BinOp::Multiply, l, r),
        }
    }

    fn eval_variable(&self, name: &str) -> EvalResult<i32> {
        match self.env.get(name) {
            Some(v) => {
                trace!(name, value = v, "variable resolved");
                Ok(v)
            }
            None => Err(EvalError::Lookup(name.to_string())),
        }
    }

    fn eval_binary(&self, op: BinOp, left: &Expr, right: &Expr) -> EvalResult<i32> {
        let l = self.eval_expr(left)?;
        let r = self.eval_expr(right)?;
        Ok(match op {
            BinOp::Add => l.wrapping_add(r),
            BinOp::Subtract => l.wrapping_sub(r),
            BinOp::Multiply => l.wrapping_mul(r),
        })
    }
}
