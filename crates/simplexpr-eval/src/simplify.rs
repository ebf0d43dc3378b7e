//! Single-pass algebraic simplification.
//!
//! Rules are checked once per node against the node's children *as given*,
//! before those children are simplified themselves:
//!
//! | node        | condition                           | result          |
//! |-------------|-------------------------------------|-----------------|
//! | `0 + e`     |                                     | `simplify(e)`   |
//! | `e + 0`     |                                     | `simplify(e)`   |
//! | `a * b`     | `a` or `b` is `0`                   | `0`             |
//! | `1 * e`     |                                     | `simplify(e)`   |
//! | `e * 1`     |                                     | `simplify(e)`   |
//! | `c - c`     | equal constants                     | `0`             |
//! | `x - x`     | same variable name                  | `0`             |
//!
//! Anything else rebuilds the node from its simplified children. There is
//! no fixpoint iteration: `(0 + 0) + x` becomes `(0 + x)`, not `x`.

use serde::{Deserialize, Serialize};
use simplexpr_types::Expr;
use std::fmt;
use tracing::{debug, trace};

// ══════════════════════════════════════════════════════════════════════════════
// Rules & steps
// ══════════════════════════════════════════════════════════════════════════════

/// A rewrite rule that fired during simplification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rule {
    AddZeroLeft,
    AddZeroRight,
    MulZero,
    MulOneLeft,
    MulOneRight,
    SubEqualConstants,
    SubEqualVariables,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::AddZeroLeft => "0 + e => e",
            Self::AddZeroRight => "e + 0 => e",
            Self::MulZero => "0 * e, e * 0 => 0",
            Self::MulOneLeft => "1 * e => e",
            Self::MulOneRight => "e * 1 => e",
            Self::SubEqualConstants => "c - c => 0",
            Self::SubEqualVariables => "x - x => 0",
        };
        f.write_str(text)
    }
}

/// One recorded rule firing.
///
/// `after` is what the rule rewrote `before` into, prior to any further
/// simplification of that subtree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteStep {
    pub rule: Rule,
    pub before: Expr,
    pub after: Expr,
}

impl fmt::Display for RewriteStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ~> {}  [{}]", self.before, self.after, self.rule)
    }
}

/// Receives rule firings in the order they happen.
pub trait StepSink {
    fn record(&mut self, rule: Rule, before: &Expr, after: &Expr);
}

/// Discards every step.
impl StepSink for () {
    fn record(&mut self, _rule: Rule, _before: &Expr, _after: &Expr) {}
}

impl StepSink for Vec<RewriteStep> {
    fn record(&mut self, rule: Rule, before: &Expr, after: &Expr) {
        self.push(RewriteStep {
            rule,
            before: before.clone(),
            after: after.clone(),
        });
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Entry points
// ══════════════════════════════════════════════════════════════════════════════

/// Simplify `expr` in a single bottom-up pass, producing a new tree.
pub fn simplify(expr: &Expr) -> Expr {
    simplify_with(expr, &mut ())
}

/// Like [`simplify`], also returning every rule that fired, in order.
///
/// A node's own rule is listed before any rules fired inside the subtree
/// it delegates to.
pub fn simplify_with_steps(expr: &Expr) -> (Expr, Vec<RewriteStep>) {
    let mut steps = Vec::new();
    let result = simplify_with(expr, &mut steps);
    (result, steps)
}

/// Simplify `expr`, reporting rule firings to `sink`.
pub fn simplify_with<S: StepSink + ?Sized>(expr: &Expr, sink: &mut S) -> Expr {
    let result = simplify_node(expr, sink);
    debug!(
        before = expr.node_count(),
        after = result.node_count(),
        "simplified"
    );
    result
}

// ══════════════════════════════════════════════════════════════════════════════
// Rewriting
// ══════════════════════════════════════════════════════════════════════════════

fn fire<S: StepSink + ?Sized>(sink: &mut S, rule: Rule, before: &Expr, after: &Expr) {
    trace!(%rule, %before, %after, "rewrite");
    sink.record(rule, before, after);
}

fn simplify_node<S: StepSink + ?Sized>(expr: &Expr, sink: &mut S) -> Expr {
    match expr {
        Expr::Constant(_) | Expr::Variable(_) => expr.clone(),

        Expr::Add(l, r) => {
            if l.is_constant(0) {
                fire(sink, Rule::AddZeroLeft, expr, r);
                simplify_node(r, sink)
            } else if r.is_constant(0) {
                fire(sink, Rule::AddZeroRight, expr, l);
                simplify_node(l, sink)
            } else {
                Expr::add(simplify_node(l, sink), simplify_node(r, sink))
            }
        }

        Expr::Multiply(l, r) => {
            if l.is_constant(0) || r.is_constant(0) {
                let zero = Expr::Constant(0);
                fire(sink, Rule::MulZero, expr, &zero);
                zero
            } else if l.is_constant(1) {
                fire(sink, Rule::MulOneLeft, expr, r);
                simplify_node(r, sink)
            } else if r.is_constant(1) {
                fire(sink, Rule::MulOneRight, expr, l);
                simplify_node(l, sink)
            } else {
                Expr::mul(simplify_node(l, sink), simplify_node(r, sink))
            }
        }

        // Equality is checked on the children before they are simplified.
        Expr::Subtract(l, r) => {
            let rule = match (&**l, &**r) {
                (Expr::Constant(a), Expr::Constant(b)) if a == b => Some(Rule::SubEqualConstants),
                (Expr::Variable(a), Expr::Variable(b)) if a == b => Some(Rule::SubEqualVariables),
                _ => None,
            };
            match rule {
                Some(rule) => {
                    let zero = Expr::Constant(0);
                    fire(sink, rule, expr, &zero);
                    zero
                }
                None => Expr::sub(simplify_node(l, sink), simplify_node(r, sink)),
            }
        }
    }
}
