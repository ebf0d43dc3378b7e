//! AST node types for integer arithmetic expressions.
//!
//! An [`Expr`] is a closed, immutable tree. Each binary node exclusively
//! owns its two children through a [`Box`], so trees never alias and
//! never contain cycles.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

// ══════════════════════════════════════════════════════════════════════════════
// Expressions
// ══════════════════════════════════════════════════════════════════════════════

/// An arithmetic expression over 32-bit signed integers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Expr {
    /// `17`
    Constant(i32),
    /// `x` — resolved through an environment at evaluation time.
    Variable(String),
    /// `(a + b)`
    Add(Box<Expr>, Box<Expr>),
    /// `(a - b)`
    Subtract(Box<Expr>, Box<Expr>),
    /// `(a * b)`
    Multiply(Box<Expr>, Box<Expr>),
}

/// Binary operator of an `Add`, `Subtract` or `Multiply` node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinOp {
    Add,
    Subtract,
    Multiply,
}

impl BinOp {
    /// The infix symbol used when rendering.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl Expr {
    // ── Constructors ─────────────────────────────────────────────────────

    pub fn constant(value: i32) -> Self {
        Self::Constant(value)
    }

    pub fn var(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    pub fn add(left: Expr, right: Expr) -> Self {
        Self::Add(Box::new(left), Box::new(right))
    }

    pub fn sub(left: Expr, right: Expr) -> Self {
        Self::Subtract(Box::new(left), Box::new(right))
    }

    pub fn mul(left: Expr, right: Expr) -> Self {
        Self::Multiply(Box::new(left), Box::new(right))
    }

    /// Build a binary node for `op`.
    pub fn binary(op: BinOp, left: Expr, right: Expr) -> Self {
        match op {
            BinOp::Add => Self::add(left, right),
            BinOp::Subtract => Self::sub(left, right),
            BinOp::Multiply => Self::mul(left, right),
        }
    }

    // ── Structural queries ───────────────────────────────────────────────

    /// Split a binary node into its operator and children.
    ///
    /// Returns `None` for leaves.
    pub fn as_binary(&self) -> Option<(BinOp, &Expr, &Expr)> {
        match self {
            Self::Add(l, r) => Some((BinOp::Add, &**l, &**r)),
            Self::Subtract(l, r) => Some((BinOp::Subtract, &**l, &**r)),
            Self::Multiply(l, r) => Some((BinOp::Multiply, &**l, &**r)),
            Self::Constant(_) | Self::Variable(_) => None,
        }
    }

    /// True if this node is the literal `Constant(value)`.
    pub fn is_constant(&self, value: i32) -> bool {
        matches!(self, Self::Constant(v) if *v == value)
    }

    /// Every variable name occurring in the tree.
    pub fn free_variables(&self) -> BTreeSet<&str> {
        let mut names = BTreeSet::new();
        self.collect_variables(&mut names);
        names
    }

    fn collect_variables<'a>(&'a self, names: &mut BTreeSet<&'a str>) {
        match self {
            Self::Constant(_) => {}
            Self::Variable(name) => {
                names.insert(name.as_str());
            }
            Self::Add(l, r) | Self::Subtract(l, r) | Self::Multiply(l, r) => {
                l.collect_variables(names);
                r.collect_variables(names);
            }
        }
    }

    /// Total number of nodes, leaves included.
    pub fn node_count(&self) -> usize {
        match self.as_binary() {
            Some((_, l, r)) => 1 + l.node_count() + r.node_count(),
            None => 1,
        }
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Rendering
// ══════════════════════════════════════════════════════════════════════════════

/// Fully parenthesized infix form: every binary node is wrapped in `( )`,
/// with no precedence-based elision.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(v) => write!(f, "{v}"),
            Self::Variable(name) => f.write_str(name),
            Self::Add(l, r) => write!(f, "({l} + {r})"),
            Self::Subtract(l, r) => write!(f, "({l} - {r})"),
            Self::Multiply(l, r) => write!(f, "({l} * {r})"),
        }
    }
}

/// Render an expression to its fully parenthesized text form.
pub fn render(expr: &Expr) -> String {
    expr.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_leaves() {
        assert_eq!(render(&Expr::constant(17)), "17");
        assert_eq!(render(&Expr::constant(-4)), "-4");
        assert_eq!(render(&Expr::var("z")), "z");
    }

    #[test]
    fn test_render_binary_ops() {
        let a = Expr::var("a");
        let b = Expr::var("b");
        assert_eq!(render(&Expr::add(a.clone(), b.clone())), "(a + b)");
        assert_eq!(render(&Expr::sub(a.clone(), b.clone())), "(a - b)");
        assert_eq!(render(&Expr::mul(a, b)), "(a * b)");
    }

    #[test]
    fn test_binary_constructor_matches_named() {
        let l = Expr::constant(1);
        let r = Expr::var("y");
        assert_eq!(
            Expr::binary(BinOp::Subtract, l.clone(), r.clone()),
            Expr::sub(l, r)
        );
    }

    #[test]
    fn test_as_binary() {
        let e = Expr::mul(Expr::constant(2), Expr::var("x"));
        let (op, l, r) = e.as_binary().unwrap();
        assert_eq!(op, BinOp::Multiply);
        assert_eq!(l, &Expr::constant(2));
        assert_eq!(r, &Expr::var("x"));
        assert!(Expr::var("x").as_binary().is_none());
    }

    #[test]
    fn test_is_constant() {
        assert!(Expr::constant(0).is_constant(0));
        assert!(!Expr::constant(1).is_constant(0));
        assert!(!Expr::var("0").is_constant(0));
    }

    #[test]
    fn test_free_variables_dedup_and_sorted() {
        let e = Expr::add(
            Expr::mul(Expr::var("z"), Expr::var("a")),
            Expr::sub(Expr::var("z"), Expr::constant(3)),
        );
        let vars: Vec<&str> = e.free_variables().into_iter().collect();
        assert_eq!(vars, vec!["a", "z"]);
        assert!(Expr::constant(3).free_variables().is_empty());
    }

    #[test]
    fn test_node_count() {
        assert_eq!(Expr::constant(1).node_count(), 1);
        let e = Expr::sub(Expr::add(Expr::constant(17), Expr::var("p")), Expr::var("z"));
        assert_eq!(e.node_count(), 5);
    }

    #[test]
    fn test_binop_symbol_display() {
        assert_eq!(format!("{}", BinOp::Add), "+");
        assert_eq!(format!("{}", BinOp::Subtract), "-");
        assert_eq!(format!("{}", BinOp::Multiply), "*");
    }
}
