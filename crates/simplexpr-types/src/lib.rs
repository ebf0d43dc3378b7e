//! Shared types for simplexpr.
//!
//! This crate defines the arithmetic expression AST used by the evaluator
//! and simplifier, together with its fully parenthesized text rendering.

pub mod ast;

pub use ast::{render, BinOp, Expr};
