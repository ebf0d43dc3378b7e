//! Property-based tests for evaluation and simplification.
