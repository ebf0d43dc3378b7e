//! Integration tests for expression construction, rendering and JSON form.

use simplexpr_types::{render, Expr};

// ══════════════════════════════════════════════════════════════════════════════
// Helpers
// ══════════════════════════════════════════════════════════════════════════════

fn balanced(text: &str) -> bool {
    let mut depth = 0i32;
    for c in text.chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0
}

// ══════════════════════════════════════════════════════════════════════════════
// Rendering
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn render_sum_of_constant_and_variable() {
    let e = Expr::add(Expr::constant(17), Expr::var("z"));
    assert_eq!(render(&e), "(17 + z)");
}

#[test]
fn render_nested_product() {
    let e = Expr::mul(
        Expr::mul(Expr::constant(17), Expr::var("n")),
        Expr::var("z"),
    );
    assert_eq!(render(&e), "((17 * n) * z)");
}

#[test]
fn render_difference_of_sum() {
    let e = Expr::sub(
        Expr::add(Expr::constant(17), Expr::var("p")),
        Expr::var("z"),
    );
    assert_eq!(render(&e), "((17 + p) - z)");
}

#[test]
fn render_self_difference() {
    let e = Expr::sub(Expr::var("x"), Expr::var("x"));
    assert_eq!(render(&e), "(x - x)");
}

#[test]
fn render_keeps_parentheses_on_right_nesting() {
    let e = Expr::add(
        Expr::constant(1),
        Expr::mul(Expr::constant(2), Expr::constant(3)),
    );
    assert_eq!(render(&e), "(1 + (2 * 3))");
}

#[test]
fn render_display_matches_render() {
    let e = Expr::sub(Expr::var("a"), Expr::constant(-1));
    assert_eq!(format!("{e}"), render(&e));
    assert_eq!(render(&e), "(a - -1)");
}

#[test]
fn render_is_balanced_for_deep_tree() {
    let mut e = Expr::var("x");
    for i in 0..50 {
        e = if i % 2 == 0 {
            Expr::add(e, Expr::constant(i))
        } else {
            Expr::mul(Expr::var("y"), e)
        };
    }
    let text = render(&e);
    assert!(balanced(&text));
    assert_eq!(text.matches('(').count(), 50);
}

// ══════════════════════════════════════════════════════════════════════════════
// JSON
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn json_uses_variant_names() {
    let e = Expr::add(Expr::constant(17), Expr::var("z"));
    let json = serde_json::to_string(&e).unwrap();
    assert_eq!(json, r#"{"Add":[{"Constant":17},{"Variable":"z"}]}"#);
}

#[test]
fn json_reads_back_nested_tree() {
    let json = r#"{"Subtract":[{"Variable":"x"},{"Variable":"x"}]}"#;
    let e: Expr = serde_json::from_str(json).unwrap();
    assert_eq!(e, Expr::sub(Expr::var("x"), Expr::var("x")));
}

#[test]
fn render_determinism_100_iterations() {
    let e = Expr::mul(
        Expr::sub(Expr::var("a"), Expr::constant(9)),
        Expr::add(Expr::var("b"), Expr::var("c")),
    );
    let first = render(&e);
    for i in 0..100 {
        assert_eq!(first, render(&e), "Determinism failure at iteration {i}");
    }
}
