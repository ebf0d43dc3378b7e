//! simplexpr demo: prints sample expressions, optionally evaluating them
//! under command-line bindings and showing how one of them simplifies.

use clap::{ArgAction, Parser};
use serde::Serialize;
use simplexpr_eval::{evaluate, simplify_with_steps, Environment, EvalError, RewriteStep};
use simplexpr_types::{render, Expr};
use tracing::{info, Level};

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Bind a variable for evaluation (repeatable), e.g. `--bind z=3`.
    #[arg(long = "bind", value_name = "NAME=VALUE", value_parser = parse_binding)]
    bindings: Vec<(String, i32)>,

    /// Print every rewrite rule applied while simplifying.
    #[arg(long)]
    steps: bool,

    /// Emit a JSON report instead of plain text.
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn parse_binding(arg: &str) -> Result<(String, i32), String> {
    let (name, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got `{arg}`"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing variable name in `{arg}`"));
    }
    let value = value
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("invalid value for `{name}`: {e}"))?;
    Ok((name.to_string(), value))
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// The expressions printed by the demo, in order. The last one is also
/// shown after simplification.
fn samples() -> Vec<Expr> {
    vec![
        Expr::add(Expr::constant(17), Expr::var("z")),
        Expr::mul(
            Expr::mul(Expr::constant(17), Expr::var("n")),
            Expr::var("z"),
        ),
        Expr::sub(
            Expr::add(Expr::constant(17), Expr::var("p")),
            Expr::var("z"),
        ),
        Expr::sub(Expr::var("x"), Expr::var("x")),
    ]
}

// ══════════════════════════════════════════════════════════════════════════════
// Reports
// ══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Serialize)]
struct SampleReport {
    expr: Expr,
    rendered: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<Result<i32, EvalError>>,
}

#[derive(Debug, Serialize)]
struct SimplifyReport {
    before: String,
    after: String,
    steps: Vec<RewriteStep>,
}

#[derive(Debug, Serialize)]
struct DemoReport {
    environment: Environment,
    samples: Vec<SampleReport>,
    simplification: SimplifyReport,
}

fn build_report(exprs: Vec<Expr>, env: Environment, evaluate_samples: bool) -> DemoReport {
    let target = exprs.last().cloned().unwrap_or(Expr::Constant(0));
    let (simplified, steps) = simplify_with_steps(&target);

    let samples = exprs
        .into_iter()
        .map(|expr| SampleReport {
            rendered: render(&expr),
            value: evaluate_samples.then(|| evaluate(&expr, &env)),
            expr,
        })
        .collect();

    DemoReport {
        environment: env,
        samples,
        simplification: SimplifyReport {
            before: render(&target),
            after: render(&simplified),
            steps,
        },
    }
}

fn print_text(report: &DemoReport, show_steps: bool) {
    for sample in &report.samples {
        match &sample.value {
            None => println!("{}", sample.rendered),
            Some(Ok(v)) => println!("{} = {v}", sample.rendered),
            Some(Err(e)) => println!("{}: {e}", sample.rendered),
        }
    }
    println!("{}", report.simplification.after);
    if show_steps {
        for step in &report.simplification.steps {
            println!("  {step}");
        }
    }
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(log_level(cli.verbose))
        .with_writer(std::io::stderr)
        .init();

    let evaluate_samples = !cli.bindings.is_empty();
    let env: Environment = cli.bindings.into_iter().collect();
    info!(bindings = env.len(), "running demo");

    let report = build_report(samples(), env, evaluate_samples);

    if cli.json {
        let json = serde_json::to_string_pretty(&report)
            .unwrap_or_else(|e| format!(r#"{{"error":"serialization error: {e}"}}"#));
        println!("{json}");
    } else {
        print_text(&report, cli.steps);
    }
}
