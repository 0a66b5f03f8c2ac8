use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use bumpalo::Bump;
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use smartcalc::{CalculatorFactory, render_error};
use smartcalc_core::safety;

/// smartcalc - Evaluate arithmetic and trigonometric expressions
#[derive(Parser, Debug)]
#[command(name = "smartcalc")]
#[command(about = "Evaluate expressions with a Basic, Scientific or Smart calculator", long_about = None)]
struct Args {
    /// Calculator type: Basic, Scientific or Smart (prompted if not provided)
    #[arg(short, long)]
    calculator: Option<String>,

    /// Print the parsed AST and its safety verdict (for debugging)
    #[arg(long)]
    debug_parse: bool,

    /// Expression to evaluate (prompted if not provided)
    expression: Option<String>,
}

fn prompt(input: &mut impl BufRead, message: &str) -> Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "{}", message).into_diagnostic()?;
    stdout.flush().into_diagnostic()?;

    let mut line = String::new();
    input.read_line(&mut line).into_diagnostic()?;
    Ok(line.trim().to_string())
}

fn debug_parse(expression: &str) {
    let arena = Bump::new();
    let source = arena.alloc_str(expression);
    match safety::classify(&arena, source) {
        Ok(parsed) => {
            println!("=== Parsed AST ===");
            println!("{:#?}", parsed.expr);
            match safety::first_unsafe_node(&parsed) {
                None => println!("=== Safe ==="),
                Some(node) => println!("=== Unsafe: {} at {:?} ===", node.kind, node.span),
            }
        }
        Err(e) => println!("=== Not parsed: {} ===", e),
    }
    println!();
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG to control log level, default to WARN if not set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let name = match args.calculator {
        Some(name) => name.trim().to_string(),
        None => prompt(&mut input, "Select calculator (Basic, Scientific, Smart): ")?,
    };

    let mut calculator = match CalculatorFactory::instance().create(&name) {
        Ok(calculator) => calculator,
        Err(e) => {
            println!("{}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    let expression = match args.expression {
        Some(expression) => expression.trim().to_string(),
        None => prompt(&mut input, "Enter the equation: ")?,
    };

    if args.debug_parse {
        debug_parse(&expression);
    }

    tracing::debug!(kind = %calculator.kind(), expression = %expression, "Calculating");
    match calculator.calculate(&expression) {
        Ok(_) => {
            println!("Result: {}", calculator.display_result());
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            render_error(&e);
            Ok(ExitCode::FAILURE)
        }
    }
}
