use std::{io, process::ExitCode};

use calculation::{
    compile,
    error::CalcError,
    interpreter::{
        evaluator::{DivisionMode, Evaluator},
        postfix::render,
    },
    util::num::format_result,
};
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// calculation evaluates an arithmetic expression made of numbers, `+ - * /`
/// and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of decimal places in the printed result.
    #[arg(short, long, default_value_t = 2)]
    precision: usize,

    /// Also print the expression in postfix notation.
    #[arg(long)]
    postfix: bool,

    /// Treat division by zero as an error instead of producing infinity or
    /// NaN.
    #[arg(long)]
    strict_division: bool,

    /// Log debug details to stderr. `RUST_LOG` takes precedence when set.
    #[arg(short, long)]
    verbose: bool,

    /// The expression to evaluate. Read from one line of stdin when omitted.
    expression: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let source = match args.expression {
        Some(expression) => {
            debug!(source = "argument", %expression, "read expression");
            expression
        },
        None => match read_line() {
            Ok(expression) => {
                debug!(source = "stdin", %expression, "read expression");
                expression
            },
            Err(e) => {
                warn!(error = %e, "failed to read stdin");
                eprintln!("Failed to read an expression from stdin: {e}");
                return ExitCode::FAILURE;
            },
        },
    };

    let postfix = match compile(&source) {
        Ok(postfix) => postfix,
        Err(e) => return report(&e),
    };

    let rendered = render(&postfix);
    debug!(postfix = %rendered, "converted to postfix");
    if args.postfix {
        println!("{rendered}");
    }

    let division = if args.strict_division {
        DivisionMode::Checked
    } else {
        DivisionMode::Ieee
    };

    match Evaluator::new(division).eval_postfix(&postfix) {
        Ok(value) => {
            debug!(value, "evaluated");
            println!("{}", format_result(value, args.precision));
            ExitCode::SUCCESS
        },
        Err(e) => report(&e),
    }
}

fn report(error: &CalcError) -> ExitCode {
    debug!(%error, "evaluation failed");
    println!("{error}");
    ExitCode::FAILURE
}

/// Reads a single line, dropping the line terminator only.
fn read_line() -> io::Result<String> {
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .with_target(false)
                             .init();
}
