//! # calculation
//!
//! calculation is an arithmetic expression evaluator written in Rust.
//! It tokenizes an expression, converts it to postfix notation with the
//! Shunting-Yard algorithm and evaluates the result on an operand stack.
//! Supported are decimal numbers, the binary operators `+ - * /`, parentheses
//! and whitespace.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::{CalcError, CalcResult},
    interpreter::{
        evaluator::{DivisionMode, Evaluator},
        lexer::tokenize,
        postfix::{render, to_postfix},
    },
    token::Token,
};

/// Provides the error type shared by every stage of evaluation.
///
/// # Responsibilities
/// - Defines one variant per failure kind: empty input, invalid tokens,
///   unbalanced parentheses, malformed expressions and checked division by
///   zero.
/// - Attaches source columns where the failure has a position.
pub mod error;
/// Orchestrates the evaluation pipeline.
///
/// This module holds the three stages, each consuming the output of the
/// previous one: the lexer, the infix-to-postfix converter and the postfix
/// evaluator.
pub mod interpreter;
/// Token and operator definitions.
///
/// Declares the classified [`Token`](token::Token) produced by the lexer and
/// the [`Operator`](token::Operator) precedence table used by the converter
/// and the evaluator.
pub mod token;
/// General helpers for numeric literals and result formatting.
pub mod util;

/// Evaluates an arithmetic expression with IEEE division.
///
/// The text is tokenized, converted to postfix and evaluated. The first
/// failure of any stage is returned unchanged.
///
/// Zero-length input fails with `EmptyExpression`. Input made only of
/// whitespace is not treated specially: it yields no tokens and fails with
/// `InvalidExpression`.
///
/// # Errors
/// `EmptyExpression`, `InvalidToken`, `UnmatchedParenthesis` or
/// `InvalidExpression`.
///
/// # Examples
/// ```
/// use calculation::{error::CalcError, evaluate};
///
/// assert_eq!(evaluate("2 + 3 * 4"), Ok(14.0));
/// assert_eq!(evaluate("(2 + 3) * 4"), Ok(20.0));
/// assert_eq!(evaluate("10 - 2 - 3"), Ok(5.0));
///
/// assert_eq!(evaluate(""), Err(CalcError::EmptyExpression));
/// assert!(matches!(evaluate("(1 + 2"), Err(CalcError::UnmatchedParenthesis { .. })));
/// ```
pub fn evaluate(source: &str) -> CalcResult<f64> {
    evaluate_with(source, DivisionMode::Ieee)
}

/// Evaluates an arithmetic expression with an explicit division policy.
///
/// # Errors
/// Everything [`evaluate`] can return, plus `DivisionByZero` under
/// [`DivisionMode::Checked`].
///
/// # Examples
/// ```
/// use calculation::{error::CalcError, evaluate_with, interpreter::evaluator::DivisionMode};
///
/// assert!(evaluate_with("1 / (2 - 2)", DivisionMode::Ieee).unwrap().is_infinite());
/// assert_eq!(evaluate_with("1 / (2 - 2)", DivisionMode::Checked),
///            Err(CalcError::DivisionByZero));
/// ```
pub fn evaluate_with(source: &str, division: DivisionMode) -> CalcResult<f64> {
    let postfix = compile(source)?;
    Evaluator::new(division).eval_postfix(&postfix)
}

/// Tokenizes an expression and converts it to a postfix sequence.
///
/// The result can be rendered and evaluated without running the first two
/// stages again.
///
/// # Errors
/// `EmptyExpression`, `InvalidToken` or `UnmatchedParenthesis`.
///
/// # Examples
/// ```
/// use calculation::{compile, interpreter::{evaluator::evaluate_postfix, postfix::render}};
///
/// let postfix = compile("(2 + 3) * 4").unwrap();
/// assert_eq!(render(&postfix), "2 3 + 4 *");
/// assert_eq!(evaluate_postfix(&postfix), Ok(20.0));
/// ```
pub fn compile(source: &str) -> CalcResult<Vec<Token>> {
    if source.is_empty() {
        return Err(CalcError::EmptyExpression);
    }

    to_postfix(&tokenize(source))
}

/// Converts an expression to postfix notation without evaluating it.
///
/// # Errors
/// `EmptyExpression`, `InvalidToken` or `UnmatchedParenthesis`.
///
/// # Examples
/// ```
/// use calculation::postfix_notation;
///
/// assert_eq!(postfix_notation("10 - 2 - 3").unwrap(), "10 2 - 3 -");
/// assert_eq!(postfix_notation("1 + 2 * (3 - 4)").unwrap(), "1 2 3 4 - * +");
/// ```
pub fn postfix_notation(source: &str) -> CalcResult<String> {
    Ok(render(&compile(source)?))
}
