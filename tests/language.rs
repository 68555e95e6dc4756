use std::fs;

use calculation::{
    compile,
    error::{CalcError, Malformed},
    evaluate, evaluate_with,
    interpreter::{
        evaluator::{DivisionMode, Evaluator},
        postfix::render,
    },
    postfix_notation,
    token::Operator,
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for line in extract_calc_lines(&content) {
            count += 1;
            let (source, expected) =
                line.split_once("=>")
                    .unwrap_or_else(|| panic!("Example in {path:?} lacks '=>': {line}"));
            let expected = expected.trim();

            if expected == "error" {
                assert!(evaluate(source).is_err(),
                        "Example in {path:?} should fail but succeeded: {source}");
            } else {
                let expected: f64 = expected.parse()
                                            .unwrap_or_else(|e| panic!("Bad expectation in {path:?}: {line}: {e}"));
                assert_value(source, expected);
            }
        }
    }

    assert!(count > 0, "No calc examples found in book/src");
}

fn extract_calc_lines(content: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut inside = false;

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```calc") {
            inside = true;
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            continue;
        }
        if inside && !trimmed.is_empty() {
            lines.push(line.to_string());
        }
    }

    lines
}

fn assert_value(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(value) => {
            let tolerance = 1e-9 * expected.abs().max(1.0);
            assert!((value - expected).abs() <= tolerance,
                    "`{src}` evaluated to {value}, expected {expected}");
        },
        Err(e) => panic!("`{src}` failed: {e}"),
    }
}

fn assert_failure(src: &str) -> CalcError {
    match evaluate(src) {
        Ok(value) => panic!("`{src}` evaluated to {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("1 + 2", 3.0);
    assert_value("7 * 9", 63.0);
    assert_value("8 - 5", 3.0);
    assert_value("10 / 4", 2.5);
    assert_value("0.1 + 0.2", 0.3);
    assert_value("1.5 * 1.5", 2.25);
}

#[test]
fn precedence_is_respected() {
    assert_value("2 + 3 * 4", 14.0);
    assert_value("2 * 3 + 4", 10.0);
    assert_value("20 - 10 / 5", 18.0);
    assert_value("1 + 2 * 3 + 4", 11.0);
}

#[test]
fn parentheses_override_precedence() {
    assert_value("(2 + 3) * 4", 20.0);
    assert_value("2 * (3 + 4)", 14.0);
    assert_value("((2))", 2.0);
    assert_value("(1 + (2 * (3 + (4 - 1))))", 13.0);
    assert_value("(8 - 2) / (1 + 2)", 2.0);
}

#[test]
fn equal_precedence_groups_left() {
    assert_value("10 - 2 - 3", 5.0);
    assert_value("64 / 4 / 2", 8.0);
    assert_value("2 - 3 + 4", 3.0);
    assert_value("12 / 3 * 2", 8.0);
    assert_value("10 - (2 - 3)", 11.0);
}

#[test]
fn whitespace_is_optional() {
    assert_value("2+3*4", 14.0);
    assert_value(" \t(2 +3)\n* 4 ", 20.0);
}

#[test]
fn empty_input_is_error() {
    assert_eq!(assert_failure(""), CalcError::EmptyExpression);
}

#[test]
fn whitespace_only_input_is_invalid_expression() {
    assert_eq!(assert_failure("   "),
               CalcError::InvalidExpression { reason: Malformed::ResultCount { count: 0 } });
}

#[test]
fn unclosed_parenthesis_is_error() {
    assert_eq!(assert_failure("(1+2"),
               CalcError::UnmatchedParenthesis { column: 1 });
    assert_eq!(assert_failure("2 * ((1 + 2)"),
               CalcError::UnmatchedParenthesis { column: 5 });
}

#[test]
fn stray_closing_parenthesis_is_error() {
    assert_eq!(assert_failure("1+2)"),
               CalcError::UnmatchedParenthesis { column: 4 });
    assert!(matches!(assert_failure(")("),
                     CalcError::UnmatchedParenthesis { column: 1 }));
}

#[test]
fn doubled_operator_is_invalid_expression() {
    assert_eq!(assert_failure("1 + + 2"),
               CalcError::InvalidExpression { reason: Malformed::MissingOperand { operator: Operator::Add } });
}

#[test]
fn unary_minus_is_not_supported() {
    assert!(matches!(assert_failure("-5"),
                     CalcError::InvalidExpression { reason: Malformed::MissingOperand { .. } }));
}

#[test]
fn missing_operator_is_invalid_expression() {
    assert_eq!(assert_failure("1 2"),
               CalcError::InvalidExpression { reason: Malformed::ResultCount { count: 2 } });
    assert_eq!(assert_failure("(1)(2)"),
               CalcError::InvalidExpression { reason: Malformed::ResultCount { count: 2 } });
}

#[test]
fn non_numeric_text_is_invalid_token() {
    assert_eq!(assert_failure("abc"),
               CalcError::InvalidToken { token:  "abc".to_string(),
                                         column: 1, });
    assert_eq!(assert_failure("1 + 12.3.4"),
               CalcError::InvalidToken { token:  "12.3.4".to_string(),
                                         column: 5, });
    assert!(matches!(assert_failure("2 ^ 3"), CalcError::InvalidToken { .. }));
    assert!(matches!(assert_failure("NaN"), CalcError::InvalidToken { .. }));
}

#[test]
fn invalid_token_is_reported_before_parenthesis_errors() {
    assert!(matches!(assert_failure("(x"), CalcError::InvalidToken { .. }));
}

#[test]
fn signed_exponent_splits_into_tokens() {
    assert_eq!(assert_failure("1e-3"),
               CalcError::InvalidToken { token:  "1e".to_string(),
                                         column: 1, });
}

#[test]
fn out_of_range_literal_is_invalid_token() {
    assert_eq!(assert_failure("1e400"),
               CalcError::InvalidToken { token:  "1e400".to_string(),
                                         column: 1, });
    assert_eq!(assert_failure("2 * 1e400 - 1"),
               CalcError::InvalidToken { token:  "1e400".to_string(),
                                         column: 5, });

    let huge = "9".repeat(400);
    assert_eq!(assert_failure(&huge),
               CalcError::InvalidToken { token:  huge,
                                         column: 1, });
}

#[test]
fn largest_finite_literal_is_accepted() {
    assert_value("1e308", 1e308);
    assert_value(&f64::MAX.to_string(), f64::MAX);
}

#[test]
fn overflow_during_arithmetic_still_follows_float_rules() {
    assert_eq!(evaluate("1e308 * 10"), Ok(f64::INFINITY));
}

#[test]
fn compiled_expression_renders_and_evaluates_without_recompiling() {
    let postfix = compile("(2 + 3) * 4 / 0").unwrap();
    assert_eq!(render(&postfix), "2 3 + 4 * 0 /");
    assert_eq!(Evaluator::new(DivisionMode::Ieee).eval_postfix(&postfix),
               Ok(f64::INFINITY));
    assert_eq!(Evaluator::new(DivisionMode::Checked).eval_postfix(&postfix),
               Err(CalcError::DivisionByZero));

    assert_eq!(compile(""), Err(CalcError::EmptyExpression));
    assert!(matches!(compile("1 + x"), Err(CalcError::InvalidToken { column: 5, .. })));
    assert_eq!(compile("   "), Ok(Vec::new()));
}

#[test]
fn division_by_zero_follows_float_rules_by_default() {
    assert_eq!(evaluate("1 / 0"), Ok(f64::INFINITY));
    assert_eq!(evaluate("0 - 1 / 0"), Ok(f64::NEG_INFINITY));
    assert!(evaluate("0 / 0").is_ok_and(f64::is_nan));
}

#[test]
fn checked_division_rejects_zero_divisor() {
    assert_eq!(evaluate_with("1 / 0", DivisionMode::Checked),
               Err(CalcError::DivisionByZero));
    assert_eq!(evaluate_with("1 / (3 - 3)", DivisionMode::Checked),
               Err(CalcError::DivisionByZero));
    assert_eq!(evaluate_with("1 / 4", DivisionMode::Checked), Ok(0.25));
}

#[test]
fn error_messages_read_well() {
    assert_eq!(assert_failure("").to_string(), "empty expression");
    assert_eq!(assert_failure("(1").to_string(),
               "unmatched parentheses at column 1");
    assert_eq!(assert_failure("1 + y").to_string(),
               "invalid token 'y' at column 5");
    assert_eq!(assert_failure("1 +").to_string(),
               "invalid expression: operator '+' is missing an operand");
    assert_eq!(assert_failure("1 2 3").to_string(),
               "invalid expression: expected a single result but 3 values remain");
}

#[test]
fn postfix_notation_shows_conversion() {
    assert_eq!(postfix_notation("10 - 2 - 3").unwrap(), "10 2 - 3 -");
    assert_eq!(postfix_notation("2 + 3 * 4").unwrap(), "2 3 4 * +");
    assert_eq!(postfix_notation("(2 + 3) * 4").unwrap(), "2 3 + 4 *");
    assert_eq!(postfix_notation("0.5 / .25").unwrap(), "0.5 0.25 /");
    assert_eq!(postfix_notation(""), Err(CalcError::EmptyExpression));
    assert!(matches!(postfix_notation("(1"), Err(CalcError::UnmatchedParenthesis { .. })));
}
