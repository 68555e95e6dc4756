use thiserror::Error;

use crate::token::Operator;

/// Result type used throughout the evaluation pipeline.
pub type CalcResult<T> = Result<T, CalcError>;

/// Represents all errors that can occur while evaluating an expression.
///
/// Every error is terminal for the evaluation that produced it. Columns are
/// 1-based character positions in the source text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The input text has zero length.
    #[error("empty expression")]
    EmptyExpression,
    /// A literal that is neither a parenthesis, an operator nor a valid
    /// number.
    #[error("invalid token '{token}' at column {column}")]
    InvalidToken {
        /// The offending text.
        token:  String,
        /// Where the text starts.
        column: usize,
    },
    /// Parenthesis nesting is unbalanced.
    #[error("unmatched parentheses at column {column}")]
    UnmatchedParenthesis {
        /// Position of the `)` without an opening partner, or of the `(`
        /// that was never closed.
        column: usize,
    },
    /// The token sequence does not reduce to exactly one value.
    #[error("invalid expression: {reason}")]
    InvalidExpression {
        /// What went wrong during reduction.
        reason: Malformed,
    },
    /// A zero divisor under checked division.
    #[error("division by zero")]
    DivisionByZero,
}

/// Why a postfix sequence failed to reduce to a single value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Malformed {
    /// An operator found fewer than two operands on the stack.
    #[error("operator '{operator}' is missing an operand")]
    MissingOperand {
        /// The operator being applied.
        operator: Operator,
    },
    /// A token that is neither a number nor an operator.
    #[error("unexpected token '{token}'")]
    UnexpectedToken {
        /// Source form of the token.
        token: String,
    },
    /// The operand stack did not end with exactly one value.
    #[error("expected a single result but {count} values remain")]
    ResultCount {
        /// Number of values left on the stack.
        count: usize,
    },
}

impl From<Malformed> for CalcError {
    fn from(reason: Malformed) -> Self {
        Self::InvalidExpression { reason }
    }
}
