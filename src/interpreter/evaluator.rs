use crate::{
    error::{CalcError, CalcResult, Malformed},
    token::{Operator, Token},
};

/// How division by zero is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DivisionMode {
    /// IEEE 754 semantics: `1/0` is infinity, `0/0` is NaN.
    #[default]
    Ieee,
    /// A zero divisor fails with [`CalcError::DivisionByZero`].
    Checked,
}

/// Stack machine that reduces a postfix sequence to a single value.
///
/// The evaluator holds no state between calls; it only carries the division
/// policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    /// Policy applied to `/` with a zero divisor.
    pub division: DivisionMode,
}

impl Evaluator {
    /// Creates an evaluator with the given division policy.
    #[must_use]
    pub const fn new(division: DivisionMode) -> Self {
        Self { division }
    }

    /// Evaluates a postfix sequence.
    ///
    /// Numbers are pushed onto the operand stack. An operator pops the right
    /// operand, then the left one, and pushes the result. At the end exactly
    /// one value must remain.
    ///
    /// # Errors
    /// - `InvalidExpression` when an operator lacks operands, a token is
    ///   neither a number nor an operator, or the final stack does not hold
    ///   exactly one value.
    /// - `DivisionByZero` for a zero divisor under [`DivisionMode::Checked`].
    ///
    /// # Example
    /// ```
    /// use calculation::{
    ///     error::CalcError,
    ///     interpreter::evaluator::{DivisionMode, Evaluator},
    ///     token::{Operator, Token},
    /// };
    ///
    /// let tokens = [Token::Number(7.0), Token::Number(0.0), Token::Operator(Operator::Div)];
    ///
    /// let ieee = Evaluator::new(DivisionMode::Ieee).eval_postfix(&tokens).unwrap();
    /// assert!(ieee.is_infinite());
    ///
    /// let checked = Evaluator::new(DivisionMode::Checked).eval_postfix(&tokens);
    /// assert_eq!(checked, Err(CalcError::DivisionByZero));
    /// ```
    pub fn eval_postfix(&self, tokens: &[Token]) -> CalcResult<f64> {
        let mut stack: Vec<f64> = Vec::with_capacity(tokens.len() / 2 + 1);

        for token in tokens {
            match token {
                Token::Number(value) => stack.push(*value),
                Token::Operator(op) => {
                    let (Some(right), Some(left)) = (stack.pop(), stack.pop()) else {
                        return Err(Malformed::MissingOperand { operator: *op }.into());
                    };
                    stack.push(self.apply(*op, left, right)?);
                },
                other => {
                    return Err(Malformed::UnexpectedToken { token: other.to_string() }.into());
                },
            }
        }

        match stack.as_slice() {
            [value] => Ok(*value),
            rest => Err(Malformed::ResultCount { count: rest.len() }.into()),
        }
    }

    fn apply(&self, op: Operator, left: f64, right: f64) -> CalcResult<f64> {
        if op == Operator::Div && right == 0.0 && self.division == DivisionMode::Checked {
            return Err(CalcError::DivisionByZero);
        }
        Ok(op.apply(left, right))
    }
}

/// Evaluates a postfix sequence with IEEE division.
///
/// Shorthand for `Evaluator::default().eval_postfix(tokens)`.
///
/// # Errors
/// See [`Evaluator::eval_postfix`].
///
/// # Example
/// ```
/// use calculation::{
///     interpreter::evaluator::evaluate_postfix,
///     token::{Operator, Token},
/// };
///
/// // 10 2 - 3 -
/// let tokens = [Token::Number(10.0),
///               Token::Number(2.0),
///               Token::Operator(Operator::Sub),
///               Token::Number(3.0),
///               Token::Operator(Operator::Sub)];
/// assert_eq!(evaluate_postfix(&tokens), Ok(5.0));
/// ```
pub fn evaluate_postfix(tokens: &[Token]) -> CalcResult<f64> {
    Evaluator::default().eval_postfix(tokens)
}
