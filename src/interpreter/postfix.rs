use crate::{
    error::{CalcError, CalcResult},
    token::{Operator, Token},
};

/// Entries waiting on the operator stack.
enum Pending {
    Operator(Operator),
    /// An opening parenthesis and the column it was found at.
    Paren(usize),
}

/// Converts infix tokens to postfix (Reverse Polish) order.
///
/// This is the Shunting-Yard algorithm. Numbers go straight to the output;
/// operators wait on a stack until an operator of lower precedence, a closing
/// parenthesis or the end of input releases them. An incoming operator pops
/// every stacked operator of greater **or equal** precedence first, which
/// makes all operators left-associative: `a - b - c` becomes `a b - c -`.
///
/// Parentheses never appear in the output.
///
/// # Parameters
/// - `tokens`: Tokens paired with their source columns, as produced by
///   [`tokenize`](crate::interpreter::lexer::tokenize).
///
/// # Returns
/// The tokens in postfix order, containing only numbers and operators.
///
/// # Errors
/// - `InvalidToken` on the first literal that is not a number.
/// - `UnmatchedParenthesis` for a `)` without an opening partner, or a `(`
///   still open at the end of input.
///
/// # Example
/// ```
/// use calculation::interpreter::{lexer::tokenize, postfix::to_postfix};
///
/// let postfix = to_postfix(&tokenize("(2 + 3) * 4 - 1")).unwrap();
/// let rendered = postfix.iter().map(ToString::to_string).collect::<Vec<_>>();
/// assert_eq!(rendered, ["2", "3", "+", "4", "*", "1", "-"]);
/// ```
pub fn to_postfix(tokens: &[(Token, usize)]) -> CalcResult<Vec<Token>> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Pending> = Vec::new();

    for (token, column) in tokens {
        match token {
            Token::Number(value) => output.push(Token::Number(*value)),

            Token::LeftParen => stack.push(Pending::Paren(*column)),

            Token::RightParen => loop {
                match stack.pop() {
                    Some(Pending::Operator(op)) => output.push(Token::Operator(op)),
                    Some(Pending::Paren(_)) => break,
                    None => return Err(CalcError::UnmatchedParenthesis { column: *column }),
                }
            },

            Token::Operator(op) => {
                while let Some(Pending::Operator(top)) = stack.last()
                      && top.precedence() >= op.precedence()
                {
                    output.push(Token::Operator(*top));
                    stack.pop();
                }
                stack.push(Pending::Operator(*op));
            },

            Token::Invalid(text) => {
                return Err(CalcError::InvalidToken { token:  text.clone(),
                                                     column: *column, });
            },
        }
    }

    while let Some(pending) = stack.pop() {
        match pending {
            Pending::Operator(op) => output.push(Token::Operator(op)),
            Pending::Paren(column) => return Err(CalcError::UnmatchedParenthesis { column }),
        }
    }

    Ok(output)
}

/// Renders a postfix sequence as space-separated text, e.g. `10 2 - 3 -`.
///
/// # Example
/// ```
/// use calculation::{
///     interpreter::postfix::render,
///     token::{Operator, Token},
/// };
///
/// let tokens = [Token::Number(1.5), Token::Number(2.0), Token::Operator(Operator::Mul)];
/// assert_eq!(render(&tokens), "1.5 2 *");
/// ```
#[must_use]
pub fn render(tokens: &[Token]) -> String {
    tokens.iter()
          .map(ToString::to_string)
          .collect::<Vec<_>>()
          .join(" ")
}
