/// The lexer module splits source text into classified tokens.
///
/// The lexer reads the raw expression left to right and produces numbers,
/// operators and parentheses, each paired with the column it starts at.
/// Unrecognized runs of characters are kept as invalid tokens rather than
/// rejected, so that the converter can report them.
pub mod lexer;
/// The postfix module converts infix tokens to Reverse Polish order.
///
/// Implements the Shunting-Yard algorithm: operator precedence, left
/// associativity and parenthesis matching are all resolved here.
///
/// # Responsibilities
/// - Reorders numbers and operators into postfix order.
/// - Reports unmatched parentheses and invalid tokens with their columns.
pub mod postfix;
/// The evaluator module reduces a postfix sequence to a number.
///
/// A stack machine pushes operands and applies each operator to the two most
/// recent ones.
///
/// # Responsibilities
/// - Applies `+ - * /` in postfix order.
/// - Detects operand underflow and leftover operands.
/// - Applies the configured division-by-zero policy.
pub mod evaluator;
