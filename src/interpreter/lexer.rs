use logos::Logos;

use crate::{
    token::{Operator, Token},
    util::num::parse_number,
};

/// Raw lexical units recognized in the source text.
///
/// The literal rule matches every run of characters that is not whitespace,
/// an operator or a parenthesis, so the lexer has no failing input.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Lexeme {
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Anything else, up to the next separator: `3.14`, `abc`, `12.3.4`.
    #[regex(r"[^ \t\n\r\f+\-*/()]+", allow_greedy = true)]
    Literal,
    /// Spaces, tabs and line breaks.
    #[regex(r"[ \t\n\r\f]+", logos::skip)]
    Ignored,
}

/// Splits an expression into classified tokens.
///
/// Whitespace separates tokens and is dropped. Each operator or parenthesis
/// ends the literal in progress and becomes a token of its own; every other
/// character accumulates into a literal. Literals are classified here: valid
/// decimal numbers become [`Token::Number`], anything else becomes
/// [`Token::Invalid`] and is rejected by the converter.
///
/// Tokenizing never fails.
///
/// # Parameters
/// - `source`: The expression text.
///
/// # Returns
/// Each token paired with the 1-based column where it starts.
///
/// # Example
/// ```
/// use calculation::{
///     interpreter::lexer::tokenize,
///     token::{Operator, Token},
/// };
///
/// let tokens = tokenize("(1 + x2)");
/// assert_eq!(tokens,
///            vec![(Token::LeftParen, 1),
///                 (Token::Number(1.0), 2),
///                 (Token::Operator(Operator::Add), 4),
///                 (Token::Invalid("x2".to_string()), 6),
///                 (Token::RightParen, 8)]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<(Token, usize)> {
    let mut tokens = Vec::new();
    let mut lexer = Lexeme::lexer(source);

    // Columns are counted in characters; `seen` tracks how far the count has
    // advanced through the byte offsets reported by the lexer.
    let mut seen = 0;
    let mut column = 1;

    while let Some(lexeme) = lexer.next() {
        let span = lexer.span();
        column += source[seen..span.start].chars().count();
        seen = span.start;

        let slice = lexer.slice();
        let token = match lexeme {
            Ok(Lexeme::Plus) => Token::Operator(Operator::Add),
            Ok(Lexeme::Minus) => Token::Operator(Operator::Sub),
            Ok(Lexeme::Star) => Token::Operator(Operator::Mul),
            Ok(Lexeme::Slash) => Token::Operator(Operator::Div),
            Ok(Lexeme::LParen) => Token::LeftParen,
            Ok(Lexeme::RParen) => Token::RightParen,
            Ok(Lexeme::Literal) => classify_literal(slice),
            // Skipped by its callback, never yielded.
            Ok(Lexeme::Ignored) => continue,
            // The rules cover every character, so this is unreachable; an
            // unmatched slice is still kept as text for the converter to reject.
            Err(()) => Token::Invalid(slice.to_string()),
        };

        tokens.push((token, column));
    }

    tokens
}

/// Decides whether a literal is a number.
fn classify_literal(text: &str) -> Token {
    parse_number(text).map_or_else(|| Token::Invalid(text.to_string()), Token::Number)
}
