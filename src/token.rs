/// A binary arithmetic operator.
///
/// Every operator is left-associative. Precedence decides which operator
/// binds tighter when no parentheses disambiguate: `*` and `/` bind tighter
/// than `+` and `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl Operator {
    /// Maps a character to the operator it denotes, if any.
    ///
    /// # Example
    /// ```
    /// use calculation::token::Operator;
    ///
    /// assert_eq!(Operator::from_symbol('*'), Some(Operator::Mul));
    /// assert_eq!(Operator::from_symbol('^'), None);
    /// ```
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    /// The character this operator is written as.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Binding strength of the operator: `1` for `+`/`-`, `2` for `*`/`/`.
    ///
    /// # Example
    /// ```
    /// use calculation::token::Operator;
    ///
    /// assert!(Operator::Mul.precedence() > Operator::Sub.precedence());
    /// assert_eq!(Operator::Add.precedence(), Operator::Sub.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    /// Applies the operator with IEEE 754 semantics.
    ///
    /// Division by zero is not an error here; it yields an infinity or NaN.
    ///
    /// # Example
    /// ```
    /// use calculation::token::Operator;
    ///
    /// assert_eq!(Operator::Sub.apply(10.0, 4.0), 6.0);
    /// assert!(Operator::Div.apply(1.0, 0.0).is_infinite());
    /// ```
    #[must_use]
    pub const fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A classified lexical unit of an arithmetic expression.
///
/// Classification happens once, in the tokenizer. A literal that is not a
/// valid decimal number is kept as [`Token::Invalid`] so that the converter
/// can reject it with its position.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A numeric literal, already parsed.
    Number(f64),
    /// One of `+ - * /`.
    Operator(Operator),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// A run of characters that is neither an operator, a parenthesis nor a
    /// valid number, such as `abc` or `12.3.4`.
    Invalid(String),
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
            Self::Invalid(text) => write!(f, "{text}"),
        }
    }
}
