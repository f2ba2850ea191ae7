use logos::Logos;

use crate::{
    ast::BinaryOperator,
    error::{ParseError, ParseResult},
};

/// Represents a lexical token in an input line.
///
/// Whitespace never reaches the lexer (see [`tokenize`]), so every character
/// of the input belongs to exactly one token and the `Display` texts of the
/// tokens concatenate back to the whitespace-free line.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// A run of decimal digits such as `42`. The digits are kept as written;
    /// the parser turns them into a number.
    #[regex(r"[0-9]+", |lex| lex.slice().to_owned())]
    Integer(String),
    /// Any run of characters that are neither digits nor symbols, such as
    /// `x` or `total`.
    #[regex(r"[^0-9+\-*/^()=]+", |lex| lex.slice().to_owned())]
    Identifier(String),
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
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `=`
    #[token("=")]
    Equals,
}

impl Token {
    /// Maps an operator token to its binary operator.
    ///
    /// ## Example
    /// ```
    /// use algebra::{ast::BinaryOperator, interpreter::lexer::Token};
    ///
    /// assert_eq!(Token::Caret.binary_operator(), Some(BinaryOperator::Pow));
    /// assert_eq!(Token::Equals.binary_operator(), None);
    /// ```
    #[must_use]
    pub const fn binary_operator(&self) -> Option<BinaryOperator> {
        match self {
            Self::Plus => Some(BinaryOperator::Add),
            Self::Minus => Some(BinaryOperator::Sub),
            Self::Star => Some(BinaryOperator::Mul),
            Self::Slash => Some(BinaryOperator::Div),
            Self::Caret => Some(BinaryOperator::Pow),
            _ => None,
        }
    }

    /// Whether the token can begin an operand.
    #[must_use]
    pub const fn starts_operand(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Identifier(_) | Self::LParen)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(text) | Self::Identifier(text) => write!(f, "{text}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Caret => write!(f, "^"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Equals => write!(f, "="),
        }
    }
}

/// Splits a line into tokens.
///
/// Every whitespace character is removed before scanning, including those
/// between digits, so `"1 2"` is the single literal `12`. Characters that are
/// not digits or symbols are gathered into identifiers instead of being
/// rejected.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` if the lexer cannot match the
/// remaining input.
///
/// ## Example
/// ```
/// use algebra::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("2 + 3*4").unwrap();
/// let texts: Vec<String> = tokens.iter().map(ToString::to_string).collect();
///
/// assert_eq!(texts, ["2", "+", "3", "*", "4"]);
/// assert_eq!(tokens[1], Token::Plus);
/// ```
pub fn tokenize(line: &str) -> ParseResult<Vec<Token>> {
    let stripped: String = line.chars().filter(|c| !c.is_whitespace()).collect();

    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(&stripped);

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push(tok),
            Err(()) => {
                return Err(ParseError::UnexpectedToken { token: lexer.slice().to_string() });
            },
        }
    }

    Ok(tokens)
}
