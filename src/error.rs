use thiserror::Error as ThisError;

/// Parsing errors.
///
/// Defines all error types that can occur during tokenizing and parsing of a
/// line: malformed operator sequences, malformed assignments, unbalanced
/// parentheses, oversized literals and undefined variables.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// division by zero and integer overflow.
pub mod runtime_error;

pub use parse_error::{ParseError, ParseResult};
pub use runtime_error::RuntimeError;

/// Any failure while processing one input line.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// The line could not be tokenized or parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The parsed expression could not be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input.
    Syntax,
    /// Reference to an undefined variable.
    Name,
    /// Division by zero, overflow or a negative exponent.
    Arithmetic,
    /// The caller evaluated an assignment marker.
    Internal,
}

impl Error {
    /// Classifies the error.
    ///
    /// ## Example
    /// ```
    /// use algebra::error::{Error, ErrorKind, ParseError, RuntimeError};
    ///
    /// let undefined = Error::from(ParseError::UndefinedVariable { name: "y".to_string() });
    /// assert_eq!(undefined.kind(), ErrorKind::Name);
    ///
    /// let division = Error::from(RuntimeError::DivisionByZero);
    /// assert_eq!(division.kind(), ErrorKind::Arithmetic);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(ParseError::UndefinedVariable { .. }) => ErrorKind::Name,
            Self::Parse(_) => ErrorKind::Syntax,
            Self::Runtime(RuntimeError::AssignmentNotEvaluable { .. }) => ErrorKind::Internal,
            Self::Runtime(_) => ErrorKind::Arithmetic,
        }
    }
}
