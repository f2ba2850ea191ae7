use thiserror::Error;

/// Result type used by the lexer and the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Represents all errors that can occur while tokenizing or parsing a line.
///
/// Every variant except [`ParseError::UndefinedVariable`] is a syntax error;
/// that one is a name error. Both abort the current line only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Found a token where it cannot appear.
    #[error("Invalid syntax: unexpected token `{token}`.")]
    UnexpectedToken {
        /// The token encountered.
        token: String,
    },
    /// The line ended where an operand was still expected.
    #[error("Invalid syntax: unexpected end of input after `{after}`.")]
    UnexpectedEndOfInput {
        /// The last token that was read.
        after: String,
    },
    /// Two operator symbols were adjacent in a way that is not the
    /// unary-negative idiom (`2 + -2`).
    #[error("Invalid syntax: operator sequence `{first}{second}` not recognized.")]
    InvalidOperatorSequence {
        /// The first operator.
        first:  String,
        /// The token that followed it.
        second: String,
    },
    /// A line containing `=` did not have the shape `name = integer`.
    #[error("Invalid syntax: assignments must look like `name = integer`, found `{found}`.")]
    InvalidAssignment {
        /// The offending line, rebuilt from its tokens.
        found: String,
    },
    /// A `(` without `)` or a `)` without `(`.
    #[error("Invalid syntax: unbalanced parenthesis `{paren}`.")]
    UnbalancedParenthesis {
        /// The parenthesis that has no partner.
        paren: char,
    },
    /// The line held no expression at all.
    #[error("Invalid syntax: empty expression.")]
    EmptyExpression,
    /// Reduction finished with more or fewer than one expression left.
    #[error("Invalid syntax: malformed expression ({remaining} operands left unresolved).")]
    MalformedExpression {
        /// The number of expressions remaining on the stack.
        remaining: usize,
    },
    /// An integer literal does not fit in 64 bits.
    #[error("Literal {literal} is too large.")]
    LiteralTooLarge {
        /// The digits of the literal.
        literal: String,
    },
    /// An input line was not valid UTF-8.
    #[error("Invalid encoding: input line is not valid UTF-8.")]
    InvalidEncoding,
    /// A variable was read before it was ever assigned.
    #[error("Variable {name} is undefined.")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
}
