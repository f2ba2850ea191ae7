use crate::{
    ast::Expr,
    error::{ParseError, ParseResult},
    interpreter::{lexer::Token, variables::VariableStore},
};

/// Converts a digit run into a constant, negating it when `negative` is set.
///
/// The sign is applied before conversion so that `i64::MIN` is accepted.
///
/// # Errors
/// Returns `ParseError::LiteralTooLarge` if the value does not fit in an
/// `i64`.
///
/// ## Example
/// ```
/// use algebra::interpreter::parser::utils::parse_literal;
///
/// assert_eq!(parse_literal("42", false), Ok(42));
/// assert_eq!(parse_literal("3", true), Ok(-3));
/// assert!(parse_literal("99999999999999999999", false).is_err());
/// ```
pub fn parse_literal(digits: &str, negative: bool) -> ParseResult<i64> {
    let parsed = if negative {
        format!("-{digits}").parse()
    } else {
        digits.parse()
    };

    parsed.map_err(|_| ParseError::LiteralTooLarge { literal: digits.to_string() })
}

/// Builds a constant node from a digit run.
pub(in crate::interpreter::parser) fn constant(digits: &str, negative: bool) -> ParseResult<Expr> {
    Ok(Expr::Constant { value: parse_literal(digits, negative)? })
}

/// Builds a variable node holding the current value of `name`.
///
/// # Errors
/// Returns `ParseError::UndefinedVariable` if `name` was never assigned.
pub(in crate::interpreter::parser) fn variable_reference(name: &str,
                                                         variables: &VariableStore)
                                                         -> ParseResult<Expr> {
    variables.get(name)
             .map(|value| Expr::Variable { name: name.to_string(),
                                           value })
             .ok_or_else(|| ParseError::UndefinedVariable { name: name.to_string() })
}

/// Rebuilds the source text of a token slice.
pub(in crate::interpreter::parser) fn source_text(tokens: &[Token]) -> String {
    tokens.iter().map(ToString::to_string).collect()
}
