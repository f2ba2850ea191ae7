use tracing::info;

use crate::{
    ast::Expr,
    error::{ParseError, ParseResult},
    interpreter::{
        lexer::Token,
        parser::utils::{parse_literal, source_text},
        variables::VariableStore,
    },
};

/// Parses an assignment line and applies it to the variable store.
///
/// Accepted shapes:
///
/// ```text
///     <identifier> = <integer>
///     <identifier> = - <integer>
/// ```
///
/// The right-hand side is a literal, not an expression. On success the
/// store maps the name to the value and the assignment marker is returned.
///
/// # Errors
/// - `InvalidAssignment` if the tokens do not have one of the shapes above.
/// - `LiteralTooLarge` if the value does not fit in an `i64`.
///
/// ## Example
/// ```
/// use algebra::{
///     ast::Expr,
///     interpreter::{lexer::tokenize, parser::assignment::parse_assignment,
///                   variables::VariableStore},
/// };
///
/// let mut variables = VariableStore::new();
/// let tokens = tokenize("x = -4").unwrap();
///
/// let marker = parse_assignment(&tokens, &mut variables).unwrap();
/// assert_eq!(marker, Expr::Assignment { name: "x".to_string() });
/// assert_eq!(variables.get("x"), Some(-4));
/// ```
pub fn parse_assignment(tokens: &[Token], variables: &mut VariableStore) -> ParseResult<Expr> {
    let (name, value) = match tokens {
        [Token::Identifier(name), Token::Equals, Token::Integer(digits)] => {
            (name, parse_literal(digits, false)?)
        },
        [Token::Identifier(name), Token::Equals, Token::Minus, Token::Integer(digits)] => {
            (name, parse_literal(digits, true)?)
        },
        _ => return Err(ParseError::InvalidAssignment { found: source_text(tokens) }),
    };

    let previous = variables.assign(name.as_str(), value);
    info!(name = %name, value, ?previous, "assigned variable");

    Ok(Expr::Assignment { name: name.clone() })
}
