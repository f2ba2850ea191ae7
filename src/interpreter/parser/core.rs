use std::{iter::Peekable, slice::Iter};

use tracing::debug;

use crate::{
    ast::Expr,
    error::{ParseError, ParseResult},
    interpreter::{
        lexer::Token,
        parser::{
            assignment::parse_assignment,
            precedence::ExpressionStacks,
            utils::{constant, variable_reference},
        },
        variables::VariableStore,
    },
};

/// Parses one line of tokens.
///
/// This is the entry point for parsing. A line containing `=` anywhere is an
/// assignment: it updates `variables` and yields [`Expr::Assignment`].
/// Every other line is an expression whose variable references are resolved
/// against `variables` while parsing.
///
/// # Errors
/// Returns a syntax error for malformed input and
/// `ParseError::UndefinedVariable` for a name that was never assigned.
/// Nothing is written to `variables` unless the whole assignment is valid.
///
/// ## Example
/// ```
/// use algebra::interpreter::{lexer::tokenize, parser::core::parse, variables::VariableStore};
///
/// let mut variables = VariableStore::new();
///
/// let marker = parse(&tokenize("x = 7").unwrap(), &mut variables).unwrap();
/// assert!(marker.is_assignment());
///
/// let expr = parse(&tokenize("x + 1").unwrap(), &mut variables).unwrap();
/// assert_eq!(expr.evaluate(), Ok(8));
/// ```
pub fn parse(tokens: &[Token], variables: &mut VariableStore) -> ParseResult<Expr> {
    if tokens.contains(&Token::Equals) {
        return parse_assignment(tokens, variables);
    }

    let expr = parse_expression(tokens, variables)?;
    debug!(tree = %expr, "parsed expression");
    Ok(expr)
}

/// Parses a full expression with the two-stack precedence resolver.
///
/// Tokens are read left to right. Operands go straight onto the expression
/// stack; each operator must be followed by an operand, or by `-` and a
/// digit run (the negative literal in `2 + -2`). A `-` directly before a digit
/// run at the start of the line or after `(` is a negative literal as well.
///
/// # Errors
/// - `UnexpectedToken` for two operands in a row or an operator where an
///   operand is expected.
/// - `InvalidOperatorSequence` for any other pair of adjacent operators.
/// - `UnexpectedEndOfInput` if the line stops after an operator or `(`.
/// - `UndefinedVariable` for a name missing from `variables`.
/// - Any error from [`ExpressionStacks`].
pub fn parse_expression(tokens: &[Token], variables: &VariableStore) -> ParseResult<Expr> {
    let mut stacks = ExpressionStacks::default();
    let mut iter = tokens.iter().peekable();
    let mut expect_operand = true;

    while let Some(token) = iter.next() {
        if expect_operand {
            expect_operand = parse_operand(token, &mut iter, &mut stacks, variables)?;
        } else {
            expect_operand = parse_operator(token, &mut iter, &mut stacks)?;
        }
    }

    if expect_operand && let Some(last) = tokens.last() {
        return Err(ParseError::UnexpectedEndOfInput { after: last.to_string() });
    }

    stacks.assemble_expression()
}

/// Handles a token read where an operand is expected. Returns whether an
/// operand is still expected afterwards.
fn parse_operand(token: &Token,
                 iter: &mut Peekable<Iter<'_, Token>>,
                 stacks: &mut ExpressionStacks,
                 variables: &VariableStore)
                 -> ParseResult<bool> {
    match token {
        Token::Integer(digits) => stacks.push_expression(constant(digits, false)?),
        Token::Identifier(name) => stacks.push_expression(variable_reference(name, variables)?),
        Token::LParen => {
            stacks.open_group();
            return Ok(true);
        },
        Token::Minus => match iter.next() {
            Some(Token::Integer(digits)) => stacks.push_expression(constant(digits, true)?),
            Some(_) => return Err(ParseError::UnexpectedToken { token: token.to_string() }),
            None => return Err(ParseError::UnexpectedEndOfInput { after: token.to_string() }),
        },
        _ => return Err(ParseError::UnexpectedToken { token: token.to_string() }),
    }
    Ok(false)
}

/// Handles a token read right after a complete operand. Returns whether an
/// operand is expected next.
fn parse_operator(token: &Token,
                  iter: &mut Peekable<Iter<'_, Token>>,
                  stacks: &mut ExpressionStacks)
                  -> ParseResult<bool> {
    if *token == Token::RParen {
        stacks.close_group()?;
        return Ok(false);
    }

    let Some(op) = token.binary_operator() else {
        return Err(ParseError::UnexpectedToken { token: token.to_string() });
    };

    let invalid_sequence = |second: &Token| ParseError::InvalidOperatorSequence {
        first:  token.to_string(),
        second: second.to_string(),
    };

    match iter.peek() {
        Some(next) if next.starts_operand() => {
            stacks.push_operator(op)?;
            Ok(true)
        },
        Some(Token::Minus) => {
            iter.next();
            match iter.next() {
                Some(Token::Integer(digits)) => {
                    stacks.push_operator(op)?;
                    stacks.push_expression(constant(digits, true)?);
                    Ok(false)
                },
                _ => Err(invalid_sequence(&Token::Minus)),
            }
        },
        Some(next) => Err(invalid_sequence(*next)),
        None => Err(ParseError::UnexpectedEndOfInput { after: token.to_string() }),
    }
}
