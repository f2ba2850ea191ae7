//! # algebra
//!
//! algebra is an interactive evaluator for integer arithmetic written in Rust.
//! Each input line is tokenized, parsed into an expression tree with an
//! operator-precedence resolver, and evaluated. Lines of the form
//! `name = value` assign variables that later lines can read.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    ast::Expr,
    error::Error,
    interpreter::{lexer::tokenize, parser::core::parse, variables::VariableStore},
};

/// Defines the structure of parsed lines.
///
/// This module declares the `Expr` enum and the `BinaryOperator` enum that
/// represent a parsed line as a tree. The tree is built by the parser and
/// walked by the evaluator.
///
/// # Responsibilities
/// - Defines the closed set of expression variants.
/// - Gives every operator its symbol, precedence and associativity.
/// - Renders trees in fully parenthesised form.
pub mod ast;
/// Command-line configuration.
///
/// Declares the options of the `algebra` binary with `clap` and maps the
/// verbosity flag to a log level.
pub mod config;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while tokenizing,
/// parsing or evaluating a line, and classifies them as syntax, name or
/// arithmetic errors.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator).
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the processing of a single line.
///
/// This module ties together lexing, parsing, evaluation and the variable
/// store.
///
/// # Responsibilities
/// - Coordinates the lexer, parser and evaluator.
/// - Owns the variable store type shared across lines.
pub mod interpreter;
/// The interactive driver.
///
/// Reads lines, evaluates them, prints results and diagnostics, and stops on
/// the quit line or at end of input.
pub mod repl;

/// Tokenizes and parses one line.
///
/// Assignment lines update `variables` and return the assignment marker.
///
/// # Errors
/// Returns a parse error for malformed input or an undefined variable.
pub fn parse_line(line: &str, variables: &mut VariableStore) -> Result<Expr, Error> {
    let tokens = tokenize(line)?;
    debug!(?tokens, "tokenized line");

    Ok(parse(&tokens, variables)?)
}

/// Returns the value of one input line.
///
/// The line is tokenized, parsed against `variables` and evaluated. An
/// assignment updates `variables` and returns `Ok(None)`; any other line
/// returns its value.
///
/// # Errors
/// Returns an error if parsing or evaluation fails. The variable store is
/// left untouched by a failing line.
///
/// # Examples
/// ```
/// use algebra::{evaluate_line, error::ErrorKind, interpreter::variables::VariableStore};
///
/// let mut variables = VariableStore::new();
///
/// assert_eq!(evaluate_line("2 + 3 * 4", &mut variables), Ok(Some(14)));
/// assert_eq!(evaluate_line("x = 7", &mut variables), Ok(None));
/// assert_eq!(evaluate_line("x + 1", &mut variables), Ok(Some(8)));
///
/// let error = evaluate_line("4 / 0", &mut variables).unwrap_err();
/// assert_eq!(error.kind(), ErrorKind::Arithmetic);
/// ```
pub fn evaluate_line(line: &str, variables: &mut VariableStore) -> Result<Option<i64>, Error> {
    let expr = parse_line(line, variables)?;
    if expr.is_assignment() {
        return Ok(None);
    }

    Ok(Some(expr.evaluate()?))
}
