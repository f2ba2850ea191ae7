use thiserror::Error;

use crate::ast::BinaryOperator;

/// Represents all errors that can occur while evaluating an expression tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Attempted division by zero.
    #[error("Division by zero.")]
    DivisionByZero,
    /// An arithmetic operation left the 64-bit integer range.
    #[error("Integer overflow while computing {left} {op} {right}.")]
    Overflow {
        /// The operator being applied.
        op:    BinaryOperator,
        /// Left operand.
        left:  i64,
        /// Right operand.
        right: i64,
    },
    /// Integer exponentiation with a negative exponent.
    #[error("Negative exponent {exponent} has no integer result.")]
    NegativeExponent {
        /// The exponent that was supplied.
        exponent: i64,
    },
    /// The assignment marker was evaluated as if it were an expression.
    #[error("Assignment to {name} has no value.")]
    AssignmentNotEvaluable {
        /// The name that was assigned.
        name: String,
    },
}
