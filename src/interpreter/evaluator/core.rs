use crate::{ast::Expr, error::RuntimeError};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

impl Expr {
    /// Evaluates the expression tree and returns its value.
    ///
    /// Constants and variables yield their stored values. A binary
    /// operation evaluates its left operand, then its right operand, then
    /// applies the operator. The assignment marker has no value and must be
    /// filtered out by the caller; evaluating it is an error.
    ///
    /// # Errors
    /// Returns a `RuntimeError` on division by zero, overflow, a negative
    /// exponent, or when called on the assignment marker.
    ///
    /// ## Example
    /// ```
    /// use algebra::{
    ///     ast::{BinaryOperator, Expr},
    ///     error::RuntimeError,
    /// };
    ///
    /// let expr = Expr::binary(BinaryOperator::Mul,
    ///                         Expr::Variable { name:  "x".to_string(),
    ///                                          value: 6, },
    ///                         Expr::Constant { value: 7 });
    /// assert_eq!(expr.evaluate(), Ok(42));
    ///
    /// let expr = Expr::binary(BinaryOperator::Div,
    ///                         Expr::Constant { value: 4 },
    ///                         Expr::Constant { value: 0 });
    /// assert_eq!(expr.evaluate(), Err(RuntimeError::DivisionByZero));
    /// ```
    pub fn evaluate(&self) -> EvalResult<i64> {
        match self {
            Self::Constant { value } | Self::Variable { value, .. } => Ok(*value),
            Self::BinaryOp { op, left, right } => {
                let left = left.evaluate()?;
                let right = right.evaluate()?;
                op.apply(left, right)
            },
            Self::Assignment { name } => {
                Err(RuntimeError::AssignmentNotEvaluable { name: name.clone() })
            },
        }
    }
}
