use crate::{ast::BinaryOperator, error::RuntimeError, interpreter::evaluator::core::EvalResult};

impl BinaryOperator {
    /// Applies the operator to two integers.
    ///
    /// Division truncates toward zero. Exponentiation needs a non-negative
    /// exponent; the bases `0`, `1` and `-1` accept exponents of any size.
    ///
    /// # Errors
    /// - `DivisionByZero` if the divisor is zero.
    /// - `NegativeExponent` for `^` with a negative right operand.
    /// - `Overflow` if the result does not fit in an `i64`.
    ///
    /// ## Example
    /// ```
    /// use algebra::{ast::BinaryOperator, error::RuntimeError};
    ///
    /// assert_eq!(BinaryOperator::Div.apply(7, 2), Ok(3));
    /// assert_eq!(BinaryOperator::Div.apply(-7, 2), Ok(-3));
    /// assert_eq!(BinaryOperator::Pow.apply(2, 10), Ok(1024));
    /// assert_eq!(BinaryOperator::Pow.apply(2, -1),
    ///            Err(RuntimeError::NegativeExponent { exponent: -1 }));
    /// ```
    pub fn apply(self, left: i64, right: i64) -> EvalResult<i64> {
        let overflow = RuntimeError::Overflow { op: self,
                                                left,
                                                right };

        match self {
            Self::Add => left.checked_add(right).ok_or(overflow),
            Self::Sub => left.checked_sub(right).ok_or(overflow),
            Self::Mul => left.checked_mul(right).ok_or(overflow),
            Self::Div => {
                if right == 0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                left.checked_div(right).ok_or(overflow)
            },
            Self::Pow => {
                if right < 0 {
                    return Err(RuntimeError::NegativeExponent { exponent: right });
                }
                match u32::try_from(right) {
                    Ok(exponent) => left.checked_pow(exponent).ok_or(overflow),
                    Err(_) => match left {
                        0 | 1 => Ok(left),
                        -1 if right % 2 == 0 => Ok(1),
                        -1 => Ok(-1),
                        _ => Err(overflow),
                    },
                }
            },
        }
    }
}
