use crate::{
    ast::{BinaryOperator, Expr},
    error::{ParseError, ParseResult},
};

/// An entry on the operator stack.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Pending {
    Operator(BinaryOperator),
    /// An open `(`; reductions never cross it.
    Group,
}

/// The two stacks used to turn a flat token sequence into a tree.
///
/// Operands are pushed onto the expression stack as they are read. An
/// operator is pushed onto the operator stack only after every pending
/// operator that binds at least as tightly has been reduced, so the
/// operator stack is always ordered by increasing precedence between two
/// group boundaries. Reducing pops one operator and the two topmost
/// expressions and pushes the combined node back.
///
/// ## Example
/// ```
/// use algebra::{
///     ast::{BinaryOperator, Expr},
///     interpreter::parser::precedence::ExpressionStacks,
/// };
///
/// // 2 + 3 * 4
/// let mut stacks = ExpressionStacks::default();
/// stacks.push_expression(Expr::Constant { value: 2 });
/// stacks.push_operator(BinaryOperator::Add).unwrap();
/// stacks.push_expression(Expr::Constant { value: 3 });
/// stacks.push_operator(BinaryOperator::Mul).unwrap();
/// stacks.push_expression(Expr::Constant { value: 4 });
///
/// let expr = stacks.assemble_expression().unwrap();
/// assert_eq!(expr.to_string(), "(2 + (3 * 4))");
/// ```
#[derive(Debug, Default)]
pub struct ExpressionStacks {
    expressions: Vec<Expr>,
    operators:   Vec<Pending>,
}

impl ExpressionStacks {
    pub fn push_expression(&mut self, expr: Expr) {
        self.expressions.push(expr);
    }

    /// Pushes a binary operator, first reducing every pending operator that
    /// must be applied before it.
    ///
    /// `+ - * /` are left-associative, so an equal-precedence operator on
    /// the stack is reduced first. `^` is right-associative and only yields
    /// to strictly tighter operators, of which there are none.
    ///
    /// # Errors
    /// Returns `MalformedExpression` if a reduction finds fewer than two
    /// operands.
    pub fn push_operator(&mut self, op: BinaryOperator) -> ParseResult<()> {
        while let Some(&Pending::Operator(top)) = self.operators.last()
              && top.binds_before(op)
        {
            self.operators.pop();
            self.combine(top)?;
        }
        self.operators.push(Pending::Operator(op));
        Ok(())
    }

    pub fn open_group(&mut self) {
        self.operators.push(Pending::Group);
    }

    /// Reduces every operator back to the innermost open group and removes
    /// the group marker.
    ///
    /// # Errors
    /// Returns `UnbalancedParenthesis` if no group is open.
    pub fn close_group(&mut self) -> ParseResult<()> {
        loop {
            match self.operators.pop() {
                Some(Pending::Operator(op)) => self.combine(op)?,
                Some(Pending::Group) => return Ok(()),
                None => return Err(ParseError::UnbalancedParenthesis { paren: ')' }),
            }
        }
    }

    /// Reduces all remaining operators and returns the single expression
    /// left on the stack.
    ///
    /// # Errors
    /// - `UnbalancedParenthesis` if a group was never closed.
    /// - `EmptyExpression` if nothing was pushed.
    /// - `MalformedExpression` if more than one expression remains or a
    ///   reduction runs out of operands.
    pub fn assemble_expression(mut self) -> ParseResult<Expr> {
        while let Some(pending) = self.operators.pop() {
            match pending {
                Pending::Operator(op) => self.combine(op)?,
                Pending::Group => return Err(ParseError::UnbalancedParenthesis { paren: '(' }),
            }
        }

        match self.expressions.len() {
            0 => Err(ParseError::EmptyExpression),
            1 => self.expressions
                     .pop()
                     .ok_or(ParseError::EmptyExpression),
            remaining => Err(ParseError::MalformedExpression { remaining }),
        }
    }

    fn combine(&mut self, op: BinaryOperator) -> ParseResult<()> {
        let malformed = |remaining| ParseError::MalformedExpression { remaining };

        let right = self.expressions.pop().ok_or_else(|| malformed(0))?;
        let left = self.expressions.pop().ok_or_else(|| malformed(1))?;

        self.expressions.push(Expr::binary(op, left, right));
        Ok(())
    }
}
