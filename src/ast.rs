/// An expression tree node produced by the parser.
///
/// `Expr` is a closed set of variants. Each `BinaryOp` exclusively owns its
/// two operands, so a parsed line is always a tree. Nodes are never mutated
/// after construction; a tree lives only as long as it takes to evaluate and
/// print one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal.
    Constant {
        /// The literal value.
        value: i64,
    },
    /// A reference to a variable.
    ///
    /// The value is copied out of the variable store while parsing, so a
    /// later reassignment of `name` does not change an already built node.
    Variable {
        /// Name of the variable.
        name:  String,
        /// The value the variable held when the node was built.
        value: i64,
    },
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// Marks a line that assigned a variable instead of forming an
    /// expression. It has no numeric value; callers check for it before
    /// evaluating.
    Assignment {
        /// The name that was assigned.
        name: String,
    },
}

impl Expr {
    /// Builds a binary operation node from two operands.
    ///
    /// ## Example
    /// ```
    /// use algebra::ast::{BinaryOperator, Expr};
    ///
    /// let expr = Expr::binary(BinaryOperator::Add,
    ///                         Expr::Constant { value: 1 },
    ///                         Expr::Constant { value: 2 });
    ///
    /// assert_eq!(expr.to_string(), "(1 + 2)");
    /// ```
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::BinaryOp { op,
                         left: Box::new(left),
                         right: Box::new(right) }
    }

    /// Returns `true` for the assignment marker.
    #[must_use]
    pub const fn is_assignment(&self) -> bool {
        matches!(self, Self::Assignment { .. })
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Constant { value } => write!(f, "{value}"),
            Self::Variable { name, .. } => write!(f, "{name}"),
            Self::BinaryOp { op, left, right } => write!(f, "({left} {op} {right})"),
            Self::Assignment { name } => write!(f, "{name} (assignment)"),
        }
    }
}

/// Represents a binary operator.
///
/// The operator carries its own symbol, precedence and associativity; the
/// arithmetic itself lives in the evaluator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
}

/// How operators of equal precedence group.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` is `(a - b) - c`.
    Left,
    /// `a ^ b ^ c` is `a ^ (b ^ c)`.
    Right,
}

impl BinaryOperator {
    /// Binding strength: `+ -` are 1, `* /` are 2 and `^` is 3.
    ///
    /// ## Example
    /// ```
    /// use algebra::ast::BinaryOperator;
    ///
    /// assert!(BinaryOperator::Mul.precedence() > BinaryOperator::Add.precedence());
    /// assert_eq!(BinaryOperator::Div.precedence(), BinaryOperator::Mul.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
            Self::Pow => 3,
        }
    }

    #[must_use]
    pub const fn associativity(self) -> Associativity {
        match self {
            Self::Pow => Associativity::Right,
            Self::Add | Self::Sub | Self::Mul | Self::Div => Associativity::Left,
        }
    }

    /// The source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        }
    }

    /// Whether a pending operator `self` must be reduced before `incoming`
    /// is pushed.
    #[must_use]
    pub const fn binds_before(self, incoming: Self) -> bool {
        match incoming.associativity() {
            Associativity::Left => self.precedence() >= incoming.precedence(),
            Associativity::Right => self.precedence() > incoming.precedence(),
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
