/// Core evaluation logic for expression trees.
///
/// Walks an [`Expr`](crate::ast::Expr) bottom-up and produces its integer
/// value.
pub mod core;

/// Integer arithmetic for binary operators.
///
/// Applies each operator with overflow checking and reports division by
/// zero and negative exponents.
pub mod arithmetic;
