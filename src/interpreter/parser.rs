/// Entry point of the parser.
///
/// Chooses between assignment parsing and expression parsing and walks the
/// token sequence, classifying each token as an operand or operator.
pub mod core;

/// Assignment lines.
///
/// Validates the `name = integer` shape and writes the variable store.
pub mod assignment;

/// Operator precedence resolution.
///
/// Holds the expression and operator stacks and reduces them into a single
/// expression tree.
pub mod precedence;

/// Helpers shared by the parser modules, such as literal conversion and
/// variable lookup.
pub mod utils;
