/// The evaluator module computes the value of expression trees.
///
/// The evaluator traverses a parsed tree bottom-up and applies each binary
/// operator with checked 64-bit integer arithmetic.
///
/// # Responsibilities
/// - Evaluates every `Expr` variant except the assignment marker.
/// - Reports division by zero, overflow and negative exponents.
pub mod evaluator;
/// The lexer module tokenizes input lines for further parsing.
///
/// The lexer (tokenizer) removes whitespace from a line and produces a
/// sequence of tokens: integer literals, identifiers, operator symbols,
/// parentheses and `=`. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input characters into tokens, left to right.
/// - Absorbs any unrecognized characters into identifier tokens.
pub mod lexer;
/// The parser module builds an expression tree from tokens.
///
/// The parser detects assignment lines and applies them to the variable
/// store. Any other line is resolved into a single tree with an expression
/// stack and an operator stack, honouring operator precedence.
///
/// # Responsibilities
/// - Converts tokens into `Expr` nodes.
/// - Validates syntax and reports undefined variables.
/// - Resolves precedence, associativity and parentheses.
pub mod parser;
/// The variables module holds the session's variable store.
pub mod variables;
