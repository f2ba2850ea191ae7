use algebra::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{lexer::tokenize, parser::core::parse, variables::VariableStore},
};

fn parse_str(line: &str, variables: &mut VariableStore) -> Result<Expr, ParseError> {
    parse(&tokenize(line)?, variables)
}

fn tree(line: &str) -> String {
    let mut variables = VariableStore::new();
    parse_str(line, &mut variables).unwrap_or_else(|e| panic!("Failed to parse {line:?}: {e}"))
                                   .to_string()
}

fn parse_error(line: &str) -> ParseError {
    let mut variables = VariableStore::new();
    variables.assign("x", 1);
    match parse_str(line, &mut variables) {
        Ok(expr) => panic!("{line:?} parsed as {expr} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn builds_trees_by_precedence() {
    assert_eq!(tree("2+3*4"), "(2 + (3 * 4))");
    assert_eq!(tree("2*3+4*5"), "((2 * 3) + (4 * 5))");
    assert_eq!(tree("1+2*3^4-5"), "((1 + (2 * (3 ^ 4))) - 5)");
}

#[test]
fn builds_trees_by_associativity() {
    assert_eq!(tree("10-4-3"), "((10 - 4) - 3)");
    assert_eq!(tree("8/4/2"), "((8 / 4) / 2)");
    assert_eq!(tree("2^3^2"), "(2 ^ (3 ^ 2))");
}

#[test]
fn parentheses_group_subtrees() {
    assert_eq!(tree("(1+2)*3"), "((1 + 2) * 3)");
    assert_eq!(tree("2^(1+1)^3"), "(2 ^ ((1 + 1) ^ 3))");
}

#[test]
fn negative_literals_are_single_constants() {
    assert_eq!(tree("2+-2"), "(2 + -2)");
    assert_eq!(tree("-2^2"), "(-2 ^ 2)");
    assert_eq!(tree("-7"), "-7");
}

#[test]
fn binary_nodes_own_their_operands() {
    let mut variables = VariableStore::new();
    let expr = parse_str("1-2", &mut variables).unwrap();

    assert_eq!(expr,
               Expr::binary(BinaryOperator::Sub,
                            Expr::Constant { value: 1 },
                            Expr::Constant { value: 2 }));
}

#[test]
fn assignment_stores_the_value_and_returns_the_marker() {
    let mut variables = VariableStore::new();

    let marker = parse_str("rate = 12", &mut variables).unwrap();
    assert_eq!(marker, Expr::Assignment { name: "rate".to_string() });
    assert_eq!(variables.get("rate"), Some(12));

    parse_str("rate = 3", &mut variables).unwrap();
    assert_eq!(variables.get("rate"), Some(3));
    assert_eq!(variables.len(), 1);
}

#[test]
fn variable_nodes_snapshot_the_store() {
    let mut variables = VariableStore::new();
    parse_str("x = 1", &mut variables).unwrap();

    let expr = parse_str("x + 1", &mut variables).unwrap();
    parse_str("x = 100", &mut variables).unwrap();

    assert_eq!(expr.evaluate(), Ok(2));
    assert_eq!(parse_str("x + 1", &mut variables).unwrap().evaluate(), Ok(101));
}

#[test]
fn undefined_variable_fails_fast() {
    let mut variables = VariableStore::new();

    assert_eq!(parse_str("y + 1", &mut variables),
               Err(ParseError::UndefinedVariable { name: "y".to_string() }));
    assert!(variables.is_empty());
}

#[test]
fn malformed_assignments_are_rejected() {
    for line in ["x=", "=5", "3=4", "x=y", "x==5", "x=1+2", "x=5=6"] {
        let mut variables = VariableStore::new();
        assert!(matches!(parse_str(line, &mut variables),
                         Err(ParseError::InvalidAssignment { .. })),
                "{line:?} should be an invalid assignment");
        assert!(variables.is_empty());
    }
}

#[test]
fn oversized_assignment_leaves_the_store_untouched() {
    let mut variables = VariableStore::new();

    assert_eq!(parse_str("x = 99999999999999999999", &mut variables),
               Err(ParseError::LiteralTooLarge { literal: "99999999999999999999".to_string() }));
    assert!(variables.is_empty());
}

#[test]
fn operator_sequences() {
    assert_eq!(parse_error("2*/3"),
               ParseError::InvalidOperatorSequence { first:  "*".to_string(),
                                                     second: "/".to_string(), });
    assert_eq!(parse_error("2+-x"),
               ParseError::InvalidOperatorSequence { first:  "+".to_string(),
                                                     second: "-".to_string(), });
    assert_eq!(parse_error("2+"), ParseError::UnexpectedEndOfInput { after: "+".to_string() });
    assert_eq!(parse_error("*2"), ParseError::UnexpectedToken { token: "*".to_string() });
    assert_eq!(parse_error("-x"), ParseError::UnexpectedToken { token: "-".to_string() });
}

#[test]
fn adjacent_operands_are_rejected() {
    assert_eq!(parse_error("x2"), ParseError::UnexpectedToken { token: "2".to_string() });
    assert_eq!(parse_error("2(3)"), ParseError::UnexpectedToken { token: "(".to_string() });
}

#[test]
fn unbalanced_and_empty_input() {
    assert_eq!(parse_error(""), ParseError::EmptyExpression);
    assert_eq!(parse_error("(1+2"), ParseError::UnbalancedParenthesis { paren: '(' });
    assert_eq!(parse_error("1+2)"), ParseError::UnbalancedParenthesis { paren: ')' });
    assert_eq!(parse_error("()"), ParseError::UnexpectedToken { token: ")".to_string() });
    assert_eq!(parse_error("("), ParseError::UnexpectedEndOfInput { after: "(".to_string() });
}
