use algebra::{
    ast::{BinaryOperator, Expr},
    error::{Error, ErrorKind, ParseError, RuntimeError},
};

fn constant(value: i64) -> Expr {
    Expr::Constant { value }
}

#[test]
fn basic_operators() {
    assert_eq!(BinaryOperator::Add.apply(2, 3), Ok(5));
    assert_eq!(BinaryOperator::Sub.apply(2, 3), Ok(-1));
    assert_eq!(BinaryOperator::Mul.apply(-4, 3), Ok(-12));
    assert_eq!(BinaryOperator::Div.apply(9, 3), Ok(3));
    assert_eq!(BinaryOperator::Pow.apply(-3, 3), Ok(-27));
}

#[test]
fn division_truncates_toward_zero() {
    assert_eq!(BinaryOperator::Div.apply(7, 2), Ok(3));
    assert_eq!(BinaryOperator::Div.apply(-7, 2), Ok(-3));
    assert_eq!(BinaryOperator::Div.apply(7, -2), Ok(-3));
}

#[test]
fn division_by_zero() {
    assert_eq!(BinaryOperator::Div.apply(4, 0), Err(RuntimeError::DivisionByZero));
    assert_eq!(BinaryOperator::Div.apply(0, 0), Err(RuntimeError::DivisionByZero));
}

#[test]
fn overflow_is_reported() {
    assert_eq!(BinaryOperator::Add.apply(i64::MAX, 1),
               Err(RuntimeError::Overflow { op:    BinaryOperator::Add,
                                            left:  i64::MAX,
                                            right: 1, }));
    assert!(BinaryOperator::Sub.apply(i64::MIN, 1).is_err());
    assert!(BinaryOperator::Mul.apply(i64::MAX, 2).is_err());
    assert!(BinaryOperator::Div.apply(i64::MIN, -1).is_err());
    assert!(BinaryOperator::Pow.apply(10, 19).is_err());
}

#[test]
fn exponent_edge_cases() {
    assert_eq!(BinaryOperator::Pow.apply(0, 0), Ok(1));
    assert_eq!(BinaryOperator::Pow.apply(5, 0), Ok(1));
    assert_eq!(BinaryOperator::Pow.apply(1, i64::MAX), Ok(1));
    assert_eq!(BinaryOperator::Pow.apply(0, i64::MAX), Ok(0));
    assert_eq!(BinaryOperator::Pow.apply(-1, 5_000_000_000), Ok(1));
    assert_eq!(BinaryOperator::Pow.apply(-1, 5_000_000_001), Ok(-1));
    assert!(BinaryOperator::Pow.apply(2, 5_000_000_000).is_err());
    assert_eq!(BinaryOperator::Pow.apply(2, -3),
               Err(RuntimeError::NegativeExponent { exponent: -3 }));
}

#[test]
fn evaluates_nested_trees() {
    // (2 + 3) * (10 - 4 / 2)
    let expr = Expr::binary(BinaryOperator::Mul,
                            Expr::binary(BinaryOperator::Add, constant(2), constant(3)),
                            Expr::binary(BinaryOperator::Sub,
                                         constant(10),
                                         Expr::binary(BinaryOperator::Div,
                                                      constant(4),
                                                      constant(2))));

    assert_eq!(expr.evaluate(), Ok(40));
}

#[test]
fn errors_propagate_from_subtrees() {
    let expr = Expr::binary(BinaryOperator::Add,
                            constant(1),
                            Expr::binary(BinaryOperator::Div, constant(1), constant(0)));

    assert_eq!(expr.evaluate(), Err(RuntimeError::DivisionByZero));
}

#[test]
fn assignment_marker_has_no_value() {
    let marker = Expr::Assignment { name: "x".to_string() };

    assert!(marker.is_assignment());
    assert_eq!(marker.evaluate(),
               Err(RuntimeError::AssignmentNotEvaluable { name: "x".to_string() }));
}

#[test]
fn error_kinds() {
    let syntax = Error::from(ParseError::EmptyExpression);
    let name = Error::from(ParseError::UndefinedVariable { name: "y".to_string() });
    let arithmetic = Error::from(RuntimeError::NegativeExponent { exponent: -1 });
    let internal = Error::from(RuntimeError::AssignmentNotEvaluable { name: "x".to_string() });

    assert_eq!(syntax.kind(), ErrorKind::Syntax);
    assert_eq!(name.kind(), ErrorKind::Name);
    assert_eq!(arithmetic.kind(), ErrorKind::Arithmetic);
    assert_eq!(internal.kind(), ErrorKind::Internal);
    assert_eq!(name.to_string(), "Variable y is undefined.");
}
