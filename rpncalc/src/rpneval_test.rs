use crate::parser::ShuntingParser;
use crate::rpneval::{EvalContext, EvalErr};

macro_rules! fuzzy_eq {
    ($lhs:expr, $rhs:expr) => { assert!(($lhs - $rhs).abs() < 1.0e-10) }
}

fn eval(postfix: &str) -> Result<f64, EvalErr> {
    EvalContext::new().eval(postfix.split_whitespace())
}

#[test]
fn test_eval1() {
    assert_eq!(eval("3 4 +"), Ok(7.0));
    assert_eq!(eval("3 4 2 * +"), Ok(11.0));
    assert_eq!(eval("1 2 + 3 *"), Ok(9.0));
    assert_eq!(eval("7 3 %"), Ok(1.0));
    assert_eq!(eval("8 3 - 2 -"), Ok(3.0));
}

#[test]
fn test_eval2() {
    let expr = ShuntingParser::new().parse("3 + 4 * 2 / ( 1 - 5 )".split(' ')).unwrap();
    fuzzy_eq!(EvalContext::new().eval(expr.iter()).unwrap(), 1.0);
}

#[test]
fn float_operands() {
    fuzzy_eq!(eval("1.5 2.25 *").unwrap(), 3.375);
    fuzzy_eq!(eval("3.4e-2 1e2 *").unwrap(), 3.4);
    assert_eq!(eval("-2 .5 +"), Ok(-1.5));
    assert_eq!(eval("3 2 /"), Ok(1.5));
}

#[test]
fn division_by_zero() {
    assert_eq!(eval("5 0 /"), Ok(f64::INFINITY));
    assert_eq!(eval("-5 0 /"), Ok(f64::NEG_INFINITY));
    assert!(eval("0 0 /").unwrap().is_nan());
    assert!(eval("5 0 %").unwrap().is_nan());
}

#[test]
fn remainder_follows_dividend() {
    assert_eq!(eval("-7 3 %"), Ok(-1.0));
    assert_eq!(eval("7 -3 %"), Ok(1.0));
    assert_eq!(eval("-7 -3 %"), Ok(-1.0));
    fuzzy_eq!(eval("5.5 2 %").unwrap(), 1.5);
}

#[test]
fn insufficient_operands() {
    assert_eq!(eval("+"), Err(EvalErr::InsufficientOperands("+".to_string())));
    assert_eq!(eval("1 *"), Err(EvalErr::InsufficientOperands("*".to_string())));
    assert_eq!(eval("1 2 + %"), Err(EvalErr::InsufficientOperands("%".to_string())));
}

#[test]
fn bad_numbers() {
    for token in ["x", "1,5", "^", "--", "1 0"] {
        let tokens = [token];
        match EvalContext::new().eval(tokens) {
            Err(EvalErr::BadNumber{token: bad, ..}) => assert_eq!(bad, token),
            other => panic!("expected BadNumber for {:?}, got {:?}", token, other),
        }
    }
    let err = eval("1 two +").unwrap_err();
    assert!(err.to_string().starts_with("bad number \"two\""));
}

#[test]
fn no_result() {
    let none: [&str; 0] = [];
    assert_eq!(EvalContext::new().eval(none), Err(EvalErr::NoResult));
    assert_eq!(eval(""), Err(EvalErr::NoResult));
}

#[test]
fn leftover_operands() {
    // lenient by default: the top of the stack is the result
    assert_eq!(eval("1 2 3 +"), Ok(5.0));
    assert_eq!(eval("9 8"), Ok(8.0));
    let strict = EvalContext::strict();
    assert_eq!(strict.eval("1 2 3 +".split(' ')), Err(EvalErr::TrailingOperands(1)));
    assert_eq!(strict.eval("1 2 3".split(' ')), Err(EvalErr::TrailingOperands(2)));
    assert_eq!(strict.eval("1 2 3 + +".split(' ')), Ok(6.0));
}
