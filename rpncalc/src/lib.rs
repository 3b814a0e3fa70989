//! Integer arithmetic in two passes: a shunting-yard converter turns infix
//! tokens into postfix (RPN), and a stack machine reduces postfix to an `f64`.
//!
//! ```
//! let rpn = rpncalc::convert(["(", "1", "+", "2", ")", "*", "3"]).unwrap();
//! assert_eq!(rpn, "1 2 + 3 *");
//! assert_eq!(rpncalc::evaluate(rpn.split(' ')), Ok(9.0));
//! ```
//!
//! The two passes don't share a number grammar: `convert` only accepts
//! integer operands while `evaluate` takes any float literal.

pub use operators::{Assoc, Operator, OperatorTable};
pub use parser::{ParseError, RPNExpr, ShuntingParser};
pub use rpneval::{EvalContext, EvalErr};
pub use tokenizer::{tokenize, InfixTokenizer};

pub mod operators;
pub mod parser;

mod rpneval;
#[cfg(test)]
mod rpneval_test;

mod tokenizer;


/// Convert infix tokens to a space separated postfix string using the
/// standard operator table.
pub fn convert<S: AsRef<str>>(tokens: impl IntoIterator<Item=S>) -> Result<String, ParseError> {
    ShuntingParser::new().convert(tokens)
}

/// Evaluate postfix tokens with the default, lenient, context.
pub fn evaluate<S: AsRef<str>>(tokens: impl IntoIterator<Item=S>) -> Result<f64, EvalErr> {
    EvalContext::new().eval(tokens)
}
