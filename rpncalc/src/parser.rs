use std::fmt;
use std::ops::Deref;
use thiserror::Error;

use crate::operators::{Operator, OperatorTable};

#[derive(Error, PartialEq, Debug)]
pub enum ParseError {
    #[error("mismatched parentheses")]
    MismatchedParentheses,
    #[error("invalid character {0}")]
    InvalidToken(String),
}

/// Postfix token sequence, displayed as its tokens separated by one space.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct RPNExpr(pub Vec<String>);

impl Deref for RPNExpr {
    type Target = [String];
    fn deref(&self) -> &Self::Target { &self.0 }
}

impl fmt::Display for RPNExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

// Only base-10 integers are operands here, "3.5" is rejected even though the
// evaluator would happily take it.
fn is_integer(token: &str) -> bool {
    token.parse::<i64>().is_ok()
}

pub struct ShuntingParser<'t> {
    ops: &'t OperatorTable,
}

impl Default for ShuntingParser<'static> {
    fn default() -> Self {
        Self::with_table(OperatorTable::standard())
    }
}

impl ShuntingParser<'static> {
    pub fn new() -> Self { Self::default() }
}

impl<'t> ShuntingParser<'t> {
    pub fn with_table(ops: &'t OperatorTable) -> Self {
        ShuntingParser{ops}
    }

    /// Reorder infix `tokens` into postfix. Nothing is returned from a
    /// failed conversion, the half built output is dropped.
    pub fn parse<S: AsRef<str>>(&self, tokens: impl IntoIterator<Item=S>)
            -> Result<RPNExpr, ParseError> {
        let mut out = Vec::new();
        let mut stack = Vec::<Operator>::new();

        for token in tokens {
            let token = token.as_ref();
            if is_integer(token) {
                out.push(token.to_string());
                continue;
            }
            let op = self.ops.lookup(token)
                .ok_or_else(|| ParseError::InvalidToken(token.to_string()))?;

            if op.is_oparen() {
                stack.push(op);
            } else if op.is_cparen() {
                // unwind to the matching OParen and drop it
                loop {
                    match stack.pop() {
                        Some(top) if top.is_oparen() => break,
                        Some(top) => out.push(top.symbol.to_string()),
                        None => return Err(ParseError::MismatchedParentheses),
                    }
                }
            } else {
                while let Some(&top) = stack.last() {
                    if top.is_oparen() {
                        break;
                    }
                    let yields = top.tighter_than(&op) ||
                        (top.equal_precedence(&op) && op.is_left_associative());
                    if !yields {
                        break;
                    }
                    stack.pop();
                    out.push(top.symbol.to_string());
                }
                stack.push(op);
            }
        }
        while let Some(top) = stack.pop() {
            if top.is_oparen() {
                return Err(ParseError::MismatchedParentheses);
            }
            out.push(top.symbol.to_string());
        }
        Ok(RPNExpr(out))
    }

    /// Like `parse` but renders the result as a space separated string.
    pub fn convert<S: AsRef<str>>(&self, tokens: impl IntoIterator<Item=S>)
            -> Result<String, ParseError> {
        self.parse(tokens).map(|rpn| rpn.to_string())
    }
}
