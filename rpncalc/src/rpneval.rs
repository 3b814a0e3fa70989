use std::num::ParseFloatError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum EvalErr {
    #[error("not enough operands on stack for {0}")]
    InsufficientOperands(String),
    #[error("bad number {token:?}: {source}")]
    BadNumber {
        token: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("no result")]
    NoResult,
    #[error("{0} operand(s) left on the stack below the result")]
    TrailingOperands(usize),
}

fn binop(token: &str) -> Option<fn(f64, f64) -> f64> {
    let op: fn(f64, f64) -> f64 = match token {
        "+" => |l, r| l + r,
        "-" => |l, r| l - r,
        "*" => |l, r| l * r,
        "/" => |l, r| l / r,
        // remainder, the sign follows the dividend
        "%" => |l, r| l % r,
        _ => return None,
    };
    Some(op)
}

/// Evaluation settings.
///
/// The default context is lenient: once the result is popped, anything left
/// below it on the operand stack is ignored. A `strict` context reports
/// those leftovers as `EvalErr::TrailingOperands`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EvalContext {
    pub strict: bool,
}

impl EvalContext {
    pub fn new() -> EvalContext {
        EvalContext::default()
    }

    pub fn strict() -> EvalContext {
        EvalContext{strict: true}
    }

    /// Reduce a postfix token sequence to a single number. Operands may be
    /// any float literal. Division by zero is not an error, it yields an
    /// infinity or NaN.
    pub fn eval<S: AsRef<str>>(&self, tokens: impl IntoIterator<Item=S>)
            -> Result<f64, EvalErr> {
        let mut operands = Vec::<f64>::new();

        for token in tokens {
            let token = token.as_ref();
            match binop(token) {
                Some(apply) => {
                    let underflow = || EvalErr::InsufficientOperands(token.to_string());
                    let r = operands.pop().ok_or_else(underflow)?;
                    let l = operands.pop().ok_or_else(underflow)?;
                    operands.push(apply(l, r));
                },
                None => {
                    let num = token.parse::<f64>().map_err(|source| EvalErr::BadNumber{
                        token: token.to_string(),
                        source,
                    })?;
                    operands.push(num);
                },
            }
        }
        let result = operands.pop().ok_or(EvalErr::NoResult)?;
        if self.strict && !operands.is_empty() {
            return Err(EvalErr::TrailingOperands(operands.len()));
        }
        Ok(result)
    }
}
