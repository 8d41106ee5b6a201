use std::fmt;
use log::debug;
use lexers::{Arity, CalcToken, Operator};
use crate::parser::RPNExpr;

#[derive(Debug, PartialEq)]
pub enum EvalError {
    StackUnderflow(Operator),
    MalformedExpression { remaining: usize },
    EmptyExpression,
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EvalError::StackUnderflow(op) => match op.arity() {
                Arity::Unary => write!(f, "Operator '{}' needs 1 operand", op),
                Arity::Binary => write!(f, "Operator '{}' needs 2 operands", op),
            },
            EvalError::MalformedExpression { remaining } => {
                write!(f, "Malformed expression, {} values left unused", remaining)
            }
            EvalError::EmptyExpression => write!(f, "Empty expression"),
        }
    }
}

impl std::error::Error for EvalError {}

fn apply_binary(op: Operator, l: f64, r: f64) -> f64 {
    match op {
        Operator::Add => l + r,
        Operator::Sub => l - r,
        Operator::Mul => l * r,
        Operator::Div => l / r,
        Operator::Rem => l % r,
        Operator::Pow => l.powf(r),
        Operator::Sqrt => unreachable!("sqrt is unary"),
    }
}

impl RPNExpr {
    pub fn eval(&self) -> Result<f64, EvalError> {
        if self.0.is_empty() {
            return Err(EvalError::EmptyExpression);
        }
        let mut operands = Vec::new();

        for token in self.0.iter() {
            match *token {
                CalcToken::Number(num) => operands.push(num),
                CalcToken::Op(op) => match op.arity() {
                    Arity::Unary => {
                        let o = operands.pop().ok_or(EvalError::StackUnderflow(op))?;
                        operands.push(o.powf(0.5));
                    }
                    Arity::Binary => {
                        let (r, l) = match (operands.pop(), operands.pop()) {
                            (Some(r), Some(l)) => (r, l),
                            _ => {
                                debug!("'{}' is missing operands in '{}'", op, self);
                                return Err(EvalError::StackUnderflow(op));
                            }
                        };
                        operands.push(apply_binary(op, l, r));
                    }
                },
                CalcToken::OParen | CalcToken::CParen => {
                    debug!("paren left in rpn '{}'", self);
                    return Err(EvalError::MalformedExpression { remaining: operands.len() });
                }
            }
        }
        match operands.as_slice() {
            [result] => Ok(*result),
            rest => {
                debug!("'{}' left {} values on the stack", self, rest.len());
                Err(EvalError::MalformedExpression { remaining: rest.len() })
            }
        }
    }
}
