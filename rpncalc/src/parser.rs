use std::fmt;
use log::{debug, trace};
use lexers::{tokenize, CalcToken};
use crate::error::EvaluationError;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Paren {
    Opening,
    Closing,
}

#[derive(Clone, PartialEq, Debug)]
pub enum ConvertError {
    // names the side that has no partner
    UnmatchedParen(Paren),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConvertError::UnmatchedParen(Paren::Opening) => write!(f, "Missing opening paren"),
            ConvertError::UnmatchedParen(Paren::Closing) => write!(f, "Missing closing paren"),
        }
    }
}

impl std::error::Error for ConvertError {}

/// Postfix token sequence. Only `Number` and `Op` tokens appear in one built
/// by `ShuntingParser`.
#[derive(Clone, PartialEq, Debug)]
pub struct RPNExpr(pub Vec<CalcToken>);

impl std::ops::Deref for RPNExpr {
    type Target = [CalcToken];
    fn deref(&self) -> &[CalcToken] {
        &self.0
    }
}

pub struct ShuntingParser;

impl ShuntingParser {
    pub fn parse_str(expr: &str) -> Result<RPNExpr, EvaluationError> {
        Ok(Self::parse(tokenize(expr)?)?)
    }

    pub fn parse(tokens: impl IntoIterator<Item = CalcToken>) -> Result<RPNExpr, ConvertError> {
        let mut out = Vec::new();
        let mut stack = Vec::new();

        for token in tokens {
            match token {
                CalcToken::Number(_) => out.push(token),
                CalcToken::OParen => stack.push(token),
                CalcToken::CParen => {
                    loop {
                        match stack.pop() {
                            Some(CalcToken::OParen) => break,
                            Some(op) => out.push(op),
                            None => {
                                debug!("closing paren without an opening one");
                                return Err(ConvertError::UnmatchedParen(Paren::Opening));
                            }
                        }
                    }
                }
                CalcToken::Op(incoming) => {
                    while let Some(&CalcToken::Op(top)) = stack.last() {
                        if !top.binds_at_least_as_tight(incoming) {
                            break;
                        }
                        out.push(CalcToken::Op(top));
                        stack.pop();
                    }
                    stack.push(token);
                }
            }
            trace!("after {}: out={:?} stack={:?}", token, out, stack);
        }
        while let Some(top) = stack.pop() {
            match top {
                CalcToken::OParen => {
                    debug!("opening paren was never closed");
                    return Err(ConvertError::UnmatchedParen(Paren::Closing));
                }
                token => out.push(token),
            }
        }
        Ok(RPNExpr(out))
    }
}
