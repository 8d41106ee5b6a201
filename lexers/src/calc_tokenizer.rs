#![deny(warnings)]

use std::fmt;
use log::{debug, trace};
use crate::op::Operator;
use crate::scanner::Scanner;

static WHITE: &[char] = &[' ', '\n', '\r', '\t'];
static SEPARATORS: &[char] = &[
    '+', '-', '*', '/', '%', '^', '(', ')',
    ' ', '\n', '\r', '\t'];

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum CalcToken {
    Number(f64),
    Op(Operator),
    OParen,
    CParen,
}

impl fmt::Display for CalcToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CalcToken::Number(n) => write!(f, "{}", n),
            CalcToken::Op(op) => write!(f, "{}", op),
            CalcToken::OParen => write!(f, "("),
            CalcToken::CParen => write!(f, ")"),
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum LexError {
    InvalidNumber(String),
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LexError::InvalidNumber(term) => write!(f, "Failed to convert '{}' to a number", term),
        }
    }
}

impl std::error::Error for LexError {}

/// Splits an expression on operator symbols, parens and whitespace. Whatever
/// accumulates between two separators is either the `sqrt` keyword or a number.
pub struct CalcTokenizer<I: Iterator<Item=char>> {
    src: Scanner<I>,
    // a term and its closing separator are found in one step
    queued: Option<CalcToken>,
}

impl<I: Iterator<Item=char>> CalcTokenizer<I> {
    pub fn new(source: I) -> Self {
        CalcTokenizer{src: Scanner::new(source), queued: None}
    }

    fn term_token(term: &str) -> Result<CalcToken, LexError> {
        if term == Operator::Sqrt.symbol() {
            return Ok(CalcToken::Op(Operator::Sqrt));
        }
        // rust would also take "inf" or "NaN", only plain decimals are numbers
        let starts_numeric = term.starts_with(|c: char| c.is_ascii_digit() || c == '.');
        match term.parse::<f64>() {
            Ok(n) if starts_numeric => Ok(CalcToken::Number(n)),
            _ => {
                debug!("rejecting term '{}'", term);
                Err(LexError::InvalidNumber(term.to_string()))
            }
        }
    }

    fn separator_token(sep: char) -> Option<CalcToken> {
        match sep {
            '(' => Some(CalcToken::OParen),
            ')' => Some(CalcToken::CParen),
            c if WHITE.contains(&c) => None,
            c => Operator::from_char(c).map(CalcToken::Op),
        }
    }

    fn get_token(&mut self) -> Option<Result<CalcToken, LexError>> {
        if let Some(token) = self.queued.take() {
            return Some(Ok(token));
        }
        loop {
            let term = if self.src.until_any(SEPARATORS) {
                Some(self.src.extract_string())
            } else {
                None
            };
            let sep = self.src.next();
            self.src.ignore();
            let sep_token = sep.and_then(Self::separator_token);
            match (term, sep_token) {
                (Some(term), sep_token) => {
                    self.queued = sep_token;
                    return Some(Self::term_token(&term));
                }
                (None, Some(token)) => return Some(Ok(token)),
                (None, None) if sep.is_some() => continue, // whitespace
                (None, None) => return None,
            }
        }
    }
}

impl<I: Iterator<Item=char>> Iterator for CalcTokenizer<I> {
    type Item = Result<CalcToken, LexError>;
    fn next(&mut self) -> Option<Self::Item> {
        let token = self.get_token();
        trace!("token {:?}", token);
        token
    }
}

pub fn tokenize(expr: &str) -> Result<Vec<CalcToken>, LexError> {
    let tokens = CalcTokenizer::new(expr.chars()).collect::<Result<Vec<_>, _>>()?;
    debug!("tokenized '{}' into {} tokens", expr, tokens.len());
    Ok(tokens)
}

///////////////////////////////////////////////////////////////////////////////
