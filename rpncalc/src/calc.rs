use std::fmt;
use log::debug;
use lexers::{tokenize, CalcToken};
use crate::error::EvaluationError;
use crate::parser::{RPNExpr, ShuntingParser};

/// Sample expressions as (title, expression).
pub static DEMO_EXPRESSIONS: &[(&str, &str)] = &[
    ("Simple Math", "100 + 200  * 3"),
    ("Parenthesis Math", "(100 + 200)  * 3"),
    ("All Math", "200 % 300 + 5 + 300 / 200 + 1 * 100"),
    ("All Math 2", "200 % (300 + 5 + 300) / 200 + 1 * 100"),
    ("All Math 3", "200 % (300 + 5 + 300) / 200 + 1 * 100 + 10 ^ 3"),
    ("All Math 4", "200 % (300 + 5 + 300) / 200 + 1 * 100 + 10 ^ 3 + sqrt 4"),
];

pub fn evaluate_expression(text: &str) -> Result<f64, EvaluationError> {
    let rpn = ShuntingParser::parse_str(text)?;
    let result = rpn.eval()?;
    debug!("'{}' => {}", text, result);
    Ok(result)
}

/// Every intermediate form of one evaluated expression.
#[derive(Debug, Clone)]
pub struct Calculation {
    expression: String,
    tokens: Vec<CalcToken>,
    rpn: RPNExpr,
    answer: f64,
}

impl Calculation {
    pub fn new(expression: &str) -> Result<Calculation, EvaluationError> {
        let tokens = tokenize(expression)?;
        let rpn = ShuntingParser::parse(tokens.iter().copied())?;
        let answer = rpn.eval()?;
        Ok(Calculation{expression: expression.to_string(), tokens, rpn, answer})
    }

    pub fn expression(&self) -> &str { &self.expression }

    pub fn tokens(&self) -> &[CalcToken] { &self.tokens }

    pub fn rpn(&self) -> &RPNExpr { &self.rpn }

    pub fn answer(&self) -> f64 { self.answer }
}

fn bracketed(tokens: &[CalcToken]) -> String {
    let items = tokens.iter().map(|t| t.to_string()).collect::<Vec<_>>();
    format!("[{}]", items.join(", "))
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Original expression: {}", self.expression)?;
        writeln!(f, "Tokenized expression: {}", bracketed(&self.tokens))?;
        writeln!(f, "Reverse Polish Notation: {}", bracketed(&self.rpn))?;
        write!(f, "Final answer: {:.2}", self.answer)
    }
}

///////////////////////////////////////////////////////////////////////////////
