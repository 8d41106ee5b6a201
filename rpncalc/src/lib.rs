extern crate lexers;

pub use lexers::{tokenize, CalcToken, LexError, Operator};

pub use parser::{ConvertError, Paren, RPNExpr, ShuntingParser};

pub mod parser;
#[cfg(test)]
mod parser_test;

pub use self::rpneval::EvalError;

mod rpnprint;
mod rpneval;

pub use error::{EvaluationError, Stage};
pub use calc::{evaluate_expression, Calculation, DEMO_EXPRESSIONS};

mod error;
mod calc;
