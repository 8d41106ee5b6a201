use std::fmt;
use lexers::LexError;
use crate::parser::ConvertError;
use crate::rpneval::EvalError;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Stage {
    Lex,
    Convert,
    Eval,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Stage::Lex => write!(f, "Lex"),
            Stage::Convert => write!(f, "Convert"),
            Stage::Eval => write!(f, "Eval"),
        }
    }
}

/// First failure of the tokenize -> convert -> evaluate pipeline.
#[derive(Debug, PartialEq)]
pub enum EvaluationError {
    Lex(LexError),
    Convert(ConvertError),
    Eval(EvalError),
}

impl EvaluationError {
    pub fn stage(&self) -> Stage {
        match self {
            EvaluationError::Lex(_) => Stage::Lex,
            EvaluationError::Convert(_) => Stage::Convert,
            EvaluationError::Eval(_) => Stage::Eval,
        }
    }
}

impl fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EvaluationError::Lex(e) => write!(f, "{} error: {}", self.stage(), e),
            EvaluationError::Convert(e) => write!(f, "{} error: {}", self.stage(), e),
            EvaluationError::Eval(e) => write!(f, "{} error: {}", self.stage(), e),
        }
    }
}

impl std::error::Error for EvaluationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EvaluationError::Lex(e) => Some(e),
            EvaluationError::Convert(e) => Some(e),
            EvaluationError::Eval(e) => Some(e),
        }
    }
}

impl From<LexError> for EvaluationError {
    fn from(e: LexError) -> Self {
        EvaluationError::Lex(e)
    }
}

impl From<ConvertError> for EvaluationError {
    fn from(e: ConvertError) -> Self {
        EvaluationError::Convert(e)
    }
}

impl From<EvalError> for EvaluationError {
    fn from(e: EvalError) -> Self {
        EvaluationError::Eval(e)
    }
}
