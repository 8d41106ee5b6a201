mod scanner;
mod op;
mod calc_tokenizer;

pub use op::{Arity, OpDescriptor, Operator, OPERATORS};
pub use calc_tokenizer::{tokenize, CalcToken, CalcTokenizer, LexError};
