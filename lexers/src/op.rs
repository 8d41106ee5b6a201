#![deny(warnings)]

use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Arity {
    Unary,
    Binary,
}

/// Static facts about an operator. Lower precedence numbers bind tighter.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct OpDescriptor {
    pub symbol: &'static str,
    pub precedence: u8,
    pub arity: Arity,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
    Sqrt,
}

pub static OPERATORS: [Operator; 7] = [
    Operator::Add,
    Operator::Sub,
    Operator::Mul,
    Operator::Div,
    Operator::Rem,
    Operator::Pow,
    Operator::Sqrt,
];

impl Operator {
    pub const fn descriptor(self) -> OpDescriptor {
        use Arity::*;
        let (symbol, precedence, arity) = match self {
            Operator::Pow => ("^", 1, Binary),
            Operator::Sqrt => ("sqrt", 1, Unary),
            Operator::Mul => ("*", 2, Binary),
            Operator::Div => ("/", 2, Binary),
            Operator::Rem => ("%", 2, Binary),
            Operator::Add => ("+", 3, Binary),
            Operator::Sub => ("-", 3, Binary),
        };
        OpDescriptor { symbol, precedence, arity }
    }

    pub const fn symbol(self) -> &'static str {
        self.descriptor().symbol
    }

    pub const fn precedence(self) -> u8 {
        self.descriptor().precedence
    }

    pub const fn arity(self) -> Arity {
        self.descriptor().arity
    }

    /// True if `self` sitting on the operator stack must be emitted before
    /// `incoming` is pushed. Equal tiers pop, which makes them left-associative.
    pub fn binds_at_least_as_tight(self, incoming: Operator) -> bool {
        self.precedence() <= incoming.precedence()
    }

    pub fn from_symbol(symbol: &str) -> Option<Operator> {
        OPERATORS.iter().copied().find(|op| op.symbol() == symbol)
    }

    // only single-char operators can act as separators
    pub fn from_char(c: char) -> Option<Operator> {
        let mut buf = [0u8; 4];
        match Self::from_symbol(c.encode_utf8(&mut buf)) {
            Some(Operator::Sqrt) | None => None,
            found => found,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

///////////////////////////////////////////////////////////////////////////////
