use crate::parser::RPNExpr;
use lexers::{Arity, CalcToken};
use std::fmt;

// a rendered subexpression and the tier of its outermost operator,
// leaves bind tighter than any operator
struct Printed {
    text: String,
    precedence: u8,
}

impl Printed {
    fn parenthesized(self, needs_parens: bool) -> String {
        if needs_parens { format!("({})", self.text) } else { self.text }
    }
}

impl RPNExpr {
    /// Infix rendering with only the parens that precedence requires. `None`
    /// if the postfix sequence doesn't reduce to a single value.
    pub fn to_infix(&self) -> Option<String> {
        let mut stack: Vec<Printed> = Vec::new();
        for token in self.0.iter() {
            let printed = match *token {
                CalcToken::Number(n) => Printed{text: format!("{}", n), precedence: 0},
                CalcToken::Op(op) => match op.arity() {
                    Arity::Unary => {
                        let operand = stack.pop()?;
                        let compound = operand.precedence > 0;
                        let text = format!("{} {}", op, operand.parenthesized(compound));
                        Printed{text, precedence: op.precedence()}
                    }
                    Arity::Binary => {
                        let rhs = stack.pop()?;
                        let lhs = stack.pop()?;
                        let prec = op.precedence();
                        let lhs_parens = lhs.precedence > prec;
                        // left associative: an equal tier on the right was grouped explicitly
                        let rhs_parens = rhs.precedence >= prec && rhs.precedence > 0;
                        // grow the left operand in place so long chains stay linear
                        let mut text = lhs.parenthesized(lhs_parens);
                        text.push(' ');
                        text.push_str(op.symbol());
                        text.push(' ');
                        text.push_str(&rhs.parenthesized(rhs_parens));
                        Printed{text, precedence: prec}
                    }
                },
                CalcToken::OParen | CalcToken::CParen => return None,
            };
            stack.push(printed);
        }
        match stack.len() {
            1 => stack.pop().map(|printed| printed.text),
            _ => None,
        }
    }
}

impl fmt::Display for RPNExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let tokens = self.0.iter().map(|t| t.to_string()).collect::<Vec<_>>();
        write!(f, "{}", tokens.join(" "))
    }
}

///////////////////////////////////////////////////////////////////////////////
