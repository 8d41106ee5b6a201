use crate::error::EvaluationError;
use crate::parser::{ConvertError, Paren, ShuntingParser};
use lexers::{CalcToken, LexError, Operator};

fn num(n: f64) -> CalcToken { CalcToken::Number(n) }
fn op(o: Operator) -> CalcToken { CalcToken::Op(o) }

#[test]
fn test_parse1() {
    let rpn = ShuntingParser::parse_str("100 + 200 * 3").unwrap();
    let expect = [num(100.0), num(200.0), num(3.0), op(Operator::Mul), op(Operator::Add)];
    assert_eq!(&rpn[..], &expect[..]);
}

#[test]
fn test_parse2() {
    let rpn = ShuntingParser::parse_str("200 % (300 + 5 + 300) / 200").unwrap();
    let expect = [
        num(200.0),
        num(300.0),
        num(5.0),
        op(Operator::Add),
        num(300.0),
        op(Operator::Add),
        op(Operator::Rem),
        num(200.0),
        op(Operator::Div),
    ];
    for (i, token) in expect.iter().enumerate() {
        assert_eq!(rpn[i], *token);
    }
    assert_eq!(rpn.len(), expect.len());
}

#[test]
fn left_associative() {
    let rpn = ShuntingParser::parse_str("10 - 3 - 2").unwrap();
    let expect = [num(10.0), num(3.0), op(Operator::Sub), num(2.0), op(Operator::Sub)];
    assert_eq!(&rpn[..], &expect[..]);

    // '^' shares the same rule
    let rpn = ShuntingParser::parse_str("2 ^ 3 ^ 2").unwrap();
    let expect = [num(2.0), num(3.0), op(Operator::Pow), num(2.0), op(Operator::Pow)];
    assert_eq!(&rpn[..], &expect[..]);
}

#[test]
fn parens_override() {
    let rpn = ShuntingParser::parse_str("(100 + 200) * 3").unwrap();
    let expect = [num(100.0), num(200.0), op(Operator::Add), num(3.0), op(Operator::Mul)];
    assert_eq!(&rpn[..], &expect[..]);
}

#[test]
fn sqrt_shares_pow_tier() {
    let rpn = ShuntingParser::parse_str("sqrt 4 * 2").unwrap();
    let expect = [num(4.0), op(Operator::Sqrt), num(2.0), op(Operator::Mul)];
    assert_eq!(&rpn[..], &expect[..]);

    // an incoming sqrt flushes a pending '^' before its operand shows up
    let rpn = ShuntingParser::parse_str("2 ^ sqrt 4").unwrap();
    let expect = [num(2.0), op(Operator::Pow), num(4.0), op(Operator::Sqrt)];
    assert_eq!(&rpn[..], &expect[..]);

    let rpn = ShuntingParser::parse_str("sqrt sqrt 16").unwrap();
    let expect = [op(Operator::Sqrt), num(16.0), op(Operator::Sqrt)];
    assert_eq!(&rpn[..], &expect[..]);
}

#[test]
fn parse_tokens() {
    let tokens = vec![CalcToken::OParen, num(1.0), CalcToken::CParen, op(Operator::Add), num(2.0)];
    let rpn = ShuntingParser::parse(tokens).unwrap();
    assert_eq!(&rpn[..], &[num(1.0), num(2.0), op(Operator::Add)][..]);
    assert!(ShuntingParser::parse(Vec::new()).unwrap().is_empty());
}

#[test]
fn bad_parse() {
    let rpn = ShuntingParser::parse_str("(1 + 2");
    assert_eq!(rpn, Err(EvaluationError::Convert(ConvertError::UnmatchedParen(Paren::Closing))));

    let rpn = ShuntingParser::parse_str("1 + 2)");
    assert_eq!(rpn, Err(EvaluationError::Convert(ConvertError::UnmatchedParen(Paren::Opening))));

    let rpn = ShuntingParser::parse_str(")(");
    assert_eq!(rpn, Err(EvaluationError::Convert(ConvertError::UnmatchedParen(Paren::Opening))));

    let rpn = ShuntingParser::parse_str("((1)");
    assert_eq!(rpn, Err(EvaluationError::Convert(ConvertError::UnmatchedParen(Paren::Closing))));

    let rpn = ShuntingParser::parse_str("1 + abc)");
    assert_eq!(rpn, Err(EvaluationError::Lex(LexError::InvalidNumber(format!("abc")))));
}
