//! The binary levels of the grammar: sums and differences, products and quotients, and powers.
//!
//! Each level parses the level above it as its operands. `+ -` and `* /` are left-associative,
//! so their operands are folded into the left-hand side as they are found. `^` is
//! right-associative, so its right-hand side recurses into the power level again.

use super::{
    ast::{BinOpKind, Node},
    error::{kind, Error},
    paren::parse_braces,
    token::op::BinOp,
    Associativity,
    Parser,
};

/// Speculatively parses a binary operator whose kind is one of `kinds`. The cursor is left
/// unchanged if the next token is not such an operator.
fn try_parse_op(input: &mut Parser, kinds: &[BinOpKind]) -> Option<BinOp> {
    input.try_parse_then::<BinOp, _>(|op, input| {
        if kinds.contains(&op.kind) {
            Ok(())
        } else {
            Err(input.error(kind::NonFatal))
        }
    }).ok()
}

/// Parses a left-associative chain of operands separated by any of the given operators.
fn parse_left_assoc(
    input: &mut Parser,
    kinds: &[BinOpKind],
    operand: fn(&mut Parser) -> Result<Node, Error>,
) -> Result<Node, Error> {
    let mut lhs = operand(input)?;
    while let Some(op) = try_parse_op(input, kinds) {
        debug_assert_eq!(op.associativity(), Associativity::Left);
        let rhs = operand(input)?;
        lhs = Node::binary(op.kind, lhs, rhs);
    }
    Ok(lhs)
}

/// `SumSub := MulDiv ( ('+' | '-') MulDiv )*`
pub fn parse_sum_sub(input: &mut Parser) -> Result<Node, Error> {
    parse_left_assoc(input, &[BinOpKind::Add, BinOpKind::Sub], parse_mul_div)
}

/// `MulDiv := Pow ( ('*' | '/') Pow )*`
pub fn parse_mul_div(input: &mut Parser) -> Result<Node, Error> {
    parse_left_assoc(input, &[BinOpKind::Mul, BinOpKind::Div], parse_pow)
}

/// `Pow := Braces ( '^' Pow )?`
pub fn parse_pow(input: &mut Parser) -> Result<Node, Error> {
    let base = parse_braces(input)?;
    let mut exps = Vec::new();
    while try_parse_op(input, &[BinOpKind::Exp]).is_some() {
        exps.push(parse_braces(input)?);
    }

    // a^b^c = a^(b^c)
    Ok(match exps.pop() {
        Some(last) => {
            let exp = exps.into_iter().rev().fold(last, |exp, base| Node::pow(base, exp));
            Node::pow(base, exp)
        },
        None => base,
    })
}
