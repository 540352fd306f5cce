//! Symbolic differentiation.
//!
//! [`derivative`] builds a new tree from the input tree by structural recursion, one rule per
//! kind of node. Operands that appear more than once in a result are cloned. The result is not
//! simplified; run it through [`simplify`](super::simplify::simplify) to clean it up.

mod function;

use dx_parser::parser::ast::{BinOpKind, Node, NodeKind};
use log::debug;
use crate::error::{kind::UnsupportedExponent, Error};

/// `(f + g)' = f' + g'`, `(f - g)' = f' - g'`
fn sum_rule(op: BinOpKind, lhs: &Node, rhs: &Node) -> Result<Node, Error> {
    Ok(Node::binary(op, derive(lhs)?, derive(rhs)?))
}

/// `(f * g)' = f' * g + f * g'`
fn product_rule(lhs: &Node, rhs: &Node) -> Result<Node, Error> {
    Ok(Node::add(
        Node::mul(derive(lhs)?, rhs.clone()),
        Node::mul(lhs.clone(), derive(rhs)?),
    ))
}

/// `(f / g)' = (f' * g - f * g') / g^2`
fn quotient_rule(lhs: &Node, rhs: &Node) -> Result<Node, Error> {
    Ok(Node::div(
        Node::sub(
            Node::mul(derive(lhs)?, rhs.clone()),
            Node::mul(lhs.clone(), derive(rhs)?),
        ),
        Node::pow(rhs.clone(), Node::constant(2.0)),
    ))
}

/// `(f^c)' = c * f^(c - 1) * f'`
///
/// Only constant exponents are supported. `f^0` is constant, so its derivative is `0`.
fn power_rule(node: &Node, base: &Node, exp: &Node) -> Result<Node, Error> {
    let Some(c) = exp.as_constant() else {
        return Err(Error::new(vec![node.span.clone()], UnsupportedExponent));
    };

    if c == 0.0 {
        return Ok(Node::constant(0.0));
    }

    Ok(Node::mul(
        Node::mul(
            Node::constant(c),
            Node::pow(base.clone(), Node::constant(c - 1.0)),
        ),
        derive(base)?,
    ))
}

/// Recursive implementation of [`derivative`]. The result takes the span of the node it was
/// derived from.
fn derive(node: &Node) -> Result<Node, Error> {
    let result = match &node.kind {
        NodeKind::Constant(_) => Node::constant(0.0),
        NodeKind::Variable(_) => Node::constant(1.0),
        NodeKind::Binary(op @ (BinOpKind::Add | BinOpKind::Sub), lhs, rhs) => sum_rule(*op, lhs, rhs)?,
        NodeKind::Binary(BinOpKind::Mul, lhs, rhs) => product_rule(lhs, rhs)?,
        NodeKind::Binary(BinOpKind::Div, lhs, rhs) => quotient_rule(lhs, rhs)?,
        NodeKind::Binary(BinOpKind::Exp, lhs, rhs) => power_rule(node, lhs, rhs)?,
        NodeKind::Call(name, arg) => function::chain_rule(node, name, arg)?,
    };
    Ok(result.with_span(node.span.clone()))
}

/// Computes the derivative of the given expression with respect to its free variable.
///
/// Every variable in the expression is treated as the free variable. The input is not modified.
///
/// Returns [`Err`] if the expression raises a power to a non-constant exponent, or calls a
/// function that is not in the [registry](crate::funcs).
pub fn derivative(node: &Node) -> Result<Node, Error> {
    debug!("differentiating {}", node);
    let result = derive(node)?;
    debug!("derivative: {}", result);
    Ok(result)
}
