//! Simplification rules for products.

use dx_parser::parser::ast::{BinOpKind, Node, NodeKind};
use crate::symbolic::{
    simplify::{step::Step, SimplifyOptions},
    step_collector::StepCollector,
};

/// `0*a = 0`
/// `a*0 = 0`
pub fn multiply_zero(
    node: Node,
    options: &SimplifyOptions,
    step_collector: &mut dyn StepCollector<Step>,
) -> Node {
    match &node.kind {
        NodeKind::Binary(BinOpKind::Mul, lhs, rhs) if options.is_zero(lhs) || options.is_zero(rhs) => {
            step_collector.push(Step::MultiplyZero);
            Node::constant(0.0).with_span(node.span)
        },
        _ => node,
    }
}

/// If the node is a negation `-1*a`, returns `a`. Otherwise, returns the node unchanged.
fn strip_negation(node: Node, options: &SimplifyOptions) -> Result<Node, Node> {
    let Node { kind, span } = node;
    match kind {
        NodeKind::Binary(BinOpKind::Mul, lhs, rhs) if options.is_neg_one(&lhs) => Ok(*rhs),
        kind => Err(Node::new(kind, span)),
    }
}

/// `1*a = a`
/// `a*1 = a`
/// `-1*(-1*a) = a`
pub fn multiply_one(
    node: Node,
    options: &SimplifyOptions,
    step_collector: &mut dyn StepCollector<Step>,
) -> Node {
    let Node { kind, span } = node;
    match kind {
        NodeKind::Binary(BinOpKind::Mul, lhs, rhs) if options.is_one(&lhs) => {
            step_collector.push(Step::MultiplyOne);
            *rhs
        },
        NodeKind::Binary(BinOpKind::Mul, lhs, rhs) if options.is_one(&rhs) => {
            step_collector.push(Step::MultiplyOne);
            *lhs
        },
        NodeKind::Binary(BinOpKind::Mul, lhs, rhs) if options.is_neg_one(&lhs) => {
            match strip_negation(*rhs, options) {
                Ok(inner) => {
                    step_collector.push(Step::DoubleNegation);
                    inner
                },
                Err(rhs) => Node::new(NodeKind::Binary(BinOpKind::Mul, lhs, Box::new(rhs)), span),
            }
        },
        kind => Node::new(kind, span),
    }
}
