//! Simplification rules for powers.

use dx_parser::parser::ast::{BinOpKind, Node, NodeKind};
use crate::symbolic::{
    simplify::{step::Step, SimplifyOptions},
    step_collector::StepCollector,
};

/// `a^0 = 1`
///
/// `0^0` is defined as `1` by this rule, as it is by [`f64::powf`].
pub fn power_zero(
    node: Node,
    options: &SimplifyOptions,
    step_collector: &mut dyn StepCollector<Step>,
) -> Node {
    match &node.kind {
        NodeKind::Binary(BinOpKind::Exp, _, rhs) if options.is_zero(rhs) => {
            step_collector.push(Step::PowerZero);
            Node::constant(1.0).with_span(node.span)
        },
        _ => node,
    }
}

/// `a^1 = a`
pub fn power_one(
    node: Node,
    options: &SimplifyOptions,
    step_collector: &mut dyn StepCollector<Step>,
) -> Node {
    let Node { kind, span } = node;
    match kind {
        NodeKind::Binary(BinOpKind::Exp, lhs, rhs) if options.is_one(&rhs) => {
            step_collector.push(Step::PowerOne);
            *lhs
        },
        kind => Node::new(kind, span),
    }
}
