//! Simplification rules for quotients.

use dx_parser::parser::ast::{BinOpKind, Node, NodeKind};
use crate::symbolic::{
    simplify::{step::Step, SimplifyOptions},
    step_collector::StepCollector,
};

/// `a/1 = a`
///
/// Only a constant divisor is recognized; `x/x` is left alone.
pub fn divide_one(
    node: Node,
    options: &SimplifyOptions,
    step_collector: &mut dyn StepCollector<Step>,
) -> Node {
    let Node { kind, span } = node;
    match kind {
        NodeKind::Binary(BinOpKind::Div, lhs, rhs) if options.is_one(&rhs) => {
            step_collector.push(Step::DivideOne);
            *lhs
        },
        kind => Node::new(kind, span),
    }
}
