//! Implementation of the simplification rules.
//!
//! Constant folding is fallible, since it evaluates function calls, and lives in [`fold`]. Every
//! other rule is a [`Rule`]: a function that takes a node by value and returns its replacement,
//! or the node itself if the rule does not apply. Children moved into the replacement are reused,
//! and the rest of the old node is dropped.

pub mod add;
pub mod divide;
pub mod fold;
pub mod multiply;
pub mod power;

use dx_parser::parser::ast::{Node, NodeKind};
use replace_with::replace_with_or_abort;
use crate::symbolic::step_collector::StepCollector;
use super::{step::Step, SimplifyOptions};

/// A rewrite rule applied to a single node.
pub type Rule = fn(Node, &SimplifyOptions, &mut dyn StepCollector<Step>) -> Node;

/// The rules applied after constant folding in each round, in order. Each rule gets its own sweep
/// over the whole tree.
pub const RULES: &[Rule] = &[
    multiply::multiply_zero,
    power::power_zero,
    divide::divide_one,
    add::add_zero,
    multiply::multiply_one,
    power::power_one,
];

/// Applies the rule to every node of the tree, children before their parent.
pub fn sweep(
    node: &mut Node,
    rule: Rule,
    options: &SimplifyOptions,
    step_collector: &mut dyn StepCollector<Step>,
) {
    match &mut node.kind {
        NodeKind::Binary(_, lhs, rhs) => {
            sweep(lhs, rule, options, step_collector);
            sweep(rhs, rule, options, step_collector);
        },
        NodeKind::Call(_, arg) => sweep(arg, rule, options, step_collector),
        NodeKind::Constant(_) | NodeKind::Variable(_) => {},
    }

    replace_with_or_abort(node, |node| rule(node, options, step_collector));
}
