//! Constant folding.

use dx_parser::parser::ast::{Node, NodeKind};
use crate::{
    error::Error,
    funcs::lookup_or_err,
    symbolic::{simplify::step::Step, step_collector::StepCollector},
};

/// Evaluates the node if all of its children are constants.
fn fold(node: &Node) -> Result<Option<f64>, Error> {
    match &node.kind {
        NodeKind::Binary(op, lhs, rhs) => Ok(lhs.as_constant()
            .zip(rhs.as_constant())
            .map(|(lhs, rhs)| op.apply(lhs, rhs))),
        NodeKind::Call(name, arg) => match arg.as_constant() {
            Some(value) => {
                let def = lookup_or_err(name, node.span.clone())?;
                Ok(Some((def.eval)(value)))
            },
            None => Ok(None),
        },
        NodeKind::Constant(_) | NodeKind::Variable(_) => Ok(None),
    }
}

/// `2+3 = 5`
/// `sin(0) = 0`
///
/// Sweeps the whole tree, children before their parent, so nested constant subexpressions fold
/// into a single constant in one sweep. The folded node keeps its span.
pub fn fold_constants(
    node: &mut Node,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<(), Error> {
    match &mut node.kind {
        NodeKind::Binary(_, lhs, rhs) => {
            fold_constants(lhs, step_collector)?;
            fold_constants(rhs, step_collector)?;
        },
        NodeKind::Call(_, arg) => fold_constants(arg, step_collector)?,
        NodeKind::Constant(_) | NodeKind::Variable(_) => {},
    }

    if let Some(value) = fold(node)? {
        step_collector.push(Step::FoldConstants);
        node.kind = NodeKind::Constant(value);
    }
    Ok(())
}
