//! Simplification rules for sums and differences.

use dx_parser::parser::ast::{BinOpKind, Node, NodeKind};
use crate::symbolic::{
    simplify::{step::Step, SimplifyOptions},
    step_collector::StepCollector,
};

/// `0+a = a`
/// `a+0 = a`
/// `a-0 = a`
/// `0-a = -1*a`
///
/// A zero on the left is checked first.
pub fn add_zero(
    node: Node,
    options: &SimplifyOptions,
    step_collector: &mut dyn StepCollector<Step>,
) -> Node {
    let Node { kind, span } = node;
    match kind {
        NodeKind::Binary(BinOpKind::Add, lhs, rhs) if options.is_zero(&lhs) => {
            step_collector.push(Step::AddZero);
            *rhs
        },
        NodeKind::Binary(BinOpKind::Sub, lhs, rhs) if options.is_zero(&lhs) => {
            step_collector.push(Step::SubtractFromZero);
            Node::neg(*rhs).with_span(span)
        },
        NodeKind::Binary(BinOpKind::Add | BinOpKind::Sub, lhs, rhs) if options.is_zero(&rhs) => {
            step_collector.push(Step::AddZero);
            *lhs
        },
        kind => Node::new(kind, span),
    }
}

#[cfg(test)]
mod tests {
    use dx_parser::parser::parse_expr;
    use pretty_assertions::assert_eq;
    use super::*;

    fn apply(source: &str) -> Node {
        add_zero(parse_expr(source).unwrap(), &SimplifyOptions::default(), &mut ())
    }

    #[test]
    fn zero_on_either_side() {
        assert_eq!(apply("0+x"), Node::variable('x'));
        assert_eq!(apply("x+0"), Node::variable('x'));
        assert_eq!(apply("x-0"), Node::variable('x'));
    }

    #[test]
    fn subtract_from_zero() {
        let node = apply("0-sin(x)");
        assert_eq!(node, Node::neg(Node::call("sin", Node::variable('x'))));
        assert_eq!(node.span, 0..8);
    }

    #[test]
    fn nonzero() {
        assert_eq!(apply("1+x"), parse_expr("1+x").unwrap());
        assert_eq!(apply("x*0"), parse_expr("x*0").unwrap());
    }
}
