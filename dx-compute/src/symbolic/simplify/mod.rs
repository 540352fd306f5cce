//! Module to simplify expressions.
//!
//! This module provides the [`simplify`] function, which rewrites an expression into a smaller,
//! canonical form. It does this in rounds: each round folds constants, then sweeps the tree once
//! for each of the [`rules`](rules::RULES), in order. Rounds are repeated until a round leaves the
//! tree unchanged.
//!
//! The rules are syntactic. `x/x` is not simplified to `1`, and `x+x` is not simplified to
//! `2*x`.

pub mod rules;
pub mod step;

use dx_parser::parser::ast::Node;
use log::{debug, trace};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use crate::{
    approx::{approx_eq, DEFAULT_TOLERANCE},
    error::{kind::SimplifyDiverged, Error},
    symbolic::step_collector::StepCollector,
};
use step::Step;

/// Options to use when simplifying an expression.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimplifyOptions {
    /// The absolute tolerance used to decide whether a constant is equal to `0`, `1`, or `-1`.
    ///
    /// The default value is `1e-5`.
    pub tolerance: f64,

    /// The maximum number of rounds to run before giving up with a [`SimplifyDiverged`] error.
    /// The final round, which confirms that nothing changes, is counted.
    ///
    /// The default value is `4096`.
    pub max_rounds: usize,
}

impl Default for SimplifyOptions {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_rounds: 4096,
        }
    }
}

impl SimplifyOptions {
    /// Sets the tolerance used to compare constants.
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum number of rounds.
    pub fn max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }
}

impl SimplifyOptions {
    /// Returns true if the node is a constant approximately equal to `value`.
    pub(crate) fn is_value(&self, node: &Node, value: f64) -> bool {
        node.as_constant().is_some_and(|c| approx_eq(c, value, self.tolerance))
    }

    /// Returns true if the node is a constant approximately equal to `0`.
    pub(crate) fn is_zero(&self, node: &Node) -> bool {
        self.is_value(node, 0.0)
    }

    /// Returns true if the node is a constant approximately equal to `1`.
    pub(crate) fn is_one(&self, node: &Node) -> bool {
        self.is_value(node, 1.0)
    }

    /// Returns true if the node is a constant approximately equal to `-1`.
    pub(crate) fn is_neg_one(&self, node: &Node) -> bool {
        self.is_value(node, -1.0)
    }
}

/// Forwards steps to another collector, logging each one.
struct TraceSteps<'a>(&'a mut dyn StepCollector<Step>);

impl StepCollector<Step> for TraceSteps<'_> {
    fn push(&mut self, step: Step) {
        trace!("applied {}", step);
        self.0.push(step);
    }
}

/// Runs one round: constant folding, then one sweep per rule.
fn round(
    node: &mut Node,
    options: &SimplifyOptions,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<(), Error> {
    rules::fold::fold_constants(node, step_collector)?;
    for rule in rules::RULES {
        rules::sweep(node, *rule, options, step_collector);
    }
    Ok(())
}

/// Base implementation of the simplification algorithm. Returns the number of rounds that were
/// run.
pub fn simplify_with_collector(
    node: &mut Node,
    options: &SimplifyOptions,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<usize, Error> {
    let mut step_collector = TraceSteps(step_collector);
    let mut rounds = 0;

    loop {
        if rounds >= options.max_rounds {
            return Err(Error::new(vec![node.span.clone()], SimplifyDiverged { rounds }));
        }

        let before = node.clone();
        round(node, options, &mut step_collector)?;
        rounds += 1;

        if *node == before {
            break;
        }
        trace!("round {}: {} => {}", rounds, before, node);
    }

    debug!("simplified to {} in {} rounds", node, rounds);
    Ok(rounds)
}

/// Simplify the given expression in place, using the default options.
pub fn simplify(node: &mut Node) -> Result<(), Error> {
    simplify_with(node, &SimplifyOptions::default())
}

/// Simplify the given expression in place, using the given options.
pub fn simplify_with(node: &mut Node, options: &SimplifyOptions) -> Result<(), Error> {
    simplify_with_collector(node, options, &mut ()).map(|_| ())
}

/// Simplify the given expression in place, using the given options. The steps taken by the
/// simplifier are collected and returned, in the order they were applied.
pub fn simplify_with_steps(node: &mut Node, options: &SimplifyOptions) -> Result<Vec<Step>, Error> {
    let mut steps = Vec::new();
    simplify_with_collector(node, options, &mut steps)?;
    Ok(steps)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use dx_parser::parser::parse_expr;
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use crate::{
        error::kind::UnknownFunction,
        numerical::eval,
        symbolic::derivative,
    };
    use super::*;

    fn c(value: f64) -> Node {
        Node::constant(value)
    }

    fn x() -> Node {
        Node::variable('x')
    }

    fn simplified(source: &str) -> Node {
        let mut node = parse_expr(source).unwrap();
        simplify(&mut node).unwrap();
        node
    }

    /// Builds a random tree of at most the given depth. Exponents are small integer constants.
    fn random_tree(rng: &mut StdRng, depth: usize) -> Node {
        if depth == 0 || rng.gen_bool(0.25) {
            return match rng.gen_range(0..4) {
                0 => x(),
                1 => c(0.0),
                2 => c(1.0),
                _ => c(f64::from(rng.gen_range(-3..=3))),
            };
        }

        match rng.gen_range(0..6) {
            0 => Node::add(random_tree(rng, depth - 1), random_tree(rng, depth - 1)),
            1 => Node::sub(random_tree(rng, depth - 1), random_tree(rng, depth - 1)),
            2 => Node::mul(random_tree(rng, depth - 1), random_tree(rng, depth - 1)),
            3 => Node::div(random_tree(rng, depth - 1), random_tree(rng, depth - 1)),
            4 => Node::pow(random_tree(rng, depth - 1), c(f64::from(rng.gen_range(0..=3)))),
            _ => {
                let name = ["sin", "exp", "ln"][rng.gen_range(0..3)];
                Node::call(name, random_tree(rng, depth - 1))
            },
        }
    }

    #[test]
    fn constant_folding() {
        assert_eq!(simplified("2+3"), c(5.0));
        assert_eq!(simplified("2*0"), c(0.0));
        assert_eq!(simplified("2+3*4"), c(14.0));
    }

    #[test]
    fn derivative_of_square() {
        let mut node = derivative(&parse_expr("x^2").unwrap()).unwrap();
        simplify(&mut node).unwrap();
        assert_eq!(node, Node::mul(c(2.0), x()));
    }

    #[test]
    fn syntactic_only() {
        assert_eq!(simplified("x/x"), Node::div(x(), x()));
        assert_eq!(simplified("x+x"), Node::add(x(), x()));
    }

    #[test]
    fn identities() {
        assert_eq!(simplified("x*0+1*x^1/1"), x());
        assert_eq!(simplified("(x+1)^0*3"), c(3.0));
        assert_eq!(simplified("sin(0)+x"), x());
    }

    #[test]
    fn negation() {
        assert_eq!(simplified("0-x"), Node::neg(x()));
        assert_eq!(simplified("0-(0-x)"), x());
        assert_eq!(simplified("0-(0-(0-x))"), Node::neg(x()));
    }

    #[test]
    fn multiple_rounds() {
        let mut node = parse_expr("(x*0+2)*3").unwrap();
        let rounds = simplify_with_collector(&mut node, &SimplifyOptions::default(), &mut ()).unwrap();
        assert_eq!(node, c(6.0));
        assert_eq!(rounds, 3);
    }

    #[test]
    fn steps_in_order() {
        let mut node = parse_expr("1*x+0").unwrap();
        let steps = simplify_with_steps(&mut node, &SimplifyOptions::default()).unwrap();
        assert_eq!(node, x());
        assert_eq!(steps, vec![Step::AddZero, Step::MultiplyOne]);
    }

    #[test]
    fn tolerance() {
        assert_eq!(simplified("x*0.000001"), c(0.0));

        let mut node = parse_expr("x*0.000001").unwrap();
        simplify_with(&mut node, &SimplifyOptions::default().tolerance(1e-9)).unwrap();
        assert_eq!(node, Node::mul(x(), c(0.000001)));
    }

    #[test]
    fn nan_reaches_fixed_point() {
        let node = simplified("0/0+x");
        assert!(node.as_binary().unwrap().1.as_constant().unwrap().is_nan());
    }

    #[test]
    fn unknown_function() {
        let mut node = parse_expr("x+foo(1)").unwrap();
        assert!(simplify(&mut node).unwrap_err().is::<UnknownFunction>());
    }

    #[test]
    fn round_limit() {
        let mut node = parse_expr("1*x").unwrap();
        let err = simplify_with(&mut node, &SimplifyOptions::default().max_rounds(1)).unwrap_err();
        assert_eq!(err.downcast_ref::<SimplifyDiverged>(), Some(&SimplifyDiverged { rounds: 1 }));

        let mut node = parse_expr("x").unwrap();
        assert!(simplify_with(&mut node, &SimplifyOptions::default().max_rounds(1)).is_ok());
    }

    #[test]
    fn idempotent() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let mut node = random_tree(&mut rng, 6);
            simplify(&mut node).unwrap();
            let once = node.clone();
            let rounds = simplify_with_collector(&mut node, &SimplifyOptions::default(), &mut ()).unwrap();
            assert_eq!(node, once);
            assert_eq!(rounds, 1);
        }
    }

    #[test]
    fn terminates_and_preserves_value() {
        let _ = env_logger::builder().is_test(true).try_init();
        let options = SimplifyOptions::default().tolerance(1e-12);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let original = random_tree(&mut rng, 6);
            let mut node = original.clone();
            let rounds = simplify_with_collector(&mut node, &options, &mut ()).unwrap();
            assert!(rounds <= 64, "{} took {} rounds", original, rounds);
            assert!(node.node_count() <= original.node_count());

            for point in [-1.5, 0.5, 2.0] {
                let (before, after) = (eval(&original, point).unwrap(), eval(&node, point).unwrap());
                if before.is_finite() && after.is_finite() {
                    assert_relative_eq!(before, after, epsilon = 1e-9, max_relative = 1e-6);
                }
            }
        }
    }
}
