//! The full differentiation pipeline: parse, simplify, differentiate, simplify again.

use dx_parser::parser::{ast::Node, parse_expr};
use log::{debug, warn};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use crate::{
    error::Error,
    symbolic::{
        derivative,
        simplify::{simplify_with_steps, step::Step, SimplifyOptions},
    },
};

/// The result of [`differentiate`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Differentiated {
    /// The input expression, simplified.
    pub original: Node,

    /// The simplified derivative of the input expression.
    pub derivative: Node,

    /// The steps taken to simplify the input expression.
    pub original_steps: Vec<Step>,

    /// The steps taken to simplify the derivative.
    pub derivative_steps: Vec<Step>,
}

/// Parses the given expression and differentiates it with respect to its variable, using the
/// default [`SimplifyOptions`].
pub fn differentiate(source: &str) -> Result<Differentiated, Error> {
    differentiate_with(source, &SimplifyOptions::default())
}

/// Parses the given expression and differentiates it with respect to its variable.
///
/// Every letter in the expression is treated as the same variable. A warning is logged if more
/// than one letter is used.
pub fn differentiate_with(source: &str, options: &SimplifyOptions) -> Result<Differentiated, Error> {
    let mut original = parse_expr(source)?;
    debug!("parsed: {}", original.as_prefix());

    let variables = original.variables();
    if variables.len() > 1 {
        warn!(
            "expression uses more than one variable ({}); all of them are treated as the same variable",
            variables.iter().collect::<String>(),
        );
    }

    let original_steps = simplify_with_steps(&mut original, options)?;
    let mut derivative = derivative(&original)?;
    let derivative_steps = simplify_with_steps(&mut derivative, options)?;

    Ok(Differentiated {
        original,
        derivative,
        original_steps,
        derivative_steps,
    })
}
