use dx_parser::parser::ast::{Node, NodeKind};
use crate::{error::Error, funcs::lookup_or_err};

/// Any type that can be evaluated to a number, given the value of the free variable.
pub trait Eval {
    /// Evaluates the expression with every variable bound to `x`.
    ///
    /// Arithmetic follows IEEE 754 semantics, so dividing by zero or leaving the domain of a
    /// function produces an infinity or `NaN` rather than an error. Calling an unregistered
    /// function is an error.
    fn eval(&self, x: f64) -> Result<f64, Error>;
}

impl Eval for Node {
    fn eval(&self, x: f64) -> Result<f64, Error> {
        match &self.kind {
            NodeKind::Constant(value) => Ok(*value),
            NodeKind::Variable(_) => Ok(x),
            NodeKind::Binary(op, lhs, rhs) => Ok(op.apply(lhs.eval(x)?, rhs.eval(x)?)),
            NodeKind::Call(name, arg) => {
                let def = lookup_or_err(name, self.span.clone())?;
                Ok((def.eval)(arg.eval(x)?))
            },
        }
    }
}

/// Evaluates the expression with every variable bound to `x`.
///
/// This is a shorthand for [`Eval::eval`].
pub fn eval(node: &Node, x: f64) -> Result<f64, Error> {
    node.eval(x)
}
