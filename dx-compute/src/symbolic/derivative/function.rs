use dx_parser::parser::ast::Node;
use crate::{error::Error, funcs::lookup_or_err};
use super::derive;

/// `f(u)' = f'(u) * u'`
///
/// The outer derivative `f'(u)` is built by the function registry from a copy of `u`.
pub(super) fn chain_rule(node: &Node, name: &str, arg: &Node) -> Result<Node, Error> {
    let def = lookup_or_err(name, node.span.clone())?;
    let outer = (def.derivative)(arg.clone());
    Ok(Node::mul(outer, derive(arg)?))
}
