//! Pre-order traversal of an expression tree through a [`Visitor`].
//!
//! Renderers implement [`Visitor`] to write out a tree without handling its recursive
//! structure themselves.
//!
//! ```
//! use dx_parser::parser::{ast::{BinOpKind, Node}, parse_expr, visitor::{walk, Visitor}};
//!
//! /// Counts the nodes of a tree, without looking inside function calls.
//! struct Counter(usize);
//!
//! impl Visitor for Counter {
//!     fn visit_constant(&mut self, _: &Node, _: f64) -> bool { self.0 += 1; true }
//!     fn visit_variable(&mut self, _: &Node, _: char) -> bool { self.0 += 1; true }
//!     fn visit_binary(&mut self, _: &Node, _: BinOpKind, _: &Node, _: &Node) -> bool {
//!         self.0 += 1;
//!         true
//!     }
//!     fn visit_call(&mut self, _: &Node, _: &str, _: &Node) -> bool { self.0 += 1; false }
//! }
//!
//! let mut counter = Counter(0);
//! walk(&parse_expr("2*sin(x+1)").unwrap(), &mut counter);
//! assert_eq!(counter.0, 3);
//! ```

use super::ast::{BinOpKind, Node, NodeKind};

/// Trait for visiting the nodes of an expression tree.
///
/// Each `visit_*` method returns `true` to continue into the children of the node, or `false` to
/// skip them.
pub trait Visitor {
    /// Visit a constant.
    fn visit_constant(&mut self, node: &Node, value: f64) -> bool;

    /// Visit a variable.
    fn visit_variable(&mut self, node: &Node, name: char) -> bool;

    /// Visit a binary operation, returns true to visit its operands.
    fn visit_binary(&mut self, node: &Node, op: BinOpKind, lhs: &Node, rhs: &Node) -> bool;

    /// Visit a function call, returns true to visit its argument.
    fn visit_call(&mut self, node: &Node, name: &str, arg: &Node) -> bool;

    /// Called after the operands of a binary operation were visited.
    fn leave_binary(&mut self, _node: &Node, _op: BinOpKind) {}

    /// Called after the argument of a function call was visited.
    fn leave_call(&mut self, _node: &Node, _name: &str) {}
}

/// Walk an expression tree with a visitor, visiting each node before its children.
///
/// The `leave_*` hooks are only called for nodes whose children were visited.
pub fn walk<V: Visitor + ?Sized>(node: &Node, visitor: &mut V) {
    match &node.kind {
        NodeKind::Constant(value) => {
            visitor.visit_constant(node, *value);
        },
        NodeKind::Variable(name) => {
            visitor.visit_variable(node, *name);
        },
        NodeKind::Binary(op, lhs, rhs) => {
            if visitor.visit_binary(node, *op, lhs, rhs) {
                walk(lhs, visitor);
                walk(rhs, visitor);
                visitor.leave_binary(node, *op);
            }
        },
        NodeKind::Call(name, arg) => {
            if visitor.visit_call(node, name, arg) {
                walk(arg, visitor);
                visitor.leave_call(node, name);
            }
        },
    }
}
