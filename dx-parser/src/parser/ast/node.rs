use std::{collections::BTreeSet, ops::Range};
use crate::parser::Precedence;
use super::{iter::NodeIter, BinOpKind};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The shape of a [`Node`].
///
/// A binary operation always has both of its operands and a call always has exactly one
/// argument, so a malformed tree cannot be built.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NodeKind {
    /// A numeric literal.
    Constant(f64),

    /// A single-letter variable.
    Variable(char),

    /// A binary operation, such as `a + b`.
    Binary(BinOpKind, Box<Node>, Box<Node>),

    /// A call to a named unary function, such as `sin(a)`.
    Call(String, Box<Node>),
}

impl PartialEq for NodeKind {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            // NaN compares equal to itself, so a tree containing NaN can reach a fixed point
            (Self::Constant(a), Self::Constant(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Self::Variable(a), Self::Variable(b)) => a == b,
            (Self::Binary(op_a, lhs_a, rhs_a), Self::Binary(op_b, lhs_b, rhs_b)) => {
                op_a == op_b && lhs_a == lhs_b && rhs_a == rhs_b
            },
            (Self::Call(name_a, arg_a), Self::Call(name_b, arg_b)) => {
                name_a == name_b && arg_a == arg_b
            },
            _ => false,
        }
    }
}

/// A node of an expression tree.
///
/// Equality is structural and ignores spans. Cloning a node duplicates the whole subtree.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Node {
    /// The kind of node.
    pub kind: NodeKind,

    /// The region of the source code that this node was parsed or derived from.
    pub span: Range<usize>,
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

/// Returns the smallest span covering both spans. Empty spans are ignored.
fn span_union(a: &Range<usize>, b: &Range<usize>) -> Range<usize> {
    match (a.is_empty(), b.is_empty()) {
        (true, _) => b.clone(),
        (_, true) => a.clone(),
        _ => a.start.min(b.start)..a.end.max(b.end),
    }
}

impl Node {
    /// Creates a node of the given kind with the given span.
    pub fn new(kind: NodeKind, span: Range<usize>) -> Self {
        Self { kind, span }
    }

    /// Creates a constant node.
    pub fn constant(value: f64) -> Self {
        Self::new(NodeKind::Constant(value), 0..0)
    }

    /// Creates a variable node.
    pub fn variable(name: char) -> Self {
        Self::new(NodeKind::Variable(name), 0..0)
    }

    /// Creates a binary node. The span of the node covers the spans of both operands.
    pub fn binary(op: BinOpKind, lhs: Node, rhs: Node) -> Self {
        let span = span_union(&lhs.span, &rhs.span);
        Self::new(NodeKind::Binary(op, Box::new(lhs), Box::new(rhs)), span)
    }

    /// Creates a call node. The span of the node is the span of the argument.
    pub fn call(name: impl Into<String>, arg: Node) -> Self {
        let span = arg.span.clone();
        Self::new(NodeKind::Call(name.into(), Box::new(arg)), span)
    }

    /// Creates the node `lhs + rhs`.
    pub fn add(lhs: Node, rhs: Node) -> Self {
        Self::binary(BinOpKind::Add, lhs, rhs)
    }

    /// Creates the node `lhs - rhs`.
    pub fn sub(lhs: Node, rhs: Node) -> Self {
        Self::binary(BinOpKind::Sub, lhs, rhs)
    }

    /// Creates the node `lhs * rhs`.
    pub fn mul(lhs: Node, rhs: Node) -> Self {
        Self::binary(BinOpKind::Mul, lhs, rhs)
    }

    /// Creates the node `lhs / rhs`.
    pub fn div(lhs: Node, rhs: Node) -> Self {
        Self::binary(BinOpKind::Div, lhs, rhs)
    }

    /// Creates the node `lhs ^ rhs`.
    pub fn pow(lhs: Node, rhs: Node) -> Self {
        Self::binary(BinOpKind::Exp, lhs, rhs)
    }

    /// Creates the negation of the given node, which is represented as `-1 * node`.
    pub fn neg(node: Node) -> Self {
        let span = node.span.clone();
        Self::mul(Self::constant(-1.0).with_span(span.clone()), node).with_span(span)
    }

    /// Replaces the span of this node.
    pub fn with_span(mut self, span: Range<usize>) -> Self {
        self.span = span;
        self
    }

    /// Returns the value of the node if it is a constant.
    pub fn as_constant(&self) -> Option<f64> {
        match self.kind {
            NodeKind::Constant(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the name of the node if it is a variable.
    pub fn as_variable(&self) -> Option<char> {
        match self.kind {
            NodeKind::Variable(name) => Some(name),
            _ => None,
        }
    }

    /// Returns the operator and operands of the node if it is a binary operation.
    pub fn as_binary(&self) -> Option<(BinOpKind, &Node, &Node)> {
        match &self.kind {
            NodeKind::Binary(op, lhs, rhs) => Some((*op, lhs, rhs)),
            _ => None,
        }
    }

    /// Returns the function name and argument of the node if it is a call.
    pub fn as_call(&self) -> Option<(&str, &Node)> {
        match &self.kind {
            NodeKind::Call(name, arg) => Some((name, arg)),
            _ => None,
        }
    }

    /// Returns the precedence of the node, used to decide where parentheses are needed when
    /// formatting.
    pub fn precedence(&self) -> Precedence {
        match &self.kind {
            NodeKind::Binary(op, ..) => op.precedence(),
            NodeKind::Constant(_) | NodeKind::Variable(_) | NodeKind::Call(..) => Precedence::Atom,
        }
    }

    /// Returns the left and right children of the node. The argument of a call is its left
    /// child.
    pub fn children(&self) -> (Option<&Node>, Option<&Node>) {
        match &self.kind {
            NodeKind::Constant(_) | NodeKind::Variable(_) => (None, None),
            NodeKind::Binary(_, lhs, rhs) => (Some(lhs), Some(rhs)),
            NodeKind::Call(_, arg) => (Some(arg), None),
        }
    }

    /// Returns the number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        self.post_order_iter().count()
    }

    /// Returns the number of nodes on the longest path from this node to a leaf.
    pub fn depth(&self) -> usize {
        match &self.kind {
            NodeKind::Constant(_) | NodeKind::Variable(_) => 1,
            NodeKind::Binary(_, lhs, rhs) => 1 + lhs.depth().max(rhs.depth()),
            NodeKind::Call(_, arg) => 1 + arg.depth(),
        }
    }

    /// Returns the distinct variable names used in the tree, in sorted order.
    pub fn variables(&self) -> Vec<char> {
        self.post_order_iter()
            .filter_map(Node::as_variable)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Returns an iterator that traverses the tree in left-to-right post-order (i.e.
    /// depth-first).
    ///
    /// This traversal is iterative, so deep trees do not overflow the stack.
    pub fn post_order_iter(&self) -> NodeIter {
        NodeIter::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn x() -> Node {
        Node::variable('x')
    }

    #[test]
    fn equality_ignores_spans() {
        let a = Node::add(Node::constant(1.0).with_span(0..1), x().with_span(2..3));
        let b = Node::add(Node::constant(1.0), x());
        assert_eq!(a, b);
        assert_ne!(a, Node::add(x(), Node::constant(1.0)));
        assert_ne!(Node::add(x(), x()), Node::mul(x(), x()));
    }

    #[test]
    fn nan_equals_nan() {
        assert_eq!(Node::constant(f64::NAN), Node::constant(f64::NAN));
        assert_ne!(Node::constant(f64::NAN), Node::constant(0.0));
    }

    #[test]
    fn negation_shape() {
        assert_eq!(Node::neg(x()), Node::mul(Node::constant(-1.0), x()));
    }

    #[test]
    fn binary_span_covers_operands() {
        let node = Node::mul(Node::constant(2.0).with_span(4..5), x().with_span(6..7));
        assert_eq!(node.span, 4..7);
        assert_eq!(Node::mul(Node::constant(2.0), x().with_span(6..7)).span, 6..7);
    }

    #[test]
    fn queries() {
        // sin(x) * (y + 2)
        let node = Node::mul(
            Node::call("sin", x()),
            Node::add(Node::variable('y'), Node::constant(2.0)),
        );
        assert_eq!(node.node_count(), 6);
        assert_eq!(node.depth(), 3);
        assert_eq!(node.variables(), vec!['x', 'y']);
        assert_eq!(node.precedence(), Precedence::Factor);
        assert_eq!(node.children().0.and_then(Node::as_call).map(|(name, _)| name), Some("sin"));
        assert_eq!(Node::constant(2.0).children(), (None, None));
    }

    #[test]
    fn clone_is_deep() {
        let original = Node::pow(x(), Node::constant(2.0));
        let mut copy = original.clone();
        if let NodeKind::Binary(_, _, rhs) = &mut copy.kind {
            rhs.kind = NodeKind::Constant(3.0);
        }
        assert_eq!(original, Node::pow(x(), Node::constant(2.0)));
        assert_ne!(original, copy);
    }
}
