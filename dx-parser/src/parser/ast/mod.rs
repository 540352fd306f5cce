//! The expression tree produced by the parser and consumed by the differentiator and simplifier.

pub mod iter;
pub mod node;

pub use iter::NodeIter;
pub use node::{Node, NodeKind};
pub use super::token::op::BinOpKind;
