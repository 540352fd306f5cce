//! Tokenizer and recursive-descent parser for arithmetic expressions over a single variable.
//!
//! The grammar understood by this crate is deliberately small:
//!
//! ```text
//! Expr    := SumSub
//! SumSub  := MulDiv ( ('+' | '-') MulDiv )*
//! MulDiv  := Pow ( ('*' | '/') Pow )*
//! Pow     := Braces ( '^' Pow )?
//! Braces  := '(' SumSub ')' | Name '(' SumSub ')' | Number
//! Number  := letter | digit+ ('.' digit+)?
//! ```
//!
//! Whitespace, unary minus and implicit multiplication are not part of the language.
//!
//! ```
//! use dx_parser::parser::{ast::{BinOpKind, Node}, parse_expr};
//!
//! let node = parse_expr("2+3*x").unwrap();
//! assert_eq!(node, Node::add(
//!     Node::constant(2.0),
//!     Node::mul(Node::constant(3.0), Node::variable('x')),
//! ));
//! assert_eq!(node.as_binary().map(|(op, _, _)| op), Some(BinOpKind::Add));
//! ```

pub mod parser;
pub mod tokenizer;
