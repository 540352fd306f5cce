//! Differentiation and simplification of expressions parsed by [`dx_parser`].
//!
//! The usual entry point is [`pipeline::differentiate`], which parses an expression, simplifies
//! it, differentiates it, and simplifies the derivative:
//!
//! ```
//! use dx_compute::pipeline::differentiate;
//! use dx_parser::parser::ast::Node;
//!
//! let result = differentiate("x^2").unwrap();
//! assert_eq!(result.derivative, Node::mul(Node::constant(2.0), Node::variable('x')));
//! assert_eq!(result.derivative.to_string(), "2*x");
//! ```
//!
//! Each stage is also available on its own, in [`symbolic::derivative`],
//! [`symbolic::simplify`] and [`numerical::eval`].

pub mod approx;
pub mod error;
pub mod funcs;
pub mod numerical;
pub mod pipeline;
pub mod symbolic;
