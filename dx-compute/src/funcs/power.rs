//! Exponentials, logarithms and roots.

use dx_parser::parser::ast::Node;
use super::FuncDef;

/// `ln(u)' = 1 / u`
pub const LN: FuncDef = FuncDef {
    name: "ln",
    eval: f64::ln,
    derivative: |u| Node::div(Node::constant(1.0), u),
};

/// `exp(u)' = exp(u)`
pub const EXP: FuncDef = FuncDef {
    name: "exp",
    eval: f64::exp,
    derivative: |u| Node::call("exp", u),
};

/// `sqrt(u)' = 1 / (2 * sqrt(u))`
pub const SQRT: FuncDef = FuncDef {
    name: "sqrt",
    eval: f64::sqrt,
    derivative: |u| Node::div(
        Node::constant(1.0),
        Node::mul(Node::constant(2.0), Node::call("sqrt", u)),
    ),
};
