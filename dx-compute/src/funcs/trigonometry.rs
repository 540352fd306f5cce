//! Trigonometric functions and their inverses.

use dx_parser::parser::ast::Node;
use super::FuncDef;

/// `1 - u^2`, shared by the derivatives of `asin` and `acos`.
fn one_minus_square(u: Node) -> Node {
    Node::sub(Node::constant(1.0), Node::pow(u, Node::constant(2.0)))
}

/// `sin(u)' = cos(u)`
pub const SIN: FuncDef = FuncDef {
    name: "sin",
    eval: f64::sin,
    derivative: |u| Node::call("cos", u),
};

/// `cos(u)' = -sin(u)`
pub const COS: FuncDef = FuncDef {
    name: "cos",
    eval: f64::cos,
    derivative: |u| Node::neg(Node::call("sin", u)),
};

/// `tan(u)' = 1 / cos(u)^2`
pub const TAN: FuncDef = FuncDef {
    name: "tan",
    eval: f64::tan,
    derivative: |u| Node::div(
        Node::constant(1.0),
        Node::pow(Node::call("cos", u), Node::constant(2.0)),
    ),
};

/// `asin(u)' = 1 / sqrt(1 - u^2)`
pub const ASIN: FuncDef = FuncDef {
    name: "asin",
    eval: f64::asin,
    derivative: |u| Node::div(Node::constant(1.0), Node::call("sqrt", one_minus_square(u))),
};

/// `acos(u)' = -1 / sqrt(1 - u^2)`
pub const ACOS: FuncDef = FuncDef {
    name: "acos",
    eval: f64::acos,
    derivative: |u| Node::div(Node::constant(-1.0), Node::call("sqrt", one_minus_square(u))),
};

/// `atan(u)' = 1 / (1 + u^2)`
pub const ATAN: FuncDef = FuncDef {
    name: "atan",
    eval: f64::atan,
    derivative: |u| Node::div(
        Node::constant(1.0),
        Node::add(Node::constant(1.0), Node::pow(u, Node::constant(2.0))),
    ),
};
