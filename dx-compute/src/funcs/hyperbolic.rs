//! Hyperbolic functions.

use dx_parser::parser::ast::Node;
use super::FuncDef;

pub const SINH: FuncDef = FuncDef {
    name: "sinh",
    eval: f64::sinh,
    derivative: |u| Node::call("cosh", u),
};

pub const COSH: FuncDef = FuncDef {
    name: "cosh",
    eval: f64::cosh,
    derivative: |u| Node::call("sinh", u),
};

pub const TANH: FuncDef = FuncDef {
    name: "tanh",
    eval: f64::tanh,
    derivative: |u| Node::div(
        Node::constant(1.0),
        Node::pow(Node::call("cosh", u), Node::constant(2.0)),
    ),
};
