//! Numerical evaluation of expression trees.

pub mod eval;

pub use eval::{eval, Eval};
