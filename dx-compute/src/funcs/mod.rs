//! The registry of named unary functions.
//!
//! Each function is described by a [`FuncDef`], which pairs the numeric evaluation of the
//! function with the rule to build its derivative. The differentiator, the evaluator and the
//! simplifier only ever reach functions through [`lookup`], so adding an entry to [`BUILTINS`]
//! is enough to support a new function everywhere.
//!
//! # Example
//!
//! ```
//! use dx_compute::funcs::lookup;
//! use dx_parser::parser::ast::Node;
//!
//! let sin = lookup("sin").unwrap();
//! assert_eq!((sin.eval)(0.0), 0.0);
//! assert_eq!((sin.derivative)(Node::variable('x')), Node::call("cos", Node::variable('x')));
//! ```

pub mod hyperbolic;
pub mod power;
pub mod trigonometry;

use dx_parser::parser::ast::Node;
use levenshtein::levenshtein;
use once_cell::sync::Lazy;
use std::{collections::HashMap, ops::Range};
use crate::error::{kind::UnknownFunction, Error};

/// The definition of a named unary function.
#[derive(Clone, Copy)]
pub struct FuncDef {
    /// The name used to call the function.
    pub name: &'static str,

    /// Evaluates the function at a number.
    pub eval: fn(f64) -> f64,

    /// Builds the derivative of the function with respect to its argument, `f'(u)`, given the
    /// argument `u`.
    ///
    /// The result is not multiplied by the derivative of `u`; the differentiator applies the
    /// chain rule itself.
    pub derivative: fn(Node) -> Node,
}

impl std::fmt::Debug for FuncDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FuncDef").field("name", &self.name).finish_non_exhaustive()
    }
}

/// All built-in functions.
pub static BUILTINS: &[FuncDef] = &[
    trigonometry::SIN,
    trigonometry::COS,
    trigonometry::TAN,
    trigonometry::ASIN,
    trigonometry::ACOS,
    trigonometry::ATAN,
    hyperbolic::SINH,
    hyperbolic::COSH,
    hyperbolic::TANH,
    power::LN,
    power::EXP,
    power::SQRT,
];

/// The built-in functions, indexed by name.
static REGISTRY: Lazy<HashMap<&'static str, &'static FuncDef>> = Lazy::new(|| {
    BUILTINS.iter().map(|def| (def.name, def)).collect()
});

/// Returns the definition of the function with the given name, if it exists.
pub fn lookup(name: &str) -> Option<&'static FuncDef> {
    REGISTRY.get(name).copied()
}

/// Returns the names of all registered functions, in registration order.
pub fn names() -> impl Iterator<Item = &'static str> {
    BUILTINS.iter().map(|def| def.name)
}

/// Returns the names of all registered functions whose names are similar to the given name.
pub fn similar_names(name: &str) -> Vec<String> {
    names()
        .filter(|candidate| levenshtein(candidate, name) < 3)
        .map(str::to_owned)
        .collect()
}

/// Returns the definition of the function with the given name, or an [`UnknownFunction`] error
/// pointing at `span`.
pub fn lookup_or_err(name: &str, span: Range<usize>) -> Result<&'static FuncDef, Error> {
    lookup(name).ok_or_else(|| Error::new(vec![span], UnknownFunction {
        name: name.to_owned(),
        suggestions: similar_names(name),
    }))
}
