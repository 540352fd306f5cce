//! Symbolic manipulation of expression trees: differentiation and simplification.

pub mod derivative;
pub mod simplify;
pub mod step_collector;

pub use derivative::derivative;
pub use simplify::{simplify, simplify_with, simplify_with_steps, SimplifyOptions};
pub use step_collector::StepCollector;
