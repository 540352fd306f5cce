use ariadne::Fmt;
use dx_attrs::ErrorKind;
use dx_error::{ErrorKind, EXPR};

/// A function was called that is not in the function registry.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown function `{}`", name),
    labels = ["this function"],
    help = if suggestions.is_empty() {
        format!("the available functions are: {}", crate::funcs::names().collect::<Vec<_>>().join(", "))
    } else if suggestions.len() == 1 {
        format!("did you mean the `{}` function?", (&*suggestions[0]).fg(EXPR))
    } else {
        format!(
            "did you mean one of these functions? {}",
            suggestions
                .iter()
                .map(|s| format!("`{}`", s.fg(EXPR)))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
)]
pub struct UnknownFunction {
    /// The name of the function that was called.
    pub name: String,

    /// A list of similarly named functions, if any.
    pub suggestions: Vec<String>,
}

/// A power with a non-constant exponent was differentiated.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "cannot differentiate a power with a non-constant exponent",
    labels = ["this power"],
    help = format!("only powers of the form {} are supported, where `c` is a number", "a^c".fg(EXPR)),
)]
pub struct UnsupportedExponent;

/// The simplifier did not reach a fixed point within the allowed number of rounds.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("simplification did not converge after {} rounds", rounds),
    labels = ["while simplifying this expression"],
    help = "this is a bug in the simplifier's rules; please report it",
)]
pub struct SimplifyDiverged {
    /// The number of rounds that were run before giving up.
    pub rounds: usize,
}
