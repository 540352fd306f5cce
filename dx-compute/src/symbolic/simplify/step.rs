#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// Possible simplification steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Step {
    /// `2+3 = 5`
    /// `sin(0) = 0`
    FoldConstants,

    /// `0*a = 0`
    /// `a*0 = 0`
    MultiplyZero,

    /// `a^0 = 1`
    PowerZero,

    /// `a/1 = a`
    DivideOne,

    /// `0+a = a`
    /// `a+0 = a`
    /// `a-0 = a`
    AddZero,

    /// `0-a = -1*a`
    SubtractFromZero,

    /// `1*a = a`
    /// `a*1 = a`
    MultiplyOne,

    /// `-1*(-1*a) = a`
    DoubleNegation,

    /// `a^1 = a`
    PowerOne,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rule = match self {
            Self::FoldConstants => "fold constants",
            Self::MultiplyZero => "0*a = 0",
            Self::PowerZero => "a^0 = 1",
            Self::DivideOne => "a/1 = a",
            Self::AddZero => "0+a = a",
            Self::SubtractFromZero => "0-a = -1*a",
            Self::MultiplyOne => "1*a = a",
            Self::DoubleNegation => "-1*(-1*a) = a",
            Self::PowerOne => "a^1 = a",
        };
        write!(f, "{}", rule)
    }
}
