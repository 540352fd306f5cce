use ariadne::Fmt;
use dx_attrs::ErrorKind;
use dx_error::{ErrorKind, EXPR};
use crate::tokenizer::TokenKind;

/// An intentionally useless error, used to reject a speculative parse. It should never escape the
/// parser.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "an internal non-fatal error occurred while parsing",
    labels = ["here"],
    help = "you should never see this error; please report this as a bug"
)]
pub struct NonFatal;

/// The end of the source code was reached unexpectedly.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of expression",
    labels = [format!("you might need to add another {} here", "operand".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// The end of the source code was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of expression",
    labels = [format!("I could not understand the remaining {} here", "input".fg(EXPR))],
    help = "operands must be joined with one of `+`, `-`, `*`, `/`, `^`",
)]
pub struct ExpectedEof;

/// An operand was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected an operand",
    labels = [format!("expected a number, a variable, a function call, or a parenthesized {} here", "expression".fg(EXPR))],
)]
pub struct ExpectedExpr;

/// An unexpected token was encountered.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected token",
    labels = [format!("expected one of: {}", expected.iter().map(|t| format!("{:?}", t)).collect::<Vec<_>>().join(", "))],
    help = format!("found {:?}", found),
)]
pub struct UnexpectedToken {
    /// The token(s) that were expected.
    pub expected: &'static [TokenKind],

    /// The token that was found.
    pub found: TokenKind,
}

/// A parenthesis was not matched.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    labels = ["this parenthesis is not closed"],
    help = if *opening {
        "add a closing parenthesis `)` somewhere after this"
    } else {
        "add an opening parenthesis `(` somewhere before this"
    }
)]
pub struct UnclosedParenthesis {
    /// Whether the parenthesis was an opening parenthesis `(`. Otherwise, the parenthesis was a
    /// closing parenthesis `)`.
    pub opening: bool,
}

/// A pair of parentheses with nothing inside.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing expression inside parenthesis",
    labels = ["add an expression here"],
)]
pub struct EmptyParenthesis;

/// A name longer than one letter was used where a variable was expected.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not a valid variable", name),
    labels = ["variables are a single letter"],
    help = format!(
        "if you meant to call a function, add parentheses: `{}(...)`; implicit multiplication is not supported",
        name,
    ),
)]
pub struct MultiCharSymbol {
    /// The name that was found.
    pub name: String,
}

/// Whitespace was found in the input.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "whitespace is not allowed in expressions",
    labels = ["remove this whitespace"],
)]
pub struct UnsupportedWhitespace;

/// A minus sign was used as a prefix operator.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unary minus is not supported",
    labels = ["this `-` has no left operand"],
    help = format!("write the negation as a subtraction instead, for example: {}", "(0-x)".fg(EXPR)),
)]
pub struct UnsupportedUnaryMinus;

/// A decimal point was not followed by any digits.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing digits after the decimal point",
    labels = ["this number"],
    help = "decimal numbers need digits on both sides of the point, for example: `2.0`",
)]
pub struct MissingFractionalDigits;

/// The input was longer than the parser accepts.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "input is too long",
    labels = [format!("this input is {} bytes long", len)],
    help = format!("expressions may be at most {} bytes long", max),
)]
pub struct InputTooLong {
    /// The length of the input, in bytes.
    pub len: usize,

    /// The maximum allowed length, in bytes.
    pub max: usize,
}

/// Parentheses were nested deeper than the parser accepts.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "parentheses are nested too deeply",
    labels = ["this parenthesis is one level too deep"],
    help = format!("at most {} parentheses may be open at once", max),
)]
pub struct NestingTooDeep {
    /// The maximum number of open parentheses.
    pub max: usize,
}
