pub mod ast;
pub mod binary;
pub mod error;
pub mod fmt;
pub mod literal;
pub mod paren;
pub mod token;
pub mod visitor;

use ast::Node;
use dx_error::ErrorKind;
use error::{Error, kind};
use super::tokenizer::{tokenize_complete, Token, TokenKind};
use std::ops::Range;

/// The maximum length of an input expression, in bytes.
pub const MAX_INPUT_LEN: usize = 1024;

/// The maximum number of parentheses that may be open at once, counting the parentheses of
/// function calls.
pub const MAX_NESTING: usize = 64;

/// Parses a complete expression from the given source, returning the root of the expression tree.
///
/// The whole source must be consumed. Inputs longer than [`MAX_INPUT_LEN`] bytes are rejected
/// before tokenizing.
pub fn parse_expr(source: &str) -> Result<Node, Error> {
    if source.len() > MAX_INPUT_LEN {
        return Err(Error::new(vec![0..source.len()], kind::InputTooLong {
            len: source.len(),
            max: MAX_INPUT_LEN,
        }));
    }

    Parser::new(source).try_parse_full::<Node>()
}

/// A high-level parser for the language. This is the type to use to parse an arbitrary piece of
/// code into an expression tree.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,

    /// The number of parentheses currently open.
    depth: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: tokenize_complete(source),
            cursor: 0,
            depth: 0,
        }
    }

    /// Creates an error that points at the current token, or the end of the source code if the
    /// cursor is at the end of the stream.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the span of the current token, or the end of the source code if the cursor is at
    /// the end of the stream.
    pub fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Returns the current token. The cursor is not moved. Returns [`None`] if the cursor is at
    /// the end of the stream.
    pub fn current_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor)
    }

    /// Returns the next token to be parsed, then advances the cursor. Whitespace is not skipped;
    /// callers decide how to report it.
    ///
    /// Returns an EOF error if there are no more tokens.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        match self.tokens.get(self.cursor) {
            Some(token) => {
                self.cursor += 1;
                // cloning is cheap: only Range<_> is cloned
                Ok(token.clone())
            },
            None => Err(self.error(kind::UnexpectedEof)),
        }
    }

    /// Speculatively parses a value from the given stream of tokens. This function can be used
    /// in the [`Parse::parse`] implementation of a type with the given [`Parser`], as it will
    /// automatically backtrack the cursor position if parsing fails.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse<T: Parse>(&mut self) -> Result<T, Error> {
        self.try_parse_with_fn(T::parse)
    }

    /// Speculatively parses a value from the given stream of tokens, using a custom parsing
    /// function to parse the value.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse_with_fn<T, F>(&mut self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Parser<'source>) -> Result<T, Error>,
    {
        let start = self.cursor;
        match f(self) {
            Ok(value) => Ok(value),
            err => {
                self.cursor = start;
                err
            },
        }
    }

    /// Speculatively parses a value from the given stream of tokens, with a validation predicate.
    /// The value must parse successfully, **and** the predicate must return [`Ok`] for this
    /// function to return successfully.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse_then<T: Parse, F>(&mut self, predicate: F) -> Result<T, Error>
    where
        F: FnOnce(&T, &Parser) -> Result<(), Error>,
    {
        let start = self.cursor;

        // closure workaround allows us to use `?` in the closure
        let compute = |input: &mut Self| {
            let value = T::parse(input)?;
            predicate(&value, input)?;
            Ok(value)
        };

        match compute(self) {
            Ok(value) => Ok(value),
            err => {
                self.cursor = start;
                err
            },
        }
    }

    /// Attempts to parse a value from the given stream of tokens. All the tokens must be consumed
    /// by the parser; if not, an error is returned.
    pub fn try_parse_full<T: Parse>(&mut self) -> Result<T, Error> {
        let value = T::parse(self)?;
        match self.current_token().map(|token| token.kind) {
            None => Ok(value),
            Some(TokenKind::CloseParen) => Err(self.error(kind::UnclosedParenthesis { opening: false })),
            Some(TokenKind::Whitespace) => Err(self.error(kind::UnsupportedWhitespace)),
            Some(_) => Err(self.error(kind::ExpectedEof)),
        }
    }
}

/// Any type that can be parsed from a source of tokens.
pub trait Parse: Sized {
    /// Parses a value from the given stream of tokens, advancing the stream past the consumed
    /// tokens if parsing is successful.
    ///
    /// This function should be used by consumers of the library.
    fn parse(input: &mut Parser) -> Result<Self, Error>;
}

impl Parse for Node {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        binary::parse_sum_sub(input)
    }
}

/// The associativity of a binary operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Associativity {
    /// The binary operation is left-associative.
    ///
    /// This means `a op b op c` is evaluated as `(a op b) op c`.
    Left,

    /// The binary operation is right-associative.
    ///
    /// This means `a op b op c` is evaluated as `a op (b op c)`.
    Right,
}

/// The precedence of an operation, in order from lowest precedence (evaluated last) to highest
/// precedence (evaluated first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Precedence of addition (`+`) and subtraction (`-`), which separate terms.
    Term,

    /// Precedence of multiplication (`*`) and division (`/`), which separate factors.
    Factor,

    /// Precedence of exponentiation (`^`).
    Exp,

    /// Precedence of constants, variables, and function calls, which never need parentheses.
    Atom,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use ast::BinOpKind;

    fn c(value: f64) -> Node {
        Node::constant(value)
    }

    fn x() -> Node {
        Node::variable('x')
    }

    #[test]
    fn literal_int() {
        let node = parse_expr("16").unwrap();
        assert_eq!(node, c(16.0));
        assert_eq!(node.span, 0..2);
    }

    #[test]
    fn literal_float() {
        assert_eq!(parse_expr("3.14").unwrap(), c(3.14));
        assert_eq!(parse_expr("0.1").unwrap(), c(0.1));
        assert_eq!(parse_expr("2.50").unwrap(), c(2.5));
    }

    #[test]
    fn literal_variable() {
        assert_eq!(parse_expr("x").unwrap(), x());
        assert_eq!(parse_expr("Q").unwrap(), Node::variable('Q'));
    }

    #[test]
    fn precedence() {
        assert_eq!(
            parse_expr("2+3*4").unwrap(),
            Node::add(c(2.0), Node::mul(c(3.0), c(4.0))),
        );
        assert_eq!(
            parse_expr("2*x^3-1").unwrap(),
            Node::sub(Node::mul(c(2.0), Node::pow(x(), c(3.0))), c(1.0)),
        );
    }

    #[test]
    fn left_associative() {
        assert_eq!(
            parse_expr("8-3-2").unwrap(),
            Node::sub(Node::sub(c(8.0), c(3.0)), c(2.0)),
        );
        assert_eq!(
            parse_expr("8/4*2").unwrap(),
            Node::mul(Node::div(c(8.0), c(4.0)), c(2.0)),
        );
    }

    #[test]
    fn power_right_associative() {
        assert_eq!(
            parse_expr("x^2^3").unwrap(),
            Node::pow(x(), Node::pow(c(2.0), c(3.0))),
        );
    }

    #[test]
    fn parenthesized() {
        let node = parse_expr("(2+x)*3").unwrap();
        assert_eq!(node, Node::mul(Node::add(c(2.0), x()), c(3.0)));
        assert_eq!(node.as_binary().map(|(op, ..)| op), Some(BinOpKind::Mul));
        assert_eq!(parse_expr("((x))").unwrap(), x());
    }

    #[test]
    fn function_call() {
        assert_eq!(
            parse_expr("sin(x)*ln(x+1)").unwrap(),
            Node::mul(
                Node::call("sin", x()),
                Node::call("ln", Node::add(x(), c(1.0))),
            ),
        );
    }

    #[test]
    fn spans() {
        let node = parse_expr("12+sin(x)").unwrap();
        assert_eq!(node.span, 0..9);
        let (_, lhs, rhs) = node.as_binary().unwrap();
        assert_eq!(lhs.span, 0..2);
        assert_eq!(rhs.span, 3..9);
    }

    #[test]
    fn unclosed_paren() {
        let err = parse_expr("(2+3").unwrap_err();
        assert_eq!(err.downcast_ref(), Some(&kind::UnclosedParenthesis { opening: true }));
        assert_eq!(err.spans[0], 0..1);
    }

    #[test]
    fn stray_close_paren() {
        let err = parse_expr("2+3)").unwrap_err();
        assert_eq!(err.downcast_ref(), Some(&kind::UnclosedParenthesis { opening: false }));
        assert_eq!(err.spans[0], 3..4);
    }

    #[test]
    fn empty_paren() {
        let err = parse_expr("2*()").unwrap_err();
        assert!(err.is::<kind::EmptyParenthesis>());
        assert_eq!(err.spans[0], 2..4);
    }

    #[test]
    fn unexpected_eof() {
        assert!(parse_expr("").unwrap_err().is::<kind::UnexpectedEof>());
        assert!(parse_expr("2+").unwrap_err().is::<kind::UnexpectedEof>());
        assert!(parse_expr("x^").unwrap_err().is::<kind::UnexpectedEof>());
    }

    #[test]
    fn whitespace_rejected() {
        assert!(parse_expr("2 + 3").unwrap_err().is::<kind::UnsupportedWhitespace>());
        assert!(parse_expr("2+ 3").unwrap_err().is::<kind::UnsupportedWhitespace>());
    }

    #[test]
    fn unary_minus_rejected() {
        let err = parse_expr("-x").unwrap_err();
        assert!(err.is::<kind::UnsupportedUnaryMinus>());
        assert_eq!(err.spans[0], 0..1);
        assert!(parse_expr("2*-x").unwrap_err().is::<kind::UnsupportedUnaryMinus>());
    }

    #[test]
    fn multi_char_symbol() {
        let err = parse_expr("2*xy").unwrap_err();
        assert_eq!(err.downcast_ref(), Some(&kind::MultiCharSymbol { name: "xy".to_string() }));
        assert_eq!(err.spans[0], 2..4);
    }

    #[test]
    fn implicit_multiplication_rejected() {
        assert!(parse_expr("2x").unwrap_err().is::<kind::ExpectedEof>());
    }

    #[test]
    fn bad_numbers() {
        assert!(parse_expr("1.").unwrap_err().is::<kind::MissingFractionalDigits>());
        assert!(parse_expr(".5").unwrap_err().is::<kind::ExpectedExpr>());
        assert!(parse_expr("2+*3").unwrap_err().is::<kind::ExpectedExpr>());
        assert!(parse_expr("2$").unwrap_err().is::<kind::ExpectedEof>());
    }

    #[test]
    fn input_too_long() {
        let source = "x+".repeat(MAX_INPUT_LEN / 2) + "x";
        let err = parse_expr(&source).unwrap_err();
        assert_eq!(err.downcast_ref(), Some(&kind::InputTooLong {
            len: MAX_INPUT_LEN + 1,
            max: MAX_INPUT_LEN,
        }));
    }

    fn nested(depth: usize) -> String {
        "(".repeat(depth) + "x" + &")".repeat(depth)
    }

    #[test]
    fn nesting_too_deep() {
        let source = nested(511);
        assert!(source.len() <= MAX_INPUT_LEN);
        let err = parse_expr(&source).unwrap_err();
        assert_eq!(err.downcast_ref(), Some(&kind::NestingTooDeep { max: MAX_NESTING }));
        assert_eq!(err.spans[0], MAX_NESTING..MAX_NESTING + 1);

        let calls = "sin(".repeat(MAX_NESTING + 1) + "x" + &")".repeat(MAX_NESTING + 1);
        assert!(parse_expr(&calls).unwrap_err().is::<kind::NestingTooDeep>());
    }

    #[test]
    fn nesting_at_limit() {
        assert_eq!(parse_expr(&nested(MAX_NESTING)).unwrap(), x());
        assert_eq!(parse_expr(&format!("{}+{}", nested(MAX_NESTING), nested(MAX_NESTING))).unwrap(), Node::add(x(), x()));
    }

    #[test]
    fn long_power_tower() {
        let source = "x^".repeat(300) + "2";
        let node = parse_expr(&source).unwrap();
        assert_eq!(node.depth(), 301);
        assert_eq!(node.to_string(), source);
    }

    #[test]
    fn input_at_limit() {
        let source = "x+".repeat(MAX_INPUT_LEN / 2 - 1) + "10";
        assert_eq!(source.len(), MAX_INPUT_LEN);
        assert!(parse_expr(&source).is_ok());
    }
}
