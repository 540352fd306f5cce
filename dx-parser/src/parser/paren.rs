use std::ops::Range;
use super::{
    ast::Node,
    error::{kind, Error},
    literal,
    token::{CloseParen, OpenParen},
    Parse,
    Parser,
    MAX_NESTING,
};
use crate::tokenizer::TokenKind;

/// A parenthesized expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Paren {
    /// The inner expression.
    pub expr: Node,

    /// The region of the source code that this expression was parsed from, including the
    /// parentheses.
    pub span: Range<usize>,
}

impl Paren {
    /// Returns the inner expression, spanning the parentheses as well.
    pub fn into_node(self) -> Node {
        self.expr.with_span(self.span)
    }
}

impl Parse for Paren {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let open_paren = input.try_parse::<OpenParen>()?;

        if let Ok(close_paren) = input.try_parse::<CloseParen>() {
            return Err(Error::new(
                vec![open_paren.span.start..close_paren.span.end],
                kind::EmptyParenthesis,
            ));
        }

        if input.depth >= MAX_NESTING {
            return Err(Error::new(vec![open_paren.span], kind::NestingTooDeep { max: MAX_NESTING }));
        }

        input.depth += 1;
        let expr = Node::parse(input);
        input.depth -= 1;
        let expr = expr?;

        match input.try_parse::<CloseParen>() {
            Ok(close_paren) => Ok(Self {
                expr,
                span: open_paren.span.start..close_paren.span.end,
            }),
            Err(_) if input.current_token().is_some_and(|token| token.is_whitespace()) => {
                Err(input.error(kind::UnsupportedWhitespace))
            },
            Err(_) => Err(Error::new(vec![open_paren.span], kind::UnclosedParenthesis { opening: true })),
        }
    }
}

/// Parses the `Braces` production: a parenthesized expression, a function call, a variable, or a
/// number.
pub fn parse_braces(input: &mut Parser) -> Result<Node, Error> {
    let Some(token_kind) = input.current_token().map(|token| token.kind) else {
        return Err(input.error(kind::UnexpectedEof));
    };

    match token_kind {
        TokenKind::OpenParen => input.try_parse::<Paren>().map(Paren::into_node),
        TokenKind::Name => literal::parse_name(input),
        TokenKind::Int | TokenKind::Float => literal::parse_number(input),
        TokenKind::Sub => Err(input.error(kind::UnsupportedUnaryMinus)),
        TokenKind::Whitespace => Err(input.error(kind::UnsupportedWhitespace)),
        _ => Err(input.error(kind::ExpectedExpr)),
    }
}
