use super::{
    ast::Node,
    error::{kind, Error},
    paren::Paren,
    token::Name,
    Parser,
};
use crate::tokenizer::TokenKind;

/// Accumulates a decimal number digit by digit. The integer and fractional digits are accumulated
/// together, then the result is scaled down by the number of fractional digits.
fn accumulate_digits(int: &str, frac: &str) -> f64 {
    let mantissa = int.bytes()
        .chain(frac.bytes())
        .fold(0.0, |value, digit| value * 10.0 + f64::from(digit - b'0'));
    let scale = i32::try_from(frac.len()).unwrap_or(i32::MAX);
    mantissa / 10f64.powi(scale)
}

/// Parses an integer or decimal literal.
pub fn parse_number(input: &mut Parser) -> Result<Node, Error> {
    let token = input.next_token()?;
    let value = match token.kind {
        TokenKind::Int => accumulate_digits(token.lexeme, ""),
        TokenKind::Float => match token.lexeme.split_once('.') {
            Some((int, frac)) if !frac.is_empty() => accumulate_digits(int, frac),
            _ => return Err(Error::new(vec![token.span], kind::MissingFractionalDigits)),
        },
        found => return Err(Error::new(vec![token.span], kind::UnexpectedToken {
            expected: &[TokenKind::Int, TokenKind::Float],
            found,
        })),
    };

    Ok(Node::constant(value).with_span(token.span))
}

/// Parses a name, which is either a function call `name(...)` or a single-letter variable.
pub fn parse_name(input: &mut Parser) -> Result<Node, Error> {
    let name = input.try_parse::<Name>()?;

    if input.current_token().is_some_and(|token| token.kind == TokenKind::OpenParen) {
        let arg = input.try_parse::<Paren>()?;
        let span = name.span.start..arg.span.end;
        return Ok(Node::call(name.lexeme, arg.expr).with_span(span));
    }

    let mut chars = name.lexeme.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) => Ok(Node::variable(letter).with_span(name.span)),
        _ => Err(Error::new(vec![name.span], kind::MultiCharSymbol { name: name.lexeme })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_point_accumulation() {
        assert_eq!(accumulate_digits("0", ""), 0.0);
        assert_eq!(accumulate_digits("1024", ""), 1024.0);
        assert_eq!(accumulate_digits("3", "14"), 3.14);
        assert_eq!(accumulate_digits("0", "001"), 0.001);
        assert_eq!(accumulate_digits("007", "50"), 7.5);
    }
}
