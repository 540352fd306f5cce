use std::fmt::{Display, Formatter, Result};
use super::{
    ast::{BinOpKind, Node, NodeKind},
    Associativity,
    Precedence,
};

/// A trait for types that can be formatted as LaTeX.
pub trait Latex {
    /// Format the value as LaTeX.
    fn fmt_latex(&self, f: &mut Formatter) -> Result;

    /// Wraps the value in a [`LatexFormatter`], which implements [`Display`].
    fn as_display(&self) -> LatexFormatter<'_, Self> {
        LatexFormatter(self)
    }
}

/// A wrapper type that implements [`Display`] for any type that implements [`Latex`].
pub struct LatexFormatter<'a, T: ?Sized>(&'a T);

impl<T: ?Sized> Display for LatexFormatter<'_, T>
where
    T: Latex,
{
    fn fmt(&self, f: &mut Formatter) -> Result {
        self.0.fmt_latex(f)
    }
}

/// Returns true if the node is a constant that would be written with a leading minus sign.
fn is_negative_constant(node: &Node) -> bool {
    node.as_constant().is_some_and(|value| value.is_sign_negative() && value != 0.0)
}

/// Returns the precedence of the node as it is written in infix form. A negative constant `-c`
/// is written as the difference `0-c`.
fn infix_precedence(node: &Node) -> Precedence {
    if is_negative_constant(node) {
        Precedence::Term
    } else {
        node.precedence()
    }
}

/// Returns true if `operand` must be parenthesized when it appears on the given side of `op`
/// for the result to parse back into the same tree.
fn needs_paren(op: BinOpKind, operand: &Node, is_rhs: bool) -> bool {
    let (outer, inner) = (op.precedence(), infix_precedence(operand));
    inner < outer || (inner == outer && match op.associativity() {
        Associativity::Left => is_rhs,
        Associativity::Right => !is_rhs,
    })
}

/// Writes `node`, surrounded by parentheses if `paren` is true.
fn fmt_operand(f: &mut Formatter, node: &Node, paren: bool) -> Result {
    if paren {
        write!(f, "({})", node)
    } else {
        write!(f, "{}", node)
    }
}

/// Infix form with the fewest parentheses needed to parse back into an equivalent tree.
///
/// The language has no unary minus, so a negative constant `-c` is written as `0-c`. Parsing the
/// output gives back the same tree, except that each negative constant becomes the difference
/// `0-c`, which constant folding turns back into `-c`. `NaN` and infinite constants have no
/// written form.
impl Display for Node {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match &self.kind {
            NodeKind::Constant(value) if is_negative_constant(self) => write!(f, "0-{}", -value),
            NodeKind::Constant(value) if *value == 0.0 => write!(f, "0"),
            NodeKind::Constant(value) => write!(f, "{}", value),
            NodeKind::Variable(name) => write!(f, "{}", name),
            NodeKind::Binary(op, lhs, rhs) => {
                fmt_operand(f, lhs, needs_paren(*op, lhs, false))?;
                write!(f, "{}", op.symbol())?;
                fmt_operand(f, rhs, needs_paren(*op, rhs, true))
            },
            NodeKind::Call(name, arg) => write!(f, "{}({})", name, arg),
        }
    }
}

/// Formats a node in prefix form: `(data(left)(right))`, where an absent child is written as
/// `()`.
///
/// This formatter is created by [`Node::as_prefix`].
pub struct Prefix<'a>(&'a Node);

impl Prefix<'_> {
    /// Writes an optional child node.
    fn fmt_child(f: &mut Formatter, child: Option<&Node>) -> Result {
        match child {
            Some(child) => write!(f, "{}", Prefix(child)),
            None => write!(f, "()"),
        }
    }
}

impl Display for Prefix<'_> {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "(")?;
        match &self.0.kind {
            NodeKind::Constant(value) => write!(f, "{}", value)?,
            NodeKind::Variable(name) => write!(f, "{}", name)?,
            NodeKind::Binary(op, ..) => write!(f, "{}", op.symbol())?,
            NodeKind::Call(name, _) => write!(f, "{}", name)?,
        }

        let (left, right) = self.0.children();
        Self::fmt_child(f, left)?;
        Self::fmt_child(f, right)?;
        write!(f, ")")
    }
}

impl Node {
    /// Returns a formatter that writes the node in prefix form.
    pub fn as_prefix(&self) -> Prefix<'_> {
        Prefix(self)
    }
}

/// Writes `node` as LaTeX, surrounded by `\left( \right)` if `paren` is true.
fn fmt_latex_operand(f: &mut Formatter, node: &Node, paren: bool) -> Result {
    if paren {
        write!(f, "\\left(")?;
        node.fmt_latex(f)?;
        write!(f, "\\right)")
    } else {
        node.fmt_latex(f)
    }
}

/// Returns the LaTeX command used to write a call to the given function, if it has one.
fn latex_command(name: &str) -> Option<&'static str> {
    Some(match name {
        "sin" => "\\sin",
        "cos" => "\\cos",
        "tan" => "\\tan",
        "sinh" => "\\sinh",
        "cosh" => "\\cosh",
        "tanh" => "\\tanh",
        "asin" => "\\arcsin",
        "acos" => "\\arccos",
        "atan" => "\\arctan",
        "ln" => "\\ln",
        "exp" => "\\exp",
        _ => return None,
    })
}

impl Latex for Node {
    fn fmt_latex(&self, f: &mut Formatter) -> Result {
        match &self.kind {
            NodeKind::Constant(value) => write!(f, "{}", value),
            NodeKind::Variable(name) => write!(f, "{}", name),
            NodeKind::Binary(BinOpKind::Div, lhs, rhs) => {
                write!(f, "\\frac{{")?;
                lhs.fmt_latex(f)?;
                write!(f, "}}{{")?;
                rhs.fmt_latex(f)?;
                write!(f, "}}")
            },
            NodeKind::Binary(BinOpKind::Exp, lhs, rhs) => {
                let paren = lhs.precedence() <= Precedence::Exp || is_negative_constant(lhs);
                fmt_latex_operand(f, lhs, paren)?;
                write!(f, "^{{")?;
                rhs.fmt_latex(f)?;
                write!(f, "}}")
            },
            NodeKind::Binary(BinOpKind::Mul, lhs, rhs) => {
                fmt_latex_operand(f, lhs, lhs.precedence() < Precedence::Factor)?;
                write!(f, " \\cdot ")?;
                fmt_latex_operand(
                    f,
                    rhs,
                    rhs.precedence() < Precedence::Factor || is_negative_constant(rhs),
                )
            },
            NodeKind::Binary(op, lhs, rhs) => {
                lhs.fmt_latex(f)?;
                write!(f, "{}", op.symbol())?;
                let paren = *op == BinOpKind::Sub && rhs.precedence() <= Precedence::Term;
                fmt_latex_operand(f, rhs, paren || is_negative_constant(rhs))
            },
            NodeKind::Call(name, arg) if name == "sqrt" => {
                write!(f, "\\sqrt{{")?;
                arg.fmt_latex(f)?;
                write!(f, "}}")
            },
            NodeKind::Call(name, arg) => {
                match latex_command(name) {
                    Some(command) => write!(f, "{}", command)?,
                    None => write!(f, "\\operatorname{{{}}}", name)?,
                }
                fmt_latex_operand(f, arg, true)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use super::*;
    use crate::parser::parse_expr;

    fn x() -> Node {
        Node::variable('x')
    }

    #[test]
    fn fmt_display() {
        let node = parse_expr("2+3*x").unwrap();
        assert_eq!(node.to_string(), "2+3*x");
    }

    #[test]
    fn fmt_display_parens() {
        assert_eq!(parse_expr("(2+x)*3").unwrap().to_string(), "(2+x)*3");
        assert_eq!(parse_expr("8-(3-2)").unwrap().to_string(), "8-(3-2)");
        assert_eq!(parse_expr("(8-3)-2").unwrap().to_string(), "8-3-2");
        assert_eq!(parse_expr("x^2^3").unwrap().to_string(), "x^2^3");
        assert_eq!(parse_expr("(x^2)^3").unwrap().to_string(), "(x^2)^3");
        assert_eq!(parse_expr("sin((x))").unwrap().to_string(), "sin(x)");
    }

    #[test]
    fn fmt_display_negative_constant() {
        assert_eq!(Node::neg(x()).to_string(), "(0-1)*x");
        assert_eq!(Node::constant(-2.5).to_string(), "0-2.5");
        assert_eq!(Node::constant(-0.0).to_string(), "0");
        assert_eq!(Node::div(Node::constant(-1.0), Node::pow(x(), Node::constant(2.0))).to_string(), "(0-1)/x^2");
        assert_eq!(Node::add(Node::constant(-3.0), x()).to_string(), "0-3+x");
        assert_eq!(Node::add(x(), Node::constant(-3.0)).to_string(), "x+(0-3)");
        assert_eq!(Node::pow(Node::constant(-2.0), x()).to_string(), "(0-2)^x");
        assert_eq!(Node::call("sin", Node::constant(-1.0)).to_string(), "sin(0-1)");
    }

    #[test]
    fn display_negative_constant_parses() {
        for node in [
            Node::neg(x()),
            Node::add(x(), Node::constant(-3.0)),
            Node::sub(x(), Node::constant(-3.0)),
            Node::pow(Node::constant(-2.0), Node::constant(-0.5)),
            Node::mul(Node::call("sin", x()), Node::constant(-1.0)),
        ] {
            let written = node.to_string();
            let reparsed = parse_expr(&written).unwrap();
            assert_eq!(reparsed.to_string(), written);
            assert_eq!(eval(&reparsed, 1.5).to_bits(), eval(&node, 1.5).to_bits(), "{}", written);
        }
    }

    #[test]
    fn display_round_trip() {
        for source in [
            "2+3*4",
            "x/(x+1)/3",
            "x-(x-(x-1))",
            "2^x^(1/2)",
            "ln(sin(x)^2)*exp(x/2)",
            "((x+1)*(x-1))^0.25",
        ] {
            let node = parse_expr(source).unwrap();
            let reparsed = parse_expr(&node.to_string()).unwrap();
            assert_eq!(reparsed, node, "{}", source);
        }
    }

    /// Evaluates the tree at `x`, for comparing trees that are written differently.
    fn eval(node: &Node, x: f64) -> f64 {
        match &node.kind {
            NodeKind::Constant(value) => *value,
            NodeKind::Variable(_) => x,
            NodeKind::Binary(op, lhs, rhs) => op.apply(eval(lhs, x), eval(rhs, x)),
            NodeKind::Call(name, arg) => {
                let arg = eval(arg, x);
                match name.as_str() {
                    "sin" => arg.sin(),
                    "exp" => arg.exp(),
                    "ln" => arg.ln(),
                    _ => unreachable!("no test tree calls `{}`", name),
                }
            },
        }
    }

    fn random_tree(rng: &mut StdRng, depth: usize) -> Node {
        const CONSTANTS: [f64; 6] = [0.0, 1.0, 2.5, -3.0, 0.125, 7.0];
        const OPS: [BinOpKind; 5] = [
            BinOpKind::Add,
            BinOpKind::Sub,
            BinOpKind::Mul,
            BinOpKind::Div,
            BinOpKind::Exp,
        ];
        const FUNCTIONS: [&str; 3] = ["sin", "exp", "ln"];

        // leaves only at the bottom level
        let kinds = if depth == 0 { 2 } else { 6 };
        match rng.gen_range(0..kinds) {
            0 => Node::constant(CONSTANTS[rng.gen_range(0..CONSTANTS.len())]),
            1 => x(),
            2 => Node::call(FUNCTIONS[rng.gen_range(0..FUNCTIONS.len())], random_tree(rng, depth - 1)),
            _ => Node::binary(
                OPS[rng.gen_range(0..OPS.len())],
                random_tree(rng, depth - 1),
                random_tree(rng, depth - 1),
            ),
        }
    }

    #[test]
    fn display_round_trip_random() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..500 {
            let node = random_tree(&mut rng, 4);
            let written = node.to_string();
            let reparsed = parse_expr(&written)
                .unwrap_or_else(|err| panic!("`{}` does not parse: {:?}", written, err));
            assert_eq!(reparsed.to_string(), written);

            for x in [-1.75, 0.5, 2.0] {
                let (expected, actual) = (eval(&node, x), eval(&reparsed, x));
                if expected.is_nan() {
                    assert!(actual.is_nan(), "{} at {}", written, x);
                } else if expected.is_infinite() {
                    assert_eq!(actual, expected, "{} at {}", written, x);
                } else {
                    assert_relative_eq!(actual, expected, epsilon = 1e-12, max_relative = 1e-12);
                }
            }
        }
    }

    #[test]
    fn fmt_prefix() {
        assert_eq!(Node::constant(2.0).as_prefix().to_string(), "(2()())");
        assert_eq!(Node::call("sin", x()).as_prefix().to_string(), "(sin(x()())())");
        assert_eq!(
            parse_expr("2+x*3").unwrap().as_prefix().to_string(),
            "(+(2()())(*(x()())(3()())))",
        );
    }

    #[test]
    fn fmt_latex() {
        let node = parse_expr("1/x+5/x^2").unwrap();
        assert_eq!(node.as_display().to_string(), "\\frac{1}{x}+\\frac{5}{x^{2}}");
    }

    #[test]
    fn fmt_latex_functions() {
        let node = parse_expr("sqrt(x)*sin(x)^2").unwrap();
        assert_eq!(
            node.as_display().to_string(),
            "\\sqrt{x} \\cdot \\sin\\left(x\\right)^{2}",
        );
        assert_eq!(
            parse_expr("f(x)").unwrap().as_display().to_string(),
            "\\operatorname{f}\\left(x\\right)",
        );
    }

    #[test]
    fn fmt_latex_parens() {
        assert_eq!(
            parse_expr("(x+1)*(x-1)").unwrap().as_display().to_string(),
            "\\left(x+1\\right) \\cdot \\left(x-1\\right)",
        );
        assert_eq!(
            parse_expr("(x^2)^3").unwrap().as_display().to_string(),
            "\\left(x^{2}\\right)^{3}",
        );
        assert_eq!(
            Node::neg(Node::call("sin", x())).as_display().to_string(),
            "-1 \\cdot \\sin\\left(x\\right)",
        );
    }
}
