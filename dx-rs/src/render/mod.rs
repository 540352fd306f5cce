//! Output formats for the results of differentiation.

pub mod dot;
pub mod tex;

use dx_compute::{numerical::eval, pipeline::Differentiated};
use std::{io::{self, Write}, path::Path};
use crate::error::{Error, WithPath};

/// Writes the summary of a differentiation: the simplified expression and its derivative, in
/// infix and prefix form.
pub fn write_summary(out: &mut impl Write, result: &Differentiated) -> io::Result<()> {
    writeln!(out, "f(x)  = {}", result.original)?;
    writeln!(out, "f'(x) = {}", result.derivative)?;
    writeln!(out, "prefix: {}", result.original.as_prefix())?;
    writeln!(out, "prefix: {}", result.derivative.as_prefix())
}

/// Writes the simplification steps taken for the expression and for its derivative.
pub fn write_steps(out: &mut impl Write, result: &Differentiated) -> io::Result<()> {
    for (title, steps) in [("f(x)", &result.original_steps), ("f'(x)", &result.derivative_steps)] {
        writeln!(out, "steps for {}:", title)?;
        for step in steps.iter() {
            writeln!(out, "  {}", step)?;
        }
    }
    Ok(())
}

/// Writes the values of the expression and its derivative at `x`. Write errors are reported
/// against `path`.
pub fn write_values(
    out: &mut impl Write,
    result: &Differentiated,
    x: f64,
    path: &Path,
) -> Result<(), Error> {
    let value = eval(&result.original, x)?;
    let slope = eval(&result.derivative, x)?;
    writeln!(out, "f({0})  = {1}\nf'({0}) = {2}", x, value, slope).with_path(path)
}

#[cfg(test)]
mod tests {
    use dx_compute::pipeline::differentiate;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn summary() {
        let result = differentiate("x^2").unwrap();
        let mut out = Vec::new();
        write_summary(&mut out, &result).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), [
            "f(x)  = x^2",
            "f'(x) = 2*x",
            "prefix: (^(x()())(2()()))",
            "prefix: (*(2()())(x()()))",
            "",
        ].join("\n"));
    }

    #[test]
    fn values() {
        let result = differentiate("x^2").unwrap();
        let mut out = Vec::new();
        write_values(&mut out, &result, 3.0, Path::new("<test>")).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "f(3)  = 9\nf'(3) = 6\n");
    }

    /// A writer whose every write fails.
    struct Closed;

    impl Write for Closed {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn values_write_error_names_path() {
        let result = differentiate("x^2").unwrap();
        match write_values(&mut Closed, &result, 3.0, Path::new("results.txt")) {
            Err(Error::Io(path, err)) => {
                assert_eq!(path, Path::new("results.txt").to_path_buf());
                assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
            },
            other => panic!("expected an I/O error, got {:?}", other),
        }
    }

    #[test]
    fn steps() {
        let result = differentiate("1*x").unwrap();
        let mut out = Vec::new();
        write_steps(&mut out, &result).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("steps for f(x):\n  "));
        assert!(out.contains("steps for f'(x):\n"));
    }
}
