use dx_parser::parser::{ast::Node, fmt::Latex};
use std::io::{self, Write};

/// Writes a standalone LaTeX document containing the equation `[original]' = derivative`.
pub fn write_document(out: &mut impl Write, original: &Node, derivative: &Node) -> io::Result<()> {
    writeln!(out, "\\documentclass{{article}}")?;
    writeln!(out, "\\usepackage{{amsmath}}")?;
    writeln!(out, "\\begin{{document}}")?;
    writeln!(out, "\\begin{{equation}}")?;
    writeln!(out, "\\left[{}\\right]' = {}", original.as_display(), derivative.as_display())?;
    writeln!(out, "\\end{{equation}}")?;
    writeln!(out, "\\end{{document}}")
}
