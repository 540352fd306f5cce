use dx_parser::parser::{
    ast::{BinOpKind, Node},
    visitor::{walk, Visitor},
};
use std::io::{self, Write};

/// Writes each node of a tree as a Graphviz node statement, with an edge from its parent.
///
/// Nodes are numbered in pre-order. The ids of the operations whose children are being visited
/// are kept on a stack, so the top of the stack is always the parent of the next node.
struct DotWriter<'a, W: Write> {
    out: &'a mut W,
    next_id: usize,
    parents: Vec<usize>,
    result: io::Result<()>,
}

impl<'a, W: Write> DotWriter<'a, W> {
    fn new(out: &'a mut W) -> Self {
        Self {
            out,
            next_id: 0,
            parents: Vec::new(),
            result: Ok(()),
        }
    }

    /// Writes a node with the given label and returns its id.
    fn node(&mut self, label: &str) -> usize {
        let id = self.next_id;
        self.next_id += 1;

        if self.result.is_ok() {
            self.result = writeln!(self.out, "    node{} [label=\"{}\"];", id, label);
        }
        if let Some(parent) = self.parents.last() {
            if self.result.is_ok() {
                self.result = writeln!(self.out, "    node{} -> node{};", parent, id);
            }
        }

        id
    }
}

impl<W: Write> Visitor for DotWriter<'_, W> {
    fn visit_constant(&mut self, _: &Node, value: f64) -> bool {
        self.node(&value.to_string());
        false
    }

    fn visit_variable(&mut self, _: &Node, name: char) -> bool {
        self.node(&name.to_string());
        false
    }

    fn visit_binary(&mut self, _: &Node, op: BinOpKind, _: &Node, _: &Node) -> bool {
        let id = self.node(&op.symbol().to_string());
        self.parents.push(id);
        true
    }

    fn visit_call(&mut self, _: &Node, name: &str, _: &Node) -> bool {
        let id = self.node(name);
        self.parents.push(id);
        true
    }

    fn leave_binary(&mut self, _: &Node, _: BinOpKind) {
        self.parents.pop();
    }

    fn leave_call(&mut self, _: &Node, _: &str) {
        self.parents.pop();
    }
}

/// Writes the tree as a Graphviz digraph with the given name.
pub fn write_digraph(out: &mut impl Write, name: &str, node: &Node) -> io::Result<()> {
    writeln!(out, "digraph {} {{", name)?;
    let mut writer = DotWriter::new(&mut *out);
    walk(node, &mut writer);
    writer.result?;
    writeln!(out, "}}")
}
