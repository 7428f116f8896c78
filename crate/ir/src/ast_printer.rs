use crate::ast::Node;
use std::fmt::Write;

/// Renders an AST in a human-readable indented format
pub struct AstPrinter {
    /// Current indentation level for tree-like output
    indent_level: usize,
}

impl AstPrinter {
    /// Creates a new AST printer with no indentation
    pub fn new() -> Self {
        AstPrinter { indent_level: 0 }
    }

    /// Prints the tree for `node` to stdout
    pub fn print(&mut self, node: &Node) {
        print!("{}", self.format(node));
    }

    /// Formats the tree for `node` as an indented multi-line string
    ///
    /// ### Arguments
    ///
    /// * `node` - The root of the tree to format
    pub fn format(&mut self, node: &Node) -> String {
        let mut out = String::new();
        self.write_node(node, &mut out);
        out
    }

    fn indent(&self) -> String {
        "    ".repeat(self.indent_level)
    }

    fn write_node(&mut self, node: &Node, out: &mut String) {
        match node {
            Node::Text(text) => {
                let _ = writeln!(out, "{}Text {:?}", self.indent(), text.value);
            }
            Node::Attribute(attribute) => {
                let _ = writeln!(out, "{}Attribute {}", self.indent(), attribute.name);
            }
            Node::Iterate(iterate) => {
                let _ = writeln!(out, "{}Iterate {}", self.indent(), iterate.name);
                self.indent_level += 1;
                self.write_node(&iterate.body, out);
                self.indent_level -= 1;
            }
            Node::If(check) => {
                let _ = writeln!(out, "{}If {}", self.indent(), check.name);
                self.indent_level += 1;
                self.write_node(&check.body, out);
                self.indent_level -= 1;
            }
            Node::FunctionCall(call) => {
                let _ = writeln!(out, "{}FunctionCall {}", self.indent(), call.name);
                self.indent_level += 1;
                self.write_node(&call.arg, out);
                self.indent_level -= 1;
            }
            Node::Group(group) => {
                let _ = writeln!(out, "{}Group", self.indent());
                self.indent_level += 1;
                for child in &group.nodes {
                    self.write_node(child, out);
                }
                self.indent_level -= 1;
            }
        }
    }
}

impl Default for AstPrinter {
    fn default() -> Self {
        Self::new()
    }
}
