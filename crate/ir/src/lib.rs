//! The parsed template representation
//!
//! A template parses into a tree of [`ast::Node`] values owned by the parse
//! result; the validator walks the tree once to compile an evaluator and the
//! tree dies with the build call.

pub mod ast;
pub mod ast_printer;

pub use ast::{
    AttributeNode, Func, FunctionCallNode, GroupNode, IfNode, IterateNode, Node, TextNode,
};
