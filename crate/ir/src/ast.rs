use std::fmt;
use std::sync::Arc;
use stencil_error::Location;

/// A pipeline function bound at parse time
///
/// Applied to the rendered value of the inner node when the evaluator runs.
pub type Func = Arc<dyn Fn(String) -> String + Send + Sync>;

/// Nodes of a parsed template
///
/// The tree is finite, acyclic and owned; traversal is a `match` on the
/// variant. Every node carries the location of the source that produced it.
#[derive(Debug)]
pub enum Node {
    /// Literal text emitted verbatim
    Text(TextNode),
    /// A reference to a named attribute of the data value
    Attribute(AttributeNode),
    /// Iteration over a named child collection
    Iterate(IterateNode),
    /// A body rendered only when a named boolean holds
    If(IfNode),
    /// A pipeline function applied to an inner node
    FunctionCall(FunctionCallNode),
    /// An ordered sequence of sibling nodes
    Group(GroupNode),
}

/// A run of literal template text
#[derive(Debug)]
pub struct TextNode {
    /// The text to emit
    pub value: String,
    /// Source code location information
    pub location: Location,
}

/// A `{{name}}` attribute reference
#[derive(Debug)]
pub struct AttributeNode {
    /// Name of the referenced attribute
    pub name: String,
    /// Source code location information
    pub location: Location,
}

/// A `{{range name}}…{{end}}` iteration
#[derive(Debug)]
pub struct IterateNode {
    /// Name of the child collection
    pub name: String,
    /// The body rendered once per child
    pub body: Box<Node>,
    /// Source code location information
    pub location: Location,
}

/// An `{{if name}}…{{end}}` conditional
#[derive(Debug)]
pub struct IfNode {
    /// Name of the boolean predicate
    pub name: String,
    /// The body rendered when the predicate holds
    pub body: Box<Node>,
    /// Source code location information
    pub location: Location,
}

/// One step of a `{{name | f | g}}` pipeline
pub struct FunctionCallNode {
    /// Name of the called function
    pub name: String,
    /// The bound function, resolved from the registry at parse time
    pub function: Func,
    /// The node whose rendered value is the function input
    pub arg: Box<Node>,
    /// Source code location information
    pub location: Location,
}

/// An ordered group of nodes; the root of every parse
#[derive(Debug)]
pub struct GroupNode {
    /// The children, in template order
    pub nodes: Vec<Node>,
    /// Source code location information
    pub location: Location,
}

impl Node {
    /// The source location of this node
    pub fn location(&self) -> &Location {
        match self {
            Node::Text(node) => &node.location,
            Node::Attribute(node) => &node.location,
            Node::Iterate(node) => &node.location,
            Node::If(node) => &node.location,
            Node::FunctionCall(node) => &node.location,
            Node::Group(node) => &node.location,
        }
    }
}

impl fmt::Debug for FunctionCallNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // the bound closure has no useful representation
        f.debug_struct("FunctionCallNode")
            .field("name", &self.name)
            .field("arg", &self.arg)
            .field("location", &self.location)
            .finish_non_exhaustive()
    }
}
