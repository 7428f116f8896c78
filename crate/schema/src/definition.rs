use std::collections::HashMap;
use std::sync::Arc;
use stencil_error::{TemplateError, match_strings};
use stencil_ir::ast::Node;

/// A compiled template: renders one value of the bound type
pub type Evaluator<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

type AttributeGetter<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;
type BoolGetter<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;
type ChildValidator<T> = Arc<dyn Fn(&Node) -> (Evaluator<T>, Vec<TemplateError>) + Send + Sync>;

/// The evaluator installed wherever validation failed, so the caller always
/// gets something callable back
fn syntax_error<T>() -> Evaluator<T> {
    Arc::new(|_| "Syntax error".to_string())
}

fn keys_of<V>(map: &HashMap<String, V>) -> Vec<String> {
    let mut keys: Vec<String> = map.keys().cloned().collect();
    keys.sort();
    keys
}

/// Declarative binding of template names to typed accessors over `T`
///
/// Three disjoint namespaces: attributes render as strings, bools gate `if`
/// bodies, and children drive `range` iteration over a sub-schema. Names are
/// unique within one namespace but may repeat across namespaces; the
/// directive shape picks the namespace.
pub struct Definition<T> {
    attributes: HashMap<String, AttributeGetter<T>>,
    bools: HashMap<String, BoolGetter<T>>,
    children: HashMap<String, ChildValidator<T>>,
}

impl<T> Default for Definition<T> {
    fn default() -> Self {
        Definition::new()
    }
}

impl<T> Clone for Definition<T> {
    fn clone(&self) -> Self {
        Definition {
            attributes: self.attributes.clone(),
            bools: self.bools.clone(),
            children: self.children.clone(),
        }
    }
}

impl<T> Definition<T> {
    /// Creates an empty definition
    pub fn new() -> Self {
        Definition {
            attributes: HashMap::new(),
            bools: HashMap::new(),
            children: HashMap::new(),
        }
    }
}

impl<T: 'static> Definition<T> {
    /// Binds `{{name}}` to a string getter
    pub fn add_attribute<G>(mut self, name: &str, getter: G) -> Self
    where
        G: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.attributes.insert(name.to_string(), Arc::new(getter));
        self
    }

    /// Binds `{{if name}}` to a predicate
    pub fn add_bool<G>(mut self, name: &str, getter: G) -> Self
    where
        G: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.bools.insert(name.to_string(), Arc::new(getter));
        self
    }

    /// Binds `{{range name}}` to a child collection with its own schema
    ///
    /// The stored validator compiles the iteration body against
    /// `child_definition` once; the resulting evaluator renders the body for
    /// every child the selector returns, concatenating left to right.
    pub fn add_list<C, S>(
        mut self,
        name: &str,
        child_selector: S,
        child_definition: Definition<C>,
    ) -> Self
    where
        C: 'static,
        S: for<'p> Fn(&'p T) -> Vec<&'p C> + Send + Sync + 'static,
    {
        let child_selector = Arc::new(child_selector);
        let validator: ChildValidator<T> = Arc::new(move |body: &Node| {
            let (getter, errors) = child_definition.validate(body);
            if !errors.is_empty() {
                return (syntax_error(), errors);
            }

            let child_selector = Arc::clone(&child_selector);
            let evaluator: Evaluator<T> = Arc::new(move |parent| {
                let mut ret = String::new();
                for child in child_selector(parent) {
                    ret.push_str(&getter(child));
                }
                ret
            });
            (evaluator, Vec::new())
        });
        self.children.insert(name.to_string(), validator);
        self
    }

    /// Compiles `node` against this definition
    ///
    /// Always returns a callable. Every reference error is collected before
    /// returning; on any error the callable is the `"Syntax error"` stub.
    pub fn validate(&self, node: &Node) -> (Evaluator<T>, Vec<TemplateError>) {
        match node {
            Node::Text(text) => {
                let value = text.value.clone();
                let evaluator: Evaluator<T> = Arc::new(move |_| value.clone());
                (evaluator, Vec::new())
            }
            Node::Attribute(attribute) => match self.attributes.get(&attribute.name) {
                Some(getter) => {
                    let getter = Arc::clone(getter);
                    let evaluator: Evaluator<T> = Arc::new(move |parent| getter(parent));
                    (evaluator, Vec::new())
                }
                None => (
                    syntax_error(),
                    vec![TemplateError::new(
                        attribute.location.clone(),
                        format!(
                            "Missing attribute {}: {}",
                            attribute.name,
                            match_strings(&attribute.name, &keys_of(&self.attributes))
                        ),
                    )],
                ),
            },
            Node::If(check) => {
                let Some(getter) = self.bools.get(&check.name) else {
                    return (
                        syntax_error(),
                        vec![TemplateError::new(
                            check.location.clone(),
                            format!(
                                "Missing bool {}: {}",
                                check.name,
                                match_strings(&check.name, &keys_of(&self.bools))
                            ),
                        )],
                    );
                };

                let (body, errors) = self.validate(&check.body);
                if !errors.is_empty() {
                    return (syntax_error(), errors);
                }

                let getter = Arc::clone(getter);
                let evaluator: Evaluator<T> = Arc::new(move |parent| {
                    if getter(parent) { body(parent) } else { String::new() }
                });
                (evaluator, Vec::new())
            }
            Node::Iterate(iterate) => match self.children.get(&iterate.name) {
                Some(validator) => validator(&iterate.body),
                None => (
                    syntax_error(),
                    vec![TemplateError::new(
                        iterate.location.clone(),
                        format!(
                            "Missing array {}: {}",
                            iterate.name,
                            match_strings(&iterate.name, &keys_of(&self.children))
                        ),
                    )],
                ),
            },
            Node::FunctionCall(call) => {
                let (getter, errors) = self.validate(&call.arg);
                if !errors.is_empty() {
                    return (syntax_error(), errors);
                }

                let function = Arc::clone(&call.function);
                let evaluator: Evaluator<T> = Arc::new(move |parent| function(getter(parent)));
                (evaluator, Vec::new())
            }
            Node::Group(group) => {
                let mut getters = Vec::with_capacity(group.nodes.len());
                let mut errors = Vec::new();
                for child in &group.nodes {
                    let (getter, child_errors) = self.validate(child);
                    getters.push(getter);
                    errors.extend(child_errors);
                }
                if !errors.is_empty() {
                    return (syntax_error(), errors);
                }

                let evaluator: Evaluator<T> = Arc::new(move |parent| {
                    let mut ret = String::new();
                    for getter in &getters {
                        ret.push_str(&getter(parent));
                    }
                    ret
                });
                (evaluator, Vec::new())
            }
        }
    }
}
