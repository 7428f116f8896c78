//! The pipeline function registry
//!
//! Templates call functions by name in `{{attr | f | g(a,b)}}` pipelines.
//! A registry entry is a *generator*: it receives the call location and the
//! written arguments at parse time, validates them, and returns the bound
//! string function together with any argument errors. Argument errors never
//! abort the parse; the generator still hands back a callable stub.

use std::collections::HashMap;
use std::sync::Arc;
use stencil_error::{Location, TemplateError};
use stencil_ir::ast::Func;
use stencil_shared::strings;

/// An argument to a pipeline function, as written in the template
#[derive(Debug, Clone, PartialEq)]
pub struct FuncArgument {
    /// Where the argument appears
    pub location: Location,
    /// The argument text (string-literal content or identifier lexeme)
    pub argument: String,
}

/// Parses the written arguments of one pipeline call and binds the function
/// applied at evaluation time
pub type FuncGenerator =
    Arc<dyn Fn(&Location, &[FuncArgument]) -> (Func, Vec<TemplateError>) + Send + Sync>;

/// The named pipeline functions a template may call
#[derive(Clone, Default)]
pub struct FunctionRegistry {
    generators: HashMap<String, FuncGenerator>,
}

impl FunctionRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        FunctionRegistry::default()
    }

    /// Registers a generator under `name`, replacing any previous entry
    pub fn register<G>(&mut self, name: &str, generator: G)
    where
        G: Fn(&Location, &[FuncArgument]) -> (Func, Vec<TemplateError>) + Send + Sync + 'static,
    {
        self.generators.insert(name.to_string(), Arc::new(generator));
    }

    /// Looks up the generator registered under `name`
    pub fn get(&self, name: &str) -> Option<&FuncGenerator> {
        self.generators.get(name)
    }

    /// The registered names, sorted for stable diagnostics
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.generators.keys().cloned().collect();
        names.sort();
        names
    }
}

/// The function a failed generator installs so the pipeline stays callable
fn syntax_error_func() -> Func {
    Arc::new(|_| "syntax error".to_string())
}

/// Wraps a plain transform as a generator accepting no arguments
fn no_arguments<F>(f: F) -> impl Fn(&Location, &[FuncArgument]) -> (Func, Vec<TemplateError>)
where
    F: Fn(String) -> String + Send + Sync + Clone + 'static,
{
    move |location, arguments| {
        if !arguments.is_empty() {
            return (
                syntax_error_func(),
                vec![TemplateError::new(location.clone(), "Expected zero arguments")],
            );
        }
        let f = f.clone();
        let func: Func = Arc::new(move |arg| f(arg));
        (func, Vec::new())
    }
}

/// Wraps a transform taking one optional string argument with a default
fn optional_string_argument<F>(
    f: F,
    missing: &'static str,
) -> impl Fn(&Location, &[FuncArgument]) -> (Func, Vec<TemplateError>)
where
    F: Fn(String, &str) -> String + Send + Sync + Clone + 'static,
{
    move |location, arguments| match arguments {
        [] => {
            let f = f.clone();
            let func: Func = Arc::new(move |arg| f(arg, missing));
            (func, Vec::new())
        }
        [chars] => {
            let f = f.clone();
            let chars = chars.argument.clone();
            let func: Func = Arc::new(move |arg| f(arg, &chars));
            (func, Vec::new())
        }
        _ => (
            syntax_error_func(),
            vec![TemplateError::new(
                location.clone(),
                "Expected zero or one string argument",
            )],
        ),
    }
}

/// Wraps a transform taking one optional int argument with a default
fn optional_int_argument<F>(
    f: F,
    missing: i32,
) -> impl Fn(&Location, &[FuncArgument]) -> (Func, Vec<TemplateError>)
where
    F: Fn(String, i32) -> String + Send + Sync + Clone + 'static,
{
    move |location, arguments| match arguments {
        [] => {
            let f = f.clone();
            let func: Func = Arc::new(move |arg| f(arg, missing));
            (func, Vec::new())
        }
        [count] => match count.argument.parse::<i32>() {
            Ok(number) => {
                let f = f.clone();
                let func: Func = Arc::new(move |arg| f(arg, number));
                (func, Vec::new())
            }
            Err(_) => (
                syntax_error_func(),
                vec![
                    TemplateError::new(
                        location.clone(),
                        "This function takes zero or one int argument",
                    ),
                    TemplateError::new(count.location.clone(), "this is not a int"),
                ],
            ),
        },
        _ => (
            syntax_error_func(),
            vec![TemplateError::new(
                location.clone(),
                "Expected zero or one int argument",
            )],
        ),
    }
}

/// Wraps a transform taking exactly two string arguments
fn string_string_argument<F>(
    f: F,
) -> impl Fn(&Location, &[FuncArgument]) -> (Func, Vec<TemplateError>)
where
    F: Fn(String, &str, &str) -> String + Send + Sync + Clone + 'static,
{
    move |location, arguments| {
        let [lhs, rhs] = arguments else {
            return (
                syntax_error_func(),
                vec![TemplateError::new(location.clone(), "Expected two arguments")],
            );
        };
        let f = f.clone();
        let lhs = lhs.argument.clone();
        let rhs = rhs.argument.clone();
        let func: Func = Arc::new(move |arg| f(arg, &lhs, &rhs));
        (func, Vec::new())
    }
}

/// Wraps a transform taking exactly two int arguments
fn int_int_argument<F>(f: F) -> impl Fn(&Location, &[FuncArgument]) -> (Func, Vec<TemplateError>)
where
    F: Fn(String, i32, i32) -> String + Send + Sync + Clone + 'static,
{
    move |location, arguments| {
        let [lhs, rhs] = arguments else {
            return (
                syntax_error_func(),
                vec![TemplateError::new(location.clone(), "Expected two arguments")],
            );
        };
        let Ok(lhs_value) = lhs.argument.parse::<i32>() else {
            return (
                syntax_error_func(),
                vec![TemplateError::new(lhs.location.clone(), "Not a integer")],
            );
        };
        let Ok(rhs_value) = rhs.argument.parse::<i32>() else {
            return (
                syntax_error_func(),
                vec![TemplateError::new(rhs.location.clone(), "Not a integer")],
            );
        };
        let f = f.clone();
        let func: Func = Arc::new(move |arg| f(arg, lhs_value, rhs_value));
        (func, Vec::new())
    }
}

/// The functions every template can call unless the caller replaces them
///
/// | name | arguments | effect |
/// |------|-----------|--------|
/// | `capitalize`, `title` | none | lowercase, then upper-case each word start |
/// | `lower`, `upper` | none | case transform |
/// | `ltrim`, `rtrim`, `trim` | optional char set | strip characters |
/// | `zfill` | optional width (default 3) | left-pad with `'0'` |
/// | `replace` | two strings | literal replacement |
/// | `substr` | start, count | byte-offset substring |
pub fn default_functions() -> FunctionRegistry {
    let mut registry = FunctionRegistry::new();

    registry.register("capitalize", no_arguments(|arg| strings::capitalize(&arg, true)));
    registry.register("lower", no_arguments(|arg| strings::to_lower(&arg)));
    registry.register("upper", no_arguments(|arg| strings::to_upper(&arg)));
    registry.register("title", no_arguments(|arg| strings::capitalize(&arg, true)));

    registry.register(
        "ltrim",
        optional_string_argument(|arg, chars| strings::trim_start(&arg, chars), strings::DEFAULT_SPACE),
    );
    registry.register(
        "rtrim",
        optional_string_argument(|arg, chars| strings::trim_end(&arg, chars), strings::DEFAULT_SPACE),
    );
    registry.register(
        "trim",
        optional_string_argument(|arg, chars| strings::trim(&arg, chars), strings::DEFAULT_SPACE),
    );

    registry.register(
        "zfill",
        optional_int_argument(|arg, count| strings::pad_left(&arg, count.max(0) as usize, '0'), 3),
    );

    registry.register(
        "replace",
        string_string_argument(|arg, from, to| strings::replace(&arg, from, to)),
    );
    registry.register(
        "substr",
        int_int_argument(|arg, start, count| {
            strings::substring(&arg, start.max(0) as usize, count.max(0) as usize)
        }),
    );

    registry
}
