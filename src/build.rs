use std::sync::Arc;
use stencil_error::{Location, TemplateError};
use stencil_frontend::{FunctionRegistry, lexer, parser};
use stencil_schema::{Definition, Evaluator};
use stencil_shared::vfs::{DirectoryInfo, VfsRead};

/// The evaluator returned when a whole stage failed; callers that ignore the
/// error list still see they lost
fn stage_stub<T>(message: &'static str) -> Evaluator<T> {
    Arc::new(move |_| message.to_string())
}

/// Compiles the template at `path` into an evaluator for `T`
///
/// Runs the pipeline: read through the VFS, scan, post-process and parse
/// (inlining includes), then validate against `definition`. Each stage halts
/// the pipeline on errors; the returned evaluator is then a stub naming the
/// failed stage (`"Lexing failed"`, `"Parsing failed"`, or the validator's
/// `"Syntax error"`). A failed read surfaces as a lexing-stage result with a
/// diagnostic at `(path, -1, -1)`.
///
/// ### Arguments
///
/// * `path` - The template file, also stamped onto token locations
/// * `vfs` - Filesystem the template and its includes are read through
/// * `functions` - Pipeline functions resolvable from the template
/// * `include_dir` - Maps include names to paths
/// * `definition` - The schema the template is checked against
///
/// ### Returns
///
/// The evaluator and every diagnostic collected by the failed stage
pub fn build<T: 'static>(
    path: &str,
    vfs: &dyn VfsRead,
    functions: &FunctionRegistry,
    include_dir: &dyn DirectoryInfo,
    definition: &Definition<T>,
) -> (Evaluator<T>, Vec<TemplateError>) {
    let source = match vfs.read_all_text(path) {
        Ok(source) => source,
        Err(err) => {
            let error = TemplateError::new(
                Location::new(path, -1, -1),
                format!("Unable to read file: {err}"),
            );
            return (stage_stub("Lexing failed"), vec![error]);
        }
    };

    let (tokens, lexer_errors) = lexer::scan(path, &source);
    if !lexer_errors.is_empty() {
        return (stage_stub("Lexing failed"), lexer_errors);
    }

    let (root, parse_errors) =
        parser::parse(tokens, functions, include_dir, &vfs.get_extension(path), vfs);
    if !parse_errors.is_empty() {
        return (stage_stub("Parsing failed"), parse_errors);
    }

    #[cfg(feature = "print-ast")]
    stencil_ir::ast_printer::AstPrinter::new().print(&root);

    definition.validate(&root)
}
