//! stencil: a compiled text-template engine
//!
//! A template source file plus a typed [`Definition`] compile into an
//! evaluator: a pure function from a value of the declared type to the
//! rendered string. Compilation never throws; every stage accumulates
//! location-tagged diagnostics and hands back a stub evaluator on failure.
//!
//! ```
//! use stencil::{Definition, MemoryDirectory, MemoryVfs, build, default_functions};
//!
//! struct Song {
//!     artist: String,
//!     title: String,
//! }
//!
//! let definition = Definition::<Song>::new()
//!     .add_attribute("artist", |song: &Song| song.artist.clone())
//!     .add_attribute("title", |song: &Song| song.title.clone());
//!
//! let mut vfs = MemoryVfs::new();
//! vfs.add_content("/templates/song.txt", "{{artist}} - {{title | title}}");
//! let templates = MemoryDirectory::new("/templates");
//!
//! let (evaluator, errors) = build(
//!     "/templates/song.txt",
//!     &vfs,
//!     &default_functions(),
//!     &templates,
//!     &definition,
//! );
//! assert!(errors.is_empty());
//!
//! let song = Song {
//!     artist: "ABBA".to_string(),
//!     title: "dancing queen".to_string(),
//! };
//! assert_eq!(evaluator(&song), "ABBA - Dancing Queen");
//! ```

pub mod build;

pub use build::build;
pub use stencil_error::{Location, TemplateError, match_strings, report_errors};
pub use stencil_frontend::{
    FuncArgument, FuncGenerator, FunctionRegistry, Token, TokenType, default_functions, parse,
    scan,
};
pub use stencil_ir::ast::{Func, Node};
pub use stencil_ir::ast_printer::AstPrinter;
pub use stencil_schema::{Definition, Evaluator};
pub use stencil_shared::strings;
pub use stencil_shared::vfs::{
    DirectoryInfo, DiskDirectory, DiskVfs, MemoryDirectory, MemoryVfs, VfsRead,
};
