// Re-exported modules
pub mod functions;
pub mod lexer;
pub mod parser;
pub mod postprocess;
pub mod token;
#[cfg(feature = "print-tokens")]
pub mod token_printer;

// Re-export common types
pub use functions::{FuncArgument, FuncGenerator, FunctionRegistry, default_functions};
pub use lexer::scan;
pub use parser::parse;
pub use token::{Token, TokenType};
