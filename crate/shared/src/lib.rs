//! Shared support code for the stencil template engine
//!
//! Holds the leaf string routines backing the default pipeline functions and
//! the filesystem collaborator traits the parser reaches through when it
//! resolves includes.

pub mod strings;
pub mod vfs;

pub use vfs::{DirectoryInfo, DiskDirectory, DiskVfs, MemoryDirectory, MemoryVfs, VfsRead};
