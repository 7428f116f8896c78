//! Filesystem collaborators
//!
//! The engine never touches the filesystem directly: template source and
//! included files are read through [`VfsRead`], and logical include names are
//! mapped to paths through [`DirectoryInfo`]. Disk-backed implementations
//! cover normal use; the in-memory pair backs tests and embedded templates.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// Read-only access to template source files
pub trait VfsRead {
    /// Reads the whole file as text
    fn read_all_text(&self, path: &str) -> io::Result<String>;

    /// Whether a file exists at `path`
    fn exists(&self, path: &str) -> bool;

    /// The extension of `path` including the leading dot, or `""` when the
    /// path has none
    ///
    /// The leading dot is part of the contract: include resolution tries the
    /// bare name first and then the name with this extension appended.
    fn get_extension(&self, path: &str) -> String;
}

/// Maps a logical include name to a path inside one directory
pub trait DirectoryInfo {
    /// The path of the file called `name_and_extension` in this directory
    fn get_file(&self, name_and_extension: &str) -> String;
}

fn extension_of(path: &str) -> String {
    Path::new(path)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}

/// [`VfsRead`] over the real filesystem
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskVfs;

impl DiskVfs {
    pub fn new() -> Self {
        DiskVfs
    }
}

impl VfsRead for DiskVfs {
    fn read_all_text(&self, path: &str) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &str) -> bool {
        Path::new(path).is_file()
    }

    fn get_extension(&self, path: &str) -> String {
        extension_of(path)
    }
}

/// [`DirectoryInfo`] rooted at a real directory
#[derive(Debug, Clone)]
pub struct DiskDirectory {
    root: PathBuf,
}

impl DiskDirectory {
    /// Creates a directory resolver rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DiskDirectory { root: root.into() }
    }
}

impl DirectoryInfo for DiskDirectory {
    fn get_file(&self, name_and_extension: &str) -> String {
        self.root.join(name_and_extension).to_string_lossy().into_owned()
    }
}

/// [`VfsRead`] over an in-memory map of path to content
#[derive(Debug, Default, Clone)]
pub struct MemoryVfs {
    files: HashMap<String, String>,
}

impl MemoryVfs {
    pub fn new() -> Self {
        MemoryVfs::default()
    }

    /// Registers `content` under `path`, replacing any previous content
    pub fn add_content(&mut self, path: impl Into<String>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }
}

impl VfsRead for MemoryVfs {
    fn read_all_text(&self, path: &str) -> io::Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("No such file: {path}"))
        })
    }

    fn exists(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    fn get_extension(&self, path: &str) -> String {
        extension_of(path)
    }
}

/// [`DirectoryInfo`] joining names onto a virtual root with `/`
#[derive(Debug, Clone)]
pub struct MemoryDirectory {
    root: String,
}

impl MemoryDirectory {
    /// Creates a directory resolver for the virtual directory `root`
    pub fn new(root: impl Into<String>) -> Self {
        MemoryDirectory { root: root.into() }
    }
}

impl DirectoryInfo for MemoryDirectory {
    fn get_file(&self, name_and_extension: &str) -> String {
        format!("{}/{}", self.root, name_and_extension)
    }
}
