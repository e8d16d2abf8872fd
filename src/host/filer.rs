// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Destinations for generated compilation units.

use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf}
};

use crate::utils::java::JavaFile;

/// Sink for generated source files.
///
/// Each call writes one complete unit; nothing stays open between calls.
pub trait Filer {
    /// Write `file`.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when the unit cannot be stored.
    fn write(&mut self, file: &JavaFile) -> io::Result<()>;
}

/// Keeps generated sources in memory, keyed by qualified type name.
#[derive(Debug, Clone, Default)]
pub struct MemoryFiler {
    files: BTreeMap<String, String>
}

impl MemoryFiler {
    /// Create an empty filer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Source of the unit declaring `qualified_name`.
    #[must_use]
    pub fn get(&self, qualified_name: &str) -> Option<&str> {
        self.files.get(qualified_name).map(String::as_str)
    }

    /// Qualified names of all written units, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    /// Number of written units.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether nothing was written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl Filer for MemoryFiler {
    fn write(&mut self, file: &JavaFile) -> io::Result<()> {
        let name = file.qualified_name();
        if self.files.contains_key(&name) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("Attempt to recreate a file for type {name}")
            ));
        }
        self.files.insert(name, file.to_source());
        Ok(())
    }
}

/// Writes sources below a root directory following the package layout.
#[derive(Debug, Clone)]
pub struct DirFiler {
    root: PathBuf
}

impl DirFiler {
    /// Create a filer rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Filer for DirFiler {
    fn write(&mut self, file: &JavaFile) -> io::Result<()> {
        let path = self.root.join(file.relative_path());
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, file.to_source())?;
        tracing::debug!(path = %path.display(), "wrote generated source");
        Ok(())
    }
}
