// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Minimal Java source writer.
//!
//! Emitters write code with simple type names and let [`JavaFile`] collect
//! the imports:
//!
//! ```rust,ignore
//! let mut file = JavaFile::new("com.test", "UserTable");
//! let string = file.import(&ClassName::new("java.lang", "String"));
//! file.code()
//!     .begin("public final class UserTable")
//!     .statement(format!("public static final {string} NAME = \"users\""))
//!     .end();
//! ```

use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
    path::PathBuf
};

use super::marker;

/// Indentation unit of generated code.
pub const INDENT: &str = "    ";

/// Qualified Java class name split into package and simple name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClassName {
    package: String,
    simple:  String
}

impl ClassName {
    /// Create a class name from its parts.
    #[must_use]
    pub fn new(package: impl Into<String>, simple: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            simple:  simple.into()
        }
    }

    /// Split a qualified name at its last dot.
    #[must_use]
    pub fn parse(qualified: &str) -> Self {
        match qualified.rsplit_once('.') {
            Some((package, simple)) => Self::new(package, simple),
            None => Self::new("", qualified)
        }
    }

    /// Package part (empty for the default package).
    #[must_use]
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Simple name.
    #[must_use]
    pub fn simple(&self) -> &str {
        &self.simple
    }

    /// Fully qualified name.
    #[must_use]
    pub fn qualified(&self) -> String {
        if self.package.is_empty() {
            self.simple.clone()
        } else {
            format!("{}.{}", self.package, self.simple)
        }
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.qualified())
    }
}

/// Indentation-aware line buffer.
#[derive(Debug, Clone, Default)]
pub struct CodeWriter {
    out:   String,
    depth: usize
}

impl CodeWriter {
    /// Write one line at the current depth.
    pub fn line(&mut self, text: impl AsRef<str>) -> &mut Self {
        let text = text.as_ref();
        if !text.is_empty() {
            for _ in 0..self.depth {
                self.out.push_str(INDENT);
            }
            self.out.push_str(text);
        }
        self.out.push('\n');
        self
    }

    /// Write an empty line.
    pub fn blank(&mut self) -> &mut Self {
        self.line("")
    }

    /// Write a statement terminated with `;`.
    pub fn statement(&mut self, text: impl AsRef<str>) -> &mut Self {
        self.line(format!("{};", text.as_ref()))
    }

    /// Open a block: `header {`.
    pub fn begin(&mut self, header: impl AsRef<str>) -> &mut Self {
        self.line(format!("{} {{", header.as_ref()));
        self.depth += 1;
        self
    }

    /// Close the innermost block.
    pub fn end(&mut self) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self.line("}")
    }

    /// Increase depth without opening a block (builder-chain continuation).
    pub fn indent(&mut self) -> &mut Self {
        self.depth += 1;
        self
    }

    /// Undo [`CodeWriter::indent`].
    pub fn unindent(&mut self) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self
    }

    /// Write a javadoc comment; `text` may span several lines.
    pub fn javadoc(&mut self, text: &str) -> &mut Self {
        self.line("/**");
        for line in text.lines() {
            if line.is_empty() {
                self.line(" *");
            } else {
                self.line(format!(" * {line}"));
            }
        }
        self.line(" */")
    }

    /// Written text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.out
    }
}

/// One generated compilation unit.
#[derive(Debug, Clone)]
pub struct JavaFile {
    package:   String,
    type_name: String,
    imports:   BTreeSet<String>,
    names:     BTreeMap<String, String>,
    code:      CodeWriter
}

impl JavaFile {
    /// Start a file declaring the top-level type `type_name` in `package`.
    #[must_use]
    pub fn new(package: impl Into<String>, type_name: impl Into<String>) -> Self {
        let package = package.into();
        let type_name = type_name.into();
        let mut names = BTreeMap::new();
        names.insert(
            type_name.clone(),
            ClassName::new(package.clone(), type_name.clone()).qualified()
        );
        Self {
            package,
            type_name,
            imports: BTreeSet::new(),
            names,
            code: CodeWriter::default()
        }
    }

    /// Reference `class` from this file and return the name to write.
    ///
    /// Classes outside the file's package are imported. If the simple name
    /// is already taken by another class the qualified name is returned.
    pub fn import(&mut self, class: &ClassName) -> String {
        let qualified = class.qualified();
        match self.names.get(class.simple()) {
            Some(existing) if *existing == qualified => {}
            Some(_) => return qualified,
            None => {
                self.names
                    .insert(class.simple().to_string(), qualified.clone());
                if !class.package().is_empty() && class.package() != self.package {
                    self.imports.insert(qualified);
                }
            }
        }
        class.simple().to_string()
    }

    /// Body writer.
    pub fn code(&mut self) -> &mut CodeWriter {
        &mut self.code
    }

    /// Package of the file.
    #[must_use]
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Simple name of the declared type.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Qualified name of the declared type.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        ClassName::new(self.package.clone(), self.type_name.clone()).qualified()
    }

    /// Path of the file relative to a source root.
    #[must_use]
    pub fn relative_path(&self) -> PathBuf {
        let mut path = PathBuf::new();
        for segment in self.package.split('.').filter(|s| !s.is_empty()) {
            path.push(segment);
        }
        path.push(format!("{}.java", self.type_name));
        path
    }

    /// Render the complete source text.
    #[must_use]
    pub fn to_source(&self) -> String {
        let mut source = String::new();
        source.push_str(marker::generated());
        source.push('\n');
        if !self.package.is_empty() {
            source.push_str(&format!("package {};\n\n", self.package));
        }
        if !self.imports.is_empty() {
            for import in &self.imports {
                source.push_str(&format!("import {import};\n"));
            }
            source.push('\n');
        }
        source.push_str(self.code.as_str());
        source
    }
}

/// Quote `value` as a Java string literal.
#[must_use]
pub fn string_literal(value: &str) -> String {
    let mut literal = String::with_capacity(value.len() + 2);
    literal.push('"');
    for c in value.chars() {
        match c {
            '"' => literal.push_str("\\\""),
            '\\' => literal.push_str("\\\\"),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            '\t' => literal.push_str("\\t"),
            c if c.is_control() => literal.push_str(&format!("\\u{:04x}", c as u32)),
            c => literal.push(c)
        }
    }
    literal.push('"');
    literal
}
