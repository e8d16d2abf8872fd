// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! WHERE clauses and storage targets.
//!
//! # Key Clause
//!
//! ```text
//! key columns: _id, author        variable: object
//! clause:      "_id = ? AND author = ?"
//! args:        object.id, object.getAuthor()
//! ```
//!
//! Columns are taken in insertion order. Without key columns the clause is
//! empty and emitters render `null`.

use std::fmt;

use super::parse::ColumnMeta;
use crate::utils::java::string_literal;

/// Parameterised key clause with its argument expressions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WhereClause {
    /// `col = ?` terms joined with ` AND `.
    pub clause: String,
    /// Argument expressions, one per `?`.
    pub args:   Vec<String>
}

impl WhereClause {
    /// Build the clause over the key columns of `columns`, reading values
    /// from `variable`.
    #[must_use]
    pub fn for_keys<'a>(columns: impl IntoIterator<Item = &'a ColumnMeta>, variable: &str) -> Self {
        let (terms, args): (Vec<_>, Vec<_>) = columns
            .into_iter()
            .filter(|c| c.is_key())
            .map(|c| (format!("{} = ?", c.name()), c.read_on(variable)))
            .unzip();
        Self {
            clause: terms.join(" AND "),
            args
        }
    }

    /// No key column contributed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clause.is_empty()
    }

    /// Argument expressions joined with `, `.
    #[must_use]
    pub fn args_joined(&self) -> String {
        self.args.join(", ")
    }

    /// Argument of a `.where(...)` builder call.
    #[must_use]
    pub fn clause_argument(&self) -> String {
        if self.is_empty() {
            "null".to_string()
        } else {
            string_literal(&self.clause)
        }
    }

    /// Arguments of a `.whereArgs(...)` builder call.
    #[must_use]
    pub fn args_argument(&self) -> String {
        if self.is_empty() {
            "null".to_string()
        } else {
            self.args_joined()
        }
    }
}

/// Write operation a target is resolved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Insert.
    Insert,
    /// Update.
    Update,
    /// Delete.
    Delete
}

impl Operation {
    /// All operations in declaration order.
    pub const ALL: [Self; 3] = [Self::Insert, Self::Update, Self::Delete];

    /// Lower-case name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Insert => "insert",
            Self::Update => "update",
            Self::Delete => "delete"
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Storage target of an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    /// SQLite table.
    Table(String),
    /// ContentResolver URI.
    Uri(String)
}

impl Locator {
    /// Builder call selecting the target, e.g. `.table("users")`.
    #[must_use]
    pub fn builder_call(&self) -> String {
        match self {
            Self::Table(table) => format!(".table({})", string_literal(table)),
            Self::Uri(uri) => format!(".uri({})", string_literal(uri))
        }
    }
}

/// Operation-specific value when non-empty, otherwise the common one.
#[must_use]
pub fn resolve_override<'a>(common: &'a str, specific: &'a str) -> &'a str {
    if specific.is_empty() { common } else { specific }
}
