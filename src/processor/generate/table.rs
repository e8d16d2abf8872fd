// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Schema holder emitter (SQLite only).
//!
//! # Output
//!
//! ```text
//! public final class UserTable {
//!     public static final String NAME = "users";
//!     public static final String ID_COLUMN = "_id";
//!     private UserTable() {}
//!     public static void createTable(SQLiteDatabase db) { ... }
//!     public static void updateTable(SQLiteDatabase db, int oldVersion) { ... }
//! }
//! ```
//!
//! A single key column gets an inline `PRIMARY KEY`; several key columns
//! produce a trailing `PRIMARY KEY(a, b)` clause instead. Columns introduced
//! after version 1 are added by `updateTable` in ascending version order.

use super::unit;
use crate::{
    processor::parse::{ColumnMeta, TypeMeta},
    utils::{
        java::{ClassName, CodeWriter, JavaFile, string_literal},
        naming
    }
};

const DB: &str = "db";
const OLD_VERSION: &str = "oldVersion";
const CONTINUATION_INDENT: usize = 4;

/// Generate `<Name>Table` for `meta` stored in `table`.
pub fn generate<C>(meta: &TypeMeta<C>, table: &str) -> JavaFile {
    let name = format!("{}Table", meta.simple_name);
    let mut file = unit(meta, &name);
    let string = file.import(&ClassName::new("java.lang", "String"));
    let database = file.import(&ClassName::new("android.database.sqlite", "SQLiteDatabase"));

    let code = file.code();
    code.begin(format!("public final class {name}"))
        .statement(format!(
            "public static final {string} NAME = {}",
            string_literal(table)
        ))
        .blank();
    for column in meta.columns() {
        code.statement(format!(
            "public static final {string} {}_COLUMN = {}",
            naming::constant_case(&column.element_name),
            string_literal(column.name())
        ))
        .blank();
    }
    code.begin(format!("private {name}()")).end().blank();

    code.begin(format!("public static void createTable({database} {DB})"));
    exec_sql(code, &create_table(table, meta.columns()));
    code.end().blank();

    code.begin(format!(
        "public static void updateTable({database} {DB}, int {OLD_VERSION})"
    ));
    let mut added: Vec<&ColumnMeta> = meta
        .columns()
        .iter()
        .filter(|c| c.annotation.version > 1)
        .collect();
    added.sort_by_key(|c| c.annotation.version);
    for column in added {
        code.begin(format!("if ({OLD_VERSION} < {})", column.annotation.version));
        exec_sql(
            code,
            &format!(
                "ALTER TABLE {table} ADD COLUMN {};",
                column_definition(column, false)
            )
        );
        code.end();
    }
    code.end();

    code.end();
    file
}

/// `CREATE TABLE` statement with one definition per line.
#[must_use]
pub fn create_table(table: &str, columns: &[ColumnMeta]) -> String {
    let keys: Vec<&str> = columns
        .iter()
        .filter(|c| c.is_key())
        .map(ColumnMeta::name)
        .collect();
    let inline_key = keys.len() == 1;

    let mut definitions: Vec<String> = columns
        .iter()
        .map(|c| column_definition(c, inline_key && c.is_key()))
        .collect();
    if keys.len() > 1 {
        definitions.push(format!("PRIMARY KEY({})", keys.join(", ")));
    }
    format!("CREATE TABLE {table} ({});", definitions.join(",\n"))
}

fn column_definition(column: &ColumnMeta, primary_key: bool) -> String {
    let mut definition = format!("{} {}", column.name(), column.java_type.storage().as_sql());
    if column.not_null {
        definition.push_str(" NOT NULL");
    }
    if primary_key {
        definition.push_str(" PRIMARY KEY");
    }
    definition
}

/// `db.execSQL(...)`, splitting multi-line SQL into concatenated literals.
fn exec_sql(code: &mut CodeWriter, sql: &str) {
    let literals: Vec<String> = sql.split_inclusive('\n').map(string_literal).collect();
    let Some((first, rest)) = literals.split_first() else {
        return;
    };
    match rest.split_last() {
        None => {
            code.statement(format!("{DB}.execSQL({first})"));
        }
        Some((last, middle)) => {
            code.line(format!("{DB}.execSQL({first}"));
            for _ in 0..CONTINUATION_INDENT {
                code.indent();
            }
            for literal in middle {
                code.line(format!("+ {literal}"));
            }
            code.statement(format!("+ {last})"));
            for _ in 0..CONTINUATION_INDENT {
                code.unindent();
            }
        }
    }
}
