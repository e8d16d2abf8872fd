// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Java source emitters.
//!
//! Each emitter is a pure function from validated [`TypeMeta`] to one
//! [`JavaFile`]. Emitters never fail; malformed metadata is a pipeline bug.
//!
//! # Generated Units
//!
//! | Emitter | SQLite | ContentResolver |
//! |---------|--------|-----------------|
//! | [`put`] | `<Name>StorIOSQLitePutResolver` | `<Name>StorIOContentResolverPutResolver` |
//! | [`get`] | `<Name>StorIOSQLiteGetResolver` | `<Name>StorIOContentResolverGetResolver` |
//! | [`delete`] | `<Name>StorIOSQLiteDeleteResolver` | `<Name>StorIOContentResolverDeleteResolver` |
//! | [`mapping`] | `<Name>SQLiteTypeMapping` | `<Name>ContentResolverTypeMapping` |
//! | [`table`] | `<Name>Table` (opt-in) | - |

pub mod delete;
pub mod get;
pub mod mapping;
pub mod put;
pub mod table;

use super::parse::TypeMeta;
use crate::utils::java::{ClassName, CodeWriter, JavaFile};

/// Variable holding the mapped instance in generated methods.
pub const OBJECT: &str = "object";

/// Start a unit in the package of `meta`.
fn unit<C>(meta: &TypeMeta<C>, type_name: &str) -> JavaFile {
    JavaFile::new(meta.package.clone(), type_name)
}

/// Open `public class <name> extends <base><<Type>>` with a javadoc line.
fn open_class<C>(
    file: &mut JavaFile,
    meta: &TypeMeta<C>,
    javadoc: &str,
    base: &str
) {
    let base = file.import(&ClassName::parse(base));
    let entity = file.import(&meta.class_name());
    let name = file.type_name().to_string();
    file.code()
        .javadoc(javadoc)
        .begin(format!("public class {name} extends {base}<{entity}>"));
}

/// Write the javadoc and annotations of an overriding method and open its
/// body.
fn open_override(code: &mut CodeWriter, non_null: &str, signature: &str) {
    code.javadoc("{@inheritDoc}")
        .line("@Override")
        .line(format!("@{non_null}"))
        .begin(signature);
}

/// `return <builder>.builder()` followed by indented calls and `.build();`.
fn builder_chain(code: &mut CodeWriter, builder: &str, calls: &[String]) {
    code.line(format!("return {builder}.builder()")).indent();
    for call in calls {
        code.line(call);
    }
    code.statement(".build()").unindent();
}
