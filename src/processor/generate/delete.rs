// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Delete resolver emitter.

use super::{OBJECT, builder_chain, open_class, open_override, unit};
use crate::{
    processor::{
        backend::{RuntimeClasses, TypeConfig},
        parse::TypeMeta,
        query::{Operation, WhereClause}
    },
    utils::java::{ClassName, JavaFile}
};

/// Generate the delete resolver of `meta`.
pub fn generate<C: TypeConfig>(meta: &TypeMeta<C>, runtime: &RuntimeClasses) -> JavaFile {
    let mut file = unit(meta, &runtime.delete_resolver_name(&meta.simple_name));
    open_class(
        &mut file,
        meta,
        "Generated resolver for Delete Operation.",
        runtime.delete_resolver
    );

    let non_null = file.import(&meta.non_null);
    let entity = file.import(&meta.class_name());
    let delete_query = file.import(&ClassName::parse(runtime.delete_query));
    file.import(&ClassName::new("java.lang", "Override"));

    let where_clause = WhereClause::for_keys(meta.columns(), OBJECT);
    let code = file.code();
    open_override(
        code,
        &non_null,
        &format!("protected {delete_query} mapToDeleteQuery(@{non_null} {entity} {OBJECT})")
    );
    builder_chain(
        code,
        &delete_query,
        &[
            meta.config.locator(Operation::Delete).builder_call(),
            format!(".where({})", where_clause.clause_argument()),
            format!(".whereArgs({})", where_clause.args_argument())
        ]
    );
    code.end();
    code.end();
    file
}
