// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Put resolver emitter.
//!
//! Produces `mapToInsertQuery`, `mapToUpdateQuery` (filtered by key columns)
//! and `mapToContentValues`. Columns with `ignoreNull` are only written when
//! their value is not `null`.

use super::{OBJECT, builder_chain, open_class, open_override, unit};
use crate::{
    processor::{
        backend::{RuntimeClasses, TypeConfig},
        parse::TypeMeta,
        query::{Operation, WhereClause}
    },
    utils::java::{ClassName, JavaFile, string_literal}
};

/// Generate the put resolver of `meta`.
pub fn generate<C: TypeConfig>(meta: &TypeMeta<C>, runtime: &RuntimeClasses) -> JavaFile {
    let mut file = unit(meta, &runtime.put_resolver_name(&meta.simple_name));
    open_class(
        &mut file,
        meta,
        "Generated resolver for Put Operation.",
        runtime.put_resolver
    );

    let non_null = file.import(&meta.non_null);
    let entity = file.import(&meta.class_name());
    let insert_query = file.import(&ClassName::parse(runtime.insert_query));
    let update_query = file.import(&ClassName::parse(runtime.update_query));
    let content_values = file.import(&ClassName::new("android.content", "ContentValues"));
    file.import(&ClassName::new("java.lang", "Override"));

    let where_clause = WhereClause::for_keys(meta.columns(), OBJECT);
    let code = file.code();

    open_override(
        code,
        &non_null,
        &format!("protected {insert_query} mapToInsertQuery(@{non_null} {entity} {OBJECT})")
    );
    builder_chain(
        code,
        &insert_query,
        &[meta.config.locator(Operation::Insert).builder_call()]
    );
    code.end().blank();

    open_override(
        code,
        &non_null,
        &format!("protected {update_query} mapToUpdateQuery(@{non_null} {entity} {OBJECT})")
    );
    builder_chain(
        code,
        &update_query,
        &[
            meta.config.locator(Operation::Update).builder_call(),
            format!(".where({})", where_clause.clause_argument()),
            format!(".whereArgs({})", where_clause.args_argument())
        ]
    );
    code.end().blank();

    open_override(
        code,
        &non_null,
        &format!("public {content_values} mapToContentValues(@{non_null} {entity} {OBJECT})")
    );
    code.statement(format!(
        "{content_values} contentValues = new {content_values}({})",
        meta.columns().len()
    ))
    .blank();
    for column in meta.columns() {
        let value = column.read_on(OBJECT);
        let put = format!("contentValues.put({}, {value})", string_literal(column.name()));
        if column.annotation.ignore_null {
            code.begin(format!("if ({value} != null)"))
                .statement(put)
                .end();
        } else {
            code.statement(put);
        }
    }
    code.blank().statement("return contentValues").end();

    code.end();
    file
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        host::ElementId,
        processor::{
            backend::{
                Backend, ContentResolverBackend, ContentResolverTypeConfig, SqliteBackend,
                SqliteTypeConfig
            },
            parse::{JavaType, column::tests::column}
        }
    };

    fn user<C>(config: C) -> TypeMeta<C> {
        let mut meta = TypeMeta::new(
            "User",
            "com.test",
            ElementId(1),
            config,
            ClassName::new("androidx.annotation", "NonNull")
        );
        let mut id = column("id", "_id", JavaType::Long);
        id.annotation.key = true;
        meta.insert_column(id).unwrap();
        let mut name = column("name", "name", JavaType::String);
        name.annotation.ignore_null = true;
        meta.insert_column(name).unwrap();
        meta
    }

    #[test]
    fn sqlite_put_resolver() {
        let backend = SqliteBackend;
        let file = generate(&user(SqliteTypeConfig::new("users")), backend.runtime());
        assert_eq!(file.qualified_name(), "com.test.UserStorIOSQLitePutResolver");
        assert_eq!(
            file.to_source(),
            "// Generated by storio-codegen. Do not modify!
package com.test;

import android.content.ContentValues;
import androidx.annotation.NonNull;
import com.pushtorefresh.storio3.sqlite.operations.put.DefaultPutResolver;
import com.pushtorefresh.storio3.sqlite.queries.InsertQuery;
import com.pushtorefresh.storio3.sqlite.queries.UpdateQuery;
import java.lang.Override;

/**
 * Generated resolver for Put Operation.
 */
public class UserStorIOSQLitePutResolver extends DefaultPutResolver<User> {
    /**
     * {@inheritDoc}
     */
    @Override
    @NonNull
    protected InsertQuery mapToInsertQuery(@NonNull User object) {
        return InsertQuery.builder()
            .table(\"users\")
            .build();
    }

    /**
     * {@inheritDoc}
     */
    @Override
    @NonNull
    protected UpdateQuery mapToUpdateQuery(@NonNull User object) {
        return UpdateQuery.builder()
            .table(\"users\")
            .where(\"_id = ?\")
            .whereArgs(object.id)
            .build();
    }

    /**
     * {@inheritDoc}
     */
    @Override
    @NonNull
    public ContentValues mapToContentValues(@NonNull User object) {
        ContentValues contentValues = new ContentValues(2);

        contentValues.put(\"_id\", object.id);
        if (object.name != null) {
            contentValues.put(\"name\", object.name);
        }

        return contentValues;
    }
}
"
        );
    }

    #[test]
    fn content_resolver_put_uses_operation_uris() {
        let mut config = ContentResolverTypeConfig::new("content://users");
        config.update_uri = "content://users/update".into();
        let source = generate(&user(config), ContentResolverBackend.runtime()).to_source();
        assert!(source.contains(
            "return InsertQuery.builder()\n            .uri(\"content://users\")\n"
        ));
        assert!(source.contains(
            "return UpdateQuery.builder()\n            .uri(\"content://users/update\")\n"
        ));
        assert!(source.contains(
            "import com.pushtorefresh.storio3.contentresolver.operations.put.DefaultPutResolver;"
        ));
        assert!(source.contains("public class UserStorIOContentResolverPutResolver"));
    }
}
