// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Get resolver emitter.
//!
//! # Strategies
//!
//! Without a creator the instance is default-constructed and every column is
//! assigned (directly, or through its setter). With a creator every column
//! is read into a local first and the locals are passed positionally in
//! creator parameter order.
//!
//! Boxed columns are read only when the cursor value is not `NULL`.
//! Primitive columns are read unconditionally; a `NULL` fails in the cursor.

use super::{OBJECT, open_class, open_override, unit};
use crate::{
    processor::{
        backend::{RuntimeClasses, TypeConfig},
        parse::{ColumnMeta, TypeMeta, column_index}
    },
    utils::java::{ClassName, CodeWriter, JavaFile}
};

/// Generate the get resolver of `meta`.
pub fn generate<C: TypeConfig>(meta: &TypeMeta<C>, runtime: &RuntimeClasses) -> JavaFile {
    let mut file = unit(meta, &runtime.get_resolver_name(&meta.simple_name));
    open_class(
        &mut file,
        meta,
        "Generated resolver for Get Operation.",
        runtime.get_resolver
    );

    let non_null = file.import(&meta.non_null);
    let entity = file.import(&meta.class_name());
    let storio = file.import(&ClassName::parse(runtime.storio));
    let cursor = file.import(&ClassName::new("android.database", "Cursor"));
    file.import(&ClassName::new("java.lang", "Override"));

    let creator = meta.creator.as_ref().filter(|_| meta.needs_creator);
    let locals: Vec<(String, &ColumnMeta)> = match creator {
        Some(_) => meta
            .ordered_columns()
            .into_iter()
            .map(|column| (column.java_type.declare(&mut file), column))
            .collect(),
        None => Vec::new()
    };

    let code = file.code();
    open_override(
        code,
        &non_null,
        &format!(
            "public {entity} mapFromCursor(@{non_null} {storio} {}, @{non_null} {cursor} cursor)",
            runtime.storio_parameter
        )
    );

    match creator {
        Some(creator) => {
            code.blank();
            for (declared, column) in &locals {
                read_into_local(code, declared, column);
            }
            let arguments: Vec<String> = locals
                .iter()
                .map(|(_, column)| column.real_element_name())
                .collect();
            code.blank().statement(format!(
                "{entity} {OBJECT} = {}",
                creator.invocation(&entity, &arguments)
            ));
        }
        None => {
            code.statement(format!("{entity} {OBJECT} = new {entity}()"))
                .blank();
            for column in meta.columns() {
                assign_field(code, column);
            }
        }
    }

    code.blank().statement(format!("return {OBJECT}")).end();
    code.end();
    file
}

/// Null guard around a read of a boxed column.
fn guarded(code: &mut CodeWriter, column: &ColumnMeta, statement: String) {
    if column.java_type.is_boxed() {
        code.begin(format!("if (!cursor.isNull({}))", column_index(column.name())))
            .statement(statement)
            .end();
    } else {
        code.statement(statement);
    }
}

fn assign_field(code: &mut CodeWriter, column: &ColumnMeta) {
    let read = column.java_type.cursor_read(column.name());
    guarded(code, column, column.assign_on(OBJECT, &read));
}

fn read_into_local(code: &mut CodeWriter, declared: &str, column: &ColumnMeta) {
    let local = column.real_element_name();
    let read = column.java_type.cursor_read(column.name());
    if column.java_type.is_boxed() {
        code.statement(format!("{declared} {local} = null"));
        guarded(code, column, format!("{local} = {read}"));
    } else {
        code.statement(format!("{declared} {local} = {read}"));
    }
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
            parse::{ColumnKind, CreatorKind, CreatorMeta, JavaType, column::tests::column}
        }
    };

    fn meta<C>(config: C) -> TypeMeta<C> {
        TypeMeta::new(
            "User",
            "com.test",
            ElementId(1),
            config,
            ClassName::new("android.support.annotation", "NonNull")
        )
    }

    #[test]
    fn default_constructor_path() {
        let mut meta = meta(SqliteTypeConfig::new("users"));
        let mut id = column("id", "_id", JavaType::Integer);
        id.annotation.key = true;
        meta.insert_column(id).unwrap();
        meta.insert_column(column("name", "name", JavaType::String)).unwrap();
        meta.insert_column(column("active", "active", JavaType::Boolean)).unwrap();

        let source = generate(&meta, SqliteBackend.runtime()).to_source();
        assert_eq!(
            source,
            "// Generated by storio-codegen. Do not modify!
package com.test;

import android.database.Cursor;
import android.support.annotation.NonNull;
import com.pushtorefresh.storio3.sqlite.StorIOSQLite;
import com.pushtorefresh.storio3.sqlite.operations.get.DefaultGetResolver;
import java.lang.Override;

/**
 * Generated resolver for Get Operation.
 */
public class UserStorIOSQLiteGetResolver extends DefaultGetResolver<User> {
    /**
     * {@inheritDoc}
     */
    @Override
    @NonNull
    public User mapFromCursor(@NonNull StorIOSQLite storIOSQLite, @NonNull Cursor cursor) {
        User object = new User();

        object.id = cursor.getInt(cursor.getColumnIndex(\"_id\"));
        if (!cursor.isNull(cursor.getColumnIndex(\"name\"))) {
            object.name = cursor.getString(cursor.getColumnIndex(\"name\"));
        }
        object.active = cursor.getInt(cursor.getColumnIndex(\"active\")) == 1;

        return object;
    }
}
"
        );
    }

    #[test]
    fn setter_is_used_when_both_accessors_exist() {
        let mut meta = meta(SqliteTypeConfig::new("users"));
        let mut email = column("email", "email", JavaType::String);
        email.getter = Some("getEmail".into());
        email.setter = Some("setEmail".into());
        meta.insert_column(email).unwrap();
        let source = generate(&meta, SqliteBackend.runtime()).to_source();
        assert!(source.contains(
            "            object.setEmail(cursor.getString(cursor.getColumnIndex(\"email\")));\n"
        ));
    }

    #[test]
    fn creator_path_reads_locals_in_parameter_order() {
        let mut meta = meta(ContentResolverTypeConfig::new("content://users"));
        for (element, name, java_type) in [
            ("getName", "name", JavaType::String),
            ("getId", "_id", JavaType::Long),
            ("isActive", "active", JavaType::BooleanObject)
        ] {
            let mut c = column(element, name, java_type);
            c.kind = ColumnKind::Method;
            meta.insert_column(c).unwrap();
        }
        meta.needs_creator = true;
        meta.creator = Some(CreatorMeta {
            enclosing:  ElementId(1),
            element:    ElementId(7),
            kind:       CreatorKind::Factory {
                name: "create".into()
            },
            parameters: vec!["id".into(), "name".into(), "active".into()]
        });

        let source = generate(&meta, ContentResolverBackend.runtime()).to_source();
        assert!(source.contains("import java.lang.Boolean;\n"));
        assert!(source.contains("import java.lang.String;\n"));
        assert!(source.contains(
            "    public User mapFromCursor(@NonNull StorIOContentResolver storIOContentResolver, @NonNull Cursor cursor) {

        long id = cursor.getLong(cursor.getColumnIndex(\"_id\"));
        String name = null;
        if (!cursor.isNull(cursor.getColumnIndex(\"name\"))) {
            name = cursor.getString(cursor.getColumnIndex(\"name\"));
        }
        Boolean active = null;
        if (!cursor.isNull(cursor.getColumnIndex(\"active\"))) {
            active = cursor.getInt(cursor.getColumnIndex(\"active\")) == 1;
        }

        User object = User.create(id, name, active);

        return object;
    }
"
        ));
    }
}
