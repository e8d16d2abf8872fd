// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! SQLite backend.
//!
//! # Annotations
//!
//! | Annotation | Keys |
//! |------------|------|
//! | `@StorIOSQLiteType` | `table` (required), `generateTableClass` |
//! | `@StorIOSQLiteColumn` | `name` (required), `key`, `ignoreNull`, `version` |
//! | `@StorIOSQLiteCreator` | none |

use darling::FromMeta;

use super::{Backend, RuntimeClasses, TypeConfig};
use crate::{
    error::ProcessingError,
    host::{ElementHost, ElementId},
    processor::{
        generate,
        parse::{AnnotationSet, ColumnPayload, TypeMeta, default_version, read_payload},
        query::{Locator, Operation}
    },
    utils::java::JavaFile
};

const ANNOTATIONS: AnnotationSet = AnnotationSet {
    type_annotation: "com.pushtorefresh.storio3.sqlite.annotations.StorIOSQLiteType",
    column:          "com.pushtorefresh.storio3.sqlite.annotations.StorIOSQLiteColumn",
    creator:         "com.pushtorefresh.storio3.sqlite.annotations.StorIOSQLiteCreator"
};

const RUNTIME: RuntimeClasses = RuntimeClasses {
    resolver_infix:   "StorIOSQLite",
    mapping_suffix:   "SQLiteTypeMapping",
    storio:           "com.pushtorefresh.storio3.sqlite.StorIOSQLite",
    storio_parameter: "storIOSQLite",
    put_resolver:     "com.pushtorefresh.storio3.sqlite.operations.put.DefaultPutResolver",
    get_resolver:     "com.pushtorefresh.storio3.sqlite.operations.get.DefaultGetResolver",
    delete_resolver:  "com.pushtorefresh.storio3.sqlite.operations.delete.DefaultDeleteResolver",
    insert_query:     "com.pushtorefresh.storio3.sqlite.queries.InsertQuery",
    update_query:     "com.pushtorefresh.storio3.sqlite.queries.UpdateQuery",
    delete_query:     "com.pushtorefresh.storio3.sqlite.queries.DeleteQuery",
    type_mapping:     "com.pushtorefresh.storio3.sqlite.SQLiteTypeMapping"
};

/// Decoded `@StorIOSQLiteType`.
#[derive(Debug, Clone, PartialEq, Eq, FromMeta)]
pub struct SqliteTypeConfig {
    /// Table name.
    pub table: String,

    /// Emit the `<Name>Table` schema holder.
    #[darling(default, rename = "generateTableClass")]
    pub generate_table_class: bool
}

impl SqliteTypeConfig {
    /// Config for `table` without a schema holder.
    #[must_use]
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table:                table.into(),
            generate_table_class: false
        }
    }
}

impl TypeConfig for SqliteTypeConfig {
    fn locator(&self, _operation: Operation) -> Locator {
        Locator::Table(self.table.clone())
    }
}

#[derive(Debug, FromMeta)]
struct SqliteColumn {
    name: String,

    #[darling(default)]
    key: bool,

    #[darling(default, rename = "ignoreNull")]
    ignore_null: bool,

    #[darling(default = "default_version")]
    version: i64
}

impl From<SqliteColumn> for ColumnPayload {
    fn from(column: SqliteColumn) -> Self {
        Self {
            name:        column.name,
            key:         column.key,
            ignore_null: column.ignore_null,
            version:     column.version
        }
    }
}

/// Backend generating StorIO SQLite resolvers.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteBackend;

impl Backend for SqliteBackend {
    type Config = SqliteTypeConfig;

    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn annotations(&self) -> AnnotationSet {
        ANNOTATIONS
    }

    fn runtime(&self) -> &RuntimeClasses {
        &RUNTIME
    }

    fn type_config<H: ElementHost + ?Sized>(
        &self,
        host: &H,
        class: ElementId
    ) -> Result<Self::Config, ProcessingError> {
        let config: SqliteTypeConfig = read_payload(host, class, ANNOTATIONS.type_annotation)?;
        if config.table.is_empty() {
            return Err(ProcessingError::semantic(
                class,
                format!(
                    "Table name of {} annotated with {} is empty",
                    host.simple_name(class),
                    ANNOTATIONS.type_name()
                )
            ));
        }
        Ok(config)
    }

    fn column_payload<H: ElementHost + ?Sized>(
        &self,
        host: &H,
        column: ElementId
    ) -> Result<ColumnPayload, ProcessingError> {
        let column: SqliteColumn = read_payload(host, column, ANNOTATIONS.column)?;
        Ok(column.into())
    }

    fn generate_table(&self, meta: &TypeMeta<Self::Config>) -> Option<JavaFile> {
        meta.config
            .generate_table_class
            .then(|| generate::table::generate(meta, &meta.config.table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::ElementModel;

    fn class_with(annotation: &str) -> (ElementModel, ElementId) {
        let mut model = ElementModel::default();
        let pkg = model.package("com.test");
        let class = model.class(pkg, "User");
        model.annotate(class, annotation).unwrap();
        (model, class)
    }

    #[test]
    fn reads_type_config() {
        let (model, class) = class_with(
            "@com.pushtorefresh.storio3.sqlite.annotations.StorIOSQLiteType(table = \"users\", generateTableClass = true)"
        );
        let config = SqliteBackend.type_config(&model, class).unwrap();
        assert_eq!(config.table, "users");
        assert!(config.generate_table_class);
        assert_eq!(
            config.locator(Operation::Delete),
            Locator::Table("users".into())
        );
    }

    #[test]
    fn table_class_is_opt_in() {
        let (model, class) = class_with(
            "@com.pushtorefresh.storio3.sqlite.annotations.StorIOSQLiteType(table = \"users\")"
        );
        let config = SqliteBackend.type_config(&model, class).unwrap();
        assert_eq!(config, SqliteTypeConfig::new("users"));
    }

    #[test]
    fn empty_table_is_rejected() {
        let (model, class) = class_with(
            "@com.pushtorefresh.storio3.sqlite.annotations.StorIOSQLiteType(table = \"\")"
        );
        let err = SqliteBackend.type_config(&model, class).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Table name of User annotated with StorIOSQLiteType is empty"
        );
    }

    #[test]
    fn reads_column_payload() {
        let (mut model, class) = class_with(
            "@com.pushtorefresh.storio3.sqlite.annotations.StorIOSQLiteType(table = \"users\")"
        );
        let field = model.field(class, "email", "java.lang.String");
        model
            .annotate(
                field,
                "@com.pushtorefresh.storio3.sqlite.annotations.StorIOSQLiteColumn(name = \"email\", version = 2, ignoreNull = true)"
            )
            .unwrap();
        let payload = SqliteBackend.column_payload(&model, field).unwrap();
        assert_eq!(payload.name, "email");
        assert_eq!(payload.version, 2);
        assert!(payload.ignore_null);
        assert!(!payload.key);
    }
}
