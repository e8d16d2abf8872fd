// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! ContentResolver backend.
//!
//! `@StorIOContentResolverType` takes a common `uri` and optional
//! `insertUri`, `updateUri` and `deleteUri` overrides. Every operation must
//! end up with a non-empty URI.

use darling::FromMeta;

use super::{Backend, RuntimeClasses, TypeConfig};
use crate::{
    error::ProcessingError,
    host::{ElementHost, ElementId},
    processor::{
        parse::{AnnotationSet, ColumnPayload, read_payload},
        query::{Locator, Operation, resolve_override}
    }
};

const ANNOTATIONS: AnnotationSet = AnnotationSet {
    type_annotation: "com.pushtorefresh.storio3.contentresolver.annotations.StorIOContentResolverType",
    column:          "com.pushtorefresh.storio3.contentresolver.annotations.StorIOContentResolverColumn",
    creator:         "com.pushtorefresh.storio3.contentresolver.annotations.StorIOContentResolverCreator"
};

const RUNTIME: RuntimeClasses = RuntimeClasses {
    resolver_infix:   "StorIOContentResolver",
    mapping_suffix:   "ContentResolverTypeMapping",
    storio:           "com.pushtorefresh.storio3.contentresolver.StorIOContentResolver",
    storio_parameter: "storIOContentResolver",
    put_resolver:     "com.pushtorefresh.storio3.contentresolver.operations.put.DefaultPutResolver",
    get_resolver:     "com.pushtorefresh.storio3.contentresolver.operations.get.DefaultGetResolver",
    delete_resolver:  "com.pushtorefresh.storio3.contentresolver.operations.delete.DefaultDeleteResolver",
    insert_query:     "com.pushtorefresh.storio3.contentresolver.queries.InsertQuery",
    update_query:     "com.pushtorefresh.storio3.contentresolver.queries.UpdateQuery",
    delete_query:     "com.pushtorefresh.storio3.contentresolver.queries.DeleteQuery",
    type_mapping:     "com.pushtorefresh.storio3.contentresolver.ContentResolverTypeMapping"
};

/// Decoded `@StorIOContentResolverType`.
#[derive(Debug, Clone, Default, PartialEq, Eq, FromMeta)]
pub struct ContentResolverTypeConfig {
    /// Common URI.
    #[darling(default)]
    pub uri: String,

    /// Insert override.
    #[darling(default, rename = "insertUri")]
    pub insert_uri: String,

    /// Update override.
    #[darling(default, rename = "updateUri")]
    pub update_uri: String,

    /// Delete override.
    #[darling(default, rename = "deleteUri")]
    pub delete_uri: String
}

impl ContentResolverTypeConfig {
    /// Config with a common URI and no overrides.
    #[must_use]
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            ..Self::default()
        }
    }

    fn specific(&self, operation: Operation) -> &str {
        match operation {
            Operation::Insert => &self.insert_uri,
            Operation::Update => &self.update_uri,
            Operation::Delete => &self.delete_uri
        }
    }

    /// Operations left without any URI.
    #[must_use]
    pub fn missing_uris(&self) -> Vec<Operation> {
        if !self.uri.is_empty() {
            return Vec::new();
        }
        Operation::ALL
            .into_iter()
            .filter(|&op| self.specific(op).is_empty())
            .collect()
    }
}

impl TypeConfig for ContentResolverTypeConfig {
    fn locator(&self, operation: Operation) -> Locator {
        Locator::Uri(resolve_override(&self.uri, self.specific(operation)).to_string())
    }
}

#[derive(Debug, FromMeta)]
struct ContentResolverColumn {
    name: String,

    #[darling(default)]
    key: bool,

    #[darling(default, rename = "ignoreNull")]
    ignore_null: bool
}

impl From<ContentResolverColumn> for ColumnPayload {
    fn from(column: ContentResolverColumn) -> Self {
        Self {
            name:        column.name,
            key:         column.key,
            ignore_null: column.ignore_null,
            version:     1
        }
    }
}

/// Backend generating StorIO ContentResolver resolvers.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentResolverBackend;

impl Backend for ContentResolverBackend {
    type Config = ContentResolverTypeConfig;

    fn name(&self) -> &'static str {
        "content-resolver"
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
        let config: ContentResolverTypeConfig =
            read_payload(host, class, ANNOTATIONS.type_annotation)?;

        let missing = config.missing_uris();
        if let Some(first) = missing.first() {
            let mut message = format!(
                "Uri of {} annotated with {} is empty",
                host.simple_name(class),
                ANNOTATIONS.type_name()
            );
            if missing.len() < Operation::ALL.len() {
                message.push_str(&format!(" for operation {first}"));
            }
            return Err(ProcessingError::semantic(class, message));
        }
        Ok(config)
    }

    fn column_payload<H: ElementHost + ?Sized>(
        &self,
        host: &H,
        column: ElementId
    ) -> Result<ColumnPayload, ProcessingError> {
        let column: ContentResolverColumn = read_payload(host, column, ANNOTATIONS.column)?;
        Ok(column.into())
    }
}
