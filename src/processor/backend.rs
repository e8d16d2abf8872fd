// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Storage backends.
//!
//! A backend names the annotations it reacts to, decodes their payloads,
//! resolves storage targets and chooses which units to emit. The pipeline in
//! [`Processor`](super::Processor) is shared by all of them.
//!
//! | Backend | Target | Extra unit |
//! |---------|--------|------------|
//! | [`SqliteBackend`] | table | `<Name>Table` when `generateTableClass = true` |
//! | [`ContentResolverBackend`] | URI with per-operation overrides | none |

mod content_resolver;
mod sqlite;

use std::fmt;

pub use content_resolver::{ContentResolverBackend, ContentResolverTypeConfig};
pub use sqlite::{SqliteBackend, SqliteTypeConfig};

use super::{
    generate,
    parse::{AnnotationSet, ColumnPayload, TypeMeta},
    query::{Locator, Operation}
};
use crate::{
    error::ProcessingError,
    host::{ElementHost, ElementId},
    utils::java::JavaFile
};

/// Class-level annotation payload of a backend.
pub trait TypeConfig: fmt::Debug {
    /// Storage target of `operation`.
    fn locator(&self, operation: Operation) -> Locator;
}

/// Runtime library classes referenced by generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeClasses {
    /// Infix of resolver names, e.g. `StorIOSQLite`.
    pub resolver_infix:   &'static str,
    /// Suffix of the mapping class, e.g. `SQLiteTypeMapping`.
    pub mapping_suffix:   &'static str,
    /// Storage facade passed to get resolvers.
    pub storio:           &'static str,
    /// Parameter name of the storage facade.
    pub storio_parameter: &'static str,
    /// Base class of put resolvers.
    pub put_resolver:     &'static str,
    /// Base class of get resolvers.
    pub get_resolver:     &'static str,
    /// Base class of delete resolvers.
    pub delete_resolver:  &'static str,
    /// Insert query builder.
    pub insert_query:     &'static str,
    /// Update query builder.
    pub update_query:     &'static str,
    /// Delete query builder.
    pub delete_query:     &'static str,
    /// Base class of type mappings.
    pub type_mapping:     &'static str
}

impl RuntimeClasses {
    /// `<Name><infix>PutResolver`.
    #[must_use]
    pub fn put_resolver_name(&self, simple_name: &str) -> String {
        format!("{simple_name}{}PutResolver", self.resolver_infix)
    }

    /// `<Name><infix>GetResolver`.
    #[must_use]
    pub fn get_resolver_name(&self, simple_name: &str) -> String {
        format!("{simple_name}{}GetResolver", self.resolver_infix)
    }

    /// `<Name><infix>DeleteResolver`.
    #[must_use]
    pub fn delete_resolver_name(&self, simple_name: &str) -> String {
        format!("{simple_name}{}DeleteResolver", self.resolver_infix)
    }

    /// `<Name><mapping suffix>`.
    #[must_use]
    pub fn mapping_name(&self, simple_name: &str) -> String {
        format!("{simple_name}{}", self.mapping_suffix)
    }
}

/// Capabilities a storage backend plugs into the shared pipeline.
pub trait Backend {
    /// Decoded class-level annotation.
    type Config: TypeConfig;

    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Annotations handled by this backend.
    fn annotations(&self) -> AnnotationSet;

    /// Runtime classes referenced by generated code.
    fn runtime(&self) -> &RuntimeClasses;

    /// Decode and check the class-level annotation of `class`.
    ///
    /// # Errors
    ///
    /// Annotation errors, or a semantic error for missing storage targets.
    fn type_config<H: ElementHost + ?Sized>(
        &self,
        host: &H,
        class: ElementId
    ) -> Result<Self::Config, ProcessingError>;

    /// Decode the column annotation of `column`.
    ///
    /// # Errors
    ///
    /// [`ProcessingError::Annotation`] when the payload is malformed.
    fn column_payload<H: ElementHost + ?Sized>(
        &self,
        host: &H,
        column: ElementId
    ) -> Result<ColumnPayload, ProcessingError>;

    /// Put resolver unit.
    fn generate_put(&self, meta: &TypeMeta<Self::Config>) -> JavaFile {
        generate::put::generate(meta, self.runtime())
    }

    /// Get resolver unit.
    fn generate_get(&self, meta: &TypeMeta<Self::Config>) -> JavaFile {
        generate::get::generate(meta, self.runtime())
    }

    /// Delete resolver unit.
    fn generate_delete(&self, meta: &TypeMeta<Self::Config>) -> JavaFile {
        generate::delete::generate(meta, self.runtime())
    }

    /// Type mapping unit.
    fn generate_mapping(&self, meta: &TypeMeta<Self::Config>) -> JavaFile {
        generate::mapping::generate(meta, self.runtime())
    }

    /// Optional schema unit.
    fn generate_table(&self, _meta: &TypeMeta<Self::Config>) -> Option<JavaFile> {
        None
    }

    /// All units of a class in emission order: put, get, delete, mapping,
    /// then the optional table.
    fn generate_all(&self, meta: &TypeMeta<Self::Config>) -> Vec<JavaFile> {
        let mut files = vec![
            self.generate_put(meta),
            self.generate_get(meta),
            self.generate_delete(meta),
            self.generate_mapping(meta)
        ];
        files.extend(self.generate_table(meta));
        files
    }
}
