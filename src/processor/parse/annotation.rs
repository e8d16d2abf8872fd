// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Annotation payload reading.
//!
//! Payloads arrive as host text (`name = "id", key = true`), are tokenised by
//! [`AnnotationMirror::meta_items`](crate::host::AnnotationMirror::meta_items)
//! and decoded into darling structs. Each backend declares its own structs
//! and converts them into the shared shapes defined here.

use darling::{FromMeta, ast::NestedMeta};

use crate::{
    error::ProcessingError,
    host::{ElementHost, ElementId}
};

/// Qualified names of the three annotations a backend reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnotationSet {
    /// Class-level annotation.
    pub type_annotation: &'static str,
    /// Column annotation on fields and methods.
    pub column:          &'static str,
    /// Creator annotation on constructors and factory methods.
    pub creator:         &'static str
}

impl AnnotationSet {
    /// Simple name of the class-level annotation.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        simple(self.type_annotation)
    }

    /// Simple name of the column annotation.
    #[must_use]
    pub fn column_name(&self) -> &'static str {
        simple(self.column)
    }

    /// Simple name of the creator annotation.
    #[must_use]
    pub fn creator_name(&self) -> &'static str {
        simple(self.creator)
    }
}

fn simple(qualified: &str) -> &str {
    qualified.rsplit('.').next().unwrap_or(qualified)
}

/// Column payload before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnPayload {
    /// Persistence name, possibly empty.
    pub name:        String,
    /// Key flag.
    pub key:         bool,
    /// `ignoreNull` flag.
    pub ignore_null: bool,
    /// Declared schema version, possibly out of range.
    pub version:     i64
}

/// Default schema version of a column.
pub fn default_version() -> i64 {
    1
}

/// Decode the payload of annotation `qualified` on `element`.
///
/// # Errors
///
/// [`ProcessingError::Annotation`] when the annotation is missing, its text
/// is not a `key = value` list, or darling rejects a key or value.
pub fn read_payload<T, H>(host: &H, element: ElementId, qualified: &str) -> Result<T, ProcessingError>
where
    T: FromMeta,
    H: ElementHost + ?Sized
{
    let annotation_error = |reason: String| ProcessingError::Annotation {
        element,
        message: format!(
            "Can not read {} on {}: {reason}",
            simple(qualified),
            host.simple_name(element)
        )
    };

    let mirror = host
        .annotation(element, qualified)
        .ok_or_else(|| annotation_error("annotation is missing".to_string()))?;
    let items: Vec<NestedMeta> = mirror
        .meta_items()
        .map_err(|e| annotation_error(e.to_string()))?;
    T::from_list(&items).map_err(|e| annotation_error(e.to_string()))
}
