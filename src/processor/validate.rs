// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Cross-class validation run once every element of a round is collected.
//!
//! Checks, in order, for every class:
//!
//! 1. at least one column
//! 2. at least one key column
//! 3. a creator when one is needed
//! 4. creator parameters naming exactly the columns

use super::parse::{AnnotationSet, TypeMeta};
use crate::error::ProcessingError;

/// Validate one collected class.
///
/// # Errors
///
/// [`ProcessingError::Semantic`] anchored to the class for the first failed
/// check.
pub fn validate_type<C>(
    meta: &TypeMeta<C>,
    annotations: &AnnotationSet
) -> Result<(), ProcessingError> {
    let type_annotation = annotations.type_name();
    let column_annotation = annotations.column_name();
    let creator_annotation = annotations.creator_name();
    let name = &meta.simple_name;
    let fail = |message: String| Err(ProcessingError::semantic(meta.element, message));

    if meta.columns().is_empty() {
        return fail(format!(
            "Class marked with {type_annotation} annotation should have at least one field or method marked with {column_annotation} annotation: {name}"
        ));
    }

    if meta.key_columns().next().is_none() {
        return fail(format!(
            "Class marked with {type_annotation} annotation should have at least one KEY field or method marked with {column_annotation} annotation: {name}"
        ));
    }

    if meta.needs_creator {
        let Some(creator) = &meta.creator else {
            return fail(format!(
                "Class marked with {type_annotation} annotation needs factory method or constructor marked with {creator_annotation} annotation: {name}"
            ));
        };
        let resolves = meta
            .columns()
            .iter()
            .all(|column| creator.position(&column.real_element_name()).is_some());
        if creator.parameters.len() != meta.columns().len() || !resolves {
            return fail(format!(
                "Class marked with {type_annotation} annotation needs factory method or constructor marked with {creator_annotation} annotation with parameters matching {name} columns"
            ));
        }
    }

    Ok(())
}

/// Validate every class, stopping at the first failure.
///
/// # Errors
///
/// The first error of [`validate_type`].
pub fn validate_all<'a, C: 'a>(
    metas: impl IntoIterator<Item = &'a TypeMeta<C>>,
    annotations: &AnnotationSet
) -> Result<(), ProcessingError> {
    metas
        .into_iter()
        .try_for_each(|meta| validate_type(meta, annotations))
}
