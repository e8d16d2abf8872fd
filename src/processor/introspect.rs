// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Per-element checks and metadata extraction.
//!
//! # Rules
//!
//! | Element | Rule |
//! |---------|------|
//! | class | must be a class declared directly in a package |
//! | column | enclosing class annotated (or skipped when only its parent is) |
//! | column | private method rejected, private field needs a getter |
//! | column | final field needs a getter, method must be parameterless |
//! | column | supported type, non-empty name, `ignoreNull` only on boxed types |
//! | creator | enclosing class annotated, not private |
//! | creator | factory methods static and returning the class |
//!
//! Getters and setters found for private fields are cached in
//! [`ProcessingContext`] so the lookup happens once per field.

use std::collections::HashMap;

use super::parse::{
    AnnotationSet, ColumnAnnotation, ColumnKind, ColumnMeta, ColumnPayload, CreatorKind,
    CreatorMeta, JavaType
};
use crate::{
    error::ProcessingError,
    host::{ElementHost, ElementId, ElementKind, Modifier},
    utils::naming
};

/// Non-null marker annotations recognised on columns.
pub const NON_NULL_ANNOTATIONS: [&str; 2] =
    ["android.support.annotation.NonNull", "androidx.annotation.NonNull"];

/// Identity of a field that stays stable across rounds and hosts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct FieldKey {
    class: String,
    field: String,
    ty:    Option<String>
}

impl FieldKey {
    fn of<H: ElementHost + ?Sized>(host: &H, field: ElementId) -> Self {
        let class = host
            .enclosing(field)
            .map(|class| format!("{}.{}", host.package_of(class), host.simple_name(class)))
            .unwrap_or_default();
        Self {
            class,
            field: host.simple_name(field).to_string(),
            ty: host.type_of(field).map(ToString::to_string)
        }
    }
}

/// Accessor cache kept by a processor across rounds.
///
/// Entries are keyed by the qualified enclosing class, field name and field
/// type, never by [`ElementId`], so a processor reused over another host
/// does not pick up accessors of unrelated elements at the same position.
#[derive(Debug, Clone, Default)]
pub struct ProcessingContext {
    getters: HashMap<FieldKey, String>,
    setters: HashMap<FieldKey, String>
}

impl ProcessingContext {
    /// Create an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached getter of `field`.
    #[must_use]
    pub fn getter<H: ElementHost + ?Sized>(&self, host: &H, field: ElementId) -> Option<&str> {
        self.getters
            .get(&FieldKey::of(host, field))
            .map(String::as_str)
    }

    /// Cached setter of `field`.
    #[must_use]
    pub fn setter<H: ElementHost + ?Sized>(&self, host: &H, field: ElementId) -> Option<&str> {
        self.setters
            .get(&FieldKey::of(host, field))
            .map(String::as_str)
    }

    /// Look up a getter for `field` among its siblings and cache it.
    ///
    /// Accepted names are `getX`, `isX`, and `x` itself for `isX`
    /// properties. The method must be non-private, non-static,
    /// parameterless and return the field's type. The last match wins.
    pub fn find_getter<H: ElementHost + ?Sized>(&mut self, host: &H, field: ElementId) -> bool {
        let key = FieldKey::of(host, field);
        if self.getters.contains_key(&key) {
            return true;
        }
        let name = host.simple_name(field);
        let capitalized = naming::capitalize(name);
        let candidates = [format!("get{capitalized}"), format!("is{capitalized}")];
        let field_type = host.type_of(field);

        let mut getter = None;
        for sibling in siblings(host, field) {
            let element = host.element(sibling);
            let named = candidates.contains(&element.name)
                || (element.name == name && naming::is_boolean_property(name));
            if element.kind == ElementKind::Method
                && named
                && !element.has_modifier(Modifier::Private)
                && !element.has_modifier(Modifier::Static)
                && element.parameters.is_empty()
                && element.ty.as_ref() == field_type
            {
                getter = Some(element.name.clone());
            }
        }

        match getter {
            Some(getter) => {
                tracing::debug!(field = name, getter = %getter, "resolved getter");
                self.getters.insert(key, getter);
                true
            }
            None => false
        }
    }

    /// Look up `setX` for a non-final `field` and cache it.
    pub fn find_setter<H: ElementHost + ?Sized>(&mut self, host: &H, field: ElementId) -> bool {
        let key = FieldKey::of(host, field);
        if self.setters.contains_key(&key) {
            return true;
        }
        if host.modifiers(field).contains(&Modifier::Final) {
            return false;
        }
        let name = host.simple_name(field);
        let expected = format!("set{}", naming::capitalize(name));
        let field_type = host.type_of(field);

        let setter = siblings(host, field).into_iter().rev().find(|&sibling| {
            let element = host.element(sibling);
            element.kind == ElementKind::Method
                && element.name == expected
                && !element.has_modifier(Modifier::Private)
                && !element.has_modifier(Modifier::Static)
                && element.parameters.len() == 1
                && Some(&element.parameters[0].ty) == field_type
        });

        match setter {
            Some(setter) => {
                self.setters
                    .insert(key, host.simple_name(setter).to_string());
                true
            }
            None => false
        }
    }
}

fn siblings<H: ElementHost + ?Sized>(host: &H, id: ElementId) -> Vec<ElementId> {
    host.enclosing(id)
        .map(|parent| host.enclosed(parent))
        .unwrap_or_default()
}

/// Check a class carrying the class-level annotation.
///
/// # Errors
///
/// [`ProcessingError::Structural`] for non-classes and nested classes.
pub fn validate_class<H: ElementHost + ?Sized>(
    host: &H,
    class: ElementId,
    annotations: &AnnotationSet
) -> Result<(), ProcessingError> {
    let name = host.simple_name(class);
    if host.kind(class) != ElementKind::Class {
        return Err(ProcessingError::structural(
            class,
            format!(
                "{} can be applied only to classes not to {name}",
                annotations.type_name()
            )
        ));
    }
    let top_level = host
        .enclosing(class)
        .is_some_and(|parent| host.kind(parent) == ElementKind::Package);
    if !top_level {
        return Err(ProcessingError::structural(
            class,
            format!(
                "{} can't be applied to nested or inner classes: {name}",
                annotations.type_name()
            )
        ));
    }
    Ok(())
}

/// Check a field or method carrying the column annotation.
///
/// Resolves and caches accessors of private fields on the way.
///
/// # Errors
///
/// [`ProcessingError::SkipAnnotatedParent`] when only the superclass of the
/// enclosing class is annotated, [`ProcessingError::Semantic`] when the
/// enclosing class is not annotated at all and
/// [`ProcessingError::Structural`] for inaccessible members.
pub fn validate_column<H: ElementHost + ?Sized>(
    context: &mut ProcessingContext,
    host: &H,
    column: ElementId,
    annotations: &AnnotationSet
) -> Result<(), ProcessingError> {
    let column_annotation = annotations.column_name();
    let type_annotation = annotations.type_name();
    let name = host.simple_name(column).to_string();

    let Some(class) = host
        .enclosing(column)
        .filter(|&parent| host.kind(parent) == ElementKind::Class)
    else {
        let parent = host
            .enclosing(column)
            .map(|parent| host.simple_name(parent).to_string())
            .unwrap_or_default();
        return Err(ProcessingError::structural(
            column,
            format!(
                "Please apply {column_annotation} only to members of class (fields or methods) - not to members of {parent}"
            )
        ));
    };

    if !host.has_annotation(class, annotations.type_annotation) {
        let parent_annotated = host
            .superclass(class)
            .is_some_and(|parent| host.has_annotation(parent, annotations.type_annotation));
        if parent_annotated {
            return Err(ProcessingError::SkipAnnotatedParent {
                element: column,
                message: format!(
                    "Fields of classes not annotated with {type_annotation} which have parents annotated with {type_annotation} will be skipped (e.g. AutoValue case)"
                )
            });
        }
        return Err(ProcessingError::semantic(
            column,
            format!(
                "Please annotate class {} with {type_annotation}",
                host.simple_name(class)
            )
        ));
    }

    let kind = host.kind(column);
    let modifiers = host.modifiers(column);

    if modifiers.contains(&Modifier::Private) {
        if kind != ElementKind::Field {
            return Err(ProcessingError::structural(
                column,
                format!("{column_annotation} can not be applied to private method: {name}")
            ));
        }
        if !context.find_getter(host, column) {
            return Err(ProcessingError::structural(
                column,
                format!(
                    "{column_annotation} can not be applied to private field without corresponding getter: {name}"
                )
            ));
        }
        context.find_setter(host, column);
    }

    if kind == ElementKind::Field
        && modifiers.contains(&Modifier::Final)
        && context.getter(host, column).is_none()
    {
        return Err(ProcessingError::structural(
            column,
            format!("{column_annotation} can not be applied to final field: {name}")
        ));
    }

    if kind == ElementKind::Method && !host.element(column).parameters.is_empty() {
        return Err(ProcessingError::structural(
            column,
            format!("{column_annotation} can not be applied to method with parameters: {name}")
        ));
    }

    Ok(())
}

/// Build column metadata from a validated element and its payload.
///
/// # Errors
///
/// [`ProcessingError::UnsupportedType`] for types outside the supported set
/// and [`ProcessingError::Semantic`] for invalid payload values.
pub fn column_meta<H: ElementHost + ?Sized>(
    context: &ProcessingContext,
    host: &H,
    column: ElementId,
    payload: ColumnPayload,
    annotations: &AnnotationSet
) -> Result<ColumnMeta, ProcessingError> {
    let name = host.simple_name(column).to_string();
    let ty = host.type_of(column);

    let java_type = ty.and_then(JavaType::from_type_mirror).ok_or_else(|| {
        ProcessingError::UnsupportedType {
            element: column,
            message: format!(
                "Unsupported type of field or method for {} annotation, if you need to serialize/deserialize field of that type -> please write your own resolver: {}",
                annotations.column_name(),
                ty.map(ToString::to_string).unwrap_or_else(|| "void".to_string())
            )
        }
    })?;

    if payload.ignore_null && ty.is_some_and(|ty| ty.is_primitive()) {
        return Err(ProcessingError::semantic(
            column,
            format!("ignoreNull should not be used for primitive type: {name}")
        ));
    }

    if payload.name.is_empty() {
        return Err(ProcessingError::semantic(
            column,
            format!("Column name is empty: {name}")
        ));
    }

    let version = u32::try_from(payload.version)
        .ok()
        .filter(|&v| v >= 1)
        .ok_or_else(|| {
            ProcessingError::semantic(
                column,
                format!("Column version should be at least 1: {name}")
            )
        })?;

    let kind = match host.kind(column) {
        ElementKind::Method => ColumnKind::Method,
        _ => ColumnKind::Field
    };
    let not_null = NON_NULL_ANNOTATIONS
        .iter()
        .any(|annotation| host.has_annotation(column, annotation));

    let meta = ColumnMeta {
        enclosing: host.enclosing(column).unwrap_or(column),
        element: column,
        kind,
        element_name: name,
        java_type,
        annotation: ColumnAnnotation {
            name: payload.name,
            key: payload.key,
            ignore_null: payload.ignore_null,
            version
        },
        getter: context.getter(host, column).map(str::to_string),
        setter: context.setter(host, column).map(str::to_string),
        not_null
    };
    tracing::debug!(
        column = meta.name(),
        element = %meta.element_name,
        key = meta.is_key(),
        "discovered column"
    );
    Ok(meta)
}

/// Check a constructor or factory carrying the creator annotation.
///
/// # Errors
///
/// [`ProcessingError::Structural`] for misplaced or inaccessible creators.
pub fn validate_creator<H: ElementHost + ?Sized>(
    host: &H,
    creator: ElementId,
    annotations: &AnnotationSet
) -> Result<(), ProcessingError> {
    let creator_annotation = annotations.creator_name();
    let name = host.simple_name(creator);

    let Some(class) = host
        .enclosing(creator)
        .filter(|&parent| host.kind(parent) == ElementKind::Class)
    else {
        let parent = host
            .enclosing(creator)
            .map(|parent| host.simple_name(parent))
            .unwrap_or_default();
        return Err(ProcessingError::structural(
            creator,
            format!(
                "Please apply {creator_annotation} to constructor or factory method of class - not to {parent}"
            )
        ));
    };
    let class_name = host.simple_name(class);

    if !host.has_annotation(class, annotations.type_annotation) {
        return Err(ProcessingError::semantic(
            creator,
            format!(
                "Please annotate class {class_name} with {}",
                annotations.type_name()
            )
        ));
    }

    let modifiers = host.modifiers(creator);
    if modifiers.contains(&Modifier::Private) {
        return Err(ProcessingError::structural(
            creator,
            format!(
                "{creator_annotation} can not be applied to private methods or constructors: {name}"
            )
        ));
    }

    if host.kind(creator) == ElementKind::Method {
        if !modifiers.contains(&Modifier::Static) {
            return Err(ProcessingError::structural(
                creator,
                format!("{creator_annotation} can not be applied to non-static methods: {name}")
            ));
        }
        if host.type_of(creator) != Some(&host.declared_type(class)) {
            return Err(ProcessingError::structural(
                creator,
                format!(
                    "{creator_annotation} can not be applied to method with return type different from {class_name}"
                )
            ));
        }
    }

    Ok(())
}

/// Build creator metadata from a validated executable.
#[must_use]
pub fn creator_meta<H: ElementHost + ?Sized>(host: &H, creator: ElementId) -> CreatorMeta {
    let element = host.element(creator);
    let kind = match element.kind {
        ElementKind::Method => CreatorKind::Factory {
            name: element.name.clone()
        },
        _ => CreatorKind::Constructor
    };
    CreatorMeta {
        enclosing: element.enclosing.unwrap_or(creator),
        element: creator,
        kind,
        parameters: element.parameters.iter().map(|p| p.name.clone()).collect()
    }
}
