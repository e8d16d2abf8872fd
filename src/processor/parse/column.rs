// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Column metadata.

use super::JavaType;
use crate::{host::ElementId, utils::naming};

/// How a column is backed in the annotated class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Annotated field.
    Field,
    /// Annotated parameterless method.
    Method
}

/// Validated column annotation payload, common to all backends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnAnnotation {
    /// Persistence name.
    pub name:        String,
    /// Part of the row identity.
    pub key:         bool,
    /// Skip the value on put when it is `null`.
    pub ignore_null: bool,
    /// Schema version that introduced the column.
    pub version:     u32
}

impl ColumnAnnotation {
    /// Column introduced in the first schema version.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name:        name.into(),
            key:         false,
            ignore_null: false,
            version:     1
        }
    }
}

/// One annotated field or accessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMeta {
    /// Class declaring the column.
    pub enclosing:    ElementId,
    /// Annotated element.
    pub element:      ElementId,
    /// Field or method.
    pub kind:         ColumnKind,
    /// Simple name of the annotated element.
    pub element_name: String,
    /// Classified type.
    pub java_type:    JavaType,
    /// Annotation payload.
    pub annotation:   ColumnAnnotation,
    /// Getter of a private field.
    pub getter:       Option<String>,
    /// Setter of a private field.
    pub setter:       Option<String>,
    /// Element carries a non-null marker annotation.
    pub not_null:     bool
}

impl ColumnMeta {
    /// Persistence name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.annotation.name
    }

    /// Whether the column is part of the row identity.
    #[must_use]
    pub fn is_key(&self) -> bool {
        self.annotation.key
    }

    /// Property name used to match creator parameters.
    ///
    /// Accessor methods lose their `get`/`is` prefix and are decapitalised;
    /// fields keep their name.
    #[must_use]
    pub fn real_element_name(&self) -> String {
        match self.kind {
            ColumnKind::Field => self.element_name.clone(),
            ColumnKind::Method => match naming::strip_accessor_prefix(&self.element_name) {
                Some(rest) => naming::decapitalize(rest),
                None => self.element_name.clone()
            }
        }
    }

    /// Both getter and setter are known.
    #[must_use]
    pub fn needs_accessors(&self) -> bool {
        self.getter.is_some() && self.setter.is_some()
    }

    /// The value can only be supplied through a creator.
    #[must_use]
    pub fn needs_creator(&self) -> bool {
        match self.kind {
            ColumnKind::Method => true,
            ColumnKind::Field => self.getter.is_some() && self.setter.is_none()
        }
    }

    /// Member access reading the value: `getter()`, `name()` or `name`.
    #[must_use]
    pub fn access_expression(&self) -> String {
        if let Some(getter) = &self.getter {
            return format!("{getter}()");
        }
        match self.kind {
            ColumnKind::Method => format!("{}()", self.element_name),
            ColumnKind::Field => self.element_name.clone()
        }
    }

    /// Value read on `variable`, e.g. `object.getName()`.
    #[must_use]
    pub fn read_on(&self, variable: &str) -> String {
        format!("{variable}.{}", self.access_expression())
    }

    /// Statement storing `value` on `variable` in the no-creator path.
    #[must_use]
    pub fn assign_on(&self, variable: &str, value: &str) -> String {
        match (&self.setter, self.needs_accessors()) {
            (Some(setter), true) => format!("{variable}.{setter}({value})"),
            _ => format!("{variable}.{} = {value}", self.element_name)
        }
    }
}
