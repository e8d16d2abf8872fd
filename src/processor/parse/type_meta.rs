// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Per-class metadata aggregated during a round.

use super::{ColumnMeta, CreatorMeta};
use crate::{host::ElementId, utils::java::ClassName};

/// Everything known about one annotated class.
///
/// `C` is the backend's class-level annotation payload.
#[derive(Debug, Clone)]
pub struct TypeMeta<C> {
    /// Simple class name.
    pub simple_name:   String,
    /// Package of the class.
    pub package:       String,
    /// Annotated class element.
    pub element:       ElementId,
    /// Class-level annotation payload.
    pub config:        C,
    /// Set once any column can only be supplied through a creator.
    pub needs_creator: bool,
    /// Registered creator.
    pub creator:       Option<CreatorMeta>,
    /// Non-null annotation used in generated signatures.
    pub non_null:      ClassName,
    columns:           Vec<ColumnMeta>
}

impl<C> TypeMeta<C> {
    /// Metadata of a class without columns.
    #[must_use]
    pub fn new(
        simple_name: impl Into<String>,
        package: impl Into<String>,
        element: ElementId,
        config: C,
        non_null: ClassName
    ) -> Self {
        Self {
            simple_name: simple_name.into(),
            package: package.into(),
            element,
            config,
            needs_creator: false,
            creator: None,
            non_null,
            columns: Vec::new()
        }
    }

    /// Class name of the annotated type.
    #[must_use]
    pub fn class_name(&self) -> ClassName {
        ClassName::new(self.package.clone(), self.simple_name.clone())
    }

    /// Columns in insertion order.
    #[must_use]
    pub fn columns(&self) -> &[ColumnMeta] {
        &self.columns
    }

    /// Column with persistence name `name`.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&ColumnMeta> {
        self.columns.iter().find(|c| c.name() == name)
    }

    /// Append a column. Returns it back when the name is already taken.
    ///
    /// # Errors
    ///
    /// The rejected column.
    pub fn insert_column(&mut self, column: ColumnMeta) -> Result<(), ColumnMeta> {
        if self.column(column.name()).is_some() {
            return Err(column);
        }
        self.columns.push(column);
        Ok(())
    }

    /// Key columns in insertion order.
    pub fn key_columns(&self) -> impl Iterator<Item = &ColumnMeta> {
        self.columns.iter().filter(|c| c.is_key())
    }

    /// Columns in the order values are passed to the creator.
    ///
    /// Without a needed creator this is insertion order. Columns whose real
    /// name does not appear among the creator parameters keep their relative
    /// order after the matched ones.
    #[must_use]
    pub fn ordered_columns(&self) -> Vec<&ColumnMeta> {
        let mut columns: Vec<&ColumnMeta> = self.columns.iter().collect();
        if let (true, Some(creator)) = (self.needs_creator, &self.creator) {
            columns.sort_by_key(|c| {
                creator
                    .position(&c.real_element_name())
                    .unwrap_or(usize::MAX)
            });
        }
        columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processor::parse::{
        ColumnKind, CreatorKind, JavaType, column::tests::column
    };

    fn meta() -> TypeMeta<()> {
        TypeMeta::new(
            "User",
            "com.test",
            ElementId(1),
            (),
            ClassName::new("androidx.annotation", "NonNull")
        )
    }

    #[test]
    fn rejects_duplicate_column_names() {
        let mut meta = meta();
        meta.insert_column(column("a", "x", JavaType::Long)).unwrap();
        let rejected = meta.insert_column(column("b", "x", JavaType::Long)).unwrap_err();
        assert_eq!(rejected.element_name, "b");
        assert_eq!(meta.columns().len(), 1);
    }

    #[test]
    fn key_columns_keep_insertion_order() {
        let mut meta = meta();
        let mut second = column("b", "b", JavaType::Long);
        second.annotation.key = true;
        let mut first = column("a", "a", JavaType::Long);
        first.annotation.key = true;
        meta.insert_column(second).unwrap();
        meta.insert_column(column("c", "c", JavaType::String)).unwrap();
        meta.insert_column(first).unwrap();
        let keys: Vec<_> = meta.key_columns().map(|c| c.name()).collect();
        assert_eq!(keys, ["b", "a"]);
    }

    #[test]
    fn ordered_columns_follow_creator_parameters() {
        let mut meta = meta();
        for (element, name) in [("getName", "name"), ("getId", "_id")] {
            let mut c = column(element, name, JavaType::String);
            c.kind = ColumnKind::Method;
            meta.insert_column(c).unwrap();
        }
        meta.needs_creator = true;
        meta.creator = Some(CreatorMeta {
            enclosing:  ElementId(1),
            element:    ElementId(9),
            kind:       CreatorKind::Constructor,
            parameters: vec!["id".into(), "name".into()]
        });
        let ordered: Vec<_> = meta.ordered_columns().iter().map(|c| c.name()).collect();
        assert_eq!(ordered, ["_id", "name"]);
    }

    #[test]
    fn ordered_columns_without_creator_use_insertion_order() {
        let mut meta = meta();
        meta.insert_column(column("b", "b", JavaType::Long)).unwrap();
        meta.insert_column(column("a", "a", JavaType::Long)).unwrap();
        let ordered: Vec<_> = meta.ordered_columns().iter().map(|c| c.name()).collect();
        assert_eq!(ordered, ["b", "a"]);
        assert_eq!(meta.class_name().qualified(), "com.test.User");
    }
}
