// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Boundary between the processor and the compiler that hosts it.
//!
//! The processor never talks to a compiler directly. It reads elements
//! through [`ElementHost`], writes generated units through [`Filer`] and
//! reports diagnostics through [`Messager`]. A host integration implements
//! these three traits; [`ElementModel`], [`MemoryFiler`] and
//! [`CollectingMessager`] are in-memory implementations used by the CLI and
//! by tests.
//!
//! # Module Structure
//!
//! ```text
//! host/
//! ├── element.rs  - ElementId, ElementKind, Modifier, TypeMirror, AnnotationMirror
//! ├── model.rs    - ElementModel (JSON-loadable ElementHost)
//! ├── filer.rs    - Filer, MemoryFiler, DirFiler
//! └── messager.rs - Messager, CollectingMessager, TracingMessager
//! ```

mod element;
mod filer;
mod messager;
mod model;

use std::collections::BTreeSet;

pub use element::{
    AnnotationMirror, AnnotationParseError, Element, ElementId, ElementKind, Modifier, Parameter,
    TypeMirror
};
pub use filer::{DirFiler, Filer, MemoryFiler};
pub use messager::{CollectingMessager, Messager, TracingMessager};
pub use model::{ElementModel, ModelError};

/// Read access to the elements of one compilation round.
///
/// Implementors provide the five required queries; everything else is
/// derived from [`ElementHost::element`].
pub trait ElementHost {
    /// Elements carrying the annotation `annotation` (qualified name), in a
    /// stable order.
    fn annotated_with(&self, annotation: &str) -> Vec<ElementId>;

    /// Metadata of an element.
    fn element(&self, id: ElementId) -> &Element;

    /// Members declared directly inside `id`, in declaration order.
    fn enclosed(&self, id: ElementId) -> Vec<ElementId>;

    /// Qualified name of the package containing `id`.
    fn package_of(&self, id: ElementId) -> String;

    /// Whether the type `qualified_name` is available to the compilation.
    fn type_exists(&self, qualified_name: &str) -> bool;

    /// Kind of an element.
    fn kind(&self, id: ElementId) -> ElementKind {
        self.element(id).kind
    }

    /// Simple name of an element.
    fn simple_name(&self, id: ElementId) -> &str {
        &self.element(id).name
    }

    /// Modifiers of an element.
    fn modifiers(&self, id: ElementId) -> &BTreeSet<Modifier> {
        &self.element(id).modifiers
    }

    /// Field type or method return type.
    fn type_of(&self, id: ElementId) -> Option<&TypeMirror> {
        self.element(id).ty.as_ref()
    }

    /// Enclosing element.
    fn enclosing(&self, id: ElementId) -> Option<ElementId> {
        self.element(id).enclosing
    }

    /// Direct superclass of a class.
    fn superclass(&self, id: ElementId) -> Option<ElementId> {
        self.element(id).superclass
    }

    /// Annotation of type `qualified` on `id`, if present.
    fn annotation(&self, id: ElementId, qualified: &str) -> Option<&AnnotationMirror> {
        self.element(id).annotation(qualified)
    }

    /// Whether `id` carries the annotation `qualified`.
    fn has_annotation(&self, id: ElementId, qualified: &str) -> bool {
        self.annotation(id, qualified).is_some()
    }

    /// Declared type of a class: its recorded type, or `package.Name`.
    fn declared_type(&self, id: ElementId) -> TypeMirror {
        if let Some(ty) = self.type_of(id) {
            return ty.clone();
        }
        let package = self.package_of(id);
        let name = self.simple_name(id);
        if package.is_empty() {
            TypeMirror::new(name)
        } else {
            TypeMirror::new(format!("{package}.{name}"))
        }
    }
}
