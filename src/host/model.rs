// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! In-memory host model.
//!
//! [`ElementModel`] is a flat list of elements addressed by position. It can
//! be deserialised from the JSON dump produced by a host integration or built
//! programmatically:
//!
//! ```rust,ignore
//! let mut model = ElementModel::default();
//! let pkg = model.package("com.example");
//! let user = model.class(pkg, "User");
//! model.annotate(user, "@com.pushtorefresh.storio3.sqlite.annotations.StorIOSQLiteType(table = \"users\")")?;
//! let id = model.field(user, "id", "long");
//! model.annotate(id, "@com.pushtorefresh.storio3.sqlite.annotations.StorIOSQLiteColumn(name = \"_id\", key = true)")?;
//! ```

use std::collections::BTreeSet;

use serde::Deserialize;

use super::{
    ElementHost,
    element::{
        AnnotationMirror, AnnotationParseError, Element, ElementId, ElementKind, Modifier,
        Parameter, TypeMirror
    }
};

/// Error raised when a deserialised model references missing elements.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// JSON could not be decoded.
    #[error("invalid element model: {0}")]
    Json(#[from] serde_json::Error),

    /// An element points at an element that does not exist.
    #[error("element {element} references unknown element {target}")]
    DanglingReference {
        /// Referencing element.
        element: ElementId,
        /// Missing target.
        target:  ElementId
    }
}

/// Host model kept entirely in memory.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ElementModel {
    /// Qualified names of types available on the compile classpath.
    #[serde(default)]
    known_types: BTreeSet<String>,

    /// All elements; an element's id is its position.
    #[serde(default)]
    elements: Vec<Element>
}

impl ElementModel {
    /// Decode a model from its JSON form and check its references.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] on malformed JSON, malformed annotation text or
    /// dangling element references.
    pub fn from_json(text: &str) -> Result<Self, ModelError> {
        let model: Self = serde_json::from_str(text)?;
        model.check_references()?;
        Ok(model)
    }

    fn check_references(&self) -> Result<(), ModelError> {
        let len = self.elements.len();
        for (index, element) in self.elements.iter().enumerate() {
            let targets = element.enclosing.iter().chain(element.superclass.iter());
            for target in targets {
                if target.0 >= len {
                    return Err(ModelError::DanglingReference {
                        element: ElementId(index),
                        target:  *target
                    });
                }
            }
        }
        Ok(())
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the model has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Append an element and return its id.
    pub fn push(&mut self, element: Element) -> ElementId {
        self.elements.push(element);
        ElementId(self.elements.len() - 1)
    }

    /// Mutable access to an element.
    pub fn element_mut(&mut self, id: ElementId) -> &mut Element {
        &mut self.elements[id.0]
    }

    /// Register a type as present on the classpath.
    pub fn known_type(&mut self, qualified_name: impl Into<String>) -> &mut Self {
        self.known_types.insert(qualified_name.into());
        self
    }

    /// Add a package.
    pub fn package(&mut self, name: &str) -> ElementId {
        self.push(Element::new(ElementKind::Package, name))
    }

    /// Add a public class inside `enclosing` (a package or another class).
    pub fn class(&mut self, enclosing: ElementId, name: &str) -> ElementId {
        let package = self.package_of(enclosing);
        let outer = self.outer_type_path(enclosing);
        let qualified = [package.as_str(), outer.as_str(), name]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(".");

        let mut element = Element::new(ElementKind::Class, name);
        element.modifiers.insert(Modifier::Public);
        element.ty = Some(TypeMirror::new(qualified));
        element.enclosing = Some(enclosing);
        self.push(element)
    }

    fn outer_type_path(&self, id: ElementId) -> String {
        let mut names = Vec::new();
        let mut current = Some(id);
        while let Some(cursor) = current {
            let element = &self.elements[cursor.0];
            if element.kind == ElementKind::Package {
                break;
            }
            names.push(element.name.as_str());
            current = element.enclosing;
        }
        names.reverse();
        names.join(".")
    }

    /// Add a package-private field.
    pub fn field(&mut self, class: ElementId, name: &str, ty: &str) -> ElementId {
        let mut element = Element::new(ElementKind::Field, name);
        element.ty = Some(TypeMirror::new(ty));
        element.enclosing = Some(class);
        self.push(element)
    }

    /// Add a package-private method without parameters.
    pub fn method(&mut self, class: ElementId, name: &str, return_type: &str) -> ElementId {
        let mut element = Element::new(ElementKind::Method, name);
        element.ty = Some(TypeMirror::new(return_type));
        element.enclosing = Some(class);
        self.push(element)
    }

    /// Add a public constructor with the given `(name, type)` parameters.
    pub fn constructor(&mut self, class: ElementId, parameters: &[(&str, &str)]) -> ElementId {
        let mut element = Element::new(ElementKind::Constructor, "<init>");
        element.modifiers.insert(Modifier::Public);
        element.enclosing = Some(class);
        element.parameters = to_parameters(parameters);
        self.push(element)
    }

    /// Replace the modifiers of an element.
    pub fn modifiers(&mut self, id: ElementId, modifiers: &[Modifier]) -> &mut Self {
        self.elements[id.0].modifiers = modifiers.iter().copied().collect();
        self
    }

    /// Replace the parameters of a method or constructor.
    pub fn parameters(&mut self, id: ElementId, parameters: &[(&str, &str)]) -> &mut Self {
        self.elements[id.0].parameters = to_parameters(parameters);
        self
    }

    /// Set the direct superclass of a class.
    pub fn superclass(&mut self, class: ElementId, superclass: ElementId) -> &mut Self {
        self.elements[class.0].superclass = Some(superclass);
        self
    }

    /// Attach an annotation given in host text form.
    ///
    /// # Errors
    ///
    /// Returns [`AnnotationParseError`] when the text is malformed.
    pub fn annotate(&mut self, id: ElementId, text: &str) -> Result<&mut Self, AnnotationParseError> {
        let mirror: AnnotationMirror = text.parse()?;
        self.elements[id.0].annotations.push(mirror);
        Ok(self)
    }
}

fn to_parameters(parameters: &[(&str, &str)]) -> Vec<Parameter> {
    parameters
        .iter()
        .map(|(name, ty)| Parameter {
            name: (*name).to_string(),
            ty:   TypeMirror::new(*ty)
        })
        .collect()
}

impl ElementHost for ElementModel {
    fn annotated_with(&self, annotation: &str) -> Vec<ElementId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, element)| element.annotation(annotation).is_some())
            .map(|(index, _)| ElementId(index))
            .collect()
    }

    fn element(&self, id: ElementId) -> &Element {
        &self.elements[id.0]
    }

    fn enclosed(&self, id: ElementId) -> Vec<ElementId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, element)| element.enclosing == Some(id))
            .map(|(index, _)| ElementId(index))
            .collect()
    }

    fn package_of(&self, id: ElementId) -> String {
        let mut current = Some(id);
        while let Some(cursor) = current {
            let element = &self.elements[cursor.0];
            if element.kind == ElementKind::Package {
                return element.name.clone();
            }
            current = element.enclosing;
        }
        String::new()
    }

    fn type_exists(&self, qualified_name: &str) -> bool {
        self.known_types.contains(qualified_name)
    }
}
