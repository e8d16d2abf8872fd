// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Element metadata as reported by the host compiler.
//!
//! These types are the portable shape of what an annotation-processing host
//! exposes: kinds, modifiers, printed types and annotation mirrors. They carry
//! no behaviour beyond small queries used by introspection.

use std::{collections::BTreeSet, fmt, str::FromStr};

use darling::ast::NestedMeta;
use serde::Deserialize;

/// Opaque handle of an element inside one host model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub usize);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Kind of a source element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    /// Package declaration.
    Package,
    /// Class declaration.
    Class,
    /// Interface declaration.
    Interface,
    /// Enum declaration.
    Enum,
    /// Field of a class.
    Field,
    /// Method of a class.
    Method,
    /// Constructor of a class.
    Constructor
}

impl ElementKind {
    /// Lower-case name used in diagnostics.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Package => "package",
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Enum => "enum",
            Self::Field => "field",
            Self::Method => "method",
            Self::Constructor => "constructor"
        }
    }
}

/// Declaration modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modifier {
    /// `public`
    Public,
    /// `protected`
    Protected,
    /// `private`
    Private,
    /// `static`
    Static,
    /// `final`
    Final,
    /// `abstract`
    Abstract
}

/// Type of an element as printed by the host (`int`, `java.lang.Integer`,
/// `byte[]`, `com.example.User`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct TypeMirror(String);

impl TypeMirror {
    /// Wrap a printed type name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Printed type name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the type is one of Java's primitive types.
    #[must_use]
    pub fn is_primitive(&self) -> bool {
        matches!(
            self.0.as_str(),
            "boolean" | "byte" | "short" | "int" | "long" | "char" | "float" | "double"
        )
    }
}

impl fmt::Display for TypeMirror {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Error produced when annotation text is malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed annotation `{text}`: {reason}")]
pub struct AnnotationParseError {
    /// Offending annotation text.
    pub text:   String,
    /// What was wrong with it.
    pub reason: &'static str
}

/// One annotation on an element, in the host's printed form.
///
/// ```text
/// @com.pushtorefresh.storio3.sqlite.annotations.StorIOSQLiteColumn(name = "id", key = true)
/// @android.support.annotation.NonNull
/// ```
///
/// The argument list is kept as text and only tokenised when a processor asks
/// for it through [`AnnotationMirror::meta_items`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct AnnotationMirror {
    qualified_name: String,
    arguments:      Option<String>
}

impl AnnotationMirror {
    /// Qualified (or, if the host printed it so, simple) annotation type name.
    #[must_use]
    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    /// Simple annotation type name.
    #[must_use]
    pub fn simple_name(&self) -> &str {
        self.qualified_name
            .rsplit('.')
            .next()
            .unwrap_or(&self.qualified_name)
    }

    /// Raw argument text between the parentheses, if any.
    #[must_use]
    pub fn arguments(&self) -> Option<&str> {
        self.arguments.as_deref()
    }

    /// Check whether this mirror denotes the annotation type `qualified`.
    ///
    /// Unqualified mirrors match on the simple name.
    #[must_use]
    pub fn is(&self, qualified: &str) -> bool {
        if self.qualified_name == qualified {
            return true;
        }
        !self.qualified_name.contains('.')
            && qualified.rsplit('.').next() == Some(self.qualified_name.as_str())
    }

    /// Tokenise the argument list into darling meta items.
    ///
    /// A marker annotation yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns a syn error when the argument text is not a valid
    /// `key = value` list.
    pub fn meta_items(&self) -> syn::Result<Vec<NestedMeta>> {
        let Some(arguments) = self.arguments.as_deref() else {
            return Ok(Vec::new());
        };
        let tokens = proc_macro2::TokenStream::from_str(arguments)
            .map_err(|e| syn::Error::new(proc_macro2::Span::call_site(), e.to_string()))?;
        NestedMeta::parse_meta_list(tokens)
    }
}

impl FromStr for AnnotationMirror {
    type Err = AnnotationParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let error = |reason| AnnotationParseError {
            text: text.to_string(),
            reason
        };

        let body = text
            .trim()
            .strip_prefix('@')
            .ok_or_else(|| error("missing leading `@`"))?;

        let (name, arguments) = match body.find('(') {
            Some(open) => {
                let inner = body[open + 1..]
                    .strip_suffix(')')
                    .ok_or_else(|| error("unbalanced parentheses"))?;
                (&body[..open], Some(inner.trim()))
            }
            None => (body, None)
        };

        let name = name.trim();
        let valid_name = !name.is_empty()
            && !name.starts_with('.')
            && !name.ends_with('.')
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '$' | '.'));
        if !valid_name {
            return Err(error("invalid annotation type name"));
        }

        Ok(Self {
            qualified_name: name.to_string(),
            arguments:      arguments.filter(|a| !a.is_empty()).map(str::to_string)
        })
    }
}

impl TryFrom<String> for AnnotationMirror {
    type Error = AnnotationParseError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        text.parse()
    }
}

/// Parameter of a method or constructor.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Parameter {
    /// Parameter name.
    pub name: String,
    /// Parameter type.
    #[serde(rename = "type")]
    pub ty:   TypeMirror
}

/// One element of the host model.
///
/// `ty` is the field type, the method return type, or the declared type of a
/// class.
#[derive(Debug, Clone, Deserialize)]
pub struct Element {
    /// Kind of declaration.
    pub kind:        ElementKind,
    /// Simple name (qualified name for packages).
    pub name:        String,
    /// Declaration modifiers.
    #[serde(default)]
    pub modifiers:   BTreeSet<Modifier>,
    /// Printed type.
    #[serde(default, rename = "type")]
    pub ty:          Option<TypeMirror>,
    /// Enclosing element.
    #[serde(default)]
    pub enclosing:   Option<ElementId>,
    /// Annotations present on the element.
    #[serde(default)]
    pub annotations: Vec<AnnotationMirror>,
    /// Parameters of methods and constructors.
    #[serde(default)]
    pub parameters:  Vec<Parameter>,
    /// Direct superclass of a class.
    #[serde(default)]
    pub superclass:  Option<ElementId>
}

impl Element {
    /// Create an element with no modifiers, annotations or parameters.
    #[must_use]
    pub fn new(kind: ElementKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            modifiers: BTreeSet::new(),
            ty: None,
            enclosing: None,
            annotations: Vec::new(),
            parameters: Vec::new(),
            superclass: None
        }
    }

    /// Whether the element carries `modifier`.
    #[must_use]
    pub fn has_modifier(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(&modifier)
    }

    /// Annotation of type `qualified`, if present.
    #[must_use]
    pub fn annotation(&self, qualified: &str) -> Option<&AnnotationMirror> {
        self.annotations.iter().find(|a| a.is(qualified))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_annotation_with_arguments() {
        let mirror: AnnotationMirror =
            "@com.test.StorIOSQLiteColumn(name = \"id\", key = true)"
                .parse()
                .unwrap();
        assert_eq!(mirror.qualified_name(), "com.test.StorIOSQLiteColumn");
        assert_eq!(mirror.simple_name(), "StorIOSQLiteColumn");
        assert_eq!(mirror.arguments(), Some("name = \"id\", key = true"));
        assert_eq!(mirror.meta_items().unwrap().len(), 2);
    }

    #[test]
    fn parse_marker_annotation() {
        let mirror: AnnotationMirror = "@android.support.annotation.NonNull".parse().unwrap();
        assert_eq!(mirror.arguments(), None);
        assert!(mirror.meta_items().unwrap().is_empty());
    }

    #[test]
    fn empty_parentheses_are_a_marker() {
        let mirror: AnnotationMirror = "@a.Creator()".parse().unwrap();
        assert_eq!(mirror.arguments(), None);
    }

    #[test]
    fn reject_missing_at_sign() {
        let err = "Foo(a = 1)".parse::<AnnotationMirror>().unwrap_err();
        assert_eq!(err.reason, "missing leading `@`");
    }

    #[test]
    fn reject_unbalanced_parentheses() {
        assert!("@Foo(a = 1".parse::<AnnotationMirror>().is_err());
    }

    #[test]
    fn reject_bad_name() {
        assert!("@com.test.(a = 1)".parse::<AnnotationMirror>().is_err());
        assert!("@(a = 1)".parse::<AnnotationMirror>().is_err());
        assert!("@foo bar".parse::<AnnotationMirror>().is_err());
    }

    #[test]
    fn unqualified_mirror_matches_simple_name() {
        let mirror: AnnotationMirror = "@NonNull".parse().unwrap();
        assert!(mirror.is("android.support.annotation.NonNull"));
        let qualified: AnnotationMirror = "@androidx.annotation.NonNull".parse().unwrap();
        assert!(!qualified.is("android.support.annotation.NonNull"));
    }

    #[test]
    fn primitive_type_mirrors() {
        assert!(TypeMirror::new("int").is_primitive());
        assert!(!TypeMirror::new("java.lang.Integer").is_primitive());
        assert!(!TypeMirror::new("byte[]").is_primitive());
    }
}
