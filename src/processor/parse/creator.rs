// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Creator (constructor or static factory) metadata.

use crate::host::ElementId;

/// Kind of creator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreatorKind {
    /// Annotated constructor.
    Constructor,
    /// Annotated static factory method.
    Factory {
        /// Method name.
        name: String
    }
}

/// The single creator registered for a class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatorMeta {
    /// Owning class.
    pub enclosing:  ElementId,
    /// Annotated executable.
    pub element:    ElementId,
    /// Constructor or factory.
    pub kind:       CreatorKind,
    /// Parameter names in declaration order.
    pub parameters: Vec<String>
}

impl CreatorMeta {
    /// Position of the parameter named `name`.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.parameters.iter().position(|p| p == name)
    }

    /// Expression creating an instance of `class` from `arguments`.
    #[must_use]
    pub fn invocation(&self, class: &str, arguments: &[String]) -> String {
        let arguments = arguments.join(", ");
        match &self.kind {
            CreatorKind::Constructor => format!("new {class}({arguments})"),
            CreatorKind::Factory { name } => format!("{class}.{name}({arguments})")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creator(kind: CreatorKind) -> CreatorMeta {
        CreatorMeta {
            enclosing: ElementId(1),
            element: ElementId(5),
            kind,
            parameters: vec!["id".into(), "name".into()]
        }
    }

    #[test]
    fn constructor_invocation() {
        let meta = creator(CreatorKind::Constructor);
        assert_eq!(
            meta.invocation("User", &["id".into(), "name".into()]),
            "new User(id, name)"
        );
    }

    #[test]
    fn factory_invocation() {
        let meta = creator(CreatorKind::Factory {
            name: "create".into()
        });
        assert_eq!(meta.invocation("User", &["id".into()]), "User.create(id)");
        assert_eq!(meta.position("name"), Some(1));
        assert_eq!(meta.position("email"), None);
    }
}
