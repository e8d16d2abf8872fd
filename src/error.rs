// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Processing errors and diagnostics.
//!
//! Every failure is anchored to the element that caused it so the host can
//! point the user at the offending declaration.
//!
//! | Variant | Severity | Examples |
//! |---------|----------|----------|
//! | `Structural` | error | annotation on a nested class, private method, final field |
//! | `Semantic` | error | duplicate column, no key column, creator mismatch |
//! | `UnsupportedType` | error | `java.util.Date` column |
//! | `Annotation` | error | unknown key in an annotation payload |
//! | `SkipAnnotatedParent` | warning | column in a subclass of an annotated class |
//! | `Io` | error | generated file could not be written |

use std::fmt;

use thiserror::Error;

use crate::host::ElementId;

/// Failure raised while introspecting, validating or writing a round.
#[derive(Debug, Error)]
pub enum ProcessingError {
    /// Annotation applied to an element of the wrong shape.
    #[error("{message}")]
    Structural {
        /// Offending element.
        element: ElementId,
        /// Human-readable description.
        message: String
    },

    /// Elements are individually valid but inconsistent with each other.
    #[error("{message}")]
    Semantic {
        /// Offending element.
        element: ElementId,
        /// Human-readable description.
        message: String
    },

    /// Column type outside the supported set.
    #[error("{message}")]
    UnsupportedType {
        /// Offending element.
        element: ElementId,
        /// Human-readable description.
        message: String
    },

    /// Annotation payload could not be read.
    #[error("{message}")]
    Annotation {
        /// Offending element.
        element: ElementId,
        /// Human-readable description.
        message: String
    },

    /// Column of a class whose superclass, not the class itself, is
    /// annotated. Reported as a warning and skipped.
    #[error("{message}")]
    SkipAnnotatedParent {
        /// Skipped element.
        element: ElementId,
        /// Human-readable description.
        message: String
    },

    /// Generated source could not be written.
    #[error("Problem occurred with StorIOProcessor: {0}")]
    Io(#[from] std::io::Error)
}

impl ProcessingError {
    /// Build a [`ProcessingError::Structural`].
    pub fn structural(element: ElementId, message: impl Into<String>) -> Self {
        Self::Structural {
            element,
            message: message.into()
        }
    }

    /// Build a [`ProcessingError::Semantic`].
    pub fn semantic(element: ElementId, message: impl Into<String>) -> Self {
        Self::Semantic {
            element,
            message: message.into()
        }
    }

    /// Element the error is anchored to, if any.
    #[must_use]
    pub fn element(&self) -> Option<ElementId> {
        match self {
            Self::Structural { element, .. }
            | Self::Semantic { element, .. }
            | Self::UnsupportedType { element, .. }
            | Self::Annotation { element, .. }
            | Self::SkipAnnotatedParent { element, .. } => Some(*element),
            Self::Io(_) => None
        }
    }

    /// Whether processing may continue after reporting this error.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::SkipAnnotatedParent { .. })
    }

    /// Severity to report this error with.
    #[must_use]
    pub fn severity(&self) -> Severity {
        if self.is_recoverable() {
            Severity::Warning
        } else {
            Severity::Error
        }
    }
}

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Processing continued.
    Warning,
    /// Generation was aborted.
    Error
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Warning => "warning",
            Self::Error => "error"
        })
    }
}

/// One message reported to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity.
    pub severity: Severity,
    /// Message text.
    pub message:  String,
    /// Anchor element.
    pub element:  Option<ElementId>
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.element {
            Some(element) => write!(f, "{} [{}]: {}", self.severity, element, self.message),
            None => write!(f, "{}: {}", self.severity, self.message)
        }
    }
}
