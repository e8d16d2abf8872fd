// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Diagnostic channels.

use super::ElementId;
use crate::error::{Diagnostic, Severity};

/// Receives diagnostics produced during a round.
pub trait Messager {
    /// Report `message` with `severity`, anchored to `element` when known.
    fn print(&mut self, severity: Severity, message: &str, element: Option<ElementId>);
}

/// Stores every diagnostic for later inspection.
#[derive(Debug, Clone, Default)]
pub struct CollectingMessager {
    diagnostics: Vec<Diagnostic>
}

impl CollectingMessager {
    /// Create an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All diagnostics in reporting order.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Diagnostics with error severity.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
    }

    /// Diagnostics with warning severity.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
    }

    /// Whether any error was reported.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }
}

impl Messager for CollectingMessager {
    fn print(&mut self, severity: Severity, message: &str, element: Option<ElementId>) {
        self.diagnostics.push(Diagnostic {
            severity,
            message: message.to_string(),
            element
        });
    }
}

/// Forwards diagnostics to `tracing` and counts errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingMessager {
    errors: usize
}

impl TracingMessager {
    /// Number of errors reported so far.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.errors
    }
}

impl Messager for TracingMessager {
    fn print(&mut self, severity: Severity, message: &str, element: Option<ElementId>) {
        let element = element.map(|e| e.to_string()).unwrap_or_default();
        match severity {
            Severity::Warning => tracing::warn!(%element, "{message}"),
            Severity::Error => {
                self.errors += 1;
                tracing::error!(%element, "{message}");
            }
        }
    }
}
