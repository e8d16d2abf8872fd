// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Marker placed at the top of every generated file.

/// First line of every generated compilation unit.
#[must_use]
pub fn generated() -> &'static str {
    "// Generated by storio-codegen. Do not modify!"
}
