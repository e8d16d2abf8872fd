// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Shared utilities for code generation.
//!
//! # Submodules
//!
//! - [`java`] - Java source writer with import collection
//! - [`marker`] - Generated code marker comment
//! - [`naming`] - Identifier case conversions

pub mod java;
pub mod marker;
pub mod naming;
