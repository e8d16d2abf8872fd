// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Metadata model built from annotated elements.
//!
//! # Module Structure
//!
//! ```text
//! parse/
//! ├── annotation.rs - AnnotationSet, payload decoding with darling
//! ├── java_type.rs  - JavaType classifier and StorageType
//! ├── column.rs     - ColumnMeta, ColumnAnnotation
//! ├── creator.rs    - CreatorMeta
//! └── type_meta.rs  - TypeMeta aggregate
//! ```

mod annotation;
pub(crate) mod column;
mod creator;
mod java_type;
mod type_meta;

pub use annotation::{AnnotationSet, ColumnPayload, default_version, read_payload};
pub use column::{ColumnAnnotation, ColumnKind, ColumnMeta};
pub use creator::{CreatorKind, CreatorMeta};
pub use java_type::{JavaType, StorageType, column_index};
pub use type_meta::TypeMeta;
