// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! # Quick Navigation
//!
//! - **Round driver**: [`Processor`] with a [`SqliteBackend`] or
//!   [`ContentResolverBackend`]
//! - **Host boundary**: [`host::ElementHost`], [`host::Filer`],
//!   [`host::Messager`]
//! - **Errors**: [`ProcessingError`]
//!
//! # Annotation Quick Reference
//!
//! ## SQLite
//!
//! ```java
//! @StorIOSQLiteType(table = "users", generateTableClass = true)
//! public class User {
//!     @StorIOSQLiteColumn(name = "_id", key = true)
//!     long id;
//!
//!     @StorIOSQLiteColumn(name = "email", ignoreNull = true, version = 2)
//!     String email;
//! }
//! ```
//!
//! ## ContentResolver
//!
//! ```java
//! @StorIOContentResolverType(uri = "content://users", deleteUri = "content://users/trash")
//! public class User {
//!     @StorIOContentResolverColumn(name = "_id", key = true)
//!     long id;
//! }
//! ```
//!
//! ## Immutable classes
//!
//! Method-backed columns (or private fields with a getter and no setter)
//! require a constructor or static factory annotated with the backend's
//! creator annotation whose parameter names match the columns:
//!
//! ```java
//! @StorIOSQLiteType(table = "users")
//! public abstract class User {
//!     @StorIOSQLiteColumn(name = "_id", key = true)
//!     public abstract long id();
//!
//!     @StorIOSQLiteCreator
//!     public static User create(long id) { ... }
//! }
//! ```
//!
//! # Module Structure
//!
//! ```text
//! src/
//! ├── lib.rs        - re-exports
//! ├── main.rs       - command-line tool
//! ├── config.rs     - ProcessorConfig, CLI arguments
//! ├── error.rs      - ProcessingError, Diagnostic, Severity
//! ├── host.rs       - host boundary and in-memory host
//! ├── processor.rs  - Processor round driver
//! │   ├── backend   - SQLite and ContentResolver backends
//! │   ├── parse     - typed metadata
//! │   ├── introspect, validate
//! │   ├── query     - WHERE clauses, storage targets
//! │   └── generate  - Java emitters
//! └── utils.rs      - Java writer, naming, generated marker
//! ```

pub mod config;
pub mod error;
pub mod host;
pub mod processor;
pub mod utils;

pub use config::ProcessorConfig;
pub use error::{Diagnostic, ProcessingError, Severity};
pub use processor::{
    Backend, ContentResolverBackend, ContentResolverTypeConfig, Processor, RoundOutcome,
    SqliteBackend, SqliteTypeConfig
};
