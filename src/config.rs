// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Processor and command-line configuration.
//!
//! # Non-null annotation
//!
//! Generated signatures are annotated with a `NonNull` class chosen once per
//! round:
//!
//! | Source | Class |
//! |--------|-------|
//! | `non_null_annotation` set | that class |
//! | host knows `androidx.annotation.NonNull` | `androidx.annotation.NonNull` |
//! | otherwise | `android.support.annotation.NonNull` |
//!
//! # Sources
//!
//! Settings come from an optional JSON file (`--config`), then from
//! command-line flags, which win:
//!
//! ```json
//! { "nonNullAnnotation": "androidx.annotation.NonNull" }
//! ```

use std::{
    fs, io,
    path::{Path, PathBuf}
};

use clap::{Parser, ValueEnum};
use serde::Deserialize;
use thiserror::Error;

use crate::{host::ElementHost, utils::java::ClassName};

/// AndroidX non-null annotation.
pub const ANDROIDX_NON_NULL: &str = "androidx.annotation.NonNull";

/// Support-library non-null annotation.
pub const SUPPORT_NON_NULL: &str = "android.support.annotation.NonNull";

/// Failure loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read.
    #[error("cannot read config {}: {source}", .path.display())]
    Read {
        /// Config file.
        path:   PathBuf,
        /// Underlying failure.
        source: io::Error
    },

    /// File is not a valid configuration.
    #[error("invalid config {}: {source}", .path.display())]
    Json {
        /// Config file.
        path:   PathBuf,
        /// Underlying failure.
        source: serde_json::Error
    }
}

/// Settings shared by every backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProcessorConfig {
    /// Qualified name of the non-null annotation to emit.
    pub non_null_annotation: Option<String>
}

impl ProcessorConfig {
    /// Config forcing `annotation` as non-null class.
    #[must_use]
    pub fn with_non_null(annotation: impl Into<String>) -> Self {
        Self {
            non_null_annotation: Some(annotation.into())
        }
    }

    /// Read settings from a JSON file.
    ///
    /// # Errors
    ///
    /// [`ConfigError`] when the file is unreadable or malformed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source
        })
    }

    /// Non-null annotation class to use with `host`.
    #[must_use]
    pub fn non_null_class<H: ElementHost + ?Sized>(&self, host: &H) -> ClassName {
        let qualified = match &self.non_null_annotation {
            Some(annotation) => annotation.as_str(),
            None if host.type_exists(ANDROIDX_NON_NULL) => ANDROIDX_NON_NULL,
            None => SUPPORT_NON_NULL
        };
        ClassName::parse(qualified)
    }
}

/// Backends run by the command-line tool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum BackendChoice {
    /// StorIO SQLite only.
    Sqlite,
    /// StorIO ContentResolver only.
    ContentResolver,
    /// Both backends.
    #[default]
    All
}

impl BackendChoice {
    /// Whether the SQLite backend runs.
    #[must_use]
    pub fn sqlite(self) -> bool {
        matches!(self, Self::Sqlite | Self::All)
    }

    /// Whether the ContentResolver backend runs.
    #[must_use]
    pub fn content_resolver(self) -> bool {
        matches!(self, Self::ContentResolver | Self::All)
    }
}

/// Generate StorIO resolvers from a dumped element model.
#[derive(Debug, Parser)]
#[command(name = "storio-codegen", version, about, long_about = None)]
pub struct Cli {
    /// JSON element model produced by the host integration.
    #[arg(long, value_name = "PATH")]
    pub elements: PathBuf,

    /// Source root receiving generated files.
    #[arg(long, value_name = "DIR")]
    pub out: PathBuf,

    /// JSON file with processor settings.
    #[arg(long, value_name = "PATH", env = "STORIO_CODEGEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Backends to run.
    #[arg(long, value_enum, default_value_t = BackendChoice::All)]
    pub backend: BackendChoice,

    /// Qualified name of the non-null annotation to emit.
    #[arg(long = "non-null", value_name = "CLASS", env = "STORIO_CODEGEN_NON_NULL")]
    pub non_null: Option<String>
}

impl Cli {
    /// Processor settings from `--config`, overridden by flags.
    ///
    /// # Errors
    ///
    /// [`ConfigError`] when the config file cannot be loaded.
    pub fn processor_config(&self) -> Result<ProcessorConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => ProcessorConfig::load(path)?,
            None => ProcessorConfig::default()
        };
        if let Some(annotation) = &self.non_null {
            config.non_null_annotation = Some(annotation.clone());
        }
        Ok(config)
    }
}
