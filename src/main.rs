// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `storio-codegen` command-line tool.
//!
//! Reads an element model dumped by a host integration, runs the selected
//! backends and writes the generated sources below `--out`.

use std::{fs, process::ExitCode};

use clap::Parser;
use storio_codegen::{
    ContentResolverBackend, Processor, SqliteBackend,
    config::Cli,
    host::{DirFiler, ElementModel, TracingMessager}
};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .init();

    let cli = Cli::parse();

    let model = match fs::read_to_string(&cli.elements)
        .map_err(|e| e.to_string())
        .and_then(|text| ElementModel::from_json(&text).map_err(|e| e.to_string()))
    {
        Ok(model) => model,
        Err(error) => {
            tracing::error!(path = %cli.elements.display(), "{error}");
            return ExitCode::FAILURE;
        }
    };

    let config = match cli.processor_config() {
        Ok(config) => config,
        Err(error) => {
            tracing::error!("{error}");
            return ExitCode::FAILURE;
        }
    };
    let mut filer = DirFiler::new(&cli.out);
    let mut messager = TracingMessager::default();
    let mut generated = 0;

    if cli.backend.sqlite() {
        let outcome = Processor::new(SqliteBackend, config.clone()).process(
            &model,
            &mut filer,
            &mut messager
        );
        generated += outcome.generated.len();
    }
    if cli.backend.content_resolver() {
        let outcome = Processor::new(ContentResolverBackend, config).process(
            &model,
            &mut filer,
            &mut messager
        );
        generated += outcome.generated.len();
    }

    tracing::info!(generated, out = %filer.root().display(), "done");
    if messager.error_count() > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
