// extsort-rs: Extension Bucket Sorter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> run_sort_command
//! ```

use std::io::IsTerminal;
use std::process::ExitCode;

use extsort_rs::cli::{self, Cli};
use extsort_rs::cmd::sort::run_sort_command;
use extsort_rs::config::loader::ConfigLoader;
use extsort_rs::config::{Config, DEFAULT_CONFIG_FILE, ENV_PREFIX};
use extsort_rs::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let loader = match build_config_loader(&cli) {
        Ok(loader) => loader,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    let sources = loader.loaded_files().to_vec();
    let config = match loader.build() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match init_logging(&build_log_config(&config)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    for (kind, path) in &sources {
        tracing::debug!(?kind, path = %path.display(), "config source");
    }

    // Per-entry failures are only visible in the log; the exit code stays 0.
    run_sort_command(&cli.sort, &config).await;
    ExitCode::SUCCESS
}

fn build_log_config(config: &Config) -> LogConfig {
    LogConfig::builder()
        .with_console_level(config.global.output_log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(config.global.log_file.clone())
        .with_ansi(std::io::stderr().is_terminal())
        .build()
}

fn build_config_loader(cli: &Cli) -> extsort_rs::error::Result<ConfigLoader> {
    let mut loader = ConfigLoader::new();
    if !cli.global.no_default_config {
        loader = loader.add_toml_file_optional(DEFAULT_CONFIG_FILE);
    }
    for path in &cli.global.configs {
        loader = loader.add_toml_file(path);
    }
    loader = loader.with_env_prefix(ENV_PREFIX);
    for (key, value) in cli.to_config_overrides() {
        loader = loader.set(&key, value)?;
    }
    Ok(loader)
}
