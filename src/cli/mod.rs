// extsort-rs: Extension Bucket Sorter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for extsort-rs using clap derive.
//!
//! # Invocation
//!
//! ```text
//! extsort [global options] [-j N] <SOURCE_FOLDER> <OUTPUT_FOLDER>
//! ```

pub mod global;
pub mod sort;


use crate::cli::global::GlobalOptions;
use crate::cli::sort::SortArgs;
use clap::Parser;

/// Extension Bucket Sorter
///
/// Copies every file under a folder into per-extension subfolders.
#[derive(Debug, Parser)]
#[command(
    name = "extsort",
    author,
    version,
    about = "Sorts a folder tree into per-extension folders",
    long_about = "extsort-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Walks SOURCE_FOLDER recursively and copies every regular file to\n\
                  OUTPUT_FOLDER/<ext>/<name>, where <ext> is the lowercased final\n\
                  extension. Files without an extension land directly in\n\
                  OUTPUT_FOLDER. Existing files are overwritten. Failures are\n\
                  logged and never stop the rest of the run.",
    after_help = "CONFIG FILES:\n\n\
                  extsort reads `extsort.toml` from the current directory when it\n\
                  exists, then every --config file in order, then EXTSORT__* env\n\
                  variables (e.g. EXTSORT__SORT__MAX_CONCURRENCY=32). Command-line\n\
                  flags win over all of them. Use --no-default-config to skip\n\
                  `extsort.toml`."
)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalOptions,

    /// What to sort and where
    #[command(flatten)]
    pub sort: SortArgs,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

impl Cli {
    /// Converts command-line flags to `(key, value)` config overrides.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<(String, String)> {
        let mut overrides = self.global.to_config_overrides();
        overrides.extend(self.sort.to_config_overrides());
        overrides
    }
}
