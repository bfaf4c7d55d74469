// extsort-rs: Extension Bucket Sorter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use clap::Args;
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Positional folders plus engine tuning.
#[derive(Debug, Clone, Args)]
pub struct SortArgs {
    /// Folder to scan recursively. Must exist.
    #[arg(value_name = "SOURCE_FOLDER")]
    pub source_folder: PathBuf,

    /// Folder that receives one subfolder per extension. Created on demand.
    #[arg(value_name = "OUTPUT_FOLDER")]
    pub output_folder: PathBuf,

    /// Maximum number of directory listings and file copies in flight.
    #[arg(short = 'j', long = "max-concurrency", value_name = "N")]
    pub max_concurrency: Option<NonZeroUsize>,
}

impl SortArgs {
    /// Converts engine flags to config overrides.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<(String, String)> {
        self.max_concurrency
            .map(|n| ("sort.max_concurrency".to_string(), n.to_string()))
            .into_iter()
            .collect()
    }
}
