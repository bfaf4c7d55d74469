// extsort-rs: Extension Bucket Sorter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use tracing::{debug, error, info};

use crate::cli::sort::SortArgs;
use crate::config::Config;
use crate::sorter::{SortReport, Sorter};

/// Runs one sort and logs its outcome.
///
/// A missing source folder produces a single ERROR line and no output. Every
/// other failure was already logged by the engine. Returns `None` when the
/// run did not start; the process exits 0 either way.
pub async fn run_sort_command(args: &SortArgs, config: &Config) -> Option<SortReport> {
    let sorter = Sorter::from_config(&args.output_folder, &config.sort);
    debug!(
        source = %args.source_folder.display(),
        output = %sorter.output_root().display(),
        max_concurrency = sorter.max_concurrency(),
        "process start"
    );

    match sorter.run(&args.source_folder).await {
        Ok(report) => {
            info!(
                directories = report.directories_scanned,
                copied = report.files_copied,
                bytes = report.bytes_copied,
                skipped = report.files_skipped,
                ignored = report.entries_ignored,
                errors = report.error_count(),
                "process done"
            );
            Some(report)
        }
        Err(err) => {
            error!("{err}");
            None
        }
    }
}
