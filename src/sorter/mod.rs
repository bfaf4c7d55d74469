// extsort-rs: Extension Bucket Sorter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Concurrent traversal-and-copy engine.
//!
//! ```text
//! Sorter::run(source)
//!   source is a directory? ── no --> SortError::SourceNotDirectory
//!        | yes
//!        v
//!   walk::traverse(source) ── one JoinSet per directory level
//!        |            |
//!        v            v
//!   copy::copy_file  walk::traverse (subdir)
//!        |
//!        v
//!   output_root/<bucket>/<file name>
//!
//! SortContext (Arc, shared by all tasks)
//!   output_root   permits (Semaphore)   stats (atomics)
//! ```
//!
//! Per-entry failures are logged at ERROR and counted in [`SortReport`];
//! they never cancel sibling work or fail the run.

pub mod bucket;
pub mod copy;
pub mod entry;
pub mod stats;
pub mod walk;


use std::path::{Path, PathBuf};
use std::sync::Arc;

use bon::Builder;
use tokio::sync::{Semaphore, SemaphorePermit};

use crate::config::types::{DEFAULT_MAX_CONCURRENCY, SortConfig};
use crate::error::SortError;

pub use stats::{SortReport, SortStats};

/// State shared by every task of one run.
#[derive(Debug)]
pub struct SortContext {
    output_root: PathBuf,
    permits: Semaphore,
    stats: SortStats,
}

impl SortContext {
    /// `max_concurrency` is clamped to `1..=Semaphore::MAX_PERMITS`.
    #[must_use]
    pub fn new(output_root: PathBuf, max_concurrency: usize) -> Self {
        Self {
            output_root,
            permits: Semaphore::new(max_concurrency.clamp(1, Semaphore::MAX_PERMITS)),
            stats: SortStats::default(),
        }
    }

    #[must_use]
    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    #[must_use]
    pub const fn stats(&self) -> &SortStats {
        &self.stats
    }

    /// Waits for a slot for one listing or copy.
    ///
    /// The semaphore is never closed, so this only yields `None` if that
    /// changes; callers then proceed unbounded.
    pub(crate) async fn permit(&self) -> Option<SemaphorePermit<'_>> {
        self.permits.acquire().await.ok()
    }
}

/// Sorts source trees into extension buckets under one output root.
#[derive(Debug, Clone, Builder)]
pub struct Sorter {
    #[builder(setters(name = with_output_root), into)]
    output_root: PathBuf,
    #[builder(setters(name = with_max_concurrency), default = DEFAULT_MAX_CONCURRENCY)]
    max_concurrency: usize,
}

impl Sorter {
    /// Creates a sorter from the `[sort]` config section.
    #[must_use]
    pub fn from_config(output_root: impl Into<PathBuf>, config: &SortConfig) -> Self {
        Self::builder()
            .with_output_root(output_root)
            .with_max_concurrency(config.max_concurrency)
            .build()
    }

    #[must_use]
    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    #[must_use]
    pub const fn max_concurrency(&self) -> usize {
        self.max_concurrency
    }

    /// Copies every regular file below `source` into its bucket.
    ///
    /// Returns once every directory listing and copy has been attempted.
    ///
    /// # Errors
    ///
    /// Returns `SortError::SourceNotDirectory` if `source` does not exist or is
    /// not a directory. Nothing is written in that case. All other failures
    /// are logged and counted in the returned report.
    pub async fn run(&self, source: &Path) -> Result<SortReport, SortError> {
        let is_dir = tokio::fs::metadata(source)
            .await
            .is_ok_and(|meta| meta.is_dir());
        if !is_dir {
            return Err(SortError::SourceNotDirectory {
                path: source.to_path_buf(),
            });
        }

        let ctx = Arc::new(SortContext::new(
            self.output_root.clone(),
            self.max_concurrency,
        ));
        walk::traverse(source.to_path_buf(), Arc::clone(&ctx), None).await;

        Ok(ctx.stats().snapshot())
    }
}
