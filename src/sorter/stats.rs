// extsort-rs: Extension Bucket Sorter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Serialize;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

/// Counters shared by every task of one run.
#[derive(Debug, Default)]
pub struct SortStats {
    directories_scanned: AtomicUsize,
    files_copied: AtomicUsize,
    bytes_copied: AtomicU64,
    files_skipped: AtomicUsize,
    entries_ignored: AtomicUsize,
    copy_errors: AtomicUsize,
    traversal_errors: AtomicUsize,
}

impl SortStats {
    pub(crate) fn record_directory(&self) {
        self.directories_scanned.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_copied(&self, bytes: u64) {
        self.files_copied.fetch_add(1, Ordering::Relaxed);
        self.bytes_copied.fetch_add(bytes, Ordering::Relaxed);
    }

    pub(crate) fn record_skipped(&self) {
        self.files_skipped.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_ignored(&self) {
        self.entries_ignored.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_copy_error(&self) {
        self.copy_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_traversal_error(&self) {
        self.traversal_errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Point-in-time copy of the counters.
    ///
    /// Only exact once every task of the run has been joined.
    #[must_use]
    pub fn snapshot(&self) -> SortReport {
        SortReport {
            directories_scanned: self.directories_scanned.load(Ordering::Relaxed),
            files_copied: self.files_copied.load(Ordering::Relaxed),
            bytes_copied: self.bytes_copied.load(Ordering::Relaxed),
            files_skipped: self.files_skipped.load(Ordering::Relaxed),
            entries_ignored: self.entries_ignored.load(Ordering::Relaxed),
            copy_errors: self.copy_errors.load(Ordering::Relaxed),
            traversal_errors: self.traversal_errors.load(Ordering::Relaxed),
        }
    }
}

/// Summary of a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SortReport {
    /// Directories whose listing could be opened.
    pub directories_scanned: usize,
    pub files_copied: usize,
    pub bytes_copied: u64,
    /// Files that vanished or changed type between listing and copying.
    pub files_skipped: usize,
    /// Entries that were neither a file nor a directory.
    pub entries_ignored: usize,
    pub copy_errors: usize,
    pub traversal_errors: usize,
}

impl SortReport {
    /// Number of ERROR lines the run produced.
    #[must_use]
    pub const fn error_count(&self) -> usize {
        self.copy_errors + self.traversal_errors
    }
}
