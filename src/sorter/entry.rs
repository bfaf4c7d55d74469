// extsort-rs: Extension Bucket Sorter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;
use tokio::fs;

/// What the walker does with a directory entry.
///
/// Classification follows symlinks: a link to a file is a `File`, a link to
/// a directory is a `Directory`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular file: copied.
    File,
    /// Directory: walked.
    Directory,
    /// Anything else: skipped without logging an error.
    ///
    /// Covers sockets, FIFOs, devices, broken symlinks and entries that
    /// vanished after listing.
    Other,
}

impl EntryKind {
    /// Classifies `path` at call time.
    pub async fn of(path: &Path) -> Self {
        fs::metadata(path)
            .await
            .map_or(Self::Other, |meta| Self::from_file_type(meta.file_type()))
    }

    #[must_use]
    pub fn from_file_type(file_type: std::fs::FileType) -> Self {
        if file_type.is_file() {
            Self::File
        } else if file_type.is_dir() {
            Self::Directory
        } else {
            Self::Other
        }
    }
}
