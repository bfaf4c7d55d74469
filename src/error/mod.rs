// extsort-rs: Extension Bucket Sorter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//! anyhow::Result      plumbing (config loading, logging setup)
//!
//! SortError
//!   SourceNotDirectory  run refused, nothing written
//!   Traversal           one directory listing failed
//!   Copy                one file failed (Inspect | CreateBucket | Transfer)
//!
//! ConfigError
//!   InvalidValue        value parsed but out of range
//! ```
//!
//! `Traversal` and `Copy` errors are logged and counted by the engine; they
//! never abort sibling work.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

// --- Sort Errors ---

/// Step of a single file copy that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyStage {
    /// Re-reading the source file's metadata.
    Inspect,
    /// Creating the bucket folder under the output root.
    CreateBucket,
    /// Copying the bytes.
    Transfer,
}

impl fmt::Display for CopyStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inspect => write!(f, "inspect"),
            Self::CreateBucket => write!(f, "create bucket"),
            Self::Transfer => write!(f, "transfer"),
        }
    }
}

/// Errors raised while sorting a tree.
#[derive(Debug, Error)]
pub enum SortError {
    /// The source folder is missing or not a directory.
    #[error("folder {} not exist", path.display())]
    SourceNotDirectory { path: PathBuf },

    /// Listing a directory failed; only that subtree is abandoned.
    #[error("read folder error: {}: {source}", path.display())]
    Traversal {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Copying one file failed; only that file is abandoned.
    #[error("copy file {} error: {source}", path.display())]
    Copy {
        path: PathBuf,
        stage: CopyStage,
        #[source]
        source: std::io::Error,
    },
}

impl SortError {
    /// Path of the directory or file the error refers to.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::SourceNotDirectory { path }
            | Self::Traversal { path, .. }
            | Self::Copy { path, .. } => path,
        }
    }
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}
