// extsort-rs: Extension Bucket Sorter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Extension buckets.
//!
//! ```text
//! report.TXT      -> txt
//! archive.tar.gz  -> gz
//! README          -> ""   (output root itself)
//! .bashrc         -> ""
//! ```

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Name of the output subfolder for `path`.
///
/// The final extension, lowercased, without the dot. Files without an
/// extension (including dotfiles such as `.bashrc`) map to the empty bucket.
/// Non-UTF-8 extensions are kept as-is since they cannot be case-folded.
#[must_use]
pub fn bucket_for(path: &Path) -> OsString {
    match path.extension() {
        None => OsString::new(),
        Some(ext) => ext
            .to_str()
            .map_or_else(|| ext.to_os_string(), |ext| ext.to_lowercase().into()),
    }
}

/// Folder that receives files of `path`'s bucket.
///
/// The empty bucket joins to `output_root` itself.
#[must_use]
pub fn bucket_dir(output_root: &Path, path: &Path) -> PathBuf {
    output_root.join(bucket_for(path))
}

/// Full destination of `path`, or `None` if it has no file name.
#[must_use]
pub fn target_path(output_root: &Path, path: &Path) -> Option<PathBuf> {
    Some(bucket_dir(output_root, path).join(path.file_name()?))
}
