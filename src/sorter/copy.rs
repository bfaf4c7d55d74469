// extsort-rs: Extension Bucket Sorter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::fs;
use tracing::{debug, error};

use super::SortContext;
use super::bucket::{bucket_dir, target_path};
use crate::error::{CopyStage, SortError};

/// Result of a single copy that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The file was written to `target`.
    Copied { target: PathBuf, bytes: u64 },
    /// The source vanished or stopped being a regular file.
    Skipped,
}

/// Copies `file` into its bucket under `output_root`.
///
/// The bucket folder is created with `create_dir_all`, which succeeds when a
/// concurrent copy created it first. An existing target is overwritten.
///
/// # Example
/// ```no_run
/// use extsort_rs::sorter::copy::{copy_into_bucket, CopyOutcome};
/// use std::path::Path;
///
/// # async fn example() -> Result<(), extsort_rs::error::SortError> {
/// let outcome = copy_into_bucket(Path::new("in/Report.TXT"), Path::new("out")).await?;
/// assert!(matches!(outcome, CopyOutcome::Copied { .. })); // out/txt/Report.TXT
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns `SortError::Copy` if the source cannot be inspected, the bucket
/// folder cannot be created, or the transfer fails (including when the
/// target is the source file itself).
pub async fn copy_into_bucket(file: &Path, output_root: &Path) -> Result<CopyOutcome, SortError> {
    let fail = |stage: CopyStage, source: io::Error| SortError::Copy {
        path: file.to_path_buf(),
        stage,
        source,
    };

    let meta = match fs::metadata(file).await {
        Ok(meta) if meta.is_file() => meta,
        Ok(_) => return Ok(CopyOutcome::Skipped),
        Err(e) if matches!(e.kind(), io::ErrorKind::NotFound | io::ErrorKind::NotADirectory) => {
            return Ok(CopyOutcome::Skipped);
        }
        Err(e) => return Err(fail(CopyStage::Inspect, e)),
    };

    let Some(target) = target_path(output_root, file) else {
        return Err(fail(
            CopyStage::Inspect,
            io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"),
        ));
    };

    fs::create_dir_all(bucket_dir(output_root, file))
        .await
        .map_err(|e| fail(CopyStage::CreateBucket, e))?;

    if is_same_file(file, &meta, &target).await {
        return Err(fail(
            CopyStage::Transfer,
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} is the same file", target.display()),
            ),
        ));
    }

    let bytes = fs::copy(file, &target)
        .await
        .map_err(|e| fail(CopyStage::Transfer, e))?;

    Ok(CopyOutcome::Copied { target, bytes })
}

/// Whether `target` already is `file` (same path, or a hard link to it).
///
/// Costs one `stat` of the target per copy.
#[cfg(unix)]
async fn is_same_file(_file: &Path, meta: &std::fs::Metadata, target: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    fs::metadata(target)
        .await
        .is_ok_and(|t| t.dev() == meta.dev() && t.ino() == meta.ino())
}

#[cfg(not(unix))]
async fn is_same_file(file: &Path, _meta: &std::fs::Metadata, target: &Path) -> bool {
    match (fs::canonicalize(file).await, fs::canonicalize(target).await) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Copy Operation: copies one file and absorbs its failure.
///
/// Errors are logged and counted, never returned, so one bad file cannot
/// abort its siblings or the walk that scheduled it.
pub(crate) async fn copy_file(file: PathBuf, ctx: Arc<SortContext>) {
    let _permit = ctx.permit().await;

    match copy_into_bucket(&file, ctx.output_root()).await {
        Ok(CopyOutcome::Copied { target, bytes }) => {
            ctx.stats().record_copied(bytes);
            debug!(source = %file.display(), target = %target.display(), bytes, "copied");
        }
        Ok(CopyOutcome::Skipped) => {
            ctx.stats().record_skipped();
            debug!(source = %file.display(), "no longer a regular file, skipped");
        }
        Err(err) => {
            ctx.stats().record_copy_error();
            match &err {
                SortError::Copy { stage, .. } => error!(%stage, "{err}"),
                _ => error!("{err}"),
            }
        }
    }
}
