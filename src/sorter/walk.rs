// extsort-rs: Extension Bucket Sorter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures_util::future::BoxFuture;
use tokio::fs;
use tokio::task::JoinSet;
use tracing::{error, trace};

use super::SortContext;
use super::copy::copy_file;
use super::entry::EntryKind;
use crate::error::SortError;

/// Canonical paths of the directories between the source root and the
/// level being walked, innermost first.
#[derive(Debug)]
pub(crate) struct Ancestry {
    dir: PathBuf,
    parent: Option<Arc<Ancestry>>,
}

fn is_ancestor(mut link: Option<&Arc<Ancestry>>, dir: &Path) -> bool {
    while let Some(node) = link {
        if node.dir == dir {
            return true;
        }
        link = node.parent.as_ref();
    }
    false
}

/// Traversal Engine: sorts everything below `dir`.
///
/// ```text
/// traverse(dir)
///   canonical(dir) already an ancestor? ── yes --> read folder error (cycle)
///   read_dir(dir) ── File      --> spawn copy_file
///                 ├─ Directory --> spawn traverse (recursive)
///                 └─ Other     --> ignored
///   join all spawned children
/// ```
///
/// Symlinked directories are walked like real ones; only a link leading
/// back into one of its own ancestors is refused. `parent` is `None` for the
/// source root.
///
/// Completes only after every child spawned for this level has completed.
/// A listing failure is logged and ends the listing of `dir`; children
/// already spawned still run to completion and nothing propagates upward.
pub(crate) fn traverse(
    dir: PathBuf,
    ctx: Arc<SortContext>,
    parent: Option<Arc<Ancestry>>,
) -> BoxFuture<'static, ()> {
    Box::pin(async move {
        let mut children = JoinSet::new();

        if let Err(source) = schedule_entries(&dir, &ctx, parent, &mut children).await {
            ctx.stats().record_traversal_error();
            let err = SortError::Traversal { path: dir, source };
            error!("{err}");
        }

        while let Some(joined) = children.join_next().await {
            if let Err(e) = joined {
                error!(error = %e, "sort task panicked");
            }
        }
    })
}

/// Lists `dir` and spawns one child per entry.
///
/// Holds a concurrency permit only while the listing is open; it is
/// released before the caller starts joining children.
async fn schedule_entries(
    dir: &Path,
    ctx: &Arc<SortContext>,
    parent: Option<Arc<Ancestry>>,
    children: &mut JoinSet<()>,
) -> io::Result<()> {
    let _permit = ctx.permit().await;

    let canonical = fs::canonicalize(dir).await?;
    if is_ancestor(parent.as_ref(), &canonical) {
        return Err(io::Error::other(format!(
            "symlink cycle back to {}",
            canonical.display()
        )));
    }
    let level = Arc::new(Ancestry {
        dir: canonical,
        parent,
    });

    let mut entries = fs::read_dir(dir).await?;
    ctx.stats().record_directory();

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        match EntryKind::of(&path).await {
            EntryKind::File => {
                children.spawn(copy_file(path, Arc::clone(ctx)));
            }
            EntryKind::Directory => {
                children.spawn(traverse(path, Arc::clone(ctx), Some(Arc::clone(&level))));
            }
            EntryKind::Other => {
                ctx.stats().record_ignored();
                trace!(path = %path.display(), "neither file nor directory, ignored");
            }
        }
    }

    Ok(())
}
