// extsort-rs: Extension Bucket Sorter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shared test utilities: log capture and scratch trees.

use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex};

use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone)]
struct BufferWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer
            .lock()
            .map_err(|_| std::io::Error::other("buffer poisoned"))?
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[derive(Clone)]
struct BufferMakeWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl<'a> MakeWriter<'a> for BufferMakeWriter {
    type Writer = BufferWriter;

    fn make_writer(&'a self) -> Self::Writer {
        BufferWriter {
            buffer: self.buffer.clone(),
        }
    }
}

/// Runs `f` with a thread-local subscriber and returns its output and the
/// captured INFO+ lines (`LEVEL message`, no timestamps).
///
/// Tasks must run on the calling thread, i.e. under a current-thread runtime.
pub(crate) async fn run_with_logs<F, Fut, T>(f: F) -> (T, Vec<String>)
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = T>,
{
    let buffer = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::fmt::Subscriber::builder()
        .with_writer(BufferMakeWriter {
            buffer: buffer.clone(),
        })
        .with_max_level(Level::INFO)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .without_time()
        .finish();

    let guard = tracing::subscriber::set_default(subscriber);
    let output = f().await;
    drop(guard);

    let lines = buffer
        .lock()
        .map(|bytes| {
            String::from_utf8_lossy(&bytes)
                .lines()
                .map(|line| line.trim().to_string())
                .collect()
        })
        .unwrap_or_default();
    (output, lines)
}

/// Lines starting with the given level, e.g. `"ERROR"`.
pub(crate) fn lines_at<'a>(lines: &'a [String], level: &str) -> Vec<&'a String> {
    lines.iter().filter(|l| l.starts_with(level)).collect()
}

/// Writes `contents` to `root/rel`, creating parent folders.
pub(crate) fn write_file(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, contents).unwrap();
}
