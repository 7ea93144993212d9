//! Source tree traversal
//!
//! The walker mirrors every directory below the source root into the
//! destination root and hands each regular file to the markup processor
//! or the file copier. Other entries (sockets, FIFOs, devices) are recorded
//! as errors and never opened. Failures are recorded per entry; one bad file or
//! unreadable directory never stops the rest of the walk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::config::consts::layout::MARKUP_SUFFIX;
use crate::copy::copy_file;
use crate::diagnostics::ErrorLog;
use crate::error::SsgError;
use crate::markup::process_markup;

/// How a regular file is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Name ends with `.html` (case-sensitive); goes through template resolution
    Markup,
    /// Anything else; copied byte for byte
    Other,
}

impl FileKind {
    pub fn classify(path: &Path) -> Self {
        let is_markup = path
            .file_name()
            .map(|name| name.as_encoded_bytes().ends_with(MARKUP_SUFFIX.as_bytes()))
            .unwrap_or(false);
        if is_markup {
            FileKind::Markup
        } else {
            FileKind::Other
        }
    }
}

/// Receives one notification per processed file, successful or not
pub trait Progress {
    fn file_processed(&mut self, src: &Path, dest: &Path);
}

impl<F: FnMut(&Path, &Path)> Progress for F {
    fn file_processed(&mut self, src: &Path, dest: &Path) {
        self(src, dest)
    }
}

/// Progress sink that ignores every notification
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Progress for Silent {
    fn file_processed(&mut self, _src: &Path, _dest: &Path) {}
}

/// Counters for one walk
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WalkStats {
    /// Directories mirrored below the destination root
    pub directories: usize,
    /// Markup files rendered without error
    pub rendered: usize,
    /// Other files copied without error
    pub copied: usize,
    /// Files whose processing recorded an error
    pub failed: usize,
}

impl WalkStats {
    pub fn files(&self) -> usize {
        self.rendered + self.copied + self.failed
    }
}

/// Walk `source` depth-first and mirror it into `dest`.
///
/// Entries are visited in file-name order. Symbolic links are followed;
/// link cycles are recorded as directory errors. If `source` itself cannot
/// be opened, one diagnostic is recorded and nothing is written.
pub fn walk(
    source: &Path,
    dest: &Path,
    log: &mut ErrorLog,
    progress: &mut dyn Progress,
) -> WalkStats {
    let mut stats = WalkStats::default();

    if let Err(e) = fs::read_dir(source) {
        log.record(&SsgError::DirectoryOpen {
            path: source.to_path_buf(),
            source: e,
        });
        return stats;
    }
    if let Err(e) = fs::create_dir_all(dest) {
        log.record(&SsgError::DirectoryCreate {
            path: dest.to_path_buf(),
            source: e,
        });
        return stats;
    }

    let mut entries = WalkDir::new(source)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter();

    while let Some(entry) = entries.next() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let unreadable = unreadable_file(source, dest, &err);
                log.record(&walk_error(source, err));
                if let Some((src, target)) = unreadable {
                    stats.failed += 1;
                    progress.file_processed(&src, &target);
                }
                continue;
            }
        };

        let Ok(rel) = entry.path().strip_prefix(source) else {
            continue;
        };
        let target = dest.join(rel);

        if entry.file_type().is_dir() {
            if let Err(e) = fs::create_dir_all(&target) {
                log.record(&SsgError::DirectoryCreate {
                    path: target,
                    source: e,
                });
                entries.skip_current_dir();
                continue;
            }
            debug!(dir = %target.display(), "mirrored directory");
            stats.directories += 1;
            continue;
        }

        if !entry.file_type().is_file() {
            log.record(&SsgError::SourceOpen {
                path: entry.path().to_path_buf(),
                source: io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"),
            });
            stats.failed += 1;
            progress.file_processed(entry.path(), &target);
            continue;
        }

        let ok = match FileKind::classify(entry.path()) {
            FileKind::Markup => {
                let ok = process_markup(entry.path(), &target, log);
                if ok {
                    stats.rendered += 1;
                }
                ok
            }
            FileKind::Other => {
                let ok = copy_file(entry.path(), &target, log);
                if ok {
                    stats.copied += 1;
                }
                ok
            }
        };
        if !ok {
            stats.failed += 1;
        }
        progress.file_processed(entry.path(), &target);
    }

    stats
}

/// Source and destination of a file entry the walker could not stat
fn unreadable_file(
    source: &Path,
    dest: &Path,
    err: &walkdir::Error,
) -> Option<(PathBuf, PathBuf)> {
    if err.loop_ancestor().is_some() {
        return None;
    }
    let path = err.path()?;
    if path.is_dir() {
        return None;
    }
    let rel = path.strip_prefix(source).ok()?;
    if rel.as_os_str().is_empty() {
        return None;
    }
    Some((path.to_path_buf(), dest.join(rel)))
}

/// Map a traversal error to the diagnostic for the entry it concerns
fn walk_error(source: &Path, err: walkdir::Error) -> SsgError {
    let path = err.path().unwrap_or(source).to_path_buf();
    let is_dir = err.loop_ancestor().is_some() || path.is_dir();
    let io_err = match err.into_io_error() {
        Some(e) => e,
        None => io::Error::other("filesystem loop"),
    };
    if is_dir {
        SsgError::DirectoryOpen {
            path,
            source: io_err,
        }
    } else {
        SsgError::SourceOpen {
            path,
            source: io_err,
        }
    }
}
