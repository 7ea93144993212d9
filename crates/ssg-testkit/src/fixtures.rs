//! Site fixtures for testing
//!
//! [`SiteFixture`] lays out a throwaway project directory with a source tree
//! (`src/`) and a sibling output location (`generated/`), matching the
//! layout the `ssg` binary uses when run without flags.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::temp_dir_in_workspace;

/// A temporary project with a `src/` tree and a `generated/` output path
pub struct SiteFixture {
    temp: TempDir,
}

impl SiteFixture {
    /// Create an empty project with an existing `src/` directory
    ///
    /// The `generated/` directory is not created; producing it is the
    /// generator's job.
    pub fn new() -> Self {
        let temp = temp_dir_in_workspace();
        fs::create_dir_all(temp.path().join("src")).expect("Failed to create src/");
        Self { temp }
    }

    /// Project root (the directory the binary should run in)
    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    /// Source tree root (`<root>/src`)
    pub fn source(&self) -> PathBuf {
        self.root().join("src")
    }

    /// Output tree root (`<root>/generated`)
    pub fn output(&self) -> PathBuf {
        self.root().join("generated")
    }

    /// Write a file below `src/`, creating parent directories as needed
    pub fn file(&self, rel: &str, contents: impl AsRef<[u8]>) -> &Self {
        let path = self.source().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, contents).expect("Failed to write fixture file");
        self
    }

    /// Create an (empty) directory below `src/`
    pub fn dir(&self, rel: &str) -> &Self {
        fs::create_dir_all(self.source().join(rel)).expect("Failed to create fixture directory");
        self
    }

    /// Read a generated file as UTF-8 text
    pub fn read_output(&self, rel: &str) -> String {
        let path = self.output().join(rel);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
    }

    /// Read a generated file as raw bytes
    pub fn read_output_bytes(&self, rel: &str) -> Vec<u8> {
        let path = self.output().join(rel);
        fs::read(&path).unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
    }
}

impl Default for SiteFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Relative paths of every regular file below `root`, sorted
pub fn collect_files(root: &Path) -> Vec<PathBuf> {
    let mut out = Vec::new();
    collect(root, root, &mut out, false);
    out.sort();
    out
}

/// Relative paths of every directory below `root` (excluding `root`), sorted
pub fn collect_dirs(root: &Path) -> Vec<PathBuf> {
    let mut out = Vec::new();
    collect(root, root, &mut out, true);
    out.sort();
    out
}

fn collect(root: &Path, dir: &Path, out: &mut Vec<PathBuf>, dirs: bool) {
    let entries = fs::read_dir(dir)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", dir.display(), e));
    for entry in entries {
        let path = entry.expect("Failed to read directory entry").path();
        let rel = path
            .strip_prefix(root)
            .expect("entry should be below root")
            .to_path_buf();
        if path.is_dir() {
            if dirs {
                out.push(rel);
            }
            collect(root, &path, out, dirs);
        } else if !dirs {
            out.push(rel);
        }
    }
}
