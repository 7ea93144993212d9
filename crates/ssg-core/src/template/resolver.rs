//! Per-line template resolution

use std::fs;
use std::path::Path;

use tracing::debug;

use super::marker::TemplateReference;
use crate::diagnostics::ErrorLog;
use crate::error::SsgError;

/// Outcome of resolving one markup line
#[derive(Debug, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// No marker on the line
    Unchanged(&'a [u8]),
    /// Marker resolved; `contents` replaces the whole line
    Included {
        template: TemplateReference,
        contents: Vec<u8>,
    },
    /// Marker found but the template could not be read; the line is kept
    Dangling {
        template: TemplateReference,
        line: &'a [u8],
    },
}

impl Resolution<'_> {
    /// Whether the line carried a template marker
    pub fn is_match(&self) -> bool {
        !matches!(self, Resolution::Unchanged(_))
    }

    /// Bytes to emit in place of the line
    pub fn output(&self) -> &[u8] {
        match self {
            Resolution::Unchanged(line) => line,
            Resolution::Included { contents, .. } => contents,
            Resolution::Dangling { line, .. } => line,
        }
    }
}

/// Resolves markers for the lines of a single source file
#[derive(Debug, Clone, Copy)]
pub struct TemplateResolver<'a> {
    base_dir: &'a Path,
    referrer: &'a Path,
}

impl<'a> TemplateResolver<'a> {
    /// Resolver for lines read from `source`; templates are looked up in its directory
    pub fn for_file(source: &'a Path) -> Self {
        Self {
            base_dir: source.parent().unwrap_or_else(|| Path::new("")),
            referrer: source,
        }
    }

    pub fn base_dir(&self) -> &Path {
        self.base_dir
    }

    pub fn resolve_line<'l>(&self, line: &'l [u8], log: &mut ErrorLog) -> Resolution<'l> {
        resolve(line, self.base_dir, self.referrer, None, log)
    }

    /// Like [`resolve_line`](Self::resolve_line), naming the 1-based `number`
    /// of the line in the diagnostic for a missing template
    pub fn resolve_line_at<'l>(
        &self,
        line: &'l [u8],
        number: usize,
        log: &mut ErrorLog,
    ) -> Resolution<'l> {
        resolve(line, self.base_dir, self.referrer, Some(number), log)
    }
}

/// Resolve a single line.
///
/// `base_dir` is the directory of `referrer`, the source file the line was
/// read from. A missing template records one diagnostic in `log` and yields
/// [`Resolution::Dangling`], which echoes the original line.
pub fn resolve_line<'l>(
    line: &'l [u8],
    base_dir: &Path,
    referrer: &Path,
    log: &mut ErrorLog,
) -> Resolution<'l> {
    resolve(line, base_dir, referrer, None, log)
}

fn resolve<'l>(
    line: &'l [u8],
    base_dir: &Path,
    referrer: &Path,
    number: Option<usize>,
    log: &mut ErrorLog,
) -> Resolution<'l> {
    let Some(template) = TemplateReference::find(line) else {
        return Resolution::Unchanged(line);
    };

    let path = template.path_in(base_dir);
    match fs::read(&path) {
        Ok(contents) => {
            debug!(template = %path.display(), referrer = %referrer.display(), "included template");
            Resolution::Included { template, contents }
        }
        Err(e) => {
            debug!(template = %path.display(), error = %e, "template unreadable");
            log.record(&SsgError::TemplateNotFound {
                template: template.name().into_owned(),
                referrer: referrer.to_path_buf(),
                line: number,
            });
            Resolution::Dangling { template, line }
        }
    }
}
