use std::path::PathBuf;
use thiserror::Error;

/// Failures raised while generating a site.
///
/// Variants other than [`SsgError::ConfigParse`] and [`SsgError::ConfigInvalid`]
/// are recoverable: the walker records them in the
/// [`ErrorLog`](crate::diagnostics::ErrorLog) and moves on to the next entry.
/// Their `Display` output is the diagnostic line shown to the user.
#[derive(Error, Debug)]
pub enum SsgError {
    // Tree walk errors
    #[error("Error opening directory: {}", .path.display())]
    DirectoryOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error creating directory: {}", .path.display())]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Copy errors
    #[error("Error opening source file: {}", .path.display())]
    SourceOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error opening destination file: {}", .path.display())]
    DestinationOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error writing to file: {}", .path.display())]
    PartialWrite { path: PathBuf, read: usize, written: usize },

    // Markup errors
    #[error("Error opening input file: {}", .path.display())]
    InputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error opening output file: {}", .path.display())]
    OutputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error writing to file: {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error reading file: {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Template errors
    /// `line` is the 1-based line of the marker, when known
    #[error(
        "Warning: Template {template} not found for {}{}",
        .referrer.display(),
        line_suffix(.line)
    )]
    TemplateNotFound {
        template: String,
        referrer: PathBuf,
        line: Option<usize>,
    },

    // Config errors
    #[error("CONFIG_PARSE_ERROR: failed to read {}: {reason}", .path.display())]
    ConfigParse { path: PathBuf, reason: String },

    #[error("CONFIG_INVALID_VALUE: {field}: {reason}")]
    ConfigInvalid { field: String, reason: String },
}

pub type Result<T> = std::result::Result<T, SsgError>;

fn line_suffix(line: &Option<usize>) -> String {
    match line {
        Some(n) => format!(":{n}"),
        None => String::new(),
    }
}
