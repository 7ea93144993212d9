//! Template module - single-level file inclusion for markup files
//!
//! A markup line containing a marker comment is replaced by the contents of
//! the named file, looked up next to the file being processed:
//!
//! ```text
//! <!-- template: header.html -->
//! ```
//!
//! ## Rules
//!
//! - **One level only**: included contents are written verbatim and never
//!   scanned for further markers, so mutually referencing files terminate.
//! - **Sibling lookup**: the name is joined onto the directory of the
//!   referencing source file, never the output tree.
//! - **Dangling markers stay visible**: a missing template leaves the
//!   original line in the output and records one diagnostic.

mod marker;
mod resolver;

pub use marker::TemplateReference;
pub use resolver::{resolve_line, Resolution, TemplateResolver};
