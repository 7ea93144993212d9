//! CLI command structure using clap

use clap::Parser;
use std::path::PathBuf;

/// Static site generator with single-level HTML includes
///
/// Copies every file from the source tree into the output tree. In `.html`
/// files, a line containing `<!-- template: NAME -->` is replaced by the
/// contents of NAME, read from the same directory.
#[derive(Parser)]
#[command(name = "ssg")]
#[command(version, about, long_about)]
pub struct Cli {
    /// Source directory (default: ./src)
    #[arg(long, value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// Output directory (default: ./generated)
    #[arg(long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Configuration file (default: ./ssg.toml, if present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Regenerate whenever the source tree changes
    #[arg(short, long)]
    pub watch: bool,

    /// Debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,
}
