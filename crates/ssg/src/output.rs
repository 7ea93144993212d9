//! Console reporting

use colored::Colorize;
use ssg_core::{BuildReport, Progress};
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

/// Prints one `Processed:` line per file to stdout
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn file_processed(&mut self, src: &Path, dest: &Path) {
        if let Err(e) = print_text(&format!(
            "Processed: {} -> {}",
            src.display(),
            dest.display()
        )) {
            debug!(error = %e, "failed to write progress line");
        }
    }
}

pub fn print_text(s: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{s}")
}

/// Print the end-of-run summary
pub fn print_summary(report: &BuildReport, verbose: bool) {
    if report.is_success() {
        println!("{}", "Static site generation complete.".green());
        if verbose {
            println!(
                "{} {} file(s), {} director(ies) in {:.2?}",
                "→".cyan(),
                report.stats.files(),
                report.stats.directories,
                report.elapsed
            );
        }
        return;
    }

    println!("{}", "Static site generation completed with errors:".red());
    for entry in &report.errors {
        println!("- {}", entry);
    }
    if report.errors.dropped() > 0 {
        println!(
            "{}",
            format!(
                "({} more error(s) not shown; log capacity is {})",
                report.errors.dropped(),
                report.errors.capacity()
            )
            .yellow()
        );
    }
    println!("{}", "Generation failed due to errors.".red());
    println!("{}", "Fix the errors and run again. :)".yellow());
}
