//! Build command - generate the output tree once

use crate::context::Context;
use crate::output::{print_summary, ConsoleProgress};
use ssg_core::generate_site;

/// Generate the site and print the summary
///
/// # Exit Code
///
/// Returns `false` when any diagnostic was recorded; the binary maps that
/// to exit code 1.
pub fn run(ctx: &Context) -> bool {
    let report = generate_site(&ctx.config, &mut ConsoleProgress);
    print_summary(&report, ctx.verbose);
    report.is_success()
}
