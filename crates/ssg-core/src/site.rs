//! Site generation entry point

use std::path::Path;
use std::time::{Duration, Instant};

use tracing::info;

use crate::config::SiteConfig;
use crate::diagnostics::ErrorLog;
use crate::walk::{walk, Progress, WalkStats};

/// Result of one generation run
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub errors: ErrorLog,
    pub stats: WalkStats,
    pub elapsed: Duration,
}

impl BuildReport {
    /// True when no diagnostic was recorded
    pub fn is_success(&self) -> bool {
        self.errors.is_empty() && self.errors.dropped() == 0
    }
}

/// Generate the site described by `config`
pub fn generate_site(config: &SiteConfig, progress: &mut dyn Progress) -> BuildReport {
    generate(
        &config.site.source,
        &config.site.output,
        config.limits.max_errors,
        progress,
    )
}

/// Walk `source` into `output` with a fresh log of `max_errors` entries
pub fn generate(
    source: &Path,
    output: &Path,
    max_errors: usize,
    progress: &mut dyn Progress,
) -> BuildReport {
    info!(source = %source.display(), output = %output.display(), "generating site");
    let started = Instant::now();

    let mut errors = ErrorLog::with_capacity(max_errors);
    let stats = walk(source, output, &mut errors, progress);

    let report = BuildReport {
        errors,
        stats,
        elapsed: started.elapsed(),
    };
    info!(
        files = report.stats.files(),
        directories = report.stats.directories,
        errors = report.errors.len(),
        dropped = report.errors.dropped(),
        elapsed_ms = report.elapsed.as_millis() as u64,
        "generation finished"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::walk::Silent;
    use ssg_testkit::temp_dir_in_workspace;
    use std::fs;

    #[test]
    fn test_generate_site_uses_config_paths() {
        let temp = temp_dir_in_workspace();
        let mut config = SiteConfig::default();
        config.site.source = temp.path().join("content");
        config.site.output = temp.path().join("public");
        fs::create_dir_all(&config.site.source).unwrap();
        fs::write(config.site.source.join("robots.txt"), "User-agent: *\n").unwrap();

        let report = generate_site(&config, &mut Silent);

        assert!(report.is_success());
        assert_eq!(report.stats.copied, 1);
        assert_eq!(
            fs::read_to_string(temp.path().join("public/robots.txt")).unwrap(),
            "User-agent: *\n"
        );
    }

    #[test]
    fn test_error_cap_comes_from_config() {
        let temp = temp_dir_in_workspace();
        let src = temp.path().join("src");
        fs::create_dir_all(&src).unwrap();
        let page = "<!-- template: a.html -->\n<!-- template: b.html -->\n<!-- template: c.html -->\n";
        fs::write(src.join("page.html"), page).unwrap();

        let report = generate(&src, &temp.path().join("out"), 2, &mut Silent);

        assert!(!report.is_success());
        assert_eq!(report.errors.len(), 2);
        assert_eq!(report.errors.dropped(), 1);
        assert!(report.errors.entries()[0].contains("a.html"));
        assert!(report.errors.entries()[1].contains("b.html"));
    }

    #[test]
    fn test_zero_capacity_still_reports_failure() {
        let temp = temp_dir_in_workspace();
        let report = generate(
            &temp.path().join("missing"),
            &temp.path().join("out"),
            0,
            &mut Silent,
        );
        assert!(report.errors.is_empty());
        assert!(!report.is_success());
    }
}
