//! Watch command - regenerate whenever the source tree changes

use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use anyhow::{Context as _, Result};
use colored::Colorize;
use notify::{RecursiveMode, Watcher as _};
use notify_debouncer_mini::{DebounceEventResult, DebouncedEvent, new_debouncer};
use ssg_core::config::WatchConfig;
use tracing::{debug, info, warn};

use crate::commands::build;
use crate::context::Context;

/// Generate once, then rebuild on every debounced batch of changes
///
/// Runs until the process is interrupted or the watcher channel closes.
pub fn run(ctx: &Context) -> Result<()> {
    build::run(ctx);

    let source = ctx.source();
    let debounce = Duration::from_millis(ctx.config.watch.debounce_ms);
    let (tx, rx) = mpsc::channel::<DebounceEventResult>();

    let mut debouncer =
        new_debouncer(debounce, tx).context("Failed to create filesystem watcher")?;
    debouncer
        .watcher()
        .watch(source, RecursiveMode::Recursive)
        .with_context(|| format!("Failed to watch {}", source.display()))?;

    info!(
        path = %source.display(),
        debounce_ms = ctx.config.watch.debounce_ms,
        "started filesystem watcher"
    );
    println!(
        "{} Watching {} for changes. Press Ctrl+C to stop.",
        "→".cyan(),
        source.display()
    );

    for result in rx {
        match result {
            Ok(events) => {
                let changed = relevant_paths(&ctx.config.watch, &events);
                if changed.is_empty() {
                    continue;
                }
                for path in &changed {
                    debug!(path = %path.display(), "change detected");
                }
                println!(
                    "\n{} Change detected ({} path(s)), regenerating",
                    "→".cyan(),
                    changed.len()
                );
                build::run(ctx);
            }
            Err(e) => warn!(error = %e, "filesystem watch error"),
        }
    }

    Ok(())
}

/// Changed paths that are not matched by the ignore patterns
fn relevant_paths(config: &WatchConfig, events: &[DebouncedEvent]) -> Vec<PathBuf> {
    events
        .iter()
        .filter(|event| !config.is_ignored(&event.path))
        .map(|event| event.path.clone())
        .collect()
}
