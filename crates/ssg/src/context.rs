//! Resolved settings for a CLI invocation

use anyhow::{Context as _, Result};
use ssg_core::config::consts::layout::CONFIG_FILE;
use ssg_core::SiteConfig;
use std::path::{Path, PathBuf};

use crate::cli::Cli;

/// Configuration file merged with command-line overrides
pub struct Context {
    pub config: SiteConfig,
    pub verbose: bool,
}

impl Context {
    /// Load the configuration and apply flag overrides
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An explicitly given config file does not exist
    /// - The config file cannot be read or parsed
    /// - The merged settings are invalid
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => SiteConfig::from_file(path)
                .with_context(|| format!("Failed to load {}", path.display()))?,
            None => SiteConfig::load_or_default(Path::new(CONFIG_FILE))
                .with_context(|| format!("Failed to load {}", CONFIG_FILE))?,
        };

        if let Some(source) = &cli.source {
            config.site.source = source.clone();
        }
        if let Some(output) = &cli.output {
            config.site.output = output.clone();
        }
        config.validate()?;

        Ok(Self {
            config,
            verbose: cli.verbose,
        })
    }

    pub fn source(&self) -> &PathBuf {
        &self.config.site.source
    }
}
