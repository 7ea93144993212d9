use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::consts::{layout, limits, watch};
use crate::error::{Result, SsgError};

/// ssg.toml schema
///
/// Every section is optional; an absent file is equivalent to an empty one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteConfig {
    #[serde(default)]
    pub site: SiteSection,
    #[serde(default)]
    pub limits: LimitsConfig,
    #[serde(default)]
    pub watch: WatchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteSection {
    #[serde(default = "default_source")]
    pub source: PathBuf,
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            source: default_source(),
            output: default_output(),
        }
    }
}

fn default_source() -> PathBuf {
    PathBuf::from(layout::DEFAULT_SOURCE_DIR)
}

fn default_output() -> PathBuf {
    PathBuf::from(layout::DEFAULT_OUTPUT_DIR)
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LimitsConfig {
    #[serde(default = "default_max_errors")]
    pub max_errors: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_errors: default_max_errors(),
        }
    }
}

fn default_max_errors() -> usize {
    limits::MAX_ERRORS
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WatchConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_ignore")]
    pub ignore: Vec<String>,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            ignore: default_ignore(),
        }
    }
}

fn default_debounce_ms() -> u64 {
    watch::DEFAULT_DEBOUNCE_MS
}

fn default_ignore() -> Vec<String> {
    watch::DEFAULT_IGNORE.iter().map(|s| s.to_string()).collect()
}

impl WatchConfig {
    /// Whether a changed path matches one of the ignore patterns.
    ///
    /// Patterns are matched against the file name only. Invalid patterns
    /// never match.
    pub fn is_ignored(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        self.ignore.iter().any(|pattern| {
            glob::Pattern::new(pattern)
                .map(|p| p.matches(name))
                .unwrap_or(false)
        })
    }
}

impl SiteConfig {
    /// Read and validate a configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| SsgError::ConfigParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| SsgError::ConfigParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read `path` if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Reject layouts the walker cannot handle.
    ///
    /// An output tree inside the source tree would be walked while it is
    /// being written, so the two must be disjoint. The check is lexical;
    /// symlinks are not resolved.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.watch.ignore {
            glob::Pattern::new(pattern).map_err(|e| SsgError::ConfigInvalid {
                field: "watch.ignore".to_string(),
                reason: format!("'{}': {}", pattern, e),
            })?;
        }

        let source = normalize(&self.site.source);
        let output = normalize(&self.site.output);
        if output.starts_with(&source) {
            return Err(SsgError::ConfigInvalid {
                field: "site.output".to_string(),
                reason: format!(
                    "'{}' must not be inside the source directory '{}'",
                    self.site.output.display(),
                    self.site.source.display()
                ),
            });
        }
        Ok(())
    }
}

/// Lexically normalize a path: drop `.` components and fold `..` where possible
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.site.source, PathBuf::from("./src"));
        assert_eq!(config.site.output, PathBuf::from("./generated"));
        assert_eq!(config.limits.max_errors, 100);
        assert_eq!(config.watch.debounce_ms, 100);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[site]
source = "content"
output = "public"

[limits]
max_errors = 10

[watch]
debounce_ms = 250
ignore = ["*.bak"]
"#;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.site.source, PathBuf::from("content"));
        assert_eq!(config.site.output, PathBuf::from("public"));
        assert_eq!(config.limits.max_errors, 10);
        assert_eq!(config.watch.debounce_ms, 250);
        assert_eq!(config.watch.ignore, vec!["*.bak".to_string()]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: SiteConfig = toml::from_str("[site]\noutput = \"dist\"\n").unwrap();
        assert_eq!(config.site.source, PathBuf::from("./src"));
        assert_eq!(config.site.output, PathBuf::from("dist"));
    }

    #[test]
    fn test_output_inside_source_is_rejected() {
        let mut config = SiteConfig::default();
        config.site.output = PathBuf::from("src/out");

        match config.validate() {
            Err(SsgError::ConfigInvalid { field, .. }) => assert_eq!(field, "site.output"),
            other => panic!("Expected ConfigInvalid, got {:?}", other),
        }
    }

    #[test]
    fn test_output_equal_to_source_is_rejected() {
        let mut config = SiteConfig::default();
        config.site.output = PathBuf::from("src/./");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_sibling_with_common_prefix_is_allowed() {
        let mut config = SiteConfig::default();
        config.site.output = PathBuf::from("./src-out");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_ignore_pattern_is_rejected() {
        let mut config = SiteConfig::default();
        config.watch.ignore = vec!["[".to_string()];
        assert!(matches!(
            config.validate(),
            Err(SsgError::ConfigInvalid { .. })
        ));
    }

    #[test]
    fn test_default_ignore_patterns() {
        let watch = WatchConfig::default();
        assert!(watch.is_ignored(Path::new("src/.index.html.swp")));
        assert!(watch.is_ignored(Path::new("src/blog/.DS_Store")));
        assert!(!watch.is_ignored(Path::new("src/index.html")));
    }

    #[test]
    fn test_normalize_folds_dots() {
        assert_eq!(normalize(Path::new("./src/./a/../b")), PathBuf::from("src/b"));
        assert_eq!(normalize(Path::new("../x")), PathBuf::from("../x"));
    }
}
