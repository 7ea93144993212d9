//! Constants shared across the generator

/// Default filesystem layout
pub mod layout {
    /// Source tree, relative to the working directory
    pub const DEFAULT_SOURCE_DIR: &str = "./src";

    /// Output tree, relative to the working directory
    pub const DEFAULT_OUTPUT_DIR: &str = "./generated";

    /// Optional configuration file looked up in the working directory
    pub const CONFIG_FILE: &str = "ssg.toml";

    /// Case-sensitive suffix that marks a file for template processing
    pub const MARKUP_SUFFIX: &str = ".html";
}

/// Resource limits
pub mod limits {
    /// Error Log capacity; later diagnostics are dropped
    pub const MAX_ERRORS: usize = 100;

    /// Chunk size used when byte-copying files
    pub const COPY_BUFFER_SIZE: usize = 4096;
}

/// Watch mode defaults
pub mod watch {
    /// Debounce window for filesystem events (ms)
    pub const DEFAULT_DEBOUNCE_MS: u64 = 100;

    /// File name patterns whose changes never trigger a rebuild
    pub const DEFAULT_IGNORE: &[&str] = &["*.swp", "*.tmp", ".DS_Store"];
}
