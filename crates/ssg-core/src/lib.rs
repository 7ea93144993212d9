// Core modules
pub mod config;
pub mod copy;
pub mod diagnostics;
pub mod error;
pub mod markup;
pub mod site;
pub mod template;
pub mod walk;

// Re-export commonly used types
pub use config::SiteConfig;
pub use diagnostics::ErrorLog;
pub use error::{Result, SsgError};
pub use site::{generate, generate_site, BuildReport};
pub use walk::{walk, Progress, Silent, WalkStats};
