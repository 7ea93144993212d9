//! Generator configuration (`ssg.toml`) and shared constants

pub mod consts;
mod model;

pub use model::{LimitsConfig, SiteConfig, SiteSection, WatchConfig};
