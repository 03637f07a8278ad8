//! Domain layer: pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod app;
pub mod config;
pub mod error;
pub mod format;

pub use app::{AppUrls, normalize_name, parse_addons};
pub use config::{CliConfig, validate_config_key, validate_config_value};
pub use error::{ConfigError, LifecycleError, PlatformError, VcsError};
