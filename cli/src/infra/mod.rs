//! Infrastructure layer: concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: HTTP calls to the platform,
//! process execution, git, terminal prompts and the config file.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod browser;
pub mod command_runner;
pub mod config;
pub mod confirm;
pub mod git;
pub mod platform;
pub mod resolver;
