//! Unit tests for the heroku CLI
//!
//! These tests run in-process: structural scans of the source tree and the
//! HTTP client against a local stub of the platform API.

#![allow(clippy::expect_used, clippy::unwrap_used)]


#[path = "../support/stub_platform.rs"]
mod stub_platform;
