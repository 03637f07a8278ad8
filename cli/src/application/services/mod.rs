//! Application services: use-case orchestration.
//!
//! Each service module implements a use-case by composing domain logic with
//! port trait calls. Services import only from `crate::domain` and
//! `crate::application::ports`, never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

pub mod app_query;
pub mod config_service;
pub mod lifecycle;
pub mod provisioning;

#[cfg(test)]
pub mod test_support;
