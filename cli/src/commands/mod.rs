//! Command implementations

pub mod create;
pub mod destroy;
pub mod info;
pub mod list;
pub mod logs;
pub mod open;
pub mod rename;
pub mod settings;
pub mod version;
