//! Toolbox for keeping a personal build toolchain current.
//!
//! - [`version`]: checks every tracked tool against its upstream download page
//! - [`shell`]: runs shell commands across repository directories and times them
//! - [`config`]: tracked targets, directory scopes, and fetch settings
//! - [`logging`]: tracing subscriber setup for the binary

pub mod config;
pub mod logging;
pub mod shell;
pub mod version;
