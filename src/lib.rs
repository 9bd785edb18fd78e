//! Forge module source for a Puppet module deployment tool.
//!
//! Decides whether an installed module matches its desired semantic version
//! and, when it does not, which `puppet module` action brings it in line.
//!
//! # Modules
//!
//! - [`module`]: Qualified names, the forge module source, and module-source dispatch
//! - [`version`]: Sentinel-aware versions and installed-version inspection
//! - [`sync`]: Sync state decision and installer command construction
//! - [`installer`]: Installer client capability and the `puppet module` implementation
//! - [`config`]: Configuration file and data directory resolution
//! - [`logging`]: Tracing subscriber setup for the binary

pub mod config;
pub mod installer;
pub mod logging;
pub mod module;
pub mod sync;
pub mod version;
