//! Sync decision layer
//!
//! - [`state`]: Classifies installed vs desired versions into a `SyncState`
//! - [`command`]: Builds the installer arguments for an out-of-sync module
//! - [`error`]: Errors surfaced while syncing a module

pub mod command;
pub mod error;
pub mod state;

pub use command::{InstallAction, InstallerCommand, build_command};
pub use error::SyncError;
pub use state::{SyncState, decide};
