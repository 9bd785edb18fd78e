//! Installer client abstraction
//!
//! The installer performs the actual fetch and install. Sync logic only
//! hands it an argument list, so it is injected as a trait object and
//! replaced by a mock in tests.

pub mod error;
pub mod puppet;

use std::path::Path;

#[cfg(test)]
use mockall::automock;

pub use error::InstallerError;
pub use puppet::PuppetModuleTool;

/// Captured output of a successful installer run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallerOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Trait for executing installer commands
#[cfg_attr(test, automock)]
pub trait Installer: Send + Sync {
    /// Run the installer once against the module directory `modulepath`
    ///
    /// # Arguments
    /// * `modulepath` - Directory modules of this source are installed into
    /// * `args` - Tokens such as `["install", "--version=8.0.0", "--ignore-dependencies", "branan/eight_hundred"]`
    ///
    /// # Returns
    /// * `Ok(InstallerOutput)` - The installer exited successfully
    /// * `Err(InstallerError)` - It could not be started or reported failure
    fn run(&self, modulepath: &Path, args: &[String]) -> Result<InstallerOutput, InstallerError>;
}
