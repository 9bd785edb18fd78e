use thiserror::Error;

use crate::installer::InstallerError;
use crate::version::error::InspectError;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Failed to inspect installed module: {0}")]
    Inspect(#[from] InspectError),

    #[error("Installer failed: {0}")]
    Installer(#[from] InstallerError),
}
