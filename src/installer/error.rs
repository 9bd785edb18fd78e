use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstallerError {
    #[error("Failed to start installer: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("Installer exited with code {code}: {stderr}")]
    CommandFailed { code: i32, stderr: String },
}
