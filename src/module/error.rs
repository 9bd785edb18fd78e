use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModuleError {
    #[error("Invalid module name {0:?}: expected owner/name")]
    InvalidName(String),

    #[error("Invalid version {version:?}: {reason}")]
    InvalidVersion { version: String, reason: String },

    #[error("No module source can handle {name:?} at version {version:?}")]
    Unsupported { name: String, version: String },
}
