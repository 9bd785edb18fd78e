use std::path::PathBuf;

use thiserror::Error;

/// Installed module metadata exists but could not be turned into a version.
///
/// A module that is simply absent is not an error; inspection reports the
/// not-installed sentinel for it instead.
#[derive(Debug, Error)]
pub enum InspectError {
    #[error("Failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed module metadata in {path:?}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Module metadata in {path:?} has no version")]
    MissingVersion { path: PathBuf },

    #[error("Invalid version {version:?} in {path:?}: {source}")]
    InvalidVersion {
        path: PathBuf,
        version: String,
        #[source]
        source: semver::Error,
    },
}
