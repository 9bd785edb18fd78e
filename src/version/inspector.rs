//! Installed version inspection

use std::io::ErrorKind;
use std::path::Path;

#[cfg(test)]
use mockall::automock;
use serde::Deserialize;
use tracing::debug;

use crate::version::error::InspectError;
use crate::version::semver::{ModuleVersion, parse_version};

/// File inside an installed module that records its version
pub const METADATA_FILE: &str = "metadata.json";

/// Trait for reading the version of a module installed on disk
#[cfg_attr(test, automock)]
pub trait VersionInspector: Send + Sync {
    /// Determine the version installed at `full_path`
    ///
    /// # Returns
    /// * `Ok(ModuleVersion::Min)` - Nothing is installed there
    /// * `Ok(ModuleVersion::Release(_))` - The recorded version
    /// * `Err(InspectError)` - Metadata exists but cannot be read or parsed
    fn installed_version(&self, full_path: &Path) -> Result<ModuleVersion, InspectError>;
}

/// The subset of `metadata.json` this crate cares about
#[derive(Debug, Deserialize)]
struct ModuleMetadata {
    version: Option<String>,
}

/// Reads the `version` field of an installed module's `metadata.json`
#[derive(Debug, Clone, Copy, Default)]
pub struct MetadataInspector;

impl VersionInspector for MetadataInspector {
    fn installed_version(&self, full_path: &Path) -> Result<ModuleVersion, InspectError> {
        let path = full_path.join(METADATA_FILE);

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
                debug!("No module metadata at {:?}", path);
                return Ok(ModuleVersion::Min);
            }
            Err(source) => return Err(InspectError::Read { path, source }),
        };

        let metadata: ModuleMetadata = serde_json::from_str(&content)
            .map_err(|source| InspectError::Malformed {
                path: path.clone(),
                source,
            })?;

        let Some(version) = metadata.version else {
            return Err(InspectError::MissingVersion { path });
        };

        let parsed = parse_version(&version).map_err(|source| InspectError::InvalidVersion {
            path: path.clone(),
            version: version.clone(),
            source,
        })?;

        debug!("Found installed version {} at {:?}", parsed, path);
        Ok(ModuleVersion::Release(parsed))
    }
}
