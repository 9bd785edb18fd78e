//! Forge-backed module source
//!
//! A forge module is named `owner/name`, pinned to an exact semantic version,
//! and installed into `<basedir>/<name>` by the Puppet module tool.

use std::path::PathBuf;
use std::sync::Arc;

use semver::Version;
use tracing::{Span, debug, info, info_span, warn};

use crate::installer::{Installer, InstallerOutput};
use crate::module::error::ModuleError;
use crate::module::identity::{ModuleIdentity, is_qualified_name};
use crate::sync::command::{InstallerCommand, build_command};
use crate::sync::error::SyncError;
use crate::sync::state::{SyncState, decide};
use crate::version::error::InspectError;
use crate::version::inspector::{MetadataInspector, VersionInspector};
use crate::version::semver::{ModuleVersion, is_semantic_version, parse_version};

/// Snapshot of a module's installed and desired versions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleStatus {
    pub full_name: String,
    /// Installed version, `ModuleVersion::Min` when not installed
    pub installed: ModuleVersion,
    pub desired: Version,
    pub state: SyncState,
}

/// Result of a single sync
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOutcome {
    pub state: SyncState,
    /// Command handed to the installer, None when already in sync
    pub command: Option<InstallerCommand>,
    pub output: Option<InstallerOutput>,
}

pub struct ForgeModule {
    identity: ModuleIdentity,
    desired: Version,
    inspector: Arc<dyn VersionInspector>,
    span: Span,
}

impl ForgeModule {
    /// Check whether a Puppetfile entry describes a forge module.
    ///
    /// Never fails; a malformed name or version just means some other
    /// module source should handle the entry.
    pub fn implements(full_name: &str, version: &str) -> bool {
        is_qualified_name(full_name) && is_semantic_version(version)
    }

    /// Create a forge module installed under `basedir`.
    ///
    /// Callers are expected to check [`ForgeModule::implements`] first; an
    /// entry it rejects is an error here.
    pub fn new(
        full_name: &str,
        basedir: impl Into<PathBuf>,
        version: &str,
    ) -> Result<Self, ModuleError> {
        let identity = ModuleIdentity::new(full_name, basedir)?;
        let desired = parse_version(version).map_err(|e| ModuleError::InvalidVersion {
            version: version.to_string(),
            reason: e.to_string(),
        })?;
        let span = info_span!("forge_module", module = %identity.full_name());

        Ok(Self {
            identity,
            desired,
            inspector: Arc::new(MetadataInspector),
            span,
        })
    }

    /// Replace how the installed version is read
    pub fn with_inspector(mut self, inspector: Arc<dyn VersionInspector>) -> Self {
        self.inspector = inspector;
        self
    }

    /// Emit this module's events under `span` instead of the default one
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn identity(&self) -> &ModuleIdentity {
        &self.identity
    }

    pub fn desired_version(&self) -> &Version {
        &self.desired
    }

    /// Installed version, re-read from disk on every call
    pub fn version(&self) -> Result<ModuleVersion, InspectError> {
        let installed = self
            .span
            .in_scope(|| self.inspector.installed_version(self.identity.full_path()))?;
        debug!(
            parent: &self.span,
            "Installed version at {:?}: {}",
            self.identity.full_path(),
            installed
        );
        Ok(installed)
    }

    pub fn state(&self) -> Result<SyncState, InspectError> {
        Ok(decide(&self.version()?, &self.desired))
    }

    pub fn is_insync(&self) -> Result<bool, InspectError> {
        Ok(self.state()?.is_in_sync())
    }

    pub fn status(&self) -> Result<ModuleStatus, InspectError> {
        let installed = self.version()?;
        let state = decide(&installed, &self.desired);

        Ok(ModuleStatus {
            full_name: self.identity.full_name().to_string(),
            installed,
            desired: self.desired.clone(),
            state,
        })
    }

    /// Installer command that would bring the module in sync, if any
    pub fn planned_command(&self) -> Result<Option<InstallerCommand>, InspectError> {
        let state = self.state()?;
        Ok(build_command(state, &self.desired, &self.identity))
    }

    /// Bring the installed module to the desired version.
    ///
    /// Inspects once, decides once, and invokes `installer` at most once.
    /// Installer failures are returned as-is without retrying.
    pub fn sync(&self, installer: &dyn Installer) -> Result<SyncOutcome, SyncError> {
        let installed = self.version()?;
        let state = decide(&installed, &self.desired);
        info!(
            parent: &self.span,
            %state,
            %installed,
            desired = %self.desired,
            "Decided sync state"
        );

        let Some(command) = build_command(state, &self.desired, &self.identity) else {
            return Ok(SyncOutcome {
                state,
                command: None,
                output: None,
            });
        };

        info!(parent: &self.span, %command, "Running installer");

        let args = command.args();
        let output = self
            .span
            .in_scope(|| installer.run(self.identity.basedir(), &args))
            .inspect_err(|e| warn!(parent: &self.span, "Failed to sync {}: {}", self.identity, e))?;

        Ok(SyncOutcome {
            state,
            command: Some(command),
            output: Some(output),
        })
    }
}
