//! Sync state decision for installed vs desired versions

use std::cmp::Ordering;
use std::fmt;

use semver::Version;

use crate::version::semver::ModuleVersion;

/// How an installed module relates to its desired version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyncState {
    /// Installed version equals the desired version
    InSync,
    /// Nothing is installed
    NeedsInstall,
    /// Installed version is older than desired
    NeedsUpgrade,
    /// Installed version is newer than desired
    NeedsDowngrade,
}

impl SyncState {
    pub fn is_in_sync(&self) -> bool {
        matches!(self, SyncState::InSync)
    }

    /// Returns the string representation of the state
    pub fn as_str(&self) -> &'static str {
        match self {
            SyncState::InSync => "in_sync",
            SyncState::NeedsInstall => "needs_install",
            SyncState::NeedsUpgrade => "needs_upgrade",
            SyncState::NeedsDowngrade => "needs_downgrade",
        }
    }
}

impl fmt::Display for SyncState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify an installed version against the desired release
pub fn decide(installed: &ModuleVersion, desired: &Version) -> SyncState {
    if installed.is_min() {
        return SyncState::NeedsInstall;
    }

    match installed.cmp_release(desired) {
        Ordering::Less => SyncState::NeedsUpgrade,
        Ordering::Greater => SyncState::NeedsDowngrade,
        Ordering::Equal => SyncState::InSync,
    }
}
