//! Installer command construction
//!
//! Turns a sync decision into the argument list handed to the installer client:
//!
//! ```text
//! install --version=8.0.0 --ignore-dependencies branan/eight_hundred
//! upgrade --version=80.0.0 --ignore-dependencies branan/eight_hundred
//! ```

use std::fmt;

use semver::Version;

use crate::module::identity::ModuleIdentity;
use crate::sync::state::SyncState;

/// Top-level command word passed to the installer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallAction {
    Install,
    /// Used for both upgrades and downgrades; the installer takes the
    /// direction from `--version`
    Upgrade,
}

impl InstallAction {
    /// Action needed to leave `state`, or None when already in sync
    pub fn for_state(state: SyncState) -> Option<Self> {
        match state {
            SyncState::InSync => None,
            SyncState::NeedsInstall => Some(InstallAction::Install),
            SyncState::NeedsUpgrade | SyncState::NeedsDowngrade => Some(InstallAction::Upgrade),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InstallAction::Install => "install",
            InstallAction::Upgrade => "upgrade",
        }
    }
}

impl fmt::Display for InstallAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully determined installer invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallerCommand {
    pub action: InstallAction,
    pub version: Version,
    pub full_name: String,
}

impl InstallerCommand {
    /// Argument tokens in the order the installer expects them
    pub fn args(&self) -> Vec<String> {
        vec![
            self.action.as_str().to_string(),
            format!("--version={}", self.version),
            "--ignore-dependencies".to_string(),
            self.full_name.clone(),
        ]
    }
}

impl fmt::Display for InstallerCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.args().join(" "))
    }
}

/// Build the installer command for an out-of-sync module.
///
/// Returns None when `state` is in sync; nothing should be invoked then.
pub fn build_command(
    state: SyncState,
    desired: &Version,
    identity: &ModuleIdentity,
) -> Option<InstallerCommand> {
    let action = InstallAction::for_state(state)?;

    Some(InstallerCommand {
        action,
        version: desired.clone(),
        full_name: identity.full_name().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn identity() -> ModuleIdentity {
        ModuleIdentity::new("branan/eight_hundred", "/moduledir").unwrap()
    }

    #[rstest]
    #[case(
        SyncState::NeedsInstall,
        "8.0.0",
        &["install", "--version=8.0.0", "--ignore-dependencies", "branan/eight_hundred"]
    )]
    #[case(
        SyncState::NeedsUpgrade,
        "80.0.0",
        &["upgrade", "--version=80.0.0", "--ignore-dependencies", "branan/eight_hundred"]
    )]
    #[case(
        SyncState::NeedsDowngrade,
        "7.0.0",
        &["upgrade", "--version=7.0.0", "--ignore-dependencies", "branan/eight_hundred"]
    )]
    fn build_command_returns_expected_args(
        #[case] state: SyncState,
        #[case] desired: &str,
        #[case] expected: &[&str],
    ) {
        let desired = Version::parse(desired).unwrap();

        let command = build_command(state, &desired, &identity()).unwrap();

        assert_eq!(command.args(), expected);
    }

    #[test]
    fn build_command_returns_none_when_in_sync() {
        let desired = Version::parse("8.0.0").unwrap();

        assert_eq!(build_command(SyncState::InSync, &desired, &identity()), None);
    }

    #[test]
    fn build_command_keeps_pre_release_in_version_flag() {
        let desired = Version::parse("8.1.0-rc.2").unwrap();

        let command = build_command(SyncState::NeedsUpgrade, &desired, &identity()).unwrap();

        assert_eq!(command.args()[1], "--version=8.1.0-rc.2");
        assert_eq!(
            command.to_string(),
            "upgrade --version=8.1.0-rc.2 --ignore-dependencies branan/eight_hundred"
        );
    }

    #[rstest]
    #[case(SyncState::InSync, None)]
    #[case(SyncState::NeedsInstall, Some(InstallAction::Install))]
    #[case(SyncState::NeedsUpgrade, Some(InstallAction::Upgrade))]
    #[case(SyncState::NeedsDowngrade, Some(InstallAction::Upgrade))]
    fn action_for_state(#[case] state: SyncState, #[case] expected: Option<InstallAction>) {
        assert_eq!(InstallAction::for_state(state), expected);
    }
}
