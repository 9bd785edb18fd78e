//! Module-source dispatch
//!
//! A Puppetfile entry is a name plus a version argument. Each module-source
//! kind decides whether it can handle the entry; kinds are tried in priority
//! order and the first match builds the module.

use std::fmt;
use std::path::PathBuf;

use crate::installer::Installer;
use crate::module::error::ModuleError;
use crate::module::forge::{ForgeModule, ModuleStatus, SyncOutcome};
use crate::module::identity::ModuleIdentity;
use crate::sync::error::SyncError;
use crate::version::error::InspectError;

/// Kind of module source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleKind {
    /// Puppet Forge release (`owner/name`, exact semantic version)
    Forge,
}

impl ModuleKind {
    /// Kinds in the order they are tried for an entry
    pub const PRIORITY: &'static [ModuleKind] = &[ModuleKind::Forge];

    /// Check if this kind can handle the entry
    pub fn implements(&self, name: &str, version: &str) -> bool {
        match self {
            ModuleKind::Forge => ForgeModule::implements(name, version),
        }
    }

    /// Returns the string representation of the module kind
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleKind::Forge => "forge",
        }
    }

    fn build(&self, name: &str, basedir: PathBuf, version: &str) -> Result<Module, ModuleError> {
        match self {
            ModuleKind::Forge => ForgeModule::new(name, basedir, version).map(Module::Forge),
        }
    }
}

impl fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Find the first kind in priority order that handles the entry
pub fn detect_module_kind(name: &str, version: &str) -> Option<ModuleKind> {
    ModuleKind::PRIORITY
        .iter()
        .copied()
        .find(|kind| kind.implements(name, version))
}

/// A module from any supported source
pub enum Module {
    Forge(ForgeModule),
}

impl Module {
    /// Build the module for a Puppetfile entry installed under `basedir`
    pub fn from_entry(
        name: &str,
        basedir: impl Into<PathBuf>,
        version: &str,
    ) -> Result<Self, ModuleError> {
        let kind = detect_module_kind(name, version).ok_or_else(|| ModuleError::Unsupported {
            name: name.to_string(),
            version: version.to_string(),
        })?;

        kind.build(name, basedir.into(), version)
    }

    pub fn kind(&self) -> ModuleKind {
        match self {
            Module::Forge(_) => ModuleKind::Forge,
        }
    }

    pub fn identity(&self) -> &ModuleIdentity {
        match self {
            Module::Forge(module) => module.identity(),
        }
    }

    pub fn status(&self) -> Result<ModuleStatus, InspectError> {
        match self {
            Module::Forge(module) => module.status(),
        }
    }

    pub fn sync(&self, installer: &dyn Installer) -> Result<SyncOutcome, SyncError> {
        match self {
            Module::Forge(module) => module.sync(installer),
        }
    }
}
