//! Qualified module names (`owner/name`)

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::module::error::ModuleError;

/// `owner/name`, each part made of word characters, exactly one separator
static QUALIFIED_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z0-9_]+)/([A-Za-z0-9_]+)$").unwrap());

/// Check whether a string is a qualified module name
pub fn is_qualified_name(full_name: &str) -> bool {
    QUALIFIED_NAME_RE.is_match(full_name)
}

/// Identity of a module, derived once from its qualified name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleIdentity {
    full_name: String,
    owner: String,
    name: String,
    basedir: PathBuf,
    full_path: PathBuf,
}

impl ModuleIdentity {
    /// Decompose `owner/name` and place the module under `basedir`.
    ///
    /// The owner does not appear in the install path:
    /// `branan/eight_hundred` under `/moduledir` lives at `/moduledir/eight_hundred`.
    pub fn new(full_name: &str, basedir: impl Into<PathBuf>) -> Result<Self, ModuleError> {
        let captures = QUALIFIED_NAME_RE
            .captures(full_name)
            .ok_or_else(|| ModuleError::InvalidName(full_name.to_string()))?;

        let owner = captures[1].to_string();
        let name = captures[2].to_string();
        let basedir = basedir.into();
        let full_path = basedir.join(&name);

        Ok(Self {
            full_name: full_name.to_string(),
            owner,
            name,
            basedir,
            full_path,
        })
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn basedir(&self) -> &Path {
        &self.basedir
    }

    /// Directory the module is installed into
    pub fn full_path(&self) -> &Path {
        &self.full_path
    }
}

impl fmt::Display for ModuleIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name)
    }
}
