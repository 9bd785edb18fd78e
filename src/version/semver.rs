use std::cmp::Ordering;
use std::fmt;

use semver::Version;

/// An installed or desired module version.
///
/// `Min` stands for "no version installed" and sits in the same total order
/// as real releases, below all of them, so callers never special-case absence
/// when comparing.
#[derive(Debug, Clone)]
pub enum ModuleVersion {
    /// Sentinel for a module that is not installed
    Min,
    /// A parsed semantic version
    Release(Version),
}

impl ModuleVersion {
    /// Parse a version string into a release.
    ///
    /// Accepts an optional leading `v` (`v8.0.0` is `8.0.0`). Partial versions
    /// such as `8.0` are rejected; forge releases always carry all three parts.
    pub fn parse(version: &str) -> Result<Self, semver::Error> {
        parse_version(version).map(ModuleVersion::Release)
    }

    /// Returns true for the not-installed sentinel
    pub fn is_min(&self) -> bool {
        matches!(self, ModuleVersion::Min)
    }

    /// Compare against a release without wrapping it.
    pub fn cmp_release(&self, release: &Version) -> Ordering {
        match self {
            ModuleVersion::Min => Ordering::Less,
            ModuleVersion::Release(version) => version.cmp_precedence(release),
        }
    }

}

impl Ord for ModuleVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

impl PartialOrd for ModuleVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ModuleVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ModuleVersion {}

impl fmt::Display for ModuleVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModuleVersion::Min => f.write_str("none"),
            ModuleVersion::Release(version) => write!(f, "{version}"),
        }
    }
}

/// Three-way comparison of two module versions.
///
/// `Min` is less than every release and equal to itself. Releases compare by
/// semantic version precedence: major, minor, patch, then pre-release
/// identifiers. Build metadata does not take part in precedence.
pub fn compare(a: &ModuleVersion, b: &ModuleVersion) -> Ordering {
    match (a, b) {
        (ModuleVersion::Min, ModuleVersion::Min) => Ordering::Equal,
        (ModuleVersion::Release(_), ModuleVersion::Min) => Ordering::Greater,
        (_, ModuleVersion::Release(b)) => a.cmp_release(b),
    }
}

/// Parse a version string, stripping a leading `v`.
///
/// Surrounding whitespace is not accepted.
pub fn parse_version(version: &str) -> Result<Version, semver::Error> {
    let stripped = version.strip_prefix('v').unwrap_or(version);
    Version::parse(stripped)
}

/// Check whether a string is a valid semantic version
pub fn is_semantic_version(version: &str) -> bool {
    parse_version(version).is_ok()
}
