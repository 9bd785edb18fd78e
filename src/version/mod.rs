//! Version layer for installed and desired module versions
//!
//! # Modules
//!
//! - [`semver`]: `ModuleVersion`, the not-installed sentinel, and the comparator
//! - [`inspector`]: Reads the installed version from a module directory
//! - [`error`]: Error types for version inspection

pub mod error;
pub mod inspector;
pub mod semver;

pub use error::InspectError;
pub use inspector::{MetadataInspector, VersionInspector};
pub use self::semver::{ModuleVersion, compare, is_semantic_version, parse_version};
