//! Module layer
//! - identity.rs: Qualified `owner/name` parsing (ModuleIdentity)
//! - forge.rs: Forge module source (classification, inspection, sync)
//! - source.rs: Module-source kinds and prioritized dispatch
//! - error.rs: Module construction errors

pub mod error;
pub mod forge;
pub mod identity;
pub mod source;

pub use error::ModuleError;
pub use forge::{ForgeModule, ModuleStatus, SyncOutcome};
pub use identity::{ModuleIdentity, is_qualified_name};
pub use source::{Module, ModuleKind, detect_module_kind};
