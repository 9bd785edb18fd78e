//! Test utilities shared by integration tests

#![allow(dead_code, unused_imports)]

pub mod fixtures;
pub mod installer;

pub use fixtures::{empty_modulepath, fixture_modulepath, modulepath_with_metadata};
pub use installer::{Invocation, RecordingInstaller, args};
