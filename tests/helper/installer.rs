//! Installer test utilities

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use forge_sync::installer::{Installer, InstallerError, InstallerOutput};

/// A single recorded installer invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub modulepath: PathBuf,
    pub args: Vec<String>,
}

/// Installer that records every call instead of running anything
#[derive(Default)]
pub struct RecordingInstaller {
    invocations: Mutex<Vec<Invocation>>,
    failure: Option<(i32, String)>,
}

impl RecordingInstaller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every call fail with the given exit code and stderr
    pub fn failing(code: i32, stderr: &str) -> Self {
        Self {
            invocations: Mutex::new(Vec::new()),
            failure: Some((code, stderr.to_string())),
        }
    }

    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.lock().unwrap().clone()
    }
}

impl Installer for RecordingInstaller {
    fn run(&self, modulepath: &Path, args: &[String]) -> Result<InstallerOutput, InstallerError> {
        self.invocations.lock().unwrap().push(Invocation {
            modulepath: modulepath.to_path_buf(),
            args: args.to_vec(),
        });

        match &self.failure {
            Some((code, stderr)) => Err(InstallerError::CommandFailed {
                code: *code,
                stderr: stderr.clone(),
            }),
            None => Ok(InstallerOutput::default()),
        }
    }
}

pub fn args(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|s| s.to_string()).collect()
}
