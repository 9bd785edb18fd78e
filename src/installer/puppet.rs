//! `puppet module` installer client

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, warn};

use crate::installer::{Installer, InstallerError, InstallerOutput};

/// Default executable used to run the Puppet module tool
pub const DEFAULT_PROGRAM: &str = "puppet";

/// Runs `<program> module --modulepath <modulepath> <args...>` as a subprocess
#[derive(Debug, Clone)]
pub struct PuppetModuleTool {
    program: PathBuf,
}

impl PuppetModuleTool {
    /// Creates a PuppetModuleTool that runs a custom executable
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    fn command(&self, modulepath: &Path, args: &[String]) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg("module")
            .arg("--modulepath")
            .arg(modulepath)
            .args(args);
        cmd
    }
}

impl Default for PuppetModuleTool {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl Installer for PuppetModuleTool {
    fn run(&self, modulepath: &Path, args: &[String]) -> Result<InstallerOutput, InstallerError> {
        let mut cmd = self.command(modulepath, args);
        debug!(
            "Execute: {:?} {:?}",
            cmd.get_program(),
            cmd.get_args().collect::<Vec<_>>()
        );

        let output = cmd.output()?;
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if output.status.success() {
            Ok(InstallerOutput { stdout, stderr })
        } else {
            let code = output.status.code().unwrap_or(-1);
            warn!("{:?} exited with code {}: {}", self.program, code, stderr.trim());
            Err(InstallerError::CommandFailed { code, stderr })
        }
    }
}

/// Render a command line for display, the way it would be typed
pub fn display_command(program: &Path, modulepath: &Path, args: &[String]) -> String {
    let mut parts: Vec<OsString> = vec![
        program.as_os_str().to_owned(),
        "module".into(),
        "--modulepath".into(),
        modulepath.as_os_str().to_owned(),
    ];
    parts.extend(args.iter().map(OsString::from));

    parts
        .iter()
        .map(|part| part.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}
