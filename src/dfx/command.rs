//! Thin wrapper around the `dfx` executable.

use log::debug;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Default executable name, looked up on `PATH`
pub const DEFAULT_DFX_BINARY: &str = "dfx";

/// Errors that can occur while invoking dfx
#[derive(Debug, thiserror::Error)]
pub enum DfxError {
    #[error("Failed to run `{program} {args}`: {source}")]
    Spawn {
        program: String,
        args: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{program} {args}` exited with {status}: {stderr}")]
    Failed {
        program: String,
        args: String,
        status: String,
        stderr: String,
    },

    #[error("`{program} {args}` produced non UTF-8 output")]
    InvalidOutput { program: String, args: String },
}

/// A dfx executable bound to a project directory
#[derive(Debug, Clone)]
pub struct DfxCommand {
    binary: PathBuf,
    project_dir: PathBuf,
}

impl DfxCommand {
    pub fn new(binary: impl Into<PathBuf>, project_dir: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            project_dir: project_dir.into(),
        }
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// Run dfx with `args` in the project directory and return its stdout.
    ///
    /// A non-zero exit is an error carrying dfx's trimmed stderr.
    pub fn run(&self, args: &[&str]) -> Result<String, DfxError> {
        let program = self.binary.display().to_string();
        let joined = args.join(" ");
        debug!("Running `{} {}` in {:?}", program, joined, self.project_dir);

        let output = Command::new(&self.binary)
            .args(args)
            .current_dir(&self.project_dir)
            .output()
            .map_err(|source| DfxError::Spawn {
                program: program.clone(),
                args: joined.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(DfxError::Failed {
                program,
                args: joined,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        String::from_utf8(output.stdout).map_err(|_| DfxError::InvalidOutput {
            program,
            args: joined,
        })
    }
}
