//! Shell command helpers for repository maintenance
//!
//! - [`scope`]: runs one command in every directory of a named scope
//! - [`timer`]: runs one command and measures its wall time

pub mod scope;
pub mod timer;

use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Unknown scope '{scope}'. Valid scopes: {valid}")]
    UnknownScope { scope: String, valid: String },

    #[error("Failed to start '{command}' in {}: {source}", dir.display())]
    Spawn {
        command: String,
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{command}' failed in {} with {status}", dir.display())]
    Failed {
        command: String,
        dir: PathBuf,
        status: ExitStatus,
    },

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Run `command` through the platform shell in `dir`, inheriting stdio
pub fn run_in(command: &str, dir: &Path) -> Result<(), ShellError> {
    debug!("Running '{}' in {}", command, dir.display());

    let status = shell(command)
        .current_dir(dir)
        .status()
        .map_err(|source| ShellError::Spawn {
            command: command.to_string(),
            dir: dir.to_path_buf(),
            source,
        })?;

    if !status.success() {
        return Err(ShellError::Failed {
            command: command.to_string(),
            dir: dir.to_path_buf(),
            status,
        });
    }

    Ok(())
}

#[cfg(windows)]
fn shell(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(command);
    cmd
}

#[cfg(not(windows))]
fn shell(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);
    cmd
}
