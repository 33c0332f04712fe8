use std::io::Write;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tracing::info;

use crate::shell::{ShellError, run_in};

const SEPARATOR: &str = "###################################";

/// Run `command` in every directory of `scope`, in order, stopping at the
/// first failure. Directories are resolved against `root`.
///
/// Banner lines go to `out`; the command's own output is inherited.
pub fn run_in_scope(
    scopes: &IndexMap<String, Vec<PathBuf>>,
    scope: &str,
    command: &str,
    root: &Path,
    out: &mut impl Write,
) -> Result<Vec<PathBuf>, ShellError> {
    let dirs = scopes.get(scope).ok_or_else(|| ShellError::UnknownScope {
        scope: scope.to_string(),
        valid: scopes.keys().cloned().collect::<Vec<_>>().join(", "),
    })?;

    let mut visited = Vec::with_capacity(dirs.len());
    for dir in dirs {
        let full_path = root.join(dir);
        writeln!(out, "######## Running '{}' in {}", command, dir.display())?;
        out.flush()?;

        run_in(command, &full_path)?;

        writeln!(out, "{}", SEPARATOR)?;
        writeln!(out)?;
        visited.push(full_path);
    }

    info!("Ran '{}' in {} directories of scope {}", command, visited.len(), scope);
    Ok(visited)
}
