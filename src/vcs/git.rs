use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use super::{parse_count, CommitCounter};
use crate::error::PatchverError;

const TOOL: &str = "git";

/// Counts commits by running the `git` executable found on `PATH`.
#[derive(Debug, Clone)]
pub struct GitCommitCounter {
    program: PathBuf,
    workdir: PathBuf,
}

impl GitCommitCounter {
    /// Locate `git` on the search path. Fails if it is not installed or
    /// `workdir` is not a directory.
    pub fn locate(workdir: &Path) -> Result<Self, PatchverError> {
        if !workdir.is_dir() {
            return Err(PatchverError::workdir_not_found(workdir));
        }
        let program = which::which(TOOL).map_err(|e| PatchverError::tool_not_found(TOOL, e))?;
        debug!(program = %program.display(), "found {TOOL}");
        Ok(Self::with_program(program, workdir))
    }

    pub fn with_program(program: impl Into<PathBuf>, workdir: &Path) -> Self {
        Self {
            program: program.into(),
            workdir: workdir.to_path_buf(),
        }
    }
}

impl CommitCounter for GitCommitCounter {
    fn count(&self, branch: &str) -> Result<u64, PatchverError> {
        debug!(branch, workdir = %self.workdir.display(), "running {TOOL} rev-list --count");
        let output = Command::new(&self.program)
            .args(["rev-list", branch, "--count"])
            .current_dir(&self.workdir)
            .output()
            .map_err(|e| {
                PatchverError::tool_failed(TOOL, format!("{e} (in {})", self.workdir.display()))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let reason = match stderr.trim() {
                "" => output.status.to_string(),
                msg => format!("{} ({msg})", output.status),
            };
            return Err(PatchverError::tool_failed(TOOL, reason));
        }

        parse_count(TOOL, &String::from_utf8_lossy(&output.stdout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_missing_program_is_tool_failure() {
        let dir = tempfile::TempDir::new().unwrap();
        let counter = GitCommitCounter::with_program(dir.path().join("no-such-git"), dir.path());
        let err = counter.count("master").unwrap_err();
        assert_eq!(err.code, ErrorCode::ToolFailed);
    }

    #[test]
    fn test_missing_workdir() {
        let dir = tempfile::TempDir::new().unwrap();
        let gone = dir.path().join("not-a-checkout");
        let err = GitCommitCounter::locate(&gone).unwrap_err();
        assert_eq!(err.code, ErrorCode::WorkdirNotFound);
        assert!(err.message.contains("not-a-checkout"));
    }
}
