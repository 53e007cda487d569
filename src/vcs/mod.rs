pub mod git;

pub use git::GitCommitCounter;

use crate::error::PatchverError;

/// Branch whose history drives the version.
pub const RELEASE_BRANCH: &str = "master";

/// Counts the commits reachable from a branch.
pub trait CommitCounter {
    fn count(&self, branch: &str) -> Result<u64, PatchverError>;
}

/// Parse the count printed by `rev-list --count`.
pub fn parse_count(tool: &str, stdout: &str) -> Result<u64, PatchverError> {
    let trimmed = stdout.trim();
    trimmed
        .parse::<u64>()
        .map_err(|_| PatchverError::malformed_output(tool, trimmed))
}
