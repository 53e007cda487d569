use std::fmt;

/// A `0.0.<patch>` release version.
///
/// The patch number is one past the commit count, since the commit that
/// records the bump has not been created yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub patch: u64,
}

impl Version {
    pub fn from_commit_count(count: u64) -> Self {
        Self {
            patch: count.saturating_add(1),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0.0.{}", self.patch)
    }
}
