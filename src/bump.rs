use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::PatchverError;
use crate::files::{companion, manifest, marker};
use crate::models::{Variant, Version, MARKER_FILE};
use crate::vcs::{CommitCounter, RELEASE_BRANCH};

/// Outcome of a completed bump.
#[derive(Debug)]
pub struct BumpReport {
    pub version: Version,
    pub commit_count: u64,
    pub variant: Variant,
    pub manifest: PathBuf,
    pub companion: Option<PathBuf>,
    pub marker: PathBuf,
    /// Non-fatal failures; the version was still written.
    pub warnings: Vec<PatchverError>,
}

/// Resolve the next version and stamp it into the variant's files under `root`.
///
/// Steps run in order: resolve, manifest, companion (if the variant has one),
/// marker. The first fatal error stops the run; files already written stay
/// written. A failed companion write is recorded in `warnings` instead.
pub fn run(
    counter: &dyn CommitCounter,
    variant: Variant,
    root: &Path,
) -> Result<BumpReport, PatchverError> {
    let commit_count = counter.count(RELEASE_BRANCH)?;
    let version = Version::from_commit_count(commit_count);
    info!(%version, commit_count, variant = variant.as_str(), "resolved version");

    let target = variant.target();
    let manifest_path = target.manifest_in(root);
    manifest::update(&manifest_path, &version)?;

    let mut warnings = Vec::new();
    let companion_path = target.companion_in(root);
    if let Some(ref path) = companion_path {
        if let Err(e) = companion::write(path, &version) {
            warn!(error = %e, "companion source not updated");
            warnings.push(e);
        }
    }

    let marker_path = root.join(MARKER_FILE);
    marker::write(&marker_path, &version)?;

    Ok(BumpReport {
        version,
        commit_count,
        variant,
        manifest: manifest_path,
        companion: companion_path,
        marker: marker_path,
        warnings,
    })
}
