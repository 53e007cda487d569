use std::fs;
use std::path::Path;

use crate::error::PatchverError;
use crate::models::Version;

/// Write the bare version, no trailing newline.
pub fn write(path: &Path, version: &Version) -> Result<(), PatchverError> {
    fs::write(path, version.to_string()).map_err(|e| PatchverError::write_failed(path, e))
}
