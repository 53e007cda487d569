use std::fs;
use std::path::Path;

use crate::error::PatchverError;
use crate::models::Version;

/// C# source exposing the version as `Platoon.Version.SDK`.
pub fn render(version: &Version) -> String {
    format!(
        "namespace Platoon\n{{\n\tpublic class Version\n\t{{\n\t\tpublic static string SDK = \"unity {version}\";\n\t}}\n}}"
    )
}

/// Replace the file wholesale; prior content is never read.
pub fn write(path: &Path, version: &Version) -> Result<(), PatchverError> {
    fs::write(path, render(version)).map_err(|e| PatchverError::write_failed(path, e))
}
