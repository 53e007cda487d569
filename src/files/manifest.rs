use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::PatchverError;
use crate::models::Version;

pub type Manifest = Map<String, Value>;

/// Read a manifest. Only a top-level JSON object is accepted.
pub fn load(path: &Path) -> Result<Manifest, PatchverError> {
    let data = fs::read(path).map_err(|e| PatchverError::manifest_unreadable(path, e))?;
    match serde_json::from_slice::<Value>(&data) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(PatchverError::manifest_invalid(
            path,
            format!("expected a JSON object, found {}", kind(&other)),
        )),
        Err(e) => Err(PatchverError::manifest_invalid(path, e)),
    }
}

pub fn set_version(manifest: &mut Manifest, version: &Version) {
    manifest.insert("version".into(), Value::String(version.to_string()));
}

/// Tab-indented, keys in their original order, no trailing newline.
pub fn render(manifest: &Manifest) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"\t"));
    manifest.serialize(&mut ser)?;
    Ok(buf)
}

pub fn save(path: &Path, manifest: &Manifest) -> Result<(), PatchverError> {
    let bytes = render(manifest).map_err(|e| PatchverError::manifest_invalid(path, e))?;
    fs::write(path, bytes).map_err(|e| PatchverError::write_failed(path, e))
}

/// Overwrite the `version` key of the manifest at `path`, keeping everything else.
pub fn update(path: &Path, version: &Version) -> Result<(), PatchverError> {
    let mut manifest = load(path)?;
    debug!(path = %path.display(), previous = ?manifest.get("version"), "updating manifest");
    set_version(&mut manifest, version);
    save(path, &manifest)
}

fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
