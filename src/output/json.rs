use serde_json::{json, Value};

use crate::bump::BumpReport;
use crate::error::PatchverError;

pub fn success(data: Value) -> Value {
    json!({
        "success": true,
        "data": data
    })
}

pub fn error(err: &PatchverError) -> Value {
    json!({
        "success": false,
        "error": error_json(err)
    })
}

fn error_json(err: &PatchverError) -> Value {
    json!({
        "code": err.code.as_str(),
        "message": err.message
    })
}

pub fn report_json(r: &BumpReport) -> Value {
    json!({
        "version": r.version.to_string(),
        "commit_count": r.commit_count,
        "variant": r.variant.as_str(),
        "manifest": r.manifest.to_string_lossy(),
        "companion": r.companion.as_ref().map(|p| p.to_string_lossy()),
        "marker": r.marker.to_string_lossy(),
        "warnings": r.warnings.iter().map(error_json).collect::<Vec<_>>()
    })
}
