use std::path::Path;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    ToolNotFound,
    ToolFailed,
    MalformedOutput,
    ManifestUnreadable,
    ManifestInvalid,
    WriteFailed,
    WorkdirNotFound,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ToolNotFound => "TOOL_NOT_FOUND",
            Self::ToolFailed => "TOOL_FAILED",
            Self::MalformedOutput => "MALFORMED_OUTPUT",
            Self::ManifestUnreadable => "MANIFEST_UNREADABLE",
            Self::ManifestInvalid => "MANIFEST_INVALID",
            Self::WriteFailed => "WRITE_FAILED",
            Self::WorkdirNotFound => "WORKDIR_NOT_FOUND",
        }
    }
}

#[derive(Debug, Error)]
#[error("{message}")]
pub struct PatchverError {
    pub code: ErrorCode,
    pub message: String,
}

impl PatchverError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn tool_not_found(tool: &str, reason: impl std::fmt::Display) -> Self {
        Self::new(
            ErrorCode::ToolNotFound,
            format!("failed to find {tool} on path: {reason}"),
        )
    }

    pub fn tool_failed(tool: &str, reason: impl std::fmt::Display) -> Self {
        Self::new(
            ErrorCode::ToolFailed,
            format!("failed to run {tool}: {reason}"),
        )
    }

    pub fn malformed_output(tool: &str, output: &str) -> Self {
        Self::new(
            ErrorCode::MalformedOutput,
            format!("failed to parse {tool} output: {output:?} is not a commit count"),
        )
    }

    pub fn manifest_unreadable(path: &Path, source: std::io::Error) -> Self {
        Self::new(
            ErrorCode::ManifestUnreadable,
            format!("failed to read manifest {}: {source}", path.display()),
        )
    }

    pub fn manifest_invalid(path: &Path, reason: impl std::fmt::Display) -> Self {
        Self::new(
            ErrorCode::ManifestInvalid,
            format!("invalid manifest {}: {reason}", path.display()),
        )
    }

    pub fn workdir_not_found(path: &Path) -> Self {
        Self::new(
            ErrorCode::WorkdirNotFound,
            format!("working directory {} does not exist", path.display()),
        )
    }

    pub fn write_failed(path: &Path, source: std::io::Error) -> Self {
        Self::new(
            ErrorCode::WriteFailed,
            format!("failed to write {}: {source}", path.display()),
        )
    }
}
