use std::path::{Path, PathBuf};

/// Which package a run stamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Variant {
    /// `cc.platoon.unity-sdk`, with a generated `Version.cs`
    #[default]
    Sdk,
    /// `cc.platoon.unityclient`, manifest only
    Client,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sdk => "sdk",
            Self::Client => "client",
        }
    }

    pub fn target(&self) -> Target {
        match self {
            Self::Sdk => Target {
                manifest: PathBuf::from("cc.platoon.unity-sdk").join("package.json"),
                companion: Some(
                    PathBuf::from("cc.platoon.unity-sdk")
                        .join("Runtime")
                        .join("Version.cs"),
                ),
            },
            Self::Client => Target {
                manifest: PathBuf::from("cc.platoon.unityclient").join("package.json"),
                companion: None,
            },
        }
    }
}

/// Files a variant writes, relative to the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub manifest: PathBuf,
    pub companion: Option<PathBuf>,
}

impl Target {
    pub fn manifest_in(&self, root: &Path) -> PathBuf {
        root.join(&self.manifest)
    }

    pub fn companion_in(&self, root: &Path) -> Option<PathBuf> {
        self.companion.as_ref().map(|p| root.join(p))
    }
}

/// Marker file holding the last resolved version.
pub const MARKER_FILE: &str = ".version";
