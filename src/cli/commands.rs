use std::path::PathBuf;

use clap::Parser;

use crate::models::Variant;

const VERSION: &str = env!("GIT_VERSION");

#[derive(Parser)]
#[command(
    name = "patchver",
    version = VERSION,
    about = "Stamp a commit-count patch version into a Unity package",
    after_help = "\
VERSION:
  0.0.<N> where N = `git rev-list master --count` + 1.
  The +1 accounts for the commit that will record this bump.

FILES (relative to --dir):
  sdk     cc.platoon.unity-sdk/package.json, cc.platoon.unity-sdk/Runtime/Version.cs
  client  cc.platoon.unityclient/package.json
  both    .version

EXIT CODES:
  0  Success (version printed)
  1  Error (missing --dir, git missing or failing, bad manifest, write failure)
  2  Version written, but the companion source file could not be updated

NOTE:
  Files written before a failure are left as they are; nothing is rolled back."
)]
pub struct Cli {
    /// Package to stamp
    #[arg(long, value_enum, default_value_t = Variant::Sdk)]
    pub variant: Variant,

    /// Repository root containing the package directories
    #[arg(short = 'C', long, default_value = ".")]
    pub dir: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Log each step to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
