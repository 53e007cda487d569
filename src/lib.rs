//! Commit-count patch versioning for the Platoon Unity packages.
//!
//! The version is `0.0.<N>` with `N` one past the number of commits on
//! `master`. [`bump::run`] stamps it into a package manifest, an optional
//! generated C# constant, and a `.version` marker.

pub mod bump;
pub mod cli;
pub mod error;
pub mod files;
pub mod models;
pub mod output;
pub mod vcs;
