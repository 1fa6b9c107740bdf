mod config;
mod error;
mod manifest;
mod project;

pub const MANIFEST_FILE: &str = "package.json";
pub const CONFIG_KEY: &str = "shipyard";

pub use config::ReleaseConfig;
pub use error::ProjectError;
pub use manifest::PackageManifest;
pub use project::{NpmProject, discover_project};

pub type Result<T> = std::result::Result<T, ProjectError>;
