use std::path::{Path, PathBuf};

use crate::config::ReleaseConfig;
use crate::error::ProjectError;
use crate::manifest::{PackageManifest, read_manifest};

/// An npm package together with its release configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NpmProject {
    pub root: PathBuf,
    pub manifest: PackageManifest,
    pub config: ReleaseConfig,
}

impl NpmProject {
    #[must_use]
    pub fn fragments_dir(&self) -> PathBuf {
        self.root.join(self.config.fragments_dir())
    }

    #[must_use]
    pub fn changelog_path(&self) -> PathBuf {
        self.root.join(self.config.changelog_file())
    }
}

/// Finds the nearest `package.json` at or above `start_dir` and loads it.
///
/// # Errors
///
/// Returns `ProjectError` if no manifest can be found or if it cannot be parsed.
pub fn discover_project(start_dir: &Path) -> Result<NpmProject, ProjectError> {
    let start_dir = start_dir
        .canonicalize()
        .map_err(|source| ProjectError::ManifestRead {
            path: start_dir.to_path_buf(),
            source,
        })?;

    let root = find_project_root(&start_dir)?;
    let (manifest, config) = read_manifest(&root.join(crate::MANIFEST_FILE))?;

    Ok(NpmProject {
        root,
        manifest,
        config,
    })
}

fn find_project_root(start_dir: &Path) -> Result<PathBuf, ProjectError> {
    start_dir
        .ancestors()
        .find(|dir| dir.join(crate::MANIFEST_FILE).is_file())
        .map(Path::to_path_buf)
        .ok_or_else(|| ProjectError::NotFound {
            start_dir: start_dir.to_path_buf(),
        })
}
