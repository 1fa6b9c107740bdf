use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ProjectError;

pub const DEFAULT_RELEASE_BRANCH: &str = "main";
pub const DEFAULT_REMOTE: &str = "upstream";
pub const DEFAULT_FRAGMENTS_DIR: &str = "upcoming_changelogs";
pub const DEFAULT_CHANGELOG_FILE: &str = "CHANGELOG.md";
pub const DEFAULT_BUILD_SCRIPT: &str = "build";
pub const DEFAULT_DOCS_SCRIPT: &str = "sync-docs";

/// The `"shipyard"` section of `package.json`, as written by the user.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct RawReleaseConfig {
    release_branch: Option<String>,
    remote: Option<String>,
    fragments_dir: Option<PathBuf>,
    changelog_file: Option<PathBuf>,
    keep_fragments: Option<bool>,
    build_script: Option<String>,
    docs_script: Option<String>,
    #[serde(default)]
    version_scripts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseConfig {
    release_branch: String,
    remote: String,
    fragments_dir: PathBuf,
    changelog_file: PathBuf,
    keep_fragments: bool,
    build_script: String,
    docs_script: String,
    version_scripts: Vec<String>,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            release_branch: DEFAULT_RELEASE_BRANCH.to_string(),
            remote: DEFAULT_REMOTE.to_string(),
            fragments_dir: PathBuf::from(DEFAULT_FRAGMENTS_DIR),
            changelog_file: PathBuf::from(DEFAULT_CHANGELOG_FILE),
            keep_fragments: false,
            build_script: DEFAULT_BUILD_SCRIPT.to_string(),
            docs_script: DEFAULT_DOCS_SCRIPT.to_string(),
            version_scripts: Vec::new(),
        }
    }
}

fn non_empty(
    value: Option<String>,
    default: String,
    key: &str,
    path: &Path,
) -> Result<String, ProjectError> {
    match value {
        Some(v) if v.trim().is_empty() => Err(ProjectError::InvalidConfig {
            path: path.to_path_buf(),
            reason: format!("'{key}' must not be empty"),
        }),
        Some(v) => Ok(v),
        None => Ok(default),
    }
}

impl ReleaseConfig {
    pub(crate) fn from_raw(raw: RawReleaseConfig, path: &Path) -> Result<Self, ProjectError> {
        let defaults = Self::default();

        if let Some(script) = raw.version_scripts.iter().find(|s| s.trim().is_empty()) {
            return Err(ProjectError::InvalidConfig {
                path: path.to_path_buf(),
                reason: format!("'versionScripts' contains an empty entry: {script:?}"),
            });
        }

        Ok(Self {
            release_branch: non_empty(
                raw.release_branch,
                defaults.release_branch,
                "releaseBranch",
                path,
            )?,
            remote: non_empty(raw.remote, defaults.remote, "remote", path)?,
            fragments_dir: raw.fragments_dir.unwrap_or(defaults.fragments_dir),
            changelog_file: raw.changelog_file.unwrap_or(defaults.changelog_file),
            keep_fragments: raw.keep_fragments.unwrap_or(defaults.keep_fragments),
            build_script: non_empty(raw.build_script, defaults.build_script, "buildScript", path)?,
            docs_script: non_empty(raw.docs_script, defaults.docs_script, "docsScript", path)?,
            version_scripts: raw.version_scripts,
        })
    }

    #[must_use]
    pub fn release_branch(&self) -> &str {
        &self.release_branch
    }

    #[must_use]
    pub fn remote(&self) -> &str {
        &self.remote
    }

    /// Directory holding changelog fragments, relative to the package root.
    #[must_use]
    pub fn fragments_dir(&self) -> &Path {
        &self.fragments_dir
    }

    /// Changelog file, relative to the package root.
    #[must_use]
    pub fn changelog_file(&self) -> &Path {
        &self.changelog_file
    }

    #[must_use]
    pub fn keep_fragments(&self) -> bool {
        self.keep_fragments
    }

    #[must_use]
    pub fn build_script(&self) -> &str {
        &self.build_script
    }

    #[must_use]
    pub fn docs_script(&self) -> &str {
        &self.docs_script
    }

    /// npm scripts run with the resolved version type before the changelog
    /// is written.
    #[must_use]
    pub fn version_scripts(&self) -> &[String] {
        &self.version_scripts
    }

    #[cfg(any(test, feature = "testing"))]
    #[must_use]
    pub fn with_version_scripts(mut self, scripts: Vec<String>) -> Self {
        self.version_scripts = scripts;
        self
    }

    #[cfg(any(test, feature = "testing"))]
    #[must_use]
    pub fn with_keep_fragments(mut self, keep: bool) -> Self {
        self.keep_fragments = keep;
        self
    }

    #[cfg(any(test, feature = "testing"))]
    #[must_use]
    pub fn with_release_branch(mut self, branch: impl Into<String>) -> Self {
        self.release_branch = branch.into();
        self
    }
}
