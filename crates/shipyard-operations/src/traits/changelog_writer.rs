use std::path::{Path, PathBuf};

use shipyard_changelog::{RepositoryInfo, VersionRelease};

use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogWriteResult {
    pub path: PathBuf,
    pub created: bool,
}

pub trait ChangelogWriter: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the changelog cannot be read or written.
    fn write_release(
        &self,
        changelog_path: &Path,
        release: &VersionRelease,
        repo_info: Option<&RepositoryInfo>,
    ) -> Result<ChangelogWriteResult>;

    /// # Errors
    ///
    /// Returns an error if any fragment cannot be deleted.
    fn remove_fragments(&self, fragments: &[PathBuf]) -> Result<()>;
}
