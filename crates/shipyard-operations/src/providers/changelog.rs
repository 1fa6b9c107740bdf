use std::path::{Path, PathBuf};

use shipyard_changelog::{Changelog, RepositoryInfo, VersionRelease};
use tracing::debug;

use crate::Result;
use crate::error::OperationError;
use crate::traits::{ChangelogWriteResult, ChangelogWriter};

/// Writes releases into `CHANGELOG.md` and deletes consumed fragments.
#[derive(Debug, Default)]
pub struct FileSystemChangelogWriter;

impl FileSystemChangelogWriter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ChangelogWriter for FileSystemChangelogWriter {
    fn write_release(
        &self,
        changelog_path: &Path,
        release: &VersionRelease,
        repo_info: Option<&RepositoryInfo>,
    ) -> Result<ChangelogWriteResult> {
        let (mut changelog, created) = Changelog::load_or_new(changelog_path)?;
        changelog.prepend_release(release, repo_info);
        changelog.write_to_file(changelog_path)?;

        debug!(path = %changelog_path.display(), created, version = %release.version, "changelog written");
        Ok(ChangelogWriteResult {
            path: changelog_path.to_path_buf(),
            created,
        })
    }

    fn remove_fragments(&self, fragments: &[PathBuf]) -> Result<()> {
        fragments.iter().try_for_each(|path| remove_if_present(path))
    }
}

fn remove_if_present(path: &Path) -> Result<()> {
    match std::fs::remove_file(path) {
        Err(err) if err.kind() != std::io::ErrorKind::NotFound => {
            Err(OperationError::FragmentRemove {
                path: path.to_path_buf(),
                source: err,
            })
        }
        _ => Ok(()),
    }
}
