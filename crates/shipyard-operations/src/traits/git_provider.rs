use std::path::Path;

use crate::Result;

/// Read-only repository queries. Mutations go through the `git` CLI.
pub trait GitProvider: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the repository cannot be opened or HEAD is detached.
    fn current_branch(&self, project_root: &Path) -> Result<String>;

    /// # Errors
    ///
    /// Returns an error if the repository cannot be opened.
    fn remote_url(&self, project_root: &Path, remote: &str) -> Result<Option<String>>;
}
