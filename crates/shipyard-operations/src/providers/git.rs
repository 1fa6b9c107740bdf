use std::path::Path;

use shipyard_git::Repository;

use crate::Result;
use crate::traits::GitProvider;

pub struct Git2Provider;

impl Git2Provider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for Git2Provider {
    fn default() -> Self {
        Self::new()
    }
}

impl GitProvider for Git2Provider {
    fn current_branch(&self, project_root: &Path) -> Result<String> {
        let repo = Repository::open(project_root)?;
        Ok(repo.current_branch()?)
    }

    fn remote_url(&self, project_root: &Path, remote: &str) -> Result<Option<String>> {
        let repo = Repository::open(project_root)?;
        Ok(repo.remote_url(remote)?)
    }
}
