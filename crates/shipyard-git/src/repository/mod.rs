mod branch;
mod remote;

use std::path::Path;

use crate::{GitError, Result};

pub struct Repository {
    pub(crate) inner: git2::Repository,
}

impl Repository {
    /// # Errors
    ///
    /// Returns [`GitError::NotARepository`] if the path is not inside a
    /// git repository with a working tree.
    pub fn open(path: &Path) -> Result<Self> {
        let not_a_repository = || GitError::NotARepository {
            path: path.to_path_buf(),
        };

        let inner = git2::Repository::discover(path).map_err(|_| not_a_repository())?;
        if inner.is_bare() {
            return Err(not_a_repository());
        }

        Ok(Self { inner })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use tempfile::TempDir;

    pub(crate) fn setup_test_repo() -> anyhow::Result<(TempDir, Repository)> {
        let dir = TempDir::new()?;
        let repo = git2::Repository::init(dir.path())?;

        let mut config = repo.config()?;
        config.set_str("user.name", "Test")?;
        config.set_str("user.email", "test@example.com")?;

        let sig = git2::Signature::now("Test", "test@example.com")?;
        let tree_id = repo.index()?.write_tree()?;
        let tree = repo.find_tree(tree_id)?;
        repo.commit(Some("HEAD"), &sig, &sig, "Initial commit", &tree, &[])?;

        let repository = Repository::open(dir.path())?;
        Ok((dir, repository))
    }

    #[test]
    fn open_from_subdirectory_finds_enclosing_repository() -> anyhow::Result<()> {
        let (dir, repo) = setup_test_repo()?;
        let nested = dir.path().join("packages").join("ui");
        std::fs::create_dir_all(&nested)?;

        let nested_repo = Repository::open(&nested)?;

        assert_eq!(nested_repo.current_branch()?, repo.current_branch()?);
        Ok(())
    }

    #[test]
    fn bare_repository_is_rejected() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        git2::Repository::init_bare(dir.path())?;

        let result = Repository::open(dir.path());

        assert!(matches!(result, Err(GitError::NotARepository { .. })));
        Ok(())
    }

    #[test]
    fn open_nonexistent_repository() {
        let dir = TempDir::new().expect("failed to create temp dir");
        let result = Repository::open(dir.path());
        assert!(matches!(result, Err(GitError::NotARepository { .. })));
    }
}
