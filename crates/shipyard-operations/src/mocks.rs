use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use shipyard_changelog::{RepositoryInfo, VersionRelease};
use shipyard_core::PendingChange;
use shipyard_git::GitError;

use crate::Result;
use crate::error::OperationError;
use crate::traits::{
    ChangeSource, ChangelogWriteResult, ChangelogWriter, CommandRunner, GitProvider,
    OneTimePasswordInput, ReleaseInteraction, VersionTypeSelection,
};
use crate::types::{ChangeSummary, CollectedChanges, Invocation, PublishTarget};

#[derive(Clone, Default)]
pub struct MockCommandRunner {
    invocations: Arc<Mutex<Vec<Invocation>>>,
    failing: Option<String>,
}

impl MockCommandRunner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails any invocation whose masked command line equals `command`.
    #[must_use]
    pub fn failing_on(mut self, command: &str) -> Self {
        self.failing = Some(command.to_string());
        self
    }

    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    #[must_use]
    pub fn commands(&self) -> Vec<String> {
        self.invocations
            .lock()
            .expect("lock poisoned")
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    #[must_use]
    pub fn revealed_args(&self) -> Vec<Vec<String>> {
        self.invocations
            .lock()
            .expect("lock poisoned")
            .iter()
            .map(Invocation::revealed_args)
            .collect()
    }
}

impl CommandRunner for MockCommandRunner {
    fn run(&self, _working_dir: &Path, invocation: &Invocation) -> Result<()> {
        self.invocations
            .lock()
            .expect("lock poisoned")
            .push(invocation.clone());

        let rendered = invocation.to_string();
        if self.failing.as_deref() == Some(rendered.as_str()) {
            return Err(OperationError::CommandFailed {
                invocation: rendered,
                status: "exit status: 1".to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct MockChangeSource {
    changes: Vec<PendingChange>,
    fragments: Vec<PathBuf>,
}

impl MockChangeSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_fragment(mut self, path: &str, changes: Vec<PendingChange>) -> Self {
        self.fragments.push(PathBuf::from(path));
        self.changes.extend(changes);
        self
    }
}

impl ChangeSource for MockChangeSource {
    fn collect(&self, _fragments_dir: &Path) -> Result<CollectedChanges> {
        Ok(CollectedChanges {
            changes: self.changes.clone(),
            fragments: self.fragments.clone(),
        })
    }
}

#[derive(Clone, Default)]
pub struct MockChangelogWriter {
    releases: Arc<Mutex<Vec<VersionRelease>>>,
    removed: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockChangelogWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    #[must_use]
    pub fn releases(&self) -> Vec<VersionRelease> {
        self.releases.lock().expect("lock poisoned").clone()
    }

    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    #[must_use]
    pub fn removed_fragments(&self) -> Vec<PathBuf> {
        self.removed.lock().expect("lock poisoned").clone()
    }
}

impl ChangelogWriter for MockChangelogWriter {
    fn write_release(
        &self,
        changelog_path: &Path,
        release: &VersionRelease,
        _repo_info: Option<&RepositoryInfo>,
    ) -> Result<ChangelogWriteResult> {
        self.releases
            .lock()
            .expect("lock poisoned")
            .push(release.clone());
        Ok(ChangelogWriteResult {
            path: changelog_path.to_path_buf(),
            created: false,
        })
    }

    fn remove_fragments(&self, fragments: &[PathBuf]) -> Result<()> {
        self.removed
            .lock()
            .expect("lock poisoned")
            .extend_from_slice(fragments);
        Ok(())
    }
}

pub struct MockGitProvider {
    branch: Option<String>,
    remotes: HashMap<String, String>,
}

impl MockGitProvider {
    #[must_use]
    pub fn on_branch(branch: &str) -> Self {
        Self {
            branch: Some(branch.to_string()),
            remotes: HashMap::new(),
        }
    }

    #[must_use]
    pub fn detached() -> Self {
        Self {
            branch: None,
            remotes: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_remote(mut self, name: &str, url: &str) -> Self {
        self.remotes.insert(name.to_string(), url.to_string());
        self
    }
}

impl GitProvider for MockGitProvider {
    fn current_branch(&self, _project_root: &Path) -> Result<String> {
        self.branch
            .clone()
            .ok_or(OperationError::Git(GitError::DetachedHead))
    }

    fn remote_url(&self, _project_root: &Path, remote: &str) -> Result<Option<String>> {
        Ok(self.remotes.get(remote).cloned())
    }
}

#[derive(Clone)]
pub struct MockInteraction {
    version_type: VersionTypeSelection,
    one_time_password: OneTimePasswordInput,
    version_type_requests: Arc<Mutex<usize>>,
    publish_targets: Arc<Mutex<Vec<PublishTarget>>>,
}

impl Default for MockInteraction {
    fn default() -> Self {
        Self {
            version_type: VersionTypeSelection::Cancelled,
            one_time_password: OneTimePasswordInput::Cancelled,
            version_type_requests: Arc::new(Mutex::new(0)),
            publish_targets: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl MockInteraction {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_version_type(mut self, selection: VersionTypeSelection) -> Self {
        self.version_type = selection;
        self
    }

    #[must_use]
    pub fn with_one_time_password(mut self, code: &str) -> Self {
        self.one_time_password = OneTimePasswordInput::Provided(code.to_string());
        self
    }

    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    #[must_use]
    pub fn version_type_requests(&self) -> usize {
        *self.version_type_requests.lock().expect("lock poisoned")
    }

    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    #[must_use]
    pub fn one_time_password_requests(&self) -> usize {
        self.publish_targets.lock().expect("lock poisoned").len()
    }

    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    #[must_use]
    pub fn last_publish_target(&self) -> Option<PublishTarget> {
        self.publish_targets
            .lock()
            .expect("lock poisoned")
            .last()
            .cloned()
    }
}

impl ReleaseInteraction for MockInteraction {
    fn request_version_type(&self, _summary: &ChangeSummary) -> Result<VersionTypeSelection> {
        *self.version_type_requests.lock().expect("lock poisoned") += 1;
        Ok(self.version_type.clone())
    }

    fn request_one_time_password(&self, target: &PublishTarget) -> Result<OneTimePasswordInput> {
        self.publish_targets
            .lock()
            .expect("lock poisoned")
            .push(target.clone());
        Ok(self.one_time_password.clone())
    }
}
