//! Stand-ins for the side-effecting collaborators.
//!
//! Each records what it would have done into a shared [`ActionLog`] and
//! returns success, so the release runs its full sequence with no side
//! effects outside the log.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use semver::Version;
use shipyard_changelog::{RepositoryInfo, VersionRelease};
use tracing::info;

use crate::Result;
use crate::traits::{ChangelogWriteResult, ChangelogWriter, CommandRunner};
use crate::types::Invocation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedAction {
    /// Secrets are already masked.
    Command { working_dir: PathBuf, invocation: String },
    ChangelogWrite { path: PathBuf, version: Version },
    FragmentRemoval { fragments: Vec<PathBuf> },
}

impl fmt::Display for RecordedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Command { invocation, .. } => write!(f, "run `{invocation}`"),
            Self::ChangelogWrite { path, version } => {
                write!(f, "write {version} to {}", path.display())
            }
            Self::FragmentRemoval { fragments } => {
                write!(f, "remove {} changelog fragment(s)", fragments.len())
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ActionLog {
    actions: Arc<Mutex<Vec<RecordedAction>>>,
}

impl ActionLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, action: RecordedAction) {
        info!(%action, "dry run");
        self.actions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(action);
    }

    #[must_use]
    pub fn actions(&self) -> Vec<RecordedAction> {
        self.actions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Recorded command lines, in order.
    #[must_use]
    pub fn commands(&self) -> Vec<String> {
        self.actions()
            .into_iter()
            .filter_map(|action| match action {
                RecordedAction::Command { invocation, .. } => Some(invocation),
                _ => None,
            })
            .collect()
    }
}

pub struct DryRunCommandRunner {
    log: ActionLog,
}

impl DryRunCommandRunner {
    #[must_use]
    pub fn new(log: ActionLog) -> Self {
        Self { log }
    }
}

impl CommandRunner for DryRunCommandRunner {
    fn run(&self, working_dir: &Path, invocation: &Invocation) -> Result<()> {
        self.log.record(RecordedAction::Command {
            working_dir: working_dir.to_path_buf(),
            invocation: invocation.to_string(),
        });
        Ok(())
    }
}

pub struct DryRunChangelogWriter {
    log: ActionLog,
}

impl DryRunChangelogWriter {
    #[must_use]
    pub fn new(log: ActionLog) -> Self {
        Self { log }
    }
}

impl ChangelogWriter for DryRunChangelogWriter {
    fn write_release(
        &self,
        changelog_path: &Path,
        release: &VersionRelease,
        _repo_info: Option<&RepositoryInfo>,
    ) -> Result<ChangelogWriteResult> {
        self.log.record(RecordedAction::ChangelogWrite {
            path: changelog_path.to_path_buf(),
            version: release.version.clone(),
        });
        Ok(ChangelogWriteResult {
            path: changelog_path.to_path_buf(),
            created: !changelog_path.exists(),
        })
    }

    fn remove_fragments(&self, fragments: &[PathBuf]) -> Result<()> {
        self.log.record(RecordedAction::FragmentRemoval {
            fragments: fragments.to_vec(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use shipyard_core::ChangeClassification;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn runner_records_masked_command() {
        let log = ActionLog::new();
        let runner = DryRunCommandRunner::new(log.clone());
        let invocation = Invocation::npm().arg("publish").secret_arg("--otp=", "111222");

        runner
            .run(Path::new("/pkg"), &invocation)
            .expect("dry run never fails");

        assert_eq!(log.commands(), ["npm publish --otp=***"]);
    }

    #[test]
    fn changelog_writer_leaves_files_untouched() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let changelog = dir.path().join("CHANGELOG.md");
        let fragment = dir.path().join("1.md");
        std::fs::write(&fragment, "- Change\n")?;
        let log = ActionLog::new();
        let writer = DryRunChangelogWriter::new(log.clone());
        let release = VersionRelease::new(
            Version::new(2, 0, 0),
            NaiveDate::from_ymd_opt(2025, 5, 1).expect("valid date"),
            ChangeClassification::default(),
        );

        let result = writer.write_release(&changelog, &release, None)?;
        writer.remove_fragments(std::slice::from_ref(&fragment))?;

        assert!(result.created);
        assert!(!changelog.exists());
        assert!(fragment.exists());
        assert_eq!(
            log.actions(),
            [
                RecordedAction::ChangelogWrite {
                    path: changelog,
                    version: Version::new(2, 0, 0),
                },
                RecordedAction::FragmentRemoval {
                    fragments: vec![fragment],
                },
            ]
        );
        Ok(())
    }
}
