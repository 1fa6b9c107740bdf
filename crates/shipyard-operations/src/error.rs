use std::path::PathBuf;

use shipyard_core::{ReleaseStep, StepSelection};
use thiserror::Error;

/// Coarse classification of a failure, used for reporting and exit handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad arguments or launch context; nothing has run yet.
    Configuration,
    /// The repository is not in a releasable state.
    Precondition,
    /// An external collaborator reported failure.
    DelegatedStep,
    /// An interactive prompt was aborted or produced unusable input.
    Prompt,
}

#[derive(Debug, Error)]
pub enum OperationError {
    #[error(transparent)]
    Core(#[from] shipyard_core::CoreError),

    #[error(transparent)]
    Git(#[from] shipyard_git::GitError),

    #[error(transparent)]
    Project(#[from] shipyard_project::ProjectError),

    #[error(transparent)]
    Changelog(#[from] shipyard_changelog::ChangelogError),

    #[error("failed to read changelog fragment '{path}'")]
    FragmentRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse changelog fragment '{path}'")]
    FragmentParse {
        path: PathBuf,
        #[source]
        source: shipyard_parse::FragmentError,
    },

    #[error("failed to list changelog fragments in '{path}'")]
    FragmentList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to remove changelog fragment '{path}'")]
    FragmentRemove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("the release must be run with npm: npm run release")]
    WrongLauncher { launcher: Option<String> },

    #[error("{}", version_type_required_message(*ci))]
    VersionTypeRequired { ci: bool },

    #[error("publishing requires NPM_OTP when no interactive terminal is available")]
    OneTimePasswordRequired,

    #[error("releases must be made from '{expected}', currently on '{current}'")]
    WrongBranch { current: String, expected: String },

    #[error("failed to start `{invocation}`")]
    CommandSpawn {
        invocation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{invocation}` failed with {status}")]
    CommandFailed { invocation: String, status: String },

    #[error("operation cancelled")]
    Cancelled,

    #[error("prompt failed")]
    Prompt(#[source] std::io::Error),

    #[error("one-time password cannot be empty")]
    EmptyOneTimePassword,

    #[error("version type already resolved as {0} for this run")]
    VersionAlreadyResolved(shipyard_core::BumpType),

    #[error("release step '{step}' failed")]
    StepFailed {
        step: ReleaseStep,
        remaining: StepSelection,
        #[source]
        source: Box<OperationError>,
    },

    #[error("IO error")]
    Io(#[from] std::io::Error),
}

fn version_type_required_message(ci: bool) -> &'static str {
    if ci {
        "running in CI requires an explicit --type (major, minor or patch)"
    } else {
        "no interactive terminal available; pass --type (major, minor or patch)"
    }
}

impl OperationError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Core(_)
            | Self::WrongLauncher { .. }
            | Self::VersionTypeRequired { .. }
            | Self::OneTimePasswordRequired
            | Self::Project(_) => ErrorKind::Configuration,
            Self::WrongBranch { .. } | Self::Git(_) => ErrorKind::Precondition,
            Self::Cancelled | Self::EmptyOneTimePassword | Self::Prompt(_) => ErrorKind::Prompt,
            Self::StepFailed { source, .. } => source.kind(),
            Self::Changelog(_)
            | Self::FragmentRead { .. }
            | Self::FragmentParse { .. }
            | Self::FragmentList { .. }
            | Self::FragmentRemove { .. }
            | Self::CommandSpawn { .. }
            | Self::CommandFailed { .. }
            | Self::VersionAlreadyResolved(_)
            | Self::Io(_) => ErrorKind::DelegatedStep,
        }
    }

    /// Steps to pass to `--steps` to pick the release up where it stopped.
    #[must_use]
    pub fn resume_steps(&self) -> Option<&StepSelection> {
        match self {
            Self::StepFailed { remaining, .. } => Some(remaining),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, OperationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_type_message_names_ci() {
        let err = OperationError::VersionTypeRequired { ci: true };

        assert!(err.to_string().contains("CI"));
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn wrong_branch_is_precondition() {
        let err = OperationError::WrongBranch {
            current: "feature".to_string(),
            expected: "main".to_string(),
        };

        assert_eq!(err.kind(), ErrorKind::Precondition);
        assert!(err.to_string().contains("feature"));
    }

    #[test]
    fn step_failure_takes_kind_of_cause() {
        let err = OperationError::StepFailed {
            step: ReleaseStep::Publish,
            remaining: StepSelection::all().starting_at(ReleaseStep::Publish),
            source: Box::new(OperationError::Cancelled),
        };

        assert_eq!(err.kind(), ErrorKind::Prompt);
        assert_eq!(
            err.resume_steps().map(ToString::to_string).as_deref(),
            Some("publish,docs")
        );
    }

    #[test]
    fn terminal_failure_during_prompt_is_prompt_kind() {
        let err = OperationError::StepFailed {
            step: ReleaseStep::Version,
            remaining: StepSelection::all().starting_at(ReleaseStep::Version),
            source: Box::new(OperationError::Prompt(std::io::Error::other("not a terminal"))),
        };

        assert_eq!(err.kind(), ErrorKind::Prompt);
        assert_eq!(OperationError::Io(std::io::Error::other("disk full")).kind(), ErrorKind::DelegatedStep);
    }

    #[test]
    fn command_failure_is_delegated() {
        let err = OperationError::CommandFailed {
            invocation: "npm test".to_string(),
            status: "exit status: 1".to_string(),
        };

        assert_eq!(err.kind(), ErrorKind::DelegatedStep);
        assert!(err.resume_steps().is_none());
    }
}
