use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Project(#[from] shipyard_project::ProjectError),

    #[error(transparent)]
    Operation(#[from] shipyard_operations::OperationError),

    #[error("failed to get current directory")]
    CurrentDir(#[source] std::io::Error),
}

impl CliError {
    /// The `--steps` value that resumes a release stopped by this error.
    pub fn resume_steps(&self) -> Option<String> {
        match self {
            Self::Operation(err) => err.resume_steps().map(ToString::to_string),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
