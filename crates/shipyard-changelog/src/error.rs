use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChangelogError {
    #[error("failed to read changelog at '{path}'")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write changelog at '{path}'")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid repository url '{spec}'")]
    RepositoryUrl {
        spec: String,
        #[source]
        source: url::ParseError,
    },

    #[error("repository '{spec}' is not hosted on GitHub, GitLab or Bitbucket")]
    UnsupportedHost { spec: String },

    #[error("repository '{spec}' does not name an owner and a project")]
    RepositoryPath { spec: String },
}
