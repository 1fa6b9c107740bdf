mod document;
mod error;
mod release;
mod repository;

pub use document::Changelog;
pub use error::ChangelogError;
pub use release::VersionRelease;
pub use repository::{RepositoryHost, RepositoryInfo};

pub type Result<T> = std::result::Result<T, ChangelogError>;
