use shipyard_core::BumpType;

use crate::Result;
use crate::types::{ChangeSummary, PublishTarget};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionTypeSelection {
    Selected(BumpType),
    Cancelled,
}

#[derive(Clone, PartialEq, Eq)]
pub enum OneTimePasswordInput {
    Provided(String),
    Cancelled,
}

impl std::fmt::Debug for OneTimePasswordInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Provided(_) => f.write_str("Provided(***)"),
            Self::Cancelled => f.write_str("Cancelled"),
        }
    }
}

/// Questions the release may need to put to the operator.
pub trait ReleaseInteraction: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the interaction cannot be completed.
    fn request_version_type(&self, summary: &ChangeSummary) -> Result<VersionTypeSelection>;

    /// # Errors
    ///
    /// Returns an error if the interaction cannot be completed.
    fn request_one_time_password(&self, target: &PublishTarget) -> Result<OneTimePasswordInput>;
}
