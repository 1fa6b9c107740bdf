use semver::Version;
use shipyard_core::ReleaseStep;

use crate::operations::VersionResolution;
use crate::traits::ChangelogWriteResult;
use crate::types::ChangeSummary;

/// What a completed release run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseReport {
    pub completed: Vec<ReleaseStep>,
    pub skipped: Vec<ReleaseStep>,
    /// Present when the version step ran.
    pub summary: Option<ChangeSummary>,
    pub resolution: Option<VersionResolution>,
    pub changelog: Option<ChangelogWriteResult>,
    pub previous_version: Version,
    pub new_version: Option<Version>,
    pub dry_run: bool,
}

impl ReleaseReport {
    pub(crate) fn new(previous_version: Version, dry_run: bool) -> Self {
        Self {
            completed: Vec::new(),
            skipped: Vec::new(),
            summary: None,
            resolution: None,
            changelog: None,
            previous_version,
            new_version: None,
            dry_run,
        }
    }
}
