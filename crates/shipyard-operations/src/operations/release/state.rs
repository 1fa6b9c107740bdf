use std::collections::VecDeque;

use semver::Version;
use shipyard_core::{BumpType, ReleaseStep, StepSelection};

use crate::Result;
use crate::error::OperationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NextStep {
    Run(ReleaseStep),
    Skip(ReleaseStep),
}

/// Transient state of a single release run.
#[derive(Debug)]
pub(crate) struct ReleaseRunState {
    remaining: VecDeque<ReleaseStep>,
    selection: StepSelection,
    bump_type: Option<BumpType>,
    new_version: Option<Version>,
    dry_run: bool,
}

impl ReleaseRunState {
    pub(crate) fn new(selection: StepSelection, dry_run: bool) -> Self {
        Self {
            remaining: ReleaseStep::ALL.into_iter().collect(),
            selection,
            bump_type: None,
            new_version: None,
            dry_run,
        }
    }

    pub(crate) fn advance(&mut self) -> Option<NextStep> {
        let step = self.remaining.pop_front()?;
        if self.selection.contains(step) {
            Some(NextStep::Run(step))
        } else {
            Some(NextStep::Skip(step))
        }
    }

    /// Records the bump level and resulting version. A run resolves at most once.
    pub(crate) fn resolve(&mut self, bump_type: BumpType, new_version: Version) -> Result<()> {
        if let Some(existing) = self.bump_type {
            return Err(OperationError::VersionAlreadyResolved(existing));
        }
        self.bump_type = Some(bump_type);
        self.new_version = Some(new_version);
        Ok(())
    }

    pub(crate) fn new_version(&self) -> Option<&Version> {
        self.new_version.as_ref()
    }

    pub(crate) fn resume_from(&self, step: ReleaseStep) -> StepSelection {
        self.selection.starting_at(step)
    }

    pub(crate) fn is_dry_run(&self) -> bool {
        self.dry_run
    }
}
