use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// A named stage of the release pipeline. Declaration order is execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReleaseStep {
    Test,
    Build,
    Version,
    Tag,
    Publish,
    Docs,
}

impl ReleaseStep {
    pub const ALL: [Self; 6] = [
        Self::Test,
        Self::Build,
        Self::Version,
        Self::Tag,
        Self::Publish,
        Self::Docs,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Test => "test",
            Self::Build => "build",
            Self::Version => "version",
            Self::Tag => "tag",
            Self::Publish => "publish",
            Self::Docs => "docs",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|step| step.name() == name)
    }
}

impl fmt::Display for ReleaseStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The operator-selected subset of [`ReleaseStep`]s.
///
/// Iteration always follows pipeline order regardless of the order the
/// steps were given in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSelection {
    steps: BTreeSet<ReleaseStep>,
}

impl StepSelection {
    #[must_use]
    pub fn all() -> Self {
        Self::from_iter(ReleaseStep::ALL)
    }

    #[must_use]
    pub fn contains(&self, step: ReleaseStep) -> bool {
        self.steps.contains(&step)
    }

    pub fn iter(&self) -> impl Iterator<Item = ReleaseStep> + '_ {
        self.steps.iter().copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The selected steps from `step` (inclusive) to the end of the pipeline.
    #[must_use]
    pub fn starting_at(&self, step: ReleaseStep) -> Self {
        Self {
            steps: self.steps.range(step..).copied().collect(),
        }
    }
}

impl Default for StepSelection {
    fn default() -> Self {
        Self::all()
    }
}

impl FromIterator<ReleaseStep> for StepSelection {
    fn from_iter<T: IntoIterator<Item = ReleaseStep>>(iter: T) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}

impl FromStr for StepSelection {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut steps = BTreeSet::new();
        let mut invalid = Vec::new();

        for token in s.split(',').map(str::trim) {
            match ReleaseStep::from_name(token) {
                Some(step) => {
                    steps.insert(step);
                }
                None => invalid.push(token.to_string()),
            }
        }

        if invalid.is_empty() {
            Ok(Self { steps })
        } else {
            Err(CoreError::InvalidSteps { tokens: invalid })
        }
    }
}

impl fmt::Display for StepSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(ReleaseStep::name).collect();
        f.write_str(&names.join(","))
    }
}
