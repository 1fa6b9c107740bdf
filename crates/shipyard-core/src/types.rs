use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

use crate::error::CoreError;

/// Semantic version increment. Ordered by impact: `Patch < Minor < Major`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum)]
pub enum BumpType {
    Patch,
    Minor,
    Major,
}

impl BumpType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Patch => "patch",
            Self::Minor => "minor",
            Self::Major => "major",
        }
    }
}

impl fmt::Display for BumpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BumpType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "patch" => Ok(Self::Patch),
            "minor" => Ok(Self::Minor),
            "major" => Ok(Self::Major),
            _ => Err(CoreError::InvalidBumpType {
                value: s.to_string(),
            }),
        }
    }
}

/// Changelog section a pending change belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChangeCategory {
    Features,
    BugFixes,
    Deprecations,
    BreakingChanges,
    Accessibility,
}

impl ChangeCategory {
    /// Every known category, in the order sections appear in the changelog.
    pub const ALL: [Self; 5] = [
        Self::Features,
        Self::BugFixes,
        Self::Deprecations,
        Self::BreakingChanges,
        Self::Accessibility,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Features => "Features",
            Self::BugFixes => "Bug fixes",
            Self::Deprecations => "Deprecations",
            Self::BreakingChanges => "Breaking changes",
            Self::Accessibility => "Accessibility",
        }
    }

    /// Case-insensitive lookup by section label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for ChangeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single unreleased change as read from a changelog fragment.
///
/// The category is kept as the raw label found in the source so that
/// [`classify`](crate::classify) can reject labels it does not know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingChange {
    pub category: String,
    pub description: String,
}

impl PendingChange {
    #[must_use]
    pub fn new(category: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            description: description.into(),
        }
    }

    #[must_use]
    pub fn categorized(category: ChangeCategory, description: impl Into<String>) -> Self {
        Self::new(category.label(), description)
    }
}
