use chrono::NaiveDate;
use semver::Version;
use shipyard_core::{ChangeClassification, PendingChange};
use shipyard_version::version_tag;

/// One release section of the changelog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRelease {
    pub version: Version,
    pub previous_version: Option<Version>,
    pub date: NaiveDate,
    pub changes: ChangeClassification,
}

impl VersionRelease {
    #[must_use]
    pub fn new(version: Version, date: NaiveDate, changes: ChangeClassification) -> Self {
        Self {
            version,
            previous_version: None,
            date,
            changes,
        }
    }

    #[must_use]
    pub fn with_previous_version(mut self, previous: Version) -> Self {
        self.previous_version = Some(previous);
        self
    }

    #[must_use]
    pub fn heading(&self) -> String {
        format!("## [{}] - {}", self.version, self.date)
    }

    /// Markdown for this release, ending in a newline.
    ///
    /// Categories without changes are left out. A release with no changes
    /// at all gets a one-line note instead.
    #[must_use]
    pub fn render(&self) -> String {
        let mut blocks = vec![self.heading()];

        if self.changes.is_empty() {
            blocks.push(match &self.previous_version {
                Some(previous) => {
                    format!("No public interface changes since {}.", version_tag(previous))
                }
                None => "No public interface changes.".to_string(),
            });
        }

        for (category, changes) in self.changes.iter() {
            if changes.is_empty() {
                continue;
            }
            blocks.push(format!("### {category}"));
            blocks.push(
                changes
                    .iter()
                    .map(bullet)
                    .collect::<Vec<_>>()
                    .join("\n"),
            );
        }

        let mut rendered = blocks.join("\n\n");
        rendered.push('\n');
        rendered
    }
}

/// Continuation lines are indented under the bullet.
fn bullet(change: &PendingChange) -> String {
    format!("- {}", change.description.replace('\n', "\n  "))
}
