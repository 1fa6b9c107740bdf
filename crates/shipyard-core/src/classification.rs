use indexmap::IndexMap;

use crate::error::CoreError;
use crate::types::{ChangeCategory, PendingChange};

/// Pending changes grouped by category.
///
/// Every [`ChangeCategory`] has an entry, possibly empty, so an empty
/// section always means "no changes" rather than "not looked up".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeClassification {
    sections: IndexMap<ChangeCategory, Vec<PendingChange>>,
}

impl Default for ChangeClassification {
    fn default() -> Self {
        Self {
            sections: ChangeCategory::ALL
                .into_iter()
                .map(|category| (category, Vec::new()))
                .collect(),
        }
    }
}

impl ChangeClassification {
    #[must_use]
    pub fn get(&self, category: ChangeCategory) -> &[PendingChange] {
        &self.sections[&category]
    }

    #[must_use]
    pub fn has(&self, category: ChangeCategory) -> bool {
        !self.get(category).is_empty()
    }

    #[must_use]
    pub fn count(&self, category: ChangeCategory) -> usize {
        self.get(category).len()
    }

    /// Per-category counts in canonical category order.
    pub fn counts(&self) -> impl Iterator<Item = (ChangeCategory, usize)> + '_ {
        self.sections
            .iter()
            .map(|(category, changes)| (*category, changes.len()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (ChangeCategory, &[PendingChange])> {
        self.sections
            .iter()
            .map(|(category, changes)| (*category, changes.as_slice()))
    }

    /// Total number of changes across all categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Groups pending changes by category, preserving input order within each
/// category.
///
/// # Errors
///
/// Returns [`CoreError::UnknownCategory`] for the first change whose label
/// is not a known [`ChangeCategory`].
pub fn classify<I>(changes: I) -> Result<ChangeClassification, CoreError>
where
    I: IntoIterator<Item = PendingChange>,
{
    let mut classification = ChangeClassification::default();

    for change in changes {
        let Some(category) = ChangeCategory::from_label(&change.category) else {
            return Err(CoreError::UnknownCategory {
                label: change.category,
                description: change.description,
            });
        };
        if let Some(section) = classification.sections.get_mut(&category) {
            section.push(change);
        }
    }

    Ok(classification)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn change(category: ChangeCategory, description: &str) -> PendingChange {
        PendingChange::categorized(category, description)
    }

    #[test]
    fn default_matches_classifying_nothing() -> Result<(), CoreError> {
        assert_eq!(
            ChangeClassification::default(),
            classify(Vec::<PendingChange>::new())?
        );
        Ok(())
    }

    #[test]
    fn empty_input_has_every_category() -> Result<(), CoreError> {
        let classification = classify(Vec::<PendingChange>::new())?;

        for category in ChangeCategory::ALL {
            assert!(classification.get(category).is_empty());
        }
        assert_eq!(classification.counts().count(), ChangeCategory::ALL.len());
        assert!(classification.is_empty());
        Ok(())
    }

    #[test]
    fn preserves_order_within_category() -> Result<(), CoreError> {
        let classification = classify(vec![
            change(ChangeCategory::Features, "first"),
            change(ChangeCategory::BugFixes, "fix one"),
            change(ChangeCategory::Features, "second"),
            change(ChangeCategory::BugFixes, "fix two"),
            change(ChangeCategory::Features, "third"),
        ])?;

        let features: Vec<&str> = classification
            .get(ChangeCategory::Features)
            .iter()
            .map(|c| c.description.as_str())
            .collect();
        let fixes: Vec<&str> = classification
            .get(ChangeCategory::BugFixes)
            .iter()
            .map(|c| c.description.as_str())
            .collect();

        assert_eq!(features, ["first", "second", "third"]);
        assert_eq!(fixes, ["fix one", "fix two"]);
        Ok(())
    }

    #[test]
    fn total_count_matches_input_length() -> Result<(), CoreError> {
        let input = vec![
            change(ChangeCategory::Features, "a"),
            change(ChangeCategory::Deprecations, "b"),
            change(ChangeCategory::BreakingChanges, "c"),
            change(ChangeCategory::Accessibility, "d"),
            change(ChangeCategory::BugFixes, "e"),
            change(ChangeCategory::BugFixes, "f"),
        ];
        let expected = input.len();

        let classification = classify(input)?;

        let summed: usize = classification.counts().map(|(_, n)| n).sum();
        assert_eq!(summed, expected);
        assert_eq!(classification.len(), expected);
        Ok(())
    }

    #[test]
    fn accepts_labels_in_any_case() -> Result<(), CoreError> {
        let classification = classify(vec![PendingChange::new("bug fixes", "Fix crash")])?;

        assert_eq!(classification.count(ChangeCategory::BugFixes), 1);
        Ok(())
    }

    #[test]
    fn rejects_unknown_category() {
        let result = classify(vec![
            change(ChangeCategory::Features, "Add widget"),
            PendingChange::new("Refactors", "Move files around"),
        ]);

        match result {
            Err(CoreError::UnknownCategory { label, description }) => {
                assert_eq!(label, "Refactors");
                assert_eq!(description, "Move files around");
            }
            other => panic!("expected UnknownCategory, got {other:?}"),
        }
    }

    #[test]
    fn counts_follow_canonical_order() -> Result<(), CoreError> {
        let classification = classify(vec![change(ChangeCategory::Accessibility, "aria")])?;

        let order: Vec<ChangeCategory> = classification.counts().map(|(c, _)| c).collect();

        assert_eq!(order, ChangeCategory::ALL);
        Ok(())
    }
}
