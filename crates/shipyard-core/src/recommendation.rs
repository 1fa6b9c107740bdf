use crate::classification::ChangeClassification;
use crate::types::{BumpType, ChangeCategory};

/// Recommends a version bump for a set of classified changes.
///
/// The rules form a precedence chain where each later rule overrides the
/// earlier ones:
///
/// 1. a release is assumed to carry new functionality: [`BumpType::Minor`];
/// 2. bug fixes without any features downgrade to [`BumpType::Patch`];
/// 3. any breaking change forces [`BumpType::Major`].
#[must_use]
pub fn recommend(classification: &ChangeClassification) -> BumpType {
    let mut recommended = BumpType::Minor;

    if classification.has(ChangeCategory::BugFixes) && !classification.has(ChangeCategory::Features)
    {
        recommended = BumpType::Patch;
    }

    if classification.has(ChangeCategory::BreakingChanges) {
        recommended = BumpType::Major;
    }

    recommended
}
