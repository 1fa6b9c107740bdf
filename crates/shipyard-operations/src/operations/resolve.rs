use shipyard_core::BumpType;
use tracing::{info, warn};

use crate::Result;
use crate::error::OperationError;
use crate::traits::VersionTypeSelection;
use crate::types::RuntimeEnvironment;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionSource {
    /// Given with `--type`.
    Explicit,
    /// Chosen at the interactive prompt.
    Prompted,
}

/// The bump level a release will use, and how it was arrived at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionResolution {
    pub bump_type: BumpType,
    pub source: VersionSource,
    /// The recommendation, when an explicit request overrode it.
    pub mismatch: Option<BumpType>,
}

/// Settles the bump level for this run.
///
/// An explicit request always wins; disagreeing with the recommendation only
/// produces a warning. Without one the operator is asked through `prompt`,
/// and the recommendation is merely displayed.
///
/// # Errors
///
/// Returns [`OperationError::VersionTypeRequired`] when there is no explicit
/// request and no terminal to prompt on, [`OperationError::Cancelled`] when
/// the prompt is dismissed, or any error raised by `prompt` itself.
pub fn resolve_version_type<F>(
    recommendation: BumpType,
    explicit: Option<BumpType>,
    environment: &RuntimeEnvironment,
    prompt: F,
) -> Result<VersionResolution>
where
    F: FnOnce() -> Result<VersionTypeSelection>,
{
    if let Some(requested) = explicit {
        let mismatch = (requested != recommendation).then_some(recommendation);
        if mismatch.is_some() {
            warn!(
                %requested,
                %recommendation,
                "requested version type differs from the recommendation"
            );
        }
        return Ok(VersionResolution {
            bump_type: requested,
            source: VersionSource::Explicit,
            mismatch,
        });
    }

    if !environment.interactive {
        return Err(OperationError::VersionTypeRequired { ci: environment.ci });
    }

    match prompt()? {
        VersionTypeSelection::Selected(bump_type) => {
            info!(%bump_type, %recommendation, "version type chosen at prompt");
            Ok(VersionResolution {
                bump_type,
                source: VersionSource::Prompted,
                mismatch: None,
            })
        }
        VersionTypeSelection::Cancelled => Err(OperationError::Cancelled),
    }
}
