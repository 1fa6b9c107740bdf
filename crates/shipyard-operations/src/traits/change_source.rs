use std::path::Path;

use crate::Result;
use crate::types::CollectedChanges;

pub trait ChangeSource: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if a fragment cannot be read or parsed.
    fn collect(&self, fragments_dir: &Path) -> Result<CollectedChanges>;
}
