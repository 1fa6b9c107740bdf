use std::path::Path;

use crate::Result;
use crate::types::Invocation;

/// The boundary through which every external program is started.
pub trait CommandRunner: Send + Sync {
    /// Runs `invocation` in `working_dir` and waits for it to finish.
    ///
    /// # Errors
    ///
    /// Returns an error if the program cannot be started or exits unsuccessfully.
    fn run(&self, working_dir: &Path, invocation: &Invocation) -> Result<()>;
}
