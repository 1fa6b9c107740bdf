use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::Result;
use crate::error::OperationError;
use crate::traits::CommandRunner;
use crate::types::Invocation;

/// Spawns the program with inherited stdio so test and publish output
/// streams straight to the operator.
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemCommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, working_dir: &Path, invocation: &Invocation) -> Result<()> {
        debug!(%invocation, dir = %working_dir.display(), "spawning");

        let status = Command::new(invocation.program())
            .args(invocation.revealed_args())
            .current_dir(working_dir)
            .status()
            .map_err(|source| OperationError::CommandSpawn {
                invocation: invocation.to_string(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(OperationError::CommandFailed {
                invocation: invocation.to_string(),
                status: status.to_string(),
            })
        }
    }
}
