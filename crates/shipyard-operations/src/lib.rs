mod error;
pub mod operations;
pub mod providers;
pub mod traits;
mod types;

#[cfg(test)]
pub mod mocks;

pub use error::{ErrorKind, OperationError, Result};
pub use types::{
    Argument, ChangeSummary, CollectedChanges, Invocation, PublishTarget, ReleaseRequest,
    RuntimeEnvironment,
};
