mod release;
mod resolve;

pub use release::{ReleaseOperation, ReleaseReport};
pub use resolve::{VersionResolution, VersionSource, resolve_version_type};
