mod classification;
pub mod error;
mod recommendation;
mod step;
pub mod types;

pub use classification::{ChangeClassification, classify};
pub use error::*;
pub use recommendation::recommend;
pub use step::{ReleaseStep, StepSelection};
pub use types::*;
