mod operation;
mod report;
mod state;

pub use operation::ReleaseOperation;
pub use report::ReleaseReport;
