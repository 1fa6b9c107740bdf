mod change_source;
mod changelog;
mod command;
mod dry_run;
mod git;

pub use change_source::FileSystemChangeSource;
pub use changelog::FileSystemChangelogWriter;
pub use command::SystemCommandRunner;
pub use dry_run::{ActionLog, DryRunChangelogWriter, DryRunCommandRunner, RecordedAction};
pub use git::Git2Provider;
