mod change_source;
mod changelog_writer;
mod command_runner;
mod git_provider;
mod interaction;

pub use change_source::ChangeSource;
pub use changelog_writer::{ChangelogWriteResult, ChangelogWriter};
pub use command_runner::CommandRunner;
pub use git_provider::GitProvider;
pub use interaction::{OneTimePasswordInput, ReleaseInteraction, VersionTypeSelection};
