use std::fmt;
use std::path::PathBuf;

use semver::Version;
use shipyard_core::{BumpType, ChangeCategory, ChangeClassification, PendingChange, StepSelection};

/// One command-line argument of an [`Invocation`].
#[derive(Clone, PartialEq, Eq)]
pub enum Argument {
    Plain(String),
    /// Rendered as `prefix***`; the value only reaches the spawned process.
    Secret { prefix: String, value: String },
}

impl Argument {
    #[must_use]
    pub fn reveal(&self) -> String {
        match self {
            Self::Plain(arg) => arg.clone(),
            Self::Secret { prefix, value } => format!("{prefix}{value}"),
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(arg) if arg.is_empty() || arg.contains(char::is_whitespace) => {
                write!(f, "\"{arg}\"")
            }
            Self::Plain(arg) => f.write_str(arg),
            Self::Secret { prefix, .. } => write!(f, "{prefix}***"),
        }
    }
}

impl fmt::Debug for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

/// An external program call issued by a release step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: String,
    args: Vec<Argument>,
}

impl Invocation {
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    #[must_use]
    pub fn npm() -> Self {
        Self::new("npm")
    }

    #[must_use]
    pub fn git() -> Self {
        Self::new("git")
    }

    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(Argument::Plain(arg.into()));
        self
    }

    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args
            .extend(args.into_iter().map(|arg| Argument::Plain(arg.into())));
        self
    }

    #[must_use]
    pub fn secret_arg(mut self, prefix: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.push(Argument::Secret {
            prefix: prefix.into(),
            value: value.into(),
        });
        self
    }

    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    #[must_use]
    pub fn arguments(&self) -> &[Argument] {
        &self.args
    }

    /// Arguments as passed to the process, secrets included.
    #[must_use]
    pub fn revealed_args(&self) -> Vec<String> {
        self.args.iter().map(Argument::reveal).collect()
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Facts about the process environment, gathered once at startup.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RuntimeEnvironment {
    pub ci: bool,
    pub one_time_password: Option<String>,
    /// File name of the package-manager entry point that launched the release.
    pub launcher: Option<String>,
    pub interactive: bool,
}

impl RuntimeEnvironment {
    pub const REQUIRED_LAUNCHER: &'static str = "npm-cli.js";

    #[must_use]
    pub fn launched_by_npm(&self) -> bool {
        self.launcher.as_deref() == Some(Self::REQUIRED_LAUNCHER)
    }
}

impl fmt::Debug for RuntimeEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuntimeEnvironment")
            .field("ci", &self.ci)
            .field(
                "one_time_password",
                &self.one_time_password.as_ref().map(|_| "***"),
            )
            .field("launcher", &self.launcher)
            .field("interactive", &self.interactive)
            .finish()
    }
}

/// What the operator asked for on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReleaseRequest {
    pub bump_type: Option<BumpType>,
    pub dry_run: bool,
    pub steps: StepSelection,
}

/// Pending changes read from fragment files, plus the files they came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectedChanges {
    pub changes: Vec<PendingChange>,
    pub fragments: Vec<PathBuf>,
}

/// Per-category counts and the recommended bump, shown before prompting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeSummary {
    pub counts: Vec<(ChangeCategory, usize)>,
    pub recommendation: BumpType,
}

impl ChangeSummary {
    #[must_use]
    pub fn new(classification: &ChangeClassification, recommendation: BumpType) -> Self {
        Self {
            counts: classification.counts().collect(),
            recommendation,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, count)| count).sum()
    }
}

/// The package a one-time password is requested for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishTarget {
    pub name: String,
    pub version: Version,
}

impl fmt::Display for PublishTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.version)
    }
}
