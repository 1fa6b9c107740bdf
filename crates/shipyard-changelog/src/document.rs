use std::io::ErrorKind;
use std::path::Path;

use shipyard_version::version_tag;

use crate::error::ChangelogError;
use crate::release::VersionRelease;
use crate::repository::RepositoryInfo;

const DEFAULT_PREAMBLE: &str = "# Changelog\n\n\
All notable changes to this project will be documented in this file.\n\n\
The format is based on [Keep a Changelog](https://keepachangelog.com/en/1.1.0/),\n\
and this project adheres to [Semantic Versioning](https://semver.org/spec/v2.0.0.html).";

/// A `CHANGELOG.md` split into the text above the first release heading and
/// everything from that heading on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Changelog {
    preamble: String,
    history: String,
}

impl Default for Changelog {
    fn default() -> Self {
        Self::new()
    }
}

impl Changelog {
    #[must_use]
    pub fn new() -> Self {
        Self {
            preamble: DEFAULT_PREAMBLE.to_string(),
            history: String::new(),
        }
    }

    /// Splits `content` at its first `## ` heading. A file without one is
    /// all preamble.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let mut offset = 0;
        for line in content.split_inclusive('\n') {
            if line.starts_with("## ") {
                return Self {
                    preamble: content[..offset].to_string(),
                    history: content[offset..].to_string(),
                };
            }
            offset += line.len();
        }

        Self {
            preamble: content.to_string(),
            history: String::new(),
        }
    }

    /// # Errors
    ///
    /// Returns [`ChangelogError::Read`] if the file cannot be read.
    pub fn from_file(path: &Path) -> Result<Self, ChangelogError> {
        std::fs::read_to_string(path)
            .map(|content| Self::parse(&content))
            .map_err(|source| ChangelogError::Read {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Loads the changelog at `path`, starting a new one when the file does
    /// not exist. The flag is `true` for a new changelog.
    ///
    /// # Errors
    ///
    /// Returns [`ChangelogError::Read`] for any failure other than a missing
    /// file.
    pub fn load_or_new(path: &Path) -> Result<(Self, bool), ChangelogError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok((Self::parse(&content), false)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok((Self::new(), true)),
            Err(source) => Err(ChangelogError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Puts `release` above every existing release. With a repository and a
    /// previous version, a compare link for the new version is added to the
    /// link references.
    pub fn prepend_release(&mut self, release: &VersionRelease, repository: Option<&RepositoryInfo>) {
        let mut history = release.render();
        if !self.history.is_empty() {
            history.push('\n');
            history.push_str(&self.history);
        }
        self.history = history;

        if let (Some(repository), Some(previous)) = (repository, &release.previous_version) {
            let link = format!(
                "[{}]: {}",
                release.version,
                repository.comparison_url(&version_tag(previous), &version_tag(&release.version))
            );
            self.insert_link(&link);
        }
    }

    /// Newest links go first, above any existing reference block.
    fn insert_link(&mut self, link: &str) {
        if self.history.lines().any(|line| line == link) {
            return;
        }

        let mut offset = 0;
        for line in self.history.split_inclusive('\n') {
            if is_link_reference(line) {
                self.history.insert_str(offset, &format!("{link}\n"));
                return;
            }
            offset += line.len();
        }

        if !self.history.ends_with('\n') {
            self.history.push('\n');
        }
        self.history.push('\n');
        self.history.push_str(link);
        self.history.push('\n');
    }

    #[must_use]
    pub fn render(&self) -> String {
        let preamble = self.preamble.trim_end();
        match (preamble.is_empty(), self.history.is_empty()) {
            (true, _) => self.history.clone(),
            (false, true) => format!("{preamble}\n"),
            (false, false) => format!("{preamble}\n\n{}", self.history),
        }
    }

    /// # Errors
    ///
    /// Returns [`ChangelogError::Write`] if the file cannot be written.
    pub fn write_to_file(&self, path: &Path) -> Result<(), ChangelogError> {
        std::fs::write(path, self.render()).map_err(|source| ChangelogError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn is_link_reference(line: &str) -> bool {
    line.starts_with('[') && line.contains("]: ")
}
