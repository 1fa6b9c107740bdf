use url::Url;

use crate::error::ChangelogError;

/// Hosts that npm understands in a `repository` shorthand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryHost {
    GitHub,
    GitLab,
    Bitbucket,
}

impl RepositoryHost {
    fn from_domain(domain: &str) -> Option<Self> {
        match domain.to_ascii_lowercase().trim_start_matches("www.") {
            "github.com" => Some(Self::GitHub),
            "gitlab.com" => Some(Self::GitLab),
            "bitbucket.org" => Some(Self::Bitbucket),
            _ => None,
        }
    }

    fn from_shorthand(prefix: &str) -> Option<Self> {
        match prefix {
            "github" => Some(Self::GitHub),
            "gitlab" => Some(Self::GitLab),
            "bitbucket" => Some(Self::Bitbucket),
            _ => None,
        }
    }

    #[must_use]
    pub fn domain(self) -> &'static str {
        match self {
            Self::GitHub => "github.com",
            Self::GitLab => "gitlab.com",
            Self::Bitbucket => "bitbucket.org",
        }
    }
}

/// Where a package's source lives, as far as changelog links need to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryInfo {
    pub host: RepositoryHost,
    pub owner: String,
    pub project: String,
}

impl RepositoryInfo {
    /// Parses a `package.json` `repository` value or a git remote url.
    ///
    /// Accepted forms:
    /// - `owner/project` (GitHub)
    /// - `github:owner/project`, `gitlab:owner/project`, `bitbucket:owner/project`
    /// - `git@host:owner/project.git`
    /// - any url, including `git+https://` and `git+ssh://`
    ///
    /// # Errors
    ///
    /// Fails when the url is malformed, the host is not one of
    /// [`RepositoryHost`], or the path lacks an owner and project.
    pub fn parse(spec: &str) -> Result<Self, ChangelogError> {
        let trimmed = spec.trim();

        let (host, path) = if trimmed.contains("://") {
            let url = Url::parse(trimmed.trim_start_matches("git+")).map_err(|source| {
                ChangelogError::RepositoryUrl {
                    spec: spec.to_string(),
                    source,
                }
            })?;
            let host = url.host_str().and_then(RepositoryHost::from_domain);
            (host, url.path().to_string())
        } else if let Some((prefix, path)) = trimmed.split_once(':') {
            let host = match prefix.split_once('@') {
                Some((_user, domain)) => RepositoryHost::from_domain(domain),
                None => RepositoryHost::from_shorthand(prefix),
            };
            (host, path.to_string())
        } else {
            (Some(RepositoryHost::GitHub), trimmed.to_string())
        };

        let host = host.ok_or_else(|| ChangelogError::UnsupportedHost {
            spec: spec.to_string(),
        })?;

        let mut segments = path
            .trim_matches('/')
            .trim_end_matches(".git")
            .split('/')
            .filter(|segment| !segment.is_empty());
        match (segments.next(), segments.next()) {
            (Some(owner), Some(project)) => Ok(Self {
                host,
                owner: owner.to_string(),
                project: project.to_string(),
            }),
            _ => Err(ChangelogError::RepositoryPath {
                spec: spec.to_string(),
            }),
        }
    }

    #[must_use]
    pub fn web_url(&self) -> String {
        format!("https://{}/{}/{}", self.host.domain(), self.owner, self.project)
    }

    /// Link showing everything between two tags.
    #[must_use]
    pub fn comparison_url(&self, from_tag: &str, to_tag: &str) -> String {
        let web = self.web_url();
        match self.host {
            RepositoryHost::GitHub => format!("{web}/compare/{from_tag}...{to_tag}"),
            RepositoryHost::GitLab => format!("{web}/-/compare/{from_tag}...{to_tag}"),
            RepositoryHost::Bitbucket => format!("{web}/branches/compare/{to_tag}..{from_tag}"),
        }
    }
}
