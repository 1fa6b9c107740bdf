use std::path::{Path, PathBuf};

use semver::Version;
use serde::Deserialize;

use crate::config::{RawReleaseConfig, ReleaseConfig};
use crate::error::ProjectError;

#[derive(Debug, Deserialize)]
pub(crate) struct RawManifest {
    pub(crate) name: Option<String>,
    pub(crate) version: Option<String>,
    pub(crate) repository: Option<RepositoryField>,
    pub(crate) shipyard: Option<RawReleaseConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RepositoryField {
    Url(String),
    Detailed { url: String },
}

impl RepositoryField {
    fn into_url(self) -> String {
        match self {
            Self::Url(url) | Self::Detailed { url } => url,
        }
    }
}

/// The parts of `package.json` a release needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageManifest {
    pub name: String,
    pub version: Version,
    pub repository: Option<String>,
    pub path: PathBuf,
}

pub(crate) fn read_raw_manifest(path: &Path) -> Result<RawManifest, ProjectError> {
    let content = std::fs::read_to_string(path).map_err(|source| ProjectError::ManifestRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| ProjectError::ManifestParse {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn read_manifest(path: &Path) -> Result<(PackageManifest, ReleaseConfig), ProjectError> {
    let raw = read_raw_manifest(path)?;

    let name = raw.name.ok_or_else(|| ProjectError::MissingField {
        path: path.to_path_buf(),
        field: "name",
    })?;
    let version_str = raw.version.ok_or_else(|| ProjectError::MissingField {
        path: path.to_path_buf(),
        field: "version",
    })?;
    let version = Version::parse(&version_str).map_err(|source| ProjectError::InvalidVersion {
        path: path.to_path_buf(),
        version: version_str.clone(),
        source,
    })?;

    let config = match raw.shipyard {
        Some(raw_config) => ReleaseConfig::from_raw(raw_config, path)?,
        None => ReleaseConfig::default(),
    };

    let manifest = PackageManifest {
        name,
        version,
        repository: raw.repository.map(RepositoryField::into_url),
        path: path.to_path_buf(),
    };

    Ok((manifest, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_manifest(content: &str) -> anyhow::Result<(tempfile::TempDir, PathBuf)> {
        let dir = tempfile::TempDir::new()?;
        let path = dir.path().join("package.json");
        std::fs::write(&path, content)?;
        Ok((dir, path))
    }

    #[test]
    fn reads_name_version_and_string_repository() -> anyhow::Result<()> {
        let (_dir, path) = write_manifest(
            r#"{ "name": "@elastic/eui", "version": "93.1.0", "repository": "https://github.com/elastic/eui" }"#,
        )?;

        let (manifest, config) = read_manifest(&path)?;

        assert_eq!(manifest.name, "@elastic/eui");
        assert_eq!(manifest.version, Version::new(93, 1, 0));
        assert_eq!(
            manifest.repository.as_deref(),
            Some("https://github.com/elastic/eui")
        );
        assert_eq!(config, ReleaseConfig::default());
        Ok(())
    }

    #[test]
    fn reads_object_repository() -> anyhow::Result<()> {
        let (_dir, path) = write_manifest(
            r#"{ "name": "pkg", "version": "1.0.0", "repository": { "type": "git", "url": "git+https://github.com/o/r.git" } }"#,
        )?;

        let (manifest, _) = read_manifest(&path)?;

        assert_eq!(
            manifest.repository.as_deref(),
            Some("git+https://github.com/o/r.git")
        );
        Ok(())
    }

    #[test]
    fn missing_version_is_an_error() -> anyhow::Result<()> {
        let (_dir, path) = write_manifest(r#"{ "name": "pkg" }"#)?;

        let result = read_manifest(&path);

        assert!(matches!(
            result,
            Err(ProjectError::MissingField {
                field: "version",
                ..
            })
        ));
        Ok(())
    }

    #[test]
    fn invalid_version_is_an_error() -> anyhow::Result<()> {
        let (_dir, path) = write_manifest(r#"{ "name": "pkg", "version": "one" }"#)?;

        let result = read_manifest(&path);

        assert!(matches!(result, Err(ProjectError::InvalidVersion { .. })));
        Ok(())
    }

    #[test]
    fn malformed_json_is_an_error() -> anyhow::Result<()> {
        let (_dir, path) = write_manifest("{ not json")?;

        let result = read_manifest(&path);

        assert!(matches!(result, Err(ProjectError::ManifestParse { .. })));
        Ok(())
    }
}
