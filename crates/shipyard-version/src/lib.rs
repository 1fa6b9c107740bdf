use semver::{BuildMetadata, Prerelease, Version};
use shipyard_core::BumpType;

/// Applies `bump_type` to `version` the way `npm version <type>` does.
///
/// A pre-release whose lower components are already zeroed for the
/// requested level is promoted in place: `2.0.0-rc.1` bumped major is
/// `2.0.0`, and `1.2.3-beta.1` bumped patch is `1.2.3`. Build metadata is
/// always dropped.
#[must_use]
pub fn bump_version(version: &Version, bump_type: BumpType) -> Version {
    let promotes = !version.pre.is_empty()
        && match bump_type {
            BumpType::Major => version.minor == 0 && version.patch == 0,
            BumpType::Minor => version.patch == 0,
            BumpType::Patch => true,
        };

    let (major, minor, patch) = match (bump_type, promotes) {
        (_, true) => (version.major, version.minor, version.patch),
        (BumpType::Major, false) => (version.major + 1, 0, 0),
        (BumpType::Minor, false) => (version.major, version.minor + 1, 0),
        (BumpType::Patch, false) => (version.major, version.minor, version.patch + 1),
    };

    Version {
        major,
        minor,
        patch,
        pre: Prerelease::EMPTY,
        build: BuildMetadata::EMPTY,
    }
}

/// Tag name `npm version` creates for `version`.
#[must_use]
pub fn version_tag(version: &Version) -> String {
    format!("v{version}")
}
