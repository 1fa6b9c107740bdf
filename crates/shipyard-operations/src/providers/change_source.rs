use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use shipyard_parse::parse_fragment;
use tracing::debug;

use crate::Result;
use crate::error::OperationError;
use crate::traits::ChangeSource;
use crate::types::CollectedChanges;

const FRAGMENT_EXTENSION: &str = "md";

/// Reads `*.md` fragments from the fragments directory.
///
/// Fragments are usually named after the pull request that added them, so
/// numeric file stems are read in numeric order ahead of any other names.
pub struct FileSystemChangeSource;

impl FileSystemChangeSource {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemChangeSource {
    fn default() -> Self {
        Self::new()
    }
}

fn numeric_stem(path: &Path) -> Option<u64> {
    path.file_stem()?.to_str()?.parse().ok()
}

fn fragment_order(a: &Path, b: &Path) -> Ordering {
    match (numeric_stem(a), numeric_stem(b)) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

impl FileSystemChangeSource {
    fn list_fragments(fragments_dir: &Path) -> Result<Vec<PathBuf>> {
        let entries = match fs::read_dir(fragments_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(OperationError::FragmentList {
                    path: fragments_dir.to_path_buf(),
                    source,
                });
            }
        };

        let mut fragments = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| OperationError::FragmentList {
                path: fragments_dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();

            if path.is_file() && path.extension().is_some_and(|ext| ext == FRAGMENT_EXTENSION) {
                fragments.push(path);
            }
        }

        fragments.sort_by(|a, b| fragment_order(a, b));
        Ok(fragments)
    }
}

impl ChangeSource for FileSystemChangeSource {
    fn collect(&self, fragments_dir: &Path) -> Result<CollectedChanges> {
        let fragments = Self::list_fragments(fragments_dir)?;
        let mut changes = Vec::new();

        for path in &fragments {
            let content =
                fs::read_to_string(path).map_err(|source| OperationError::FragmentRead {
                    path: path.clone(),
                    source,
                })?;
            let parsed = parse_fragment(&content).map_err(|source| {
                OperationError::FragmentParse {
                    path: path.clone(),
                    source,
                }
            })?;
            debug!(fragment = %path.display(), changes = parsed.len(), "read fragment");
            changes.extend(parsed);
        }

        Ok(CollectedChanges { changes, fragments })
    }
}
