//! Snapshot loader
//!
//! Snapshots are named `k8s_<tag>_swagger.json.gz`. Only names whose tag is a
//! `v`-prefixed dotted numeric version take part in version selection.

use std::cmp::Ordering;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, info, instrument};

use crate::{
    error::{Error, Result},
    output::read_gzip,
    types::{parse_document, Document},
};

fn file_name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^k8s_v([\d.]+)_swagger\.json\.gz$").expect("snapshot file name regex"))
}

/// File name under which the snapshot for `tag` is stored
pub fn snapshot_file_name(tag: &str) -> String {
    format!("k8s_{tag}_swagger.json.gz")
}

/// Dotted numeric version, compared component-wise with missing parts as 0
#[derive(Debug, Clone, Eq)]
pub struct SnapshotVersion(Vec<u64>);

impl SnapshotVersion {
    pub fn parse(raw: &str) -> Option<Self> {
        raw.split('.')
            .map(|part| part.parse::<u64>().ok())
            .collect::<Option<Vec<_>>>()
            .map(SnapshotVersion)
    }

    pub fn components(&self) -> &[u64] {
        &self.0
    }
}

impl Ord for SnapshotVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.0.len().max(other.0.len());
        (0..len)
            .map(|i| {
                let a = self.0.get(i).copied().unwrap_or(0);
                let b = other.0.get(i).copied().unwrap_or(0);
                a.cmp(&b)
            })
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for SnapshotVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SnapshotVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl fmt::Display for SnapshotVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(u64::to_string).collect();
        write!(f, "v{}", parts.join("."))
    }
}

/// A decoded snapshot
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub version: SnapshotVersion,
    pub path: PathBuf,
    pub document: Document,
}

/// Lists the versioned snapshots in `dir`, ignoring unrelated files.
pub fn list_snapshots(dir: impl AsRef<Path>) -> Result<Vec<(SnapshotVersion, PathBuf)>> {
    let mut found = Vec::new();
    for entry in fs::read_dir(dir.as_ref())? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let Some(captures) = file_name_regex().captures(name) else {
            continue;
        };
        let raw = &captures[1];
        let version = SnapshotVersion::parse(raw).ok_or_else(|| Error::InvalidVersion {
            path: path.clone(),
            version: raw.to_string(),
        })?;
        debug!("Found snapshot {} at {}", version, path.display());
        found.push((version, path));
    }
    Ok(found)
}

/// Loads the snapshot with the highest version in `dir`.
///
/// Equal versions (`v1.20` and `v1.20.0`) resolve to the one with more
/// components, then to the greater path, independent of directory order.
///
/// # Errors
///
/// [`Error::NoSnapshot`] when no file matches, [`Error::InvalidVersion`]
/// for a matching name with an unparsable version, and I/O or decode errors
/// from reading the chosen file.
#[instrument(skip(dir), fields(dir = %dir.as_ref().display()))]
pub fn load_most_recent(dir: impl AsRef<Path>) -> Result<Snapshot> {
    let dir = dir.as_ref();
    let (version, path) = list_snapshots(dir)?
        .into_iter()
        .max_by(|a, b| {
            a.0.cmp(&b.0)
                .then_with(|| a.0.components().len().cmp(&b.0.components().len()))
                .then_with(|| a.1.cmp(&b.1))
        })
        .ok_or_else(|| Error::NoSnapshot(dir.to_path_buf()))?;

    info!("Loading snapshot {} from {}", version, path.display());
    let contents = read_gzip(&path)?;
    let document = parse_document(&contents)?;
    Ok(Snapshot { version, path, document })
}
