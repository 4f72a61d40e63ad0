//! Version discovery inside a project directory.
//!
//! A project keeps its structure documents in `phase1-structure/`: numbered versions
//! `v{n}.json` plus an optional `approved.json`.

use std::path::{Path, PathBuf};

use crate::foundation::error::{WirecheckError, WirecheckResult};
use crate::scene::model::Structure;

/// Directory holding the structure documents.
pub const STRUCTURE_DIR: &str = "phase1-structure";
/// File name of the approved document.
pub const APPROVED_FILE: &str = "approved.json";

/// Which document of a project to load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selector {
    /// Highest numbered version; `approved.json` is ignored.
    Latest,
    /// `approved.json`.
    Approved,
    /// `v{n}.json`.
    Version(u32),
}

impl Selector {
    /// Parse `latest`, `approved` or `v{n}`.
    pub fn parse(s: &str) -> WirecheckResult<Self> {
        match s {
            "latest" => Ok(Selector::Latest),
            "approved" => Ok(Selector::Approved),
            _ => parse_version_label(s).map(Selector::Version).ok_or_else(|| {
                WirecheckError::project(format!(
                    "bad selector '{s}', expected latest, approved or v<n>"
                ))
            }),
        }
    }
}

fn parse_version_label(s: &str) -> Option<u32> {
    s.strip_prefix('v')?.parse().ok()
}

/// One numbered version on disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VersionEntry {
    /// The `n` of `v{n}.json`.
    pub number: u32,
    /// Full path.
    pub path: PathBuf,
}

/// A project directory.
#[derive(Clone, Debug)]
pub struct Project {
    root: PathBuf,
}

impl Project {
    /// Project rooted at `root`. Nothing is read until asked.
    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/phase1-structure`.
    pub fn structure_dir(&self) -> PathBuf {
        self.root.join(STRUCTURE_DIR)
    }

    /// Path of `v{n}.json`, whether or not it exists.
    pub fn version_path(&self, n: u32) -> PathBuf {
        self.structure_dir().join(format!("v{n}.json"))
    }

    /// Path of `approved.json`, whether or not it exists.
    pub fn approved_path(&self) -> PathBuf {
        self.structure_dir().join(APPROVED_FILE)
    }

    /// Numbered versions, ascending. Files that are not `v{n}.json` are skipped.
    pub fn versions(&self) -> WirecheckResult<Vec<VersionEntry>> {
        let dir = self.structure_dir();
        let entries = std::fs::read_dir(&dir).map_err(|e| {
            WirecheckError::project(format!("read {}: {e}", dir.display()))
        })?;
        let mut out = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| WirecheckError::project(e.to_string()))?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(number) = path
                .file_stem()
                .and_then(|s| s.to_str())
                .and_then(parse_version_label)
            else {
                continue;
            };
            out.push(VersionEntry { number, path });
        }
        out.sort_by_key(|v| v.number);
        Ok(out)
    }

    /// Highest numbered version.
    pub fn latest(&self) -> WirecheckResult<VersionEntry> {
        self.versions()?.pop().ok_or_else(|| {
            WirecheckError::project(format!(
                "no v<n>.json in {}",
                self.structure_dir().display()
            ))
        })
    }

    /// `true` when `approved.json` exists.
    pub fn has_approved(&self) -> bool {
        self.approved_path().is_file()
    }

    /// Path of the selected document; fails when it does not exist.
    pub fn resolve(&self, selector: Selector) -> WirecheckResult<PathBuf> {
        let path = match selector {
            Selector::Latest => return Ok(self.latest()?.path),
            Selector::Approved => self.approved_path(),
            Selector::Version(n) => self.version_path(n),
        };
        if path.is_file() {
            Ok(path)
        } else {
            Err(WirecheckError::project(format!(
                "{} does not exist",
                path.display()
            )))
        }
    }

    /// Load the selected document. The label is `v{n}` for numbered versions and the
    /// document's own version (or `approved`) for `approved.json`.
    pub fn load(&self, selector: Selector) -> WirecheckResult<ResolvedDoc> {
        let (path, label) = match selector {
            Selector::Latest => {
                let v = self.latest()?;
                (v.path, Some(format!("v{}", v.number)))
            }
            Selector::Version(n) => (self.resolve(selector)?, Some(format!("v{n}"))),
            Selector::Approved => (self.resolve(selector)?, None),
        };
        let doc = Structure::from_path(&path)?;
        let version = match label {
            Some(l) => l,
            None if !doc.version.is_empty() => doc.version.clone(),
            None => "approved".to_owned(),
        };
        tracing::debug!(path = %path.display(), %version, "resolved document");
        Ok(ResolvedDoc { doc, path, version })
    }
}

/// A loaded document and where it came from.
#[derive(Clone, Debug)]
pub struct ResolvedDoc {
    /// The document.
    pub doc: Structure,
    /// File it was read from.
    pub path: PathBuf,
    /// Version label to report.
    pub version: String,
}

/// Load `<project>@<selector>` or a plain file path.
pub fn load_doc_ref(reference: &str) -> WirecheckResult<ResolvedDoc> {
    if let Some((root, sel)) = reference.rsplit_once('@')
        && !root.is_empty()
    {
        return Project::open(root).load(Selector::parse(sel)?);
    }
    let path = PathBuf::from(reference);
    let doc = Structure::from_path(&path)?;
    let version = doc.version.clone();
    Ok(ResolvedDoc { doc, path, version })
}

#[cfg(test)]
#[path = "../../tests/unit/project/discover.rs"]
mod tests;
