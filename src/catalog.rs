//! The project catalog store.
//!
//! Holds the full project list exactly as the catalog file orders it, plus an
//! id index for modal lookups. The catalog is loaded once and never mutated;
//! everything derived from it (filtered subsets, highlight slides, media
//! sequences) is recomputed by the components that need it.
//!
//! ## Candidate paths
//!
//! Sites get deployed under a domain root, under a sub-path, or opened from
//! disk, so the catalog location is not fixed. [`load_first`] walks an
//! ordered candidate list and takes the first entry that both resolves and
//! parses into the catalog shape:
//!
//! ```text
//! assets/projects/projects.json   ← tried first
//! projects.json                   ← tried if the first is missing or invalid
//! ```

use crate::types::{CatalogDocument, Project};
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Duplicate project id: {0}")]
    DuplicateId(String),
    #[error("No usable catalog among {tried} candidate(s); last error: {last}")]
    NoUsableCandidate { tried: usize, last: String },
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    projects: Vec<Project>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids.
    pub fn new(projects: Vec<Project>) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(projects.len());
        for (pos, project) in projects.iter().enumerate() {
            if by_id.insert(project.id.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateId(project.id.clone()));
            }
        }
        Ok(Self { projects, by_id })
    }

    /// Parse a catalog document (`{"projects": [...]}`).
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDocument = serde_json::from_str(json)?;
        Self::new(doc.projects)
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Project> {
        self.by_id.get(id).map(|&pos| &self.projects[pos])
    }

    /// Catalog position of a project id.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    /// Highlighted projects in catalog order.
    pub fn highlighted(&self) -> Vec<&Project> {
        self.projects.iter().filter(|p| p.highlight).collect()
    }

    /// Every technology tag across the catalog, first occurrence wins.
    pub fn technologies(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        self.projects
            .iter()
            .flat_map(|p| p.technologies.iter())
            .map(String::as_str)
            .filter(|tech| seen.insert(tech.to_lowercase()))
            .collect()
    }

    pub fn to_document(&self) -> CatalogDocument {
        CatalogDocument {
            projects: self.projects.clone(),
        }
    }
}

/// Try each candidate in order and keep the first that reads and parses.
///
/// `read` resolves a candidate to its text; any error (missing file, HTTP
/// failure) moves on to the next candidate, as does a parse or validation
/// failure.
pub fn load_first<I, S, F, E>(candidates: I, mut read: F) -> Result<(String, Catalog), CatalogError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    F: FnMut(&str) -> Result<String, E>,
    E: std::fmt::Display,
{
    let mut tried = 0;
    let mut last = String::from("no candidates configured");
    for candidate in candidates {
        let candidate = candidate.as_ref();
        tried += 1;
        let text = match read(candidate) {
            Ok(text) => text,
            Err(e) => {
                debug!(candidate, error = %e, "catalog candidate did not resolve");
                last = format!("{candidate}: {e}");
                continue;
            }
        };
        match Catalog::from_json(&text) {
            Ok(catalog) => {
                debug!(candidate, projects = catalog.len(), "catalog loaded");
                return Ok((candidate.to_string(), catalog));
            }
            Err(e) => {
                debug!(candidate, error = %e, "catalog candidate did not parse");
                last = format!("{candidate}: {e}");
            }
        }
    }
    Err(CatalogError::NoUsableCandidate { tried, last })
}

/// Filesystem specialisation of [`load_first`]: candidates are relative to `root`.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_from_dir(
    root: &std::path::Path,
    candidates: &[String],
) -> Result<(String, Catalog), CatalogError> {
    load_first(candidates, |candidate| {
        std::fs::read_to_string(root.join(candidate.trim_start_matches("./").trim_start_matches('/')))
    })
}
