//! Shared test utilities for the simple-folio test suite.
//!
//! Provides project builders, a small inline translation table, and a copy of
//! the `fixtures/content` tree for tests that touch the filesystem.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let mut p = project("space-miner");
//! p.highlight = true;
//! let catalog = Catalog::new(vec![p, project("ledger")]).unwrap();
//!
//! let tmp = setup_fixtures();
//! let (_, loaded) = load_from_dir(tmp.path(), &["assets/projects/projects.json".into()]).unwrap();
//! assert_eq!(find_project(&loaded, "space-miner").name, "Space Miner");
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::catalog::Catalog;
use crate::types::{CatalogDocument, Project, ProjectType};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// =========================================================================
// Builders
// =========================================================================

/// A bare project: name equals the id, no media, no links, not highlighted.
pub fn project(id: &str) -> Project {
    Project {
        id: id.to_string(),
        name: id.to_string(),
        category: "Tools".to_string(),
        kind: ProjectType::Other,
        description: format!("A project called {id}"),
        technologies: Vec::new(),
        image: None,
        screenshots: Vec::new(),
        trailer: None,
        github: None,
        playstore: None,
        highlight: false,
        opensource: false,
        features: Vec::new(),
    }
}

/// Serialize projects as a catalog document.
pub fn catalog_json(projects: &[Project]) -> String {
    serde_json::to_string(&CatalogDocument {
        projects: projects.to_vec(),
    })
    .unwrap()
}

/// Two locales; `tr` lacks `projects.showLess`.
pub fn translations_json() -> &'static str {
    r#"{
        "en": {
            "nav": { "home": "Home", "projects": "Projects" },
            "projects": {
                "filters": {
                    "all": "All",
                    "unity": "Unity",
                    "dotnet": ".NET",
                    "other": "Other",
                    "opensource": "Open Source"
                },
                "viewAll": "View All Projects",
                "showLess": "Show Less"
            }
        },
        "tr": {
            "nav": { "home": "Ana Sayfa", "projects": "Projeler" },
            "projects": {
                "filters": {
                    "all": "Tümü",
                    "unity": "Unity",
                    "dotnet": ".NET",
                    "other": "Diğer",
                    "opensource": "Açık Kaynak"
                },
                "viewAll": "Tüm Projeler"
            }
        }
    }"#
}

// =========================================================================
// Lookups: panic with a clear message on miss
// =========================================================================

/// Find a project by id. Panics if not found.
pub fn find_project<'a>(catalog: &'a Catalog, id: &str) -> &'a Project {
    catalog.get(id).unwrap_or_else(|| {
        let ids: Vec<&str> = catalog.projects().iter().map(|p| p.id.as_str()).collect();
        panic!("project '{id}' not found. Available: {ids:?}")
    })
}

/// All project ids in catalog order.
pub fn project_ids(catalog: &Catalog) -> Vec<&str> {
    catalog.projects().iter().map(|p| p.id.as_str()).collect()
}
