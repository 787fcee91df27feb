//! Category filter and free-text search over the catalog.
//!
//! Both stages are plain predicates over a project, so applying them in either
//! order selects the same projects; [`apply`] runs the filter first only
//! because it is cheaper. Results keep catalog order.

use crate::types::{Project, ProjectType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Active category filter (one filter button is always selected).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Filter {
    #[default]
    All,
    OpenSource,
    Kind(ProjectType),
}

impl Filter {
    /// Filter buttons in display order.
    pub const BUTTONS: [Filter; 5] = [
        Filter::All,
        Filter::Kind(ProjectType::Unity),
        Filter::Kind(ProjectType::Dotnet),
        Filter::Kind(ProjectType::Other),
        Filter::OpenSource,
    ];

    pub fn parse(token: &str) -> Option<Self> {
        match token.trim() {
            "all" => Some(Filter::All),
            "opensource" => Some(Filter::OpenSource),
            other => ProjectType::parse(other).map(Filter::Kind),
        }
    }

    /// Token used in the `data-filter` attribute.
    pub fn token(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::OpenSource => "opensource",
            Filter::Kind(kind) => kind.as_str(),
        }
    }

    /// Translation key of the button label.
    pub fn label_key(self) -> &'static str {
        match self {
            Filter::All => "projects.filters.all",
            Filter::OpenSource => "projects.filters.opensource",
            Filter::Kind(ProjectType::Unity) => "projects.filters.unity",
            Filter::Kind(ProjectType::Dotnet) => "projects.filters.dotnet",
            Filter::Kind(ProjectType::Other) => "projects.filters.other",
        }
    }

    pub fn matches(self, project: &Project) -> bool {
        match self {
            Filter::All => true,
            Filter::OpenSource => project.opensource,
            Filter::Kind(kind) => project.kind == kind,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl From<Filter> for String {
    fn from(filter: Filter) -> Self {
        filter.token().to_string()
    }
}

impl TryFrom<String> for Filter {
    type Error = String;

    fn try_from(token: String) -> Result<Self, Self::Error> {
        Filter::parse(&token).ok_or_else(|| format!("unknown filter: {token}"))
    }
}

/// A normalized search needle. Blank input means "no search".
///
/// Surrounding whitespace is trimmed before matching, so `" audit "` finds
/// the same projects as `"audit"`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery(Option<String>);

impl SearchQuery {
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Self(None)
        } else {
            Self(Some(trimmed.to_lowercase()))
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    pub fn needle(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Name, description or any technology contains the needle.
    pub fn matches(&self, project: &Project) -> bool {
        let Some(needle) = self.needle() else {
            return true;
        };
        project.name.to_lowercase().contains(needle)
            || project.description.to_lowercase().contains(needle)
            || project
                .technologies
                .iter()
                .any(|tech| tech.to_lowercase().contains(needle))
    }
}

/// Catalog positions of the projects selected by `filter` and `query`.
pub fn apply(projects: &[Project], filter: Filter, query: &SearchQuery) -> Vec<usize> {
    projects
        .iter()
        .enumerate()
        .filter(|(_, p)| filter.matches(p))
        .filter(|(_, p)| query.matches(p))
        .map(|(pos, _)| pos)
        .collect()
}
