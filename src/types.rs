//! Shared types for the project catalog.
//!
//! These types are deserialized from the catalog JSON at build time and again
//! by the page runtime, and serialized back out as the normalized
//! `data/projects.json`. Field names follow the catalog file format.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Project type tag. Drives the filter buttons and the card icons.
///
/// Unknown or missing values deserialize to [`ProjectType::Other`], so a
/// catalog entry with a typo still renders instead of failing the build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Unity,
    #[serde(alias = ".net")]
    Dotnet,
    #[default]
    #[serde(other)]
    Other,
}

impl ProjectType {
    pub const ALL: [ProjectType; 3] = [ProjectType::Unity, ProjectType::Dotnet, ProjectType::Other];

    /// Token used in `data-filter` attributes and in the catalog file.
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectType::Unity => "unity",
            ProjectType::Dotnet => "dotnet",
            ProjectType::Other => "other",
        }
    }

    /// Font Awesome class for the type badge.
    pub fn badge_icon(self) -> &'static str {
        match self {
            ProjectType::Unity => "fa-gamepad",
            ProjectType::Dotnet => "fa-code",
            ProjectType::Other => "fa-laptop-code",
        }
    }

    /// Short label shown on highlight cards.
    pub fn short_label(self) -> &'static str {
        match self {
            ProjectType::Unity => "Unity Game",
            ProjectType::Dotnet => ".NET",
            ProjectType::Other => "Other",
        }
    }

    /// Long label shown in the detail modal.
    pub fn long_label(self) -> &'static str {
        match self {
            ProjectType::Unity => "Unity Game",
            ProjectType::Dotnet => ".NET Application",
            ProjectType::Other => "Other Project",
        }
    }

    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "unity" => Some(ProjectType::Unity),
            "dotnet" | ".net" => Some(ProjectType::Dotnet),
            "other" => Some(ProjectType::Other),
            _ => None,
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single catalog entry.
///
/// Everything except `id`, `name`, `category` and `description` is optional in
/// the catalog file. Missing collections become empty and missing links stay
/// `None`; the renderers leave out the matching UI instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(rename = "type", default)]
    pub kind: ProjectType,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    /// Cover image shown on cards and as the carousel backdrop.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub screenshots: Vec<String>,
    /// Trailer URL as written by the author (watch/short link), not the embed URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailer: Option<String>,
    /// Source repository link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    /// Store listing link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playstore: Option<String>,
    #[serde(default, alias = "highlighted")]
    pub highlight: bool,
    #[serde(default, alias = "openSource")]
    pub opensource: bool,
    #[serde(default)]
    pub features: Vec<String>,
}

impl Project {
    /// Image used for the grid card: the cover, else the first screenshot.
    pub fn card_image(&self) -> Option<&str> {
        self.image
            .as_deref()
            .or_else(|| self.screenshots.first().map(String::as_str))
    }

    pub fn has_links(&self) -> bool {
        self.github.is_some() || self.playstore.is_some()
    }
}

/// Top-level shape of the catalog file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub projects: Vec<Project>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_project_uses_defaults() {
        let json = r#"{"id":"a","name":"A","category":"Game","description":"d"}"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.kind, ProjectType::Other);
        assert!(project.technologies.is_empty());
        assert!(project.screenshots.is_empty());
        assert!(!project.highlight);
        assert!(!project.opensource);
        assert!(project.trailer.is_none());
    }

    #[test]
    fn dotnet_alias_is_accepted() {
        let json = r#"{"id":"a","name":"A","category":"c","type":".net","description":"d"}"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.kind, ProjectType::Dotnet);
    }

    #[test]
    fn unknown_type_becomes_other() {
        let json = r#"{"id":"a","name":"A","category":"c","type":"godot","description":"d"}"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.kind, ProjectType::Other);
    }

    #[test]
    fn card_image_falls_back_to_first_screenshot() {
        let json = r#"{"id":"a","name":"A","category":"c","description":"d",
            "screenshots":["s1.png","s2.png"]}"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.card_image(), Some("s1.png"));
    }

    #[test]
    fn serializes_type_under_original_key() {
        let json = r#"{"id":"a","name":"A","category":"c","type":"unity","description":"d"}"#;
        let project: Project = serde_json::from_str(json).unwrap();
        let out = serde_json::to_value(&project).unwrap();
        assert_eq!(out["type"], "unity");
        assert!(out.get("trailer").is_none());
    }

    #[test]
    fn parse_filter_tokens() {
        assert_eq!(ProjectType::parse("Unity"), Some(ProjectType::Unity));
        assert_eq!(ProjectType::parse(".net"), Some(ProjectType::Dotnet));
        assert_eq!(ProjectType::parse("all"), None);
    }
}
