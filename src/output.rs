//! CLI output formatting for `build` and `check`.
//!
//! Output is information-first: every project leads with its positional index
//! and name, with the id and media details as indented context lines. The same
//! header helper is used by both commands so a project reads the same way in
//! each.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Catalog
//!     Source: assets/projects/projects.json
//! 001 Space Miner [Unity Game] ★
//!     id: space-miner, 4 media
//! 002 Ledger [.NET]
//!     id: ledger, 1 media
//!
//! Locales
//!     en, tr
//!
//! Warnings
//!     tr: missing projects.showLess
//!     missing CV document assets/docs/pdf/CV_TR_DotNet_Developer.pdf
//!     No wasm runtime shipped (set runtime.wasm_dir)
//!
//! 5 projects (2 featured), 3 warnings
//! ```
//!
//! ## Build
//!
//! ```text
//! Catalog ← assets/projects/projects.json
//!     index.html
//!     data/projects.json
//!     ...
//! Copied 12 asset files
//! Warning: No wasm runtime shipped (set runtime.wasm_dir)
//!
//! Generated 5 projects (2 featured) in 2 locales → dist
//! ```
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout.

use crate::generate::{BuildSummary, CheckReport, ProjectSummary};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Project header: index, name, type label and a star when featured.
///
/// ```text
/// 001 Space Miner [Unity Game] ★
/// ```
fn project_header(index: usize, project: &ProjectSummary) -> String {
    let star = if project.highlight { " ★" } else { "" };
    format!(
        "{} {} [{}]{}",
        format_index(index),
        project.name,
        project.kind.short_label(),
        star
    )
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{} {}", n, one)
    } else {
        format!("{} {}", n, many)
    }
}

// ============================================================================
// check
// ============================================================================

pub fn format_check_output(report: &CheckReport) -> Vec<String> {
    let mut lines = vec![
        "Catalog".to_string(),
        format!("    Source: {}", report.catalog_source),
    ];

    for (i, project) in report.projects.iter().enumerate() {
        lines.push(project_header(i + 1, project));
        lines.push(format!(
            "    id: {}, {}",
            project.id,
            plural(project.media, "media", "media")
        ));
    }

    lines.push(String::new());
    lines.push("Locales".to_string());
    if report.locales.is_empty() {
        lines.push("    (no translation table)".to_string());
    } else {
        lines.push(format!("    {}", report.locales.join(", ")));
    }

    if report.warning_count() > 0 {
        lines.push(String::new());
        lines.push("Warnings".to_string());
        for (locale, keys) in &report.missing_keys {
            for key in keys {
                lines.push(format!("    {}: missing {}", locale, key));
            }
        }
        for path in &report.missing_cv {
            lines.push(format!("    missing CV document {}", path));
        }
        for (id, path) in &report.missing_media {
            lines.push(format!("    {}: missing media {}", id, path));
        }
        if let Some(gap) = &report.runtime_gap {
            lines.push(format!("    {}", gap));
        }
    }

    let featured = report.projects.iter().filter(|p| p.highlight).count();
    lines.push(String::new());
    lines.push(format!(
        "{} ({} featured), {}",
        plural(report.projects.len(), "project", "projects"),
        featured,
        plural(report.warning_count(), "warning", "warnings")
    ));
    lines
}

pub fn print_check_output(report: &CheckReport) {
    for line in format_check_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// build
// ============================================================================

pub fn format_build_output(summary: &BuildSummary) -> Vec<String> {
    let mut lines = vec![format!("Catalog ← {}", summary.catalog_source)];
    for file in &summary.files {
        lines.push(format!("    {}", file));
    }
    if summary.assets_copied > 0 {
        lines.push(format!(
            "Copied {}",
            plural(summary.assets_copied, "asset file", "asset files")
        ));
    }
    if summary.wasm_copied {
        lines.push("Copied wasm runtime → pkg/".to_string());
    }
    if let Some(gap) = &summary.runtime_gap {
        lines.push(format!("Warning: {}", gap));
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {} ({} featured) in {} → {}",
        plural(summary.projects, "project", "projects"),
        summary.highlighted,
        plural(summary.locales.len(), "locale", "locales"),
        summary.output_dir.display()
    ));
    lines
}

pub fn print_build_output(summary: &BuildSummary) {
    for line in format_build_output(summary) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProjectType;
    use std::path::PathBuf;

    fn summary(name: &str, highlight: bool) -> ProjectSummary {
        ProjectSummary {
            id: name.to_lowercase().replace(' ', "-"),
            name: name.to_string(),
            kind: ProjectType::Unity,
            highlight,
            media: 3,
        }
    }

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(100), "100");
    }

    #[test]
    fn project_header_marks_featured() {
        assert_eq!(
            project_header(1, &summary("Space Miner", true)),
            "001 Space Miner [Unity Game] ★"
        );
        assert_eq!(project_header(2, &summary("Ledger", false)), "002 Ledger [Unity Game]");
    }

    #[test]
    fn check_output_lists_projects_and_totals() {
        let report = CheckReport {
            catalog_source: "assets/projects/projects.json".into(),
            projects: vec![summary("Space Miner", true), summary("Ledger", false)],
            locales: vec!["en".into(), "tr".into()],
            ..Default::default()
        };
        let lines = format_check_output(&report);
        assert_eq!(lines[1], "    Source: assets/projects/projects.json");
        assert_eq!(lines[3], "    id: space-miner, 3 media");
        assert!(lines.contains(&"    en, tr".to_string()));
        assert!(!lines.contains(&"Warnings".to_string()));
        assert_eq!(lines.last().unwrap(), "2 projects (1 featured), 0 warnings");
    }

    #[test]
    fn check_output_lists_warnings() {
        let report = CheckReport {
            catalog_source: "projects.json".into(),
            projects: vec![summary("Solo", false)],
            missing_keys: vec![("tr".into(), vec!["projects.showLess".into()])],
            missing_cv: vec!["assets/docs/pdf/CV_TR_DotNet_Developer.pdf".into()],
            missing_media: vec![("solo".into(), "assets/solo.png".into())],
            ..Default::default()
        };
        let lines = format_check_output(&report);
        assert!(lines.contains(&"    tr: missing projects.showLess".to_string()));
        assert!(lines.contains(&"    solo: missing media assets/solo.png".to_string()));
        assert!(lines.contains(&"    (no translation table)".to_string()));
        assert_eq!(lines.last().unwrap(), "1 project (0 featured), 3 warnings");
    }

    #[test]
    fn build_output_ends_with_totals() {
        let summary = BuildSummary {
            output_dir: PathBuf::from("dist"),
            catalog_source: "assets/projects/projects.json".into(),
            projects: 5,
            highlighted: 2,
            locales: vec!["en".into(), "tr".into()],
            assets_copied: 1,
            wasm_copied: true,
            runtime_gap: None,
            files: vec!["index.html".into()],
        };
        let lines = format_build_output(&summary);
        assert_eq!(lines[0], "Catalog ← assets/projects/projects.json");
        assert_eq!(lines[1], "    index.html");
        assert_eq!(lines[2], "Copied 1 asset file");
        assert_eq!(lines[3], "Copied wasm runtime → pkg/");
        assert_eq!(lines.last().unwrap(), "Generated 5 projects (2 featured) in 2 locales → dist");
        assert!(!lines.iter().any(|l| l.starts_with("Warning")));
    }

    #[test]
    fn build_output_warns_without_runtime() {
        let summary = BuildSummary {
            output_dir: PathBuf::from("dist"),
            catalog_source: "projects.json".into(),
            projects: 1,
            highlighted: 0,
            locales: vec![],
            assets_copied: 0,
            wasm_copied: false,
            runtime_gap: Some("No wasm runtime shipped (set runtime.wasm_dir)".into()),
            files: vec!["index.html".into()],
        };
        let lines = format_build_output(&summary);
        assert!(lines.contains(&"Warning: No wasm runtime shipped (set runtime.wasm_dir)".to_string()));
        assert!(!lines.contains(&"Copied wasm runtime → pkg/".to_string()));
    }
}
