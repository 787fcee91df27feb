//! HTML site generation.
//!
//! Reads the content directory and writes a single-page portfolio. Every
//! element the page runtime will ever show is rendered here, once: all project
//! cards (the ones beyond the grid cap start hidden), every carousel slide,
//! and one `<template>` per project holding its detail-modal body. The
//! runtime only toggles visibility and swaps templates into the modal.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html                 # The page
//! ├── folio.js                   # Host glue: events in, effects out
//! ├── data/
//! │   ├── projects.json          # Normalized catalog
//! │   └── translations.json      # Translation table
//! ├── assets/                    # Copied from content/assets
//! └── pkg/                       # wasm runtime (when runtime.wasm_dir is set)
//! ```
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time:
//! - `static/style.css`: Base styles (theme colors injected from config)
//! - `static/folio.js`: Event delegation and effect application
//!
//! `folio.js` and the data files are referenced with a `?v=` content hash so
//! a redeploy never serves stale copies from the browser cache.

use crate::app::RuntimeConfig;
use crate::catalog::{self, Catalog, CatalogError};
use crate::config::{self, ConfigError, SiteConfig};
use crate::cv::CvTrack;
use crate::filter::Filter;
use crate::i18n::{self, I18nError, Translations};
use crate::media::{self, MediaItem, Orientation};
use crate::types::{Project, ProjectType};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    I18n(#[from] I18nError),
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

pub const CATALOG_OUT: &str = "data/projects.json";
pub const TRANSLATIONS_OUT: &str = "data/translations.json";
pub const SCRIPT_OUT: &str = "folio.js";
/// Where `runtime.wasm_dir` is copied in the output.
pub const WASM_OUT: &str = "pkg";

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/folio.js");
const FONT_AWESOME: &str = "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";

/// Everything loaded from the content directory.
#[derive(Debug)]
pub struct Site {
    pub config: SiteConfig,
    pub catalog: Catalog,
    /// Catalog candidate that was used.
    pub catalog_source: String,
    pub translations: Translations,
    /// Translation table as read, written back out unchanged.
    pub translations_raw: Option<String>,
    /// Rendered `about.md`, if present.
    pub about_html: Option<String>,
    /// Orientation of local screenshots, keyed by their catalog path.
    pub orientations: HashMap<String, Orientation>,
}

/// What `build` wrote.
#[derive(Debug)]
pub struct BuildSummary {
    pub output_dir: PathBuf,
    pub catalog_source: String,
    pub projects: usize,
    pub highlighted: usize,
    pub locales: Vec<String>,
    pub assets_copied: usize,
    pub wasm_copied: bool,
    /// Why the page ships without its interactive runtime, if it does.
    pub runtime_gap: Option<String>,
    pub files: Vec<String>,
}

/// One catalog entry as listed by `check`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSummary {
    pub id: String,
    pub name: String,
    pub kind: ProjectType,
    pub highlight: bool,
    /// Length of the detail-modal media sequence.
    pub media: usize,
}

/// Findings of `check`. Warnings only; hard failures are errors.
#[derive(Debug, Default)]
pub struct CheckReport {
    pub catalog_source: String,
    pub projects: Vec<ProjectSummary>,
    pub locales: Vec<String>,
    /// Per locale, key paths the default locale has and it lacks.
    pub missing_keys: Vec<(String, Vec<String>)>,
    pub missing_cv: Vec<String>,
    /// `(project id, path)` of local media that does not exist.
    pub missing_media: Vec<(String, String)>,
    pub runtime_gap: Option<String>,
}

impl CheckReport {
    pub fn warning_count(&self) -> usize {
        self.missing_keys.iter().map(|(_, keys)| keys.len()).sum::<usize>()
            + self.missing_cv.len()
            + self.missing_media.len()
            + usize::from(self.runtime_gap.is_some())
    }
}

// ============================================================================
// Loading
// ============================================================================

fn is_remote(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://") || path.starts_with("//")
}

fn local_path(root: &Path, path: &str) -> PathBuf {
    root.join(path.trim_start_matches("./").trim_start_matches('/'))
}

/// Without the wasm runtime the page is static: no filters, search, carousel,
/// modal, locale switch or CV viewer.
fn wasm_runtime_gap(source: &Path, config: &SiteConfig) -> Option<String> {
    match &config.runtime.wasm_dir {
        None => Some("No wasm runtime shipped (set runtime.wasm_dir)".to_string()),
        Some(dir) if !local_path(source, dir).is_dir() => Some(format!(
            "No wasm runtime shipped (runtime.wasm_dir {dir} does not exist)"
        )),
        Some(_) => None,
    }
}

/// Load config, catalog, translations and about text from `source`.
pub fn load_site(source: &Path) -> Result<Site, GenerateError> {
    let config = config::load_config(source)?;
    let (catalog_source, catalog) = catalog::load_from_dir(source, &config.data.projects)?;
    info!(source = %catalog_source, projects = catalog.len(), "catalog loaded");

    let translations_path = local_path(source, &config.data.translations);
    let (translations, translations_raw) = if translations_path.exists() {
        let (table, raw) = i18n::load_translations(&translations_path)?;
        (table, Some(raw))
    } else {
        warn!(path = %translations_path.display(), "translation table not found, page stays in markup language");
        (Translations::default(), None)
    };

    let about_path = source.join("about.md");
    let about_html = if about_path.exists() {
        let markdown = fs::read_to_string(&about_path)?;
        let mut body = String::new();
        md_html::push_html(&mut body, Parser::new(&markdown));
        Some(body)
    } else {
        None
    };

    let orientations = probe_orientations(source, &catalog);

    Ok(Site {
        config,
        catalog,
        catalog_source,
        translations,
        translations_raw,
        about_html,
        orientations,
    })
}

/// Read the dimensions of every local screenshot. Unreadable files get no hint;
/// the runtime still measures them once loaded.
fn probe_orientations(source: &Path, catalog: &Catalog) -> HashMap<String, Orientation> {
    let mut found = HashMap::new();
    for shot in catalog.projects().iter().flat_map(|p| &p.screenshots) {
        if is_remote(shot) || found.contains_key(shot) {
            continue;
        }
        match image::image_dimensions(local_path(source, shot)) {
            Ok((w, h)) => {
                found.insert(shot.clone(), Orientation::from_size(w, h));
            }
            Err(e) => debug!(path = %shot, error = %e, "no orientation hint"),
        }
    }
    found
}

// ============================================================================
// Build
// ============================================================================

/// Short content hash used as a cache-busting query value.
pub fn fingerprint(bytes: &[u8]) -> String {
    let digest = format!("{:x}", Sha256::digest(bytes));
    digest[..10].to_string()
}

pub fn build(source: &Path, output_dir: &Path) -> Result<BuildSummary, GenerateError> {
    let site = load_site(source)?;
    fs::create_dir_all(output_dir.join("data"))?;
    let mut files = Vec::new();

    let catalog_json = serde_json::to_string_pretty(&site.catalog.to_document())?;
    fs::write(output_dir.join(CATALOG_OUT), &catalog_json)?;
    files.push(CATALOG_OUT.to_string());

    let translations_json = site.translations_raw.as_deref().unwrap_or("{}");
    fs::write(output_dir.join(TRANSLATIONS_OUT), translations_json)?;
    files.push(TRANSLATIONS_OUT.to_string());

    fs::write(output_dir.join(SCRIPT_OUT), JS)?;
    files.push(SCRIPT_OUT.to_string());

    let mut runtime = site.config.runtime_config();
    if let Some(first) = runtime.catalog_candidates.first_mut() {
        *first = format!("{CATALOG_OUT}?v={}", fingerprint(catalog_json.as_bytes()));
    }
    runtime.translations_url = format!(
        "{TRANSLATIONS_OUT}?v={}",
        fingerprint(translations_json.as_bytes())
    );
    let script_src = format!("{SCRIPT_OUT}?v={}", fingerprint(JS.as_bytes()));

    let page = render_page(&site, &runtime, &script_src)?;
    fs::write(output_dir.join("index.html"), page.into_string())?;
    files.push("index.html".to_string());

    let assets_copied = copy_tree(&source.join("assets"), &output_dir.join("assets"))?;

    let runtime_gap = wasm_runtime_gap(source, &site.config);
    let wasm_copied = match (&runtime_gap, &site.config.runtime.wasm_dir) {
        (None, Some(dir)) => {
            copy_tree(&local_path(source, dir), &output_dir.join(WASM_OUT))?;
            true
        }
        _ => false,
    };
    if let Some(gap) = &runtime_gap {
        warn!("{gap}; the page will not be interactive");
    }

    info!(output = %output_dir.display(), "site generated");
    Ok(BuildSummary {
        output_dir: output_dir.to_path_buf(),
        catalog_source: site.catalog_source,
        projects: site.catalog.len(),
        highlighted: site.catalog.highlighted().len(),
        locales: site.translations.locales().map(str::to_string).collect(),
        assets_copied,
        wasm_copied,
        runtime_gap,
        files,
    })
}

/// Copy every file under `src` into `dst`, keeping relative paths.
/// A missing `src` copies nothing.
fn copy_tree(src: &Path, dst: &Path) -> Result<usize, GenerateError> {
    if !src.is_dir() {
        return Ok(0);
    }
    let mut copied = 0;
    for entry in WalkDir::new(src) {
        let entry = entry?;
        let Ok(relative) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}

// ============================================================================
// Check
// ============================================================================

pub fn check(source: &Path) -> Result<CheckReport, GenerateError> {
    let site = load_site(source)?;
    let default_locale = site.config.i18n.default_locale.as_str();

    let locales: Vec<String> = site.translations.locales().map(str::to_string).collect();
    let missing_keys = locales
        .iter()
        .filter(|locale| locale.as_str() != default_locale)
        .map(|locale| (locale.clone(), site.translations.missing_keys(locale, default_locale)))
        .filter(|(_, keys)| !keys.is_empty())
        .collect();

    let missing_cv = site
        .config
        .cv_paths()
        .all_documents()
        .into_iter()
        .flat_map(|(_, html, pdf)| [html, pdf])
        .filter(|path| !local_path(source, path).exists())
        .collect();

    let mut missing_media = Vec::new();
    for project in site.catalog.projects() {
        for path in project.image.iter().chain(&project.screenshots) {
            if !is_remote(path) && !local_path(source, path).exists() {
                missing_media.push((project.id.clone(), path.clone()));
            }
        }
    }

    let projects = site
        .catalog
        .projects()
        .iter()
        .map(|p| ProjectSummary {
            id: p.id.clone(),
            name: p.name.clone(),
            kind: p.kind,
            highlight: p.highlight,
            media: media::sequence(p).len(),
        })
        .collect();

    Ok(CheckReport {
        catalog_source: site.catalog_source,
        projects,
        locales,
        missing_keys,
        missing_cv,
        missing_media,
        runtime_gap: wasm_runtime_gap(source, &site.config),
    })
}

// ============================================================================
// HTML Components
// ============================================================================

/// Default-locale texts for the static markup. The runtime replaces them
/// when the visitor picks another language.
struct Texts<'a> {
    translations: &'a Translations,
    locale: &'a str,
}

impl Texts<'_> {
    fn t(&self, key: &str, fallback: &str) -> String {
        self.translations
            .resolve(self.locale, self.locale, key)
            .unwrap_or(fallback)
            .to_string()
    }
}

/// Renders the base HTML document structure
fn base_document(title: &str, lang: &str, theme: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(lang) data-theme=(theme) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href=(FONT_AWESOME);
                style { (PreEscaped(css)) }
            }
            body {
                (content)
            }
        }
    }
}

fn render_navbar(site: &Site, tx: &Texts) -> Markup {
    let theme = site.config.default_theme();
    html! {
        nav.navbar id="navbar" {
            a.nav-brand href="#home" { (site.config.site.owner) }
            button.hamburger id="hamburger" aria-label="Menu" data-i18n-aria-label="nav.menu" {
                span {} span {} span {}
            }
            ul.nav-links id="navLinks" {
                li { a href="#home" data-i18n="nav.home" { (tx.t("nav.home", "Home")) } }
                li { a href="#about" data-i18n="nav.about" { (tx.t("nav.about", "About")) } }
                li { a href="#projects" data-i18n="nav.projects" { (tx.t("nav.projects", "Projects")) } }
                li { a href="#contact" data-i18n="nav.contact" { (tx.t("nav.contact", "Contact")) } }
                li.nav-cv {
                    button.nav-cv-toggle type="button" data-i18n="nav.cv" { (tx.t("nav.cv", "CV")) }
                    ul.nav-cv-menu {
                        @for track in CvTrack::ALL {
                            li {
                                button.nav-cv-view-btn type="button" data-cv-type=(track.as_str())
                                    data-i18n=(format!("cv.view.{track}")) {
                                    (tx.t(&format!("cv.view.{track}"), cv_label(track, "View")))
                                }
                                button.nav-cv-download-btn type="button" data-cv-type=(track.as_str())
                                    data-i18n-title="cv.download" title=(tx.t("cv.download", "Download PDF")) {
                                    i.fas.fa-download {}
                                }
                            }
                        }
                    }
                }
            }
            div.nav-actions {
                @for locale in site.translations.locales() {
                    button.nav-lang-btn.active[locale == site.config.i18n.default_locale]
                        type="button" data-lang=(locale) {
                        (locale.to_uppercase())
                    }
                }
                button.theme-toggle id="themeToggle" type="button"
                    aria-label="Toggle theme" data-i18n-aria-label="theme.toggle" {
                    i class=(theme.icon_class()) {}
                }
            }
        }
    }
}

fn cv_label(track: CvTrack, verb: &str) -> &'static str {
    match (track, verb) {
        (CvTrack::Unity, "View") => "Unity Game Developer CV",
        (CvTrack::Dotnet, "View") => ".NET Developer CV",
        (CvTrack::Unity, _) => "Unity CV (PDF)",
        (CvTrack::Dotnet, _) => ".NET CV (PDF)",
    }
}

fn render_hero(site: &Site, tx: &Texts) -> Markup {
    let technologies = site.catalog.technologies();
    html! {
        section.hero id="home" {
            p.hero-greeting data-i18n="hero.greeting" { (tx.t("hero.greeting", "Hi, I'm")) }
            h1.hero-name { (site.config.site.owner) }
            p.hero-tagline data-i18n="hero.tagline" { (tx.t("hero.tagline", &site.config.site.tagline)) }
            @if !technologies.is_empty() {
                div.tech-ticker aria-hidden="true" {
                    // Two copies so the marquee loops seamlessly.
                    div.tech-ticker-track {
                        @for _ in 0..2 {
                            @for tech in &technologies {
                                span.tech-item { (tech) }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn render_about(site: &Site, tx: &Texts) -> Markup {
    html! {
        section.about id="about" {
            h2.section-title data-i18n="about.title" { (tx.t("about.title", "About Me")) }
            @if let Some(body) = &site.about_html {
                article.about-content { (PreEscaped(body)) }
            }
        }
    }
}

/// Card/slide image with the type icon as fallback.
fn render_cover(project: &Project, image: Option<&str>) -> Markup {
    html! {
        div.project-image {
            @if let Some(src) = image {
                img src=(src) alt=(project.name) loading="lazy";
            } @else {
                i class={ "fas " (project.kind.badge_icon()) } {}
            }
        }
    }
}

fn render_badge(project: &Project) -> Markup {
    html! {
        span class={ "project-badge badge-" (project.kind.as_str()) } {
            i class={ "fas " (project.kind.badge_icon()) } {}
            " " (project.kind.short_label())
        }
    }
}

fn render_links(project: &Project, tx: &Texts) -> Markup {
    html! {
        @if project.has_links() {
            div.project-links {
                @if let Some(url) = &project.github {
                    a.project-link href=(url) target="_blank" rel="noopener" {
                        i.fab.fa-github {} " "
                        span data-i18n="projects.sourceCode" { (tx.t("projects.sourceCode", "Source Code")) }
                    }
                }
                @if let Some(url) = &project.playstore {
                    a.project-link href=(url) target="_blank" rel="noopener" {
                        i.fab.fa-google-play {} " "
                        span data-i18n="projects.playStore" { (tx.t("projects.playStore", "Play Store")) }
                    }
                }
            }
        }
    }
}

fn render_carousel(site: &Site, tx: &Texts) -> Markup {
    let highlighted = site.catalog.highlighted();
    let controls = highlighted.len() > 1;
    html! {
        section.highlights id="highlights" {
            h2.section-title data-i18n="highlights.title" { (tx.t("highlights.title", "Featured Projects")) }
            div.carousel id="highlightsCarousel" {
                div.carousel-track {
                    @for (index, project) in highlighted.iter().enumerate() {
                        article.carousel-slide.active[index == 0]
                            data-project-id=(project.id) data-index=(index) {
                            (render_cover(project, project.card_image()))
                            div.carousel-content {
                                (render_badge(project))
                                h3 { (project.name) }
                                p.carousel-category { (project.category) }
                                p.carousel-description { (project.description) }
                                button.carousel-details-btn type="button" data-i18n="projects.viewDetails" {
                                    (tx.t("projects.viewDetails", "View Details"))
                                }
                            }
                        }
                    }
                }
                p.carousel-empty hidden[!highlighted.is_empty()] data-i18n="highlights.empty" {
                    (tx.t("highlights.empty", "No featured projects yet."))
                }
                button.carousel-prev type="button" hidden[!controls]
                    aria-label="Previous" data-i18n-aria-label="highlights.prev" {
                    i.fas.fa-chevron-left {}
                }
                button.carousel-next type="button" hidden[!controls]
                    aria-label="Next" data-i18n-aria-label="highlights.next" {
                    i.fas.fa-chevron-right {}
                }
                div.carousel-dots hidden[!controls] {
                    @for index in 0..highlighted.len() {
                        button.carousel-dot.active[index == 0] type="button" data-index=(index)
                            aria-label={ "Slide " (index + 1) } {}
                    }
                }
            }
        }
    }
}

fn render_card(project: &Project, visible: bool, tx: &Texts) -> Markup {
    html! {
        article.project-card data-project-id=(project.id) data-type=(project.kind.as_str())
            hidden[!visible] {
            (render_cover(project, project.card_image()))
            div.project-content {
                (render_badge(project))
                h3.project-title { (project.name) }
                p.project-category { (project.category) }
                p.project-description { (project.description) }
                @if !project.technologies.is_empty() {
                    div.project-tech {
                        @for tech in &project.technologies {
                            span.tech-tag { (tech) }
                        }
                    }
                }
                (render_links(project, tx))
            }
        }
    }
}

fn render_projects(site: &Site, tx: &Texts) -> Markup {
    let projects = site.catalog.projects();
    let cap = site.config.grid.initial_limit;
    let remaining = projects.len().saturating_sub(cap);
    html! {
        section.projects id="projects" {
            h2.section-title data-i18n="projects.title" { (tx.t("projects.title", "Projects")) }
            div.project-filters {
                @for filter in Filter::BUTTONS {
                    button.filter-btn.active[filter == Filter::All] type="button"
                        data-filter=(filter.token()) data-i18n=(filter.label_key()) {
                        (tx.t(filter.label_key(), default_filter_label(filter)))
                    }
                }
            }
            div.project-search {
                i.fas.fa-search {}
                input id="projectSearch" type="search"
                    placeholder=(tx.t("projects.searchPlaceholder", "Search projects..."))
                    data-i18n-placeholder="projects.searchPlaceholder";
            }
            div.projects-grid id="projectsGrid" {
                @for (pos, project) in projects.iter().enumerate() {
                    (render_card(project, pos < cap, tx))
                }
            }
            p.projects-empty id="projectsEmpty" hidden[!projects.is_empty()] data-i18n="projects.empty" {
                (tx.t("projects.empty", "No projects found."))
            }
            button.projects-expand id="projectsExpandBtn" type="button" hidden[remaining == 0] {
                i.fas.fa-chevron-down {} " "
                span { (tx.t("projects.viewAll", "View All Projects")) " (" (remaining) " more)" }
            }
        }
    }
}

fn default_filter_label(filter: Filter) -> &'static str {
    match filter {
        Filter::All => "All",
        Filter::OpenSource => "Open Source",
        Filter::Kind(ProjectType::Unity) => "Unity",
        Filter::Kind(ProjectType::Dotnet) => ".NET",
        Filter::Kind(ProjectType::Other) => "Other",
    }
}

fn render_media_item(index: usize, item: &MediaItem, orientations: &HashMap<String, Orientation>) -> Markup {
    html! {
        @match item {
            MediaItem::Video { embed } => {
                div.media-item.media-video data-index=(index) hidden[index != 0] {
                    iframe id=(media::frame_id(index)) src=(embed) data-src=(embed)
                        allow="autoplay; encrypted-media; picture-in-picture"
                        allowfullscreen title="Trailer" {}
                }
            }
            MediaItem::Image { url } => {
                @let orientation = orientations.get(url).map(|o| o.as_str());
                div.media-item.media-image data-index=(index) hidden[index != 0] {
                    img src=(url) alt={ "Screenshot " (index + 1) } loading="lazy"
                        class=[orientation] data-orientation=[orientation];
                }
            }
        }
    }
}

/// Detail-modal body for one project, cloned into the modal when it opens.
fn render_project_template(project: &Project, site: &Site, tx: &Texts) -> Markup {
    let sequence = media::sequence(project);
    let navigation = sequence.len() > 1;
    html! {
        template id={ "project-" (project.id) } {
            div.modal-header {
                (render_badge(project))
                h2.modal-title { (project.name) }
                p.modal-category { (project.category) " · " (project.kind.long_label()) }
            }
            div.modal-media data-count=(sequence.len()) {
                @if sequence.is_empty() {
                    div.media-placeholder {
                        i class={ "fas " (project.kind.badge_icon()) } {}
                    }
                }
                @for (index, item) in sequence.iter().enumerate() {
                    (render_media_item(index, item, &site.orientations))
                }
                @if navigation {
                    button.media-prev type="button" aria-label="Previous" { i.fas.fa-chevron-left {} }
                    button.media-next type="button" aria-label="Next" { i.fas.fa-chevron-right {} }
                    span.media-counter { "1 / " (sequence.len()) }
                    div.media-dots {
                        @for index in 0..sequence.len() {
                            button.media-dot.active[index == 0] type="button" data-index=(index) {}
                        }
                    }
                }
            }
            div.modal-body {
                p.modal-description { (project.description) }
                @if !project.features.is_empty() {
                    h3 data-i18n="modal.features" { (tx.t("modal.features", "Features")) }
                    ul.modal-features {
                        @for feature in &project.features {
                            li { (feature) }
                        }
                    }
                }
                @if !project.technologies.is_empty() {
                    h3 data-i18n="modal.technologies" { (tx.t("modal.technologies", "Technologies")) }
                    div.project-tech {
                        @for tech in &project.technologies {
                            span.tech-tag { (tech) }
                        }
                    }
                }
                (render_links(project, tx))
            }
        }
    }
}

fn render_overlays(site: &Site, tx: &Texts) -> Markup {
    html! {
        div.modal id="projectModal" hidden {
            div.modal-content {
                button.close-modal type="button" aria-label="Close" data-i18n-aria-label="modal.close" { "×" }
                div id="modalBody" {}
            }
        }
        div.image-viewer id="imageViewer" hidden {
            button.viewer-close type="button" aria-label="Close" { "×" }
            button.viewer-prev type="button" aria-label="Previous" { i.fas.fa-chevron-left {} }
            img id="viewerImage" alt="";
            button.viewer-next type="button" aria-label="Next" { i.fas.fa-chevron-right {} }
            span.viewer-counter {}
        }
        div.modal.cv-modal id="cvModal" hidden {
            div.modal-content.cv-content {
                div.cv-toolbar {
                    button id="cvModalDownload" type="button" {
                        i.fas.fa-download {} " "
                        span data-i18n="cv.download" { (tx.t("cv.download", "Download PDF")) }
                    }
                    button.close-cv-modal type="button" aria-label="Close" { "×" }
                }
                iframe id="cvFrame" title="CV" {}
            }
        }
        @for project in site.catalog.projects() {
            (render_project_template(project, site, tx))
        }
    }
}

fn render_contact(site: &Site, tx: &Texts) -> Markup {
    let contact = &site.config.contact;
    html! {
        section.contact id="contact" {
            h2.section-title data-i18n="contact.title" { (tx.t("contact.title", "Get In Touch")) }
            div.contact-links {
                @if let Some(email) = &contact.email {
                    a.contact-link href={ "mailto:" (email) } { i.fas.fa-envelope {} " " (email) }
                }
                @if let Some(url) = &contact.github {
                    a.contact-link href=(url) target="_blank" rel="noopener" { i.fab.fa-github {} " GitHub" }
                }
                @if let Some(url) = &contact.linkedin {
                    a.contact-link href=(url) target="_blank" rel="noopener" { i.fab.fa-linkedin {} " LinkedIn" }
                }
            }
            div.contact-cv {
                @for track in CvTrack::ALL {
                    button.cv-btn type="button" data-cv-type=(track.as_str()) {
                        i.fas.fa-eye {} " " (cv_label(track, "View"))
                    }
                    button.cv-download-btn type="button" data-cv-type=(track.as_str()) {
                        i.fas.fa-download {} " " (cv_label(track, "Download"))
                    }
                }
            }
        }
    }
}

/// Runtime settings as an inert JSON script block.
fn render_runtime_config(runtime: &RuntimeConfig) -> Result<Markup, GenerateError> {
    let json = serde_json::to_string(runtime)?.replace("</", "<\\/");
    Ok(html! {
        script id="folio-config" type="application/json" { (PreEscaped(json)) }
    })
}

// ============================================================================
// Page Renderer
// ============================================================================

pub fn render_page(site: &Site, runtime: &RuntimeConfig, script_src: &str) -> Result<Markup, GenerateError> {
    let locale = site.config.i18n.default_locale.as_str();
    let tx = Texts {
        translations: &site.translations,
        locale,
    };
    let css = format!("{}\n\n{}", config::generate_color_css(&site.config.colors), CSS_STATIC);
    let title = format!("{} · {}", site.config.site.owner, site.config.site.title);

    let content = html! {
        (render_navbar(site, &tx))
        main {
            (render_hero(site, &tx))
            (render_about(site, &tx))
            (render_carousel(site, &tx))
            (render_projects(site, &tx))
            (render_contact(site, &tx))
        }
        (render_overlays(site, &tx))
        (render_runtime_config(runtime)?)
        script type="module" src=(script_src) {}
    };

    Ok(base_document(
        &title,
        locale,
        site.config.default_theme().as_str(),
        &css,
        content,
    ))
}

// ============================================================================
// Tests
// ============================================================================
