//! Site configuration module.
//!
//! Handles loading, validating, and merging the `config.toml` in the content
//! root. Stock defaults are the base layer; the user file only needs the keys
//! it wants to change.
//!
//! ## Config File Location
//!
//! ```text
//! content/
//! ├── config.toml              # Overrides stock defaults
//! ├── about.md                 # Optional About section
//! └── assets/
//!     ├── projects/projects.json
//!     ├── translations/translations.json
//!     └── docs/                # CV documents
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! title = "Portfolio"
//! owner = "Your Name"
//! tagline = "Game & Software Developer"
//!
//! [data]
//! projects = ["assets/projects/projects.json", "projects.json"]
//! translations = "assets/translations/translations.json"
//!
//! [i18n]
//! default_locale = "en"
//!
//! [theme]
//! default = "dark"          # "dark" or "light"
//!
//! [grid]
//! initial_limit = 3         # Cards shown before "View All"
//!
//! [carousel]
//! interval_ms = 5000        # Auto-advance period
//!
//! [cv]
//! html_dir = "assets/docs"
//! pdf_dir = "assets/docs/pdf"
//! locales = ["en", "tr"]    # Locales that ship their own CV
//!
//! [contact]
//! email = "you@example.com"
//! github = "https://github.com/you"
//! linkedin = "https://linkedin.com/in/you"
//!
//! [runtime]
//! wasm_dir = "pkg"          # Pre-built wasm-bindgen output to ship
//!
//! [colors.dark]
//! background = "#0f1117"
//! ...
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::app::RuntimeConfig;
use crate::cv::CvPaths;
use crate::prefs::Theme;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Page title and owner details.
    pub site: SiteInfo,
    /// Where the catalog and translation table live.
    pub data: DataConfig,
    pub i18n: I18nConfig,
    /// Theme used when the visitor has no stored preference.
    pub theme: ThemeConfig,
    pub grid: GridConfig,
    pub carousel: CarouselConfig,
    /// CV document locations.
    pub cv: CvConfig,
    /// Contact links for the footer.
    pub contact: ContactConfig,
    pub runtime: RuntimeDirConfig,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid.initial_limit == 0 {
            return Err(ConfigError::Validation(
                "grid.initial_limit must be at least 1".into(),
            ));
        }
        if self.carousel.interval_ms < 500 {
            return Err(ConfigError::Validation(
                "carousel.interval_ms must be at least 500".into(),
            ));
        }
        if self.i18n.default_locale.trim().is_empty() {
            return Err(ConfigError::Validation(
                "i18n.default_locale must not be empty".into(),
            ));
        }
        if Theme::parse(&self.theme.default).is_none() {
            return Err(ConfigError::Validation(format!(
                "theme.default must be \"dark\" or \"light\", got \"{}\"",
                self.theme.default
            )));
        }
        if self.data.projects.is_empty() {
            return Err(ConfigError::Validation(
                "data.projects must list at least one candidate".into(),
            ));
        }
        Ok(())
    }

    pub fn default_theme(&self) -> Theme {
        Theme::parse(&self.theme.default).unwrap_or_default()
    }

    pub fn cv_paths(&self) -> CvPaths {
        CvPaths {
            html_dir: self.cv.html_dir.clone(),
            pdf_dir: self.cv.pdf_dir.clone(),
            locales: self.cv.locales.clone(),
            default_locale: self.i18n.default_locale.clone(),
        }
    }

    /// Settings handed to the page runtime.
    ///
    /// The normalized catalog written by the build comes first; the source
    /// candidates follow so a hand-deployed site still finds its data.
    pub fn runtime_config(&self) -> RuntimeConfig {
        let mut catalog_candidates = vec![crate::generate::CATALOG_OUT.to_string()];
        catalog_candidates.extend(self.data.projects.iter().cloned());
        RuntimeConfig {
            catalog_candidates,
            translations_url: crate::generate::TRANSLATIONS_OUT.to_string(),
            default_locale: self.i18n.default_locale.clone(),
            default_theme: self.default_theme(),
            initial_limit: self.grid.initial_limit,
            interval_ms: self.carousel.interval_ms,
            cv: self.cv_paths(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteInfo {
    pub title: String,
    pub owner: String,
    pub tagline: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            owner: "Your Name".to_string(),
            tagline: "Game & Software Developer".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DataConfig {
    /// Catalog candidates, relative to the content root, tried in order.
    pub projects: Vec<String>,
    /// Translation table, relative to the content root.
    pub translations: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            projects: vec![
                "assets/projects/projects.json".to_string(),
                "projects.json".to_string(),
            ],
            translations: "assets/translations/translations.json".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct I18nConfig {
    pub default_locale: String,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: "en".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// `"dark"` or `"light"`.
    pub default: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default: "dark".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridConfig {
    pub initial_limit: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            initial_limit: crate::grid::DEFAULT_INITIAL_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselConfig {
    pub interval_ms: u32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval_ms: crate::carousel::DEFAULT_INTERVAL_MS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CvConfig {
    pub html_dir: String,
    pub pdf_dir: String,
    /// Locales with their own CV; the rest get the default locale's.
    pub locales: Vec<String>,
}

impl Default for CvConfig {
    fn default() -> Self {
        Self {
            html_dir: "assets/docs".to_string(),
            pdf_dir: "assets/docs/pdf".to_string(),
            locales: vec!["en".to_string(), "tr".to_string()],
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactConfig {
    pub email: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuntimeDirConfig {
    /// wasm-bindgen output directory, relative to the content root.
    /// Copied to `pkg/` in the output when present.
    pub wasm_dir: Option<String>,
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub light: ColorScheme,
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    pub background: String,
    /// Cards, modals, navbar.
    pub surface: String,
    pub text: String,
    /// Secondary text: categories, counters, captions.
    pub text_muted: String,
    /// Buttons, active filters, badges.
    pub accent: String,
    pub border: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#f5f7fa".to_string(),
            surface: "#ffffff".to_string(),
            text: "#1a1d23".to_string(),
            text_muted: "#5f6b7a".to_string(),
            accent: "#4f46e5".to_string(),
            border: "#dde3ea".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#0f1117".to_string(),
            surface: "#181b24".to_string(),
            text: "#e8eaf0".to_string(),
            text_muted: "#9aa3b2".to_string(),
            accent: "#818cf8".to_string(),
            border: "#2a2f3d".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_dark()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(SiteConfig::default())?)
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the directory has no `config.toml`.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Simple Folio Configuration
# ==========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Site
# ---------------------------------------------------------------------------
[site]
title = "Portfolio"
owner = "Your Name"
tagline = "Game & Software Developer"

# ---------------------------------------------------------------------------
# Data files (relative to the content root)
# ---------------------------------------------------------------------------
[data]
# Catalog candidates, tried in order. The first one that exists and parses wins.
projects = ["assets/projects/projects.json", "projects.json"]
translations = "assets/translations/translations.json"

# ---------------------------------------------------------------------------
# Language and theme
# ---------------------------------------------------------------------------
[i18n]
# Locale used for missing keys and unknown requests.
default_locale = "en"

[theme]
# Theme for first-time visitors: "dark" or "light".
default = "dark"

# ---------------------------------------------------------------------------
# Projects grid and highlights carousel
# ---------------------------------------------------------------------------
[grid]
# Cards shown before the "View All" button is pressed.
initial_limit = 3

[carousel]
# Auto-advance period in milliseconds (minimum 500).
interval_ms = 5000

# ---------------------------------------------------------------------------
# CV documents
# ---------------------------------------------------------------------------
# Files are named CV_LONG_{LANG}_{Track}.html and CV_{LANG}_{Track}.pdf,
# with Track one of Unity_GameDeveloper, DotNet_Developer.
[cv]
html_dir = "assets/docs"
pdf_dir = "assets/docs/pdf"
# Locales that ship their own CV. Others fall back to the default locale.
locales = ["en", "tr"]

# ---------------------------------------------------------------------------
# Contact links (footer); omit any you don't want shown
# ---------------------------------------------------------------------------
[contact]
# email = "you@example.com"
# github = "https://github.com/you"
# linkedin = "https://linkedin.com/in/you"

# ---------------------------------------------------------------------------
# Page runtime
# ---------------------------------------------------------------------------
[runtime]
# Directory holding the wasm-bindgen build of the page runtime.
# wasm_dir = "pkg"

# ---------------------------------------------------------------------------
# Colors - Light theme ([data-theme="light"])
# ---------------------------------------------------------------------------
[colors.light]
background = "#f5f7fa"
surface = "#ffffff"
text = "#1a1d23"
text_muted = "#5f6b7a"
accent = "#4f46e5"
border = "#dde3ea"

# ---------------------------------------------------------------------------
# Colors - Dark theme ([data-theme="dark"])
# ---------------------------------------------------------------------------
[colors.dark]
background = "#0f1117"
surface = "#181b24"
text = "#e8eaf0"
text_muted = "#9aa3b2"
accent = "#818cf8"
border = "#2a2f3d"
"##
}

fn scheme_vars(scheme: &ColorScheme) -> String {
    format!(
        "    --color-bg: {};\n    --color-surface: {};\n    --color-text: {};\n    --color-text-muted: {};\n    --color-accent: {};\n    --color-border: {};",
        scheme.background,
        scheme.surface,
        scheme.text,
        scheme.text_muted,
        scheme.accent,
        scheme.border,
    )
}

/// Generate CSS custom properties for both themes.
///
/// Dark is also the `:root` fallback so the page renders sensibly before the
/// runtime sets `data-theme`.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        ":root,\n[data-theme=\"dark\"] {{\n{dark}\n}}\n\n[data-theme=\"light\"] {{\n{light}\n}}",
        dark = scheme_vars(&colors.dark),
        light = scheme_vars(&colors.light),
    )
}
