//! Persisted visitor preferences: theme and language.
//!
//! Storage is best effort. Browsers can deny access to local storage
//! (privacy modes, sandboxed frames), so a failed read falls back to the
//! default and a failed write is dropped; the in-memory value still applies
//! for the rest of the session.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;
use tracing::{debug, warn};

pub const THEME_KEY: &str = "theme";
pub const LANG_KEY: &str = "lang";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Icon shown on the theme toggle button.
    pub fn icon_class(self) -> &'static str {
        match self {
            Theme::Dark => "fas fa-moon",
            Theme::Light => "fas fa-sun",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Storage access failed (denied, quota, unavailable).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("storage unavailable: {0}")]
pub struct StorageUnavailable(pub String);

/// Key-value store backing the preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageUnavailable>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageUnavailable>;
}

/// In-memory store: used natively and when no browser storage exists.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn with(values: &[(&str, &str)]) -> Self {
        Self {
            values: values
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageUnavailable> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageUnavailable> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Theme and language with their backing store.
pub struct Preferences {
    store: Box<dyn PreferenceStore>,
    theme: Theme,
}

impl fmt::Debug for Preferences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Preferences")
            .field("theme", &self.theme)
            .finish_non_exhaustive()
    }
}

impl Preferences {
    /// Read the stored theme, falling back to `default_theme`.
    pub fn load(store: Box<dyn PreferenceStore>, default_theme: Theme) -> Self {
        let theme = match store.get(THEME_KEY) {
            Ok(Some(value)) => Theme::parse(&value).unwrap_or(default_theme),
            Ok(None) => default_theme,
            Err(e) => {
                warn!(error = %e, "cannot read theme preference, using {default_theme}");
                default_theme
            }
        };
        Self { store, theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Stored language, if any and readable.
    pub fn stored_lang(&self) -> Option<String> {
        match self.store.get(LANG_KEY) {
            Ok(value) => value.filter(|v| !v.is_empty()),
            Err(e) => {
                warn!(error = %e, "cannot read language preference");
                None
            }
        }
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.persist(THEME_KEY, theme.as_str());
    }

    pub fn toggle_theme(&mut self) -> Theme {
        let next = self.theme.toggled();
        self.set_theme(next);
        next
    }

    pub fn set_lang(&mut self, lang: &str) {
        self.persist(LANG_KEY, lang);
    }

    fn persist(&mut self, key: &str, value: &str) {
        // Session value already applied; a lost write only loses persistence.
        if let Err(e) = self.store.set(key, value) {
            debug!(error = %e, key, "preference not persisted");
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// A store whose every access fails.
    pub(crate) struct DeniedStore;

    impl PreferenceStore for DeniedStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageUnavailable> {
            Err(StorageUnavailable("denied".into()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageUnavailable> {
            Err(StorageUnavailable("denied".into()))
        }
    }

    #[test]
    fn defaults_to_dark() {
        let prefs = Preferences::load(Box::new(MemoryStore::default()), Theme::Dark);
        assert_eq!(prefs.theme(), Theme::Dark);
        assert_eq!(prefs.stored_lang(), None);
    }

    #[test]
    fn reads_stored_values() {
        let store = MemoryStore::with(&[(THEME_KEY, "light"), (LANG_KEY, "tr")]);
        let prefs = Preferences::load(Box::new(store), Theme::Dark);
        assert_eq!(prefs.theme(), Theme::Light);
        assert_eq!(prefs.stored_lang().as_deref(), Some("tr"));
    }

    #[test]
    fn garbage_theme_uses_default() {
        let store = MemoryStore::with(&[(THEME_KEY, "sepia")]);
        let prefs = Preferences::load(Box::new(store), Theme::Light);
        assert_eq!(prefs.theme(), Theme::Light);
    }

    #[test]
    fn toggle_flips_and_persists() {
        let mut prefs = Preferences::load(Box::new(MemoryStore::default()), Theme::Dark);
        assert_eq!(prefs.toggle_theme(), Theme::Light);
        assert_eq!(prefs.store.get(THEME_KEY).unwrap().as_deref(), Some("light"));
        assert_eq!(prefs.toggle_theme(), Theme::Dark);
    }

    #[test]
    fn denied_storage_keeps_session_value() {
        let mut prefs = Preferences::load(Box::new(DeniedStore), Theme::Dark);
        assert_eq!(prefs.theme(), Theme::Dark);
        assert_eq!(prefs.stored_lang(), None);
        assert_eq!(prefs.toggle_theme(), Theme::Light);
        assert_eq!(prefs.theme(), Theme::Light);
        prefs.set_lang("tr");
    }

    #[test]
    fn storage_error_names_the_cause() {
        let err = DeniedStore.get(THEME_KEY).unwrap_err();
        assert_eq!(err.to_string(), "storage unavailable: denied");
    }

    #[test]
    fn denied_write_leaves_later_writes_working() {
        let mut prefs = Preferences::load(Box::new(DeniedStore), Theme::Dark);
        prefs.set_theme(Theme::Light);
        assert_eq!(prefs.theme(), Theme::Light);
        prefs.store = Box::new(MemoryStore::default());
        prefs.set_lang("tr");
        assert_eq!(prefs.stored_lang().as_deref(), Some("tr"));
    }

    #[test]
    fn icons_follow_theme() {
        assert_eq!(Theme::Dark.icon_class(), "fas fa-moon");
        assert_eq!(Theme::Light.icon_class(), "fas fa-sun");
    }
}
