//! Translation table and the locale switch.
//!
//! The table maps a locale code to a nested tree of strings addressed by
//! dotted key paths (`projects.filters.all`). Lookups never fail: a missing
//! path segment yields `None` and the bound element keeps whatever text it
//! already shows.

use crate::effect::Effect;
use crate::prefs::Preferences;
use serde::Deserialize;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::warn;

/// Locale used when a requested locale is not in the table.
pub const FALLBACK_LOCALE: &str = "en";

#[derive(Error, Debug)]
pub enum I18nError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("translation JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Text(String),
    Group(BTreeMap<String, Node>),
}

impl Node {
    fn walk<'a>(&'a self, path: &str) -> Option<&'a Node> {
        path.split('.').try_fold(self, |node, segment| match node {
            Node::Group(children) => children.get(segment),
            Node::Text(_) => None,
        })
    }

    fn collect_leaves(&self, prefix: &str, out: &mut BTreeMap<String, String>) {
        match self {
            Node::Text(text) => {
                out.insert(prefix.to_string(), text.clone());
            }
            Node::Group(children) => {
                for (key, child) in children {
                    let path = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{prefix}.{key}")
                    };
                    child.collect_leaves(&path, out);
                }
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Translations {
    locales: BTreeMap<String, Node>,
}

impl Translations {
    pub fn from_json(json: &str) -> Result<Self, I18nError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    pub fn has_locale(&self, locale: &str) -> bool {
        self.locales.contains_key(locale)
    }

    /// Walk `key` in `locale`. Any missing segment, or a key that names a
    /// group rather than a string, yields `None`.
    pub fn lookup(&self, locale: &str, key: &str) -> Option<&str> {
        match self.locales.get(locale)?.walk(key)? {
            Node::Text(text) if !text.is_empty() => Some(text),
            _ => None,
        }
    }

    /// `lookup` in `locale`, then in `default_locale`.
    pub fn resolve(&self, locale: &str, default_locale: &str, key: &str) -> Option<&str> {
        self.lookup(locale, key)
            .or_else(|| self.lookup(default_locale, key))
    }

    /// Every dotted key path defined by `locale`, sorted.
    pub fn key_paths(&self, locale: &str) -> Vec<String> {
        self.leaves(locale).into_keys().collect()
    }

    /// Key paths the default locale defines that `locale` lacks.
    pub fn missing_keys(&self, locale: &str, default_locale: &str) -> Vec<String> {
        let present = self.leaves(locale);
        self.leaves(default_locale)
            .into_keys()
            .filter(|key| !present.contains_key(key))
            .collect()
    }

    /// Resolved key → text map for `locale`, default-locale texts filling the gaps.
    pub fn flatten(&self, locale: &str, default_locale: &str) -> BTreeMap<String, String> {
        let mut entries = self.leaves(default_locale);
        entries.extend(self.leaves(locale));
        entries.retain(|_, text| !text.is_empty());
        entries
    }

    fn leaves(&self, locale: &str) -> BTreeMap<String, String> {
        let mut out = BTreeMap::new();
        if let Some(root) = self.locales.get(locale) {
            root.collect_leaves("", &mut out);
        }
        out
    }
}

/// Read and parse a translation table; the text is returned as read.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_translations(path: &std::path::Path) -> Result<(Translations, String), I18nError> {
    let content = std::fs::read_to_string(path)?;
    Ok((Translations::from_json(&content)?, content))
}

/// What a locale request ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleChange {
    /// No translations loaded; nothing changed.
    Skipped,
    Applied { lang: String, fell_back: bool },
}

#[derive(Debug, Clone)]
pub struct LocaleSwitch {
    current: String,
    default_locale: String,
}

impl LocaleSwitch {
    pub fn new(initial: &str, default_locale: &str) -> Self {
        Self {
            current: initial.to_string(),
            default_locale: default_locale.to_string(),
        }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Switch to `requested`, persist it and return the texts to apply.
    pub fn set(
        &mut self,
        requested: &str,
        translations: &Translations,
        prefs: &mut Preferences,
    ) -> (LocaleChange, Vec<Effect>) {
        if translations.is_empty() {
            warn!(requested, "translations not loaded, skipping language update");
            return (LocaleChange::Skipped, Vec::new());
        }

        let (lang, fell_back) = if translations.has_locale(requested) {
            (requested, false)
        } else {
            warn!(
                requested,
                "language not found in translations, defaulting to {FALLBACK_LOCALE}"
            );
            (FALLBACK_LOCALE, true)
        };

        prefs.set_lang(lang);
        self.current = lang.to_string();
        let effect = Effect::Translate {
            lang: self.current.clone(),
            entries: translations.flatten(&self.current, &self.default_locale),
        };
        (
            LocaleChange::Applied {
                lang: self.current.clone(),
                fell_back,
            },
            vec![effect],
        )
    }

    /// Text for `key` in the current locale, falling back to the default locale.
    pub fn text<'a>(&self, translations: &'a Translations, key: &str) -> Option<&'a str> {
        translations.resolve(&self.current, &self.default_locale, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::tests::DeniedStore;
    use crate::prefs::{LANG_KEY, MemoryStore, PreferenceStore, Theme};
    use crate::test_helpers::translations_json;

    fn table() -> Translations {
        Translations::from_json(translations_json()).unwrap()
    }

    fn prefs() -> Preferences {
        Preferences::load(Box::new(MemoryStore::default()), Theme::Dark)
    }

    #[test]
    fn lookup_walks_dotted_paths() {
        let t = table();
        assert_eq!(t.lookup("en", "projects.filters.all"), Some("All"));
        assert_eq!(t.lookup("tr", "projects.filters.all"), Some("Tümü"));
    }

    #[test]
    fn missing_segments_yield_none() {
        let t = table();
        assert_eq!(t.lookup("en", "projects.nope.all"), None);
        assert_eq!(t.lookup("en", "projects.filters.all.deeper"), None);
        assert_eq!(t.lookup("en", "projects.filters"), None, "groups are not text");
        assert_eq!(t.lookup("xx", "projects.filters.all"), None);
    }

    #[test]
    fn resolve_falls_back_to_default_locale() {
        let t = table();
        assert_eq!(t.lookup("tr", "projects.showLess"), None);
        assert_eq!(t.resolve("tr", "en", "projects.showLess"), Some("Show Less"));
        assert_eq!(t.resolve("tr", "en", "absent.key"), None);
    }

    #[test]
    fn missing_keys_are_reported_against_default() {
        let t = table();
        assert_eq!(t.missing_keys("tr", "en"), vec!["projects.showLess".to_string()]);
        assert!(t.missing_keys("en", "en").is_empty());
    }

    #[test]
    fn flatten_overlays_locale_on_default() {
        let entries = table().flatten("tr", "en");
        assert_eq!(entries["projects.filters.all"], "Tümü");
        assert_eq!(entries["projects.showLess"], "Show Less");
    }

    #[test]
    fn unknown_locale_falls_back_to_en() {
        let t = table();
        let mut prefs = prefs();
        let mut switch = LocaleSwitch::new("en", "en");
        let (change, effects) = switch.set("de", &t, &mut prefs);
        assert_eq!(
            change,
            LocaleChange::Applied {
                lang: "en".into(),
                fell_back: true
            }
        );
        assert_eq!(switch.current(), "en");
        assert!(matches!(&effects[0], Effect::Translate { lang, .. } if lang == "en"));
    }

    #[test]
    fn switch_persists_choice() {
        let t = table();
        let mut store = MemoryStore::default();
        store.set(LANG_KEY, "en").unwrap();
        let mut prefs = Preferences::load(Box::new(store), Theme::Dark);
        let mut switch = LocaleSwitch::new("en", "en");
        switch.set("tr", &t, &mut prefs);
        assert_eq!(prefs.stored_lang().as_deref(), Some("tr"));
        assert_eq!(switch.text(&t, "projects.viewAll"), Some("Tüm Projeler"));
    }

    #[test]
    fn switch_without_translations_is_skipped() {
        let mut prefs = prefs();
        let mut switch = LocaleSwitch::new("en", "en");
        let (change, effects) = switch.set("tr", &Translations::default(), &mut prefs);
        assert_eq!(change, LocaleChange::Skipped);
        assert!(effects.is_empty());
        assert_eq!(switch.current(), "en");
    }

    #[test]
    fn switch_survives_denied_storage() {
        let mut prefs = Preferences::load(Box::new(DeniedStore), Theme::Dark);
        let mut switch = LocaleSwitch::new("en", "en");
        let (change, _) = switch.set("tr", &table(), &mut prefs);
        assert!(matches!(change, LocaleChange::Applied { fell_back: false, .. }));
        assert_eq!(switch.current(), "tr");
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            Translations::from_json("{\"en\": [1, 2]}"),
            Err(I18nError::Json(_))
        ));
    }
}
