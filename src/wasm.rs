//! Browser binding for the page runtime.
//!
//! `folio.js` fetches the catalog candidates and the translation table, then
//! constructs a [`FolioApp`] and forwards DOM events to it as JSON. Every call
//! answers with a JSON array of effects for the host to apply in order.

use crate::app::{self, App, Event, FetchedCandidate, RuntimeConfig};
use crate::i18n::Translations;
use crate::prefs::{MemoryStore, PreferenceStore, StorageUnavailable};
use tracing::warn;
use wasm_bindgen::prelude::*;

/// `window.localStorage`. Access can throw (privacy modes, sandboxed frames);
/// each failure surfaces as [`StorageUnavailable`].
struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    fn open() -> Result<Self, StorageUnavailable> {
        let window = web_sys::window().ok_or_else(|| StorageUnavailable("no window".into()))?;
        let storage = window
            .local_storage()
            .map_err(|e| StorageUnavailable(format!("{e:?}")))?
            .ok_or_else(|| StorageUnavailable("localStorage disabled".into()))?;
        Ok(Self { storage })
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageUnavailable> {
        self.storage
            .get_item(key)
            .map_err(|e| StorageUnavailable(format!("{e:?}")))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageUnavailable> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StorageUnavailable(format!("{e:?}")))
    }
}

fn preference_store() -> Box<dyn PreferenceStore> {
    match LocalStorage::open() {
        Ok(store) => Box::new(store),
        Err(e) => {
            warn!(error = %e, "preferences will not persist");
            Box::new(MemoryStore::default())
        }
    }
}

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
pub struct FolioApp {
    app: App,
}

#[wasm_bindgen]
impl FolioApp {
    /// `fetched_json` is an array of `{candidate, body?, error?}` in candidate
    /// order. A missing or malformed translation table leaves the page in its
    /// markup language.
    #[wasm_bindgen(constructor)]
    pub fn new(
        config_json: &str,
        fetched_json: &str,
        translations_json: Option<String>,
    ) -> Result<FolioApp, JsValue> {
        let config: RuntimeConfig = serde_json::from_str(config_json).map_err(js_error)?;
        let fetched: Vec<FetchedCandidate> = serde_json::from_str(fetched_json).map_err(js_error)?;
        let catalog = app::load_fetched(&fetched).map(|(_, catalog)| catalog);
        let translations = match translations_json.as_deref().map(Translations::from_json) {
            Some(Ok(table)) => table,
            Some(Err(e)) => {
                warn!(error = %e, "error loading translations");
                Translations::default()
            }
            None => Translations::default(),
        };
        Ok(FolioApp {
            app: App::new(config, preference_store(), catalog, translations),
        })
    }

    pub fn init(&mut self) -> Result<String, JsValue> {
        serde_json::to_string(&self.app.init()).map_err(js_error)
    }

    pub fn handle(&mut self, event_json: &str) -> Result<String, JsValue> {
        let event: Event = serde_json::from_str(event_json).map_err(js_error)?;
        serde_json::to_string(&self.app.handle(event)).map_err(js_error)
    }
}
