//! The page runtime: one owner for every piece of page state.
//!
//! The host constructs an [`App`] once the data files are fetched, applies
//! the effects of [`App::init`], and from then on forwards every DOM event
//! through [`App::handle`]. Nothing here touches the DOM or the clock.

use crate::carousel::{self, Carousel};
use crate::catalog::{self, Catalog, CatalogError};
use crate::cv::{CvPaths, CvTrack, CvViewer};
use crate::effect::{Effect, Region};
use crate::filter::{self, Filter, SearchQuery};
use crate::grid::{self, GridView, Toggle};
use crate::i18n::{LocaleSwitch, Translations};
use crate::modal::{DetailModal, Key};
use crate::prefs::{PreferenceStore, Preferences, Theme};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

/// Element id of the projects section, scrolled to when the grid expands.
pub const PROJECTS_ANCHOR: &str = "projects";

/// Settings the generator embeds in the page for the runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RuntimeConfig {
    pub catalog_candidates: Vec<String>,
    pub translations_url: String,
    pub default_locale: String,
    pub default_theme: Theme,
    pub initial_limit: usize,
    pub interval_ms: u32,
    pub cv: CvPaths,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            catalog_candidates: vec![
                "assets/projects/projects.json".into(),
                "data/projects.json".into(),
            ],
            translations_url: "assets/translations/translations.json".into(),
            default_locale: "en".into(),
            default_theme: Theme::Dark,
            initial_limit: grid::DEFAULT_INITIAL_LIMIT,
            interval_ms: carousel::DEFAULT_INTERVAL_MS,
            cv: CvPaths {
                html_dir: "assets/docs".into(),
                pdf_dir: "assets/docs/pdf".into(),
                locales: vec!["en".into(), "tr".into()],
                default_locale: "en".into(),
            },
        }
    }
}

/// Outcome of fetching one catalog candidate on the host.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FetchedCandidate {
    pub candidate: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Pick the first fetched candidate that parses, in candidate order.
pub fn load_fetched(fetched: &[FetchedCandidate]) -> Result<(String, Catalog), CatalogError> {
    catalog::load_first(fetched.iter().map(|f| f.candidate.as_str()), |candidate| {
        let entry = fetched.iter().find(|f| f.candidate == candidate);
        match entry.and_then(|f| f.body.clone()) {
            Some(body) => Ok(body),
            None => Err(entry
                .and_then(|f| f.error.clone())
                .unwrap_or_else(|| "not fetched".to_string())),
        }
    })
}

/// DOM events the host forwards.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Event {
    SelectFilter { filter: Filter },
    Search { query: String },
    ToggleExpand,
    /// A card or a carousel slide was clicked.
    OpenProject { id: String },
    CarouselNext,
    CarouselPrev,
    CarouselJump { index: usize },
    CarouselHover { inside: bool },
    TimerTick { token: u64 },
    ModalNext,
    ModalPrev,
    ModalJump { index: usize },
    ModalClose,
    ImageLoaded { index: usize, width: u32, height: u32 },
    ViewerOpen { index: usize },
    ViewerNext,
    ViewerPrev,
    ViewerClose,
    Key { key: String },
    ToggleTheme,
    SelectLang { lang: String },
    CvOpen { track: CvTrack },
    CvDownload {
        #[serde(default)]
        track: Option<CvTrack>,
    },
    CvClose,
}

pub struct App {
    catalog: Catalog,
    load_error: Option<String>,
    translations: Translations,
    prefs: Preferences,
    locale: LocaleSwitch,
    filter: Filter,
    query: SearchQuery,
    grid: GridView,
    carousel: Carousel,
    modal: DetailModal,
    cv: CvViewer,
}

impl App {
    pub fn new(
        config: RuntimeConfig,
        store: Box<dyn PreferenceStore>,
        catalog: Result<Catalog, CatalogError>,
        translations: Translations,
    ) -> Self {
        let (catalog, load_error) = match catalog {
            Ok(catalog) => (catalog, None),
            Err(e) => {
                error!(error = %e, "error loading projects");
                (Catalog::default(), Some(e.to_string()))
            }
        };
        let prefs = Preferences::load(store, config.default_theme);
        let initial_lang = prefs
            .stored_lang()
            .unwrap_or_else(|| config.default_locale.clone());
        let everything = (0..catalog.len()).collect();

        Self {
            load_error,
            translations,
            locale: LocaleSwitch::new(&initial_lang, &config.default_locale),
            prefs,
            filter: Filter::All,
            query: SearchQuery::default(),
            grid: GridView::new(everything, config.initial_limit),
            carousel: Carousel::new(config.interval_ms),
            modal: DetailModal::default(),
            cv: CvViewer::new(config.cv),
            catalog,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn lang(&self) -> &str {
        self.locale.current()
    }

    pub fn theme(&self) -> Theme {
        self.prefs.theme()
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn grid(&self) -> &GridView {
        &self.grid
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn modal(&self) -> &DetailModal {
        &self.modal
    }

    pub fn cv(&self) -> &CvViewer {
        &self.cv
    }

    /// Ids of the cards currently visible in the grid.
    pub fn visible_ids(&self) -> Vec<&str> {
        self.grid
            .visible()
            .iter()
            .map(|&pos| self.catalog.projects()[pos].id.as_str())
            .collect()
    }

    /// Effects that bring the pre-rendered page into its initial state.
    pub fn init(&mut self) -> Vec<Effect> {
        let mut effects = vec![self.theme_effect()];
        if !self.translations.is_empty() {
            let requested = self.locale.current().to_string();
            let (_, translate) = self.locale.set(&requested, &self.translations, &mut self.prefs);
            effects.extend(translate);
        }

        if self.load_error.is_some() {
            effects.push(Effect::LoadError {
                region: Region::Grid,
                message: self.text(
                    "projects.loadError",
                    "Error loading projects. Please check the console for details.",
                ),
            });
            effects.push(Effect::LoadError {
                region: Region::Carousel,
                message: self.text("highlights.loadError", "Error loading featured projects."),
            });
            return effects;
        }

        info!(projects = self.catalog.len(), "page runtime ready");
        effects.extend(self.render_grid());
        effects.extend(self.reload_carousel());
        effects
    }

    pub fn handle(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::SelectFilter { filter } => {
                self.filter = filter;
                self.refilter()
            }
            Event::Search { query } => {
                self.query = SearchQuery::new(&query);
                self.refilter()
            }
            Event::ToggleExpand => {
                let toggle = self.grid.toggle();
                let mut effects = self.render_grid();
                if toggle == Toggle::Expanded {
                    effects.push(Effect::ScrollTo {
                        target: PROJECTS_ANCHOR.to_string(),
                    });
                }
                effects
            }
            Event::OpenProject { id } => self.modal.open(&self.catalog, &id),

            Event::CarouselNext => self.carousel.next(),
            Event::CarouselPrev => self.carousel.prev(),
            Event::CarouselJump { index } => self.carousel.jump_to(index),
            Event::CarouselHover { inside: true } => self.carousel.hover_enter(),
            Event::CarouselHover { inside: false } => self.carousel.hover_leave(),
            Event::TimerTick { token } => self.carousel.tick(token),

            Event::ModalNext => self.modal.next(),
            Event::ModalPrev => self.modal.prev(),
            Event::ModalJump { index } => self.modal.jump_to(index),
            Event::ModalClose => self.modal.close(),
            Event::ImageLoaded {
                index,
                width,
                height,
            } => self.modal.image_loaded(index, width, height),
            Event::ViewerOpen { index } => self.modal.open_viewer(index),
            Event::ViewerNext => self.modal.viewer_next(),
            Event::ViewerPrev => self.modal.viewer_prev(),
            Event::ViewerClose => self.modal.close_viewer(),
            Event::Key { key } => self.key(Key::from_dom(&key)),

            Event::ToggleTheme => {
                self.prefs.toggle_theme();
                vec![self.theme_effect()]
            }
            Event::SelectLang { lang } => self.select_lang(&lang),

            Event::CvOpen { track } => self.cv.open(track, self.locale.current()),
            Event::CvDownload { track } => self.cv.download(track, self.locale.current()),
            Event::CvClose => self.cv.close(),
        }
    }

    fn key(&mut self, key: Key) -> Vec<Effect> {
        if self.modal.is_open() || self.modal.viewer().is_open() {
            return self.modal.key(key);
        }
        match key {
            Key::Escape => self.cv.close(),
            _ => Vec::new(),
        }
    }

    fn select_lang(&mut self, lang: &str) -> Vec<Effect> {
        let (_, mut effects) = self.locale.set(lang, &self.translations, &mut self.prefs);
        if effects.is_empty() {
            return effects;
        }
        if self.load_error.is_none() {
            effects.push(self.expand_button());
        }
        effects.extend(self.cv.locale_changed(self.locale.current()));
        effects
    }

    fn refilter(&mut self) -> Vec<Effect> {
        if self.load_error.is_some() {
            return Vec::new();
        }
        let subset = filter::apply(self.catalog.projects(), self.filter, &self.query);
        self.grid.set_subset(subset);
        self.render_grid()
    }

    fn render_grid(&self) -> Vec<Effect> {
        vec![
            Effect::ShowCards {
                ids: self.visible_ids().into_iter().map(str::to_string).collect(),
            },
            Effect::GridEmpty {
                visible: self.grid.is_empty(),
            },
            self.expand_button(),
        ]
    }

    fn expand_button(&self) -> Effect {
        let label = if self.grid.is_expanded() {
            self.text("projects.showLess", "Show Less")
        } else {
            format!(
                "{} ({} more)",
                self.text("projects.viewAll", "View All Projects"),
                self.grid.remaining()
            )
        };
        Effect::ExpandButton {
            visible: self.grid.has_more(),
            expanded: self.grid.is_expanded(),
            label,
        }
    }

    fn reload_carousel(&mut self) -> Vec<Effect> {
        let slides = self
            .catalog
            .highlighted()
            .into_iter()
            .map(|p| p.id.clone())
            .collect();
        let empty = self.text("highlights.empty", "No featured projects yet.");
        self.carousel.reload(slides, &empty)
    }

    fn theme_effect(&self) -> Effect {
        let theme = self.prefs.theme();
        Effect::SetTheme {
            theme,
            icon: theme.icon_class().to_string(),
        }
    }

    fn text(&self, key: &str, fallback: &str) -> String {
        self.locale
            .text(&self.translations, key)
            .unwrap_or(fallback)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::MemoryStore;
    use crate::test_helpers::{project, translations_json};
    use crate::types::ProjectType;

    fn catalog() -> Catalog {
        let projects = (0..5)
            .map(|i| {
                let mut p = project(&format!("p{i}"));
                p.kind = if i % 2 == 0 { ProjectType::Unity } else { ProjectType::Dotnet };
                p.highlight = i < 2;
                p
            })
            .collect();
        Catalog::new(projects).unwrap()
    }

    fn app() -> App {
        App::new(
            RuntimeConfig::default(),
            Box::new(MemoryStore::default()),
            Ok(catalog()),
            Translations::from_json(translations_json()).unwrap(),
        )
    }

    fn expand_label(effects: &[Effect]) -> Option<&str> {
        effects.iter().find_map(|e| match e {
            Effect::ExpandButton { label, .. } => Some(label.as_str()),
            _ => None,
        })
    }

    #[test]
    fn init_renders_capped_grid_and_carousel() {
        let mut app = app();
        let effects = app.init();
        assert_eq!(effects[0].op(), "setTheme");
        assert!(effects.contains(&Effect::ShowCards {
            ids: vec!["p0".into(), "p1".into(), "p2".into()]
        }));
        assert_eq!(expand_label(&effects), Some("View All Projects (2 more)"));
        assert!(effects.iter().any(|e| e.op() == "armTimer"));
    }

    #[test]
    fn expand_scrolls_and_collapse_does_not() {
        let mut app = app();
        app.init();
        let effects = app.handle(Event::ToggleExpand);
        assert_eq!(app.visible_ids().len(), 5);
        assert_eq!(expand_label(&effects), Some("Show Less"));
        assert_eq!(
            effects.last(),
            Some(&Effect::ScrollTo {
                target: "projects".into()
            })
        );
        let effects = app.handle(Event::ToggleExpand);
        assert!(!effects.iter().any(|e| e.op() == "scrollTo"));
    }

    #[test]
    fn filter_change_collapses_grid() {
        let mut app = app();
        app.init();
        app.handle(Event::ToggleExpand);
        app.handle(Event::SelectFilter {
            filter: Filter::Kind(ProjectType::Unity),
        });
        assert!(!app.grid().is_expanded());
        assert_eq!(app.visible_ids(), vec!["p0", "p2", "p4"]);
    }

    #[test]
    fn search_without_match_shows_empty_state() {
        let mut app = app();
        app.init();
        let effects = app.handle(Event::Search {
            query: "zzz-no-such".into(),
        });
        assert!(effects.contains(&Effect::GridEmpty { visible: true }));
        assert!(effects.contains(&Effect::ShowCards { ids: Vec::new() }));
    }

    #[test]
    fn load_failure_shows_both_placeholders() {
        let mut app = App::new(
            RuntimeConfig::default(),
            Box::new(MemoryStore::default()),
            Err(CatalogError::DuplicateId("x".into())),
            Translations::default(),
        );
        let effects = app.init();
        let regions: Vec<Region> = effects
            .iter()
            .filter_map(|e| match e {
                Effect::LoadError { region, .. } => Some(*region),
                _ => None,
            })
            .collect();
        assert_eq!(regions, vec![Region::Grid, Region::Carousel]);
        assert!(app.handle(Event::Search { query: "a".into() }).is_empty());
        assert!(app.handle(Event::OpenProject { id: "p0".into() }).is_empty());
    }

    #[test]
    fn language_switch_relabels_expand_button() {
        let mut app = app();
        app.init();
        let effects = app.handle(Event::SelectLang { lang: "tr".into() });
        assert_eq!(effects[0].op(), "translate");
        assert_eq!(expand_label(&effects), Some("Tüm Projeler (2 more)"));
        assert_eq!(app.lang(), "tr");
    }

    #[test]
    fn open_cv_follows_language() {
        let mut app = app();
        app.init();
        app.handle(Event::CvOpen {
            track: CvTrack::Unity,
        });
        let effects = app.handle(Event::SelectLang { lang: "tr".into() });
        assert_eq!(
            effects.last(),
            Some(&Effect::ShowCv {
                src: "assets/docs/CV_LONG_TR_Unity_GameDeveloper.html".into()
            })
        );
        assert_eq!(
            app.handle(Event::Key {
                key: "Escape".into()
            }),
            vec![Effect::HideCv]
        );
    }

    #[test]
    fn theme_toggle_flips_icon() {
        let mut app = app();
        let effects = app.handle(Event::ToggleTheme);
        assert_eq!(
            effects,
            vec![Effect::SetTheme {
                theme: Theme::Light,
                icon: "fas fa-sun".into()
            }]
        );
    }

    #[test]
    fn stored_language_is_restored() {
        let store = MemoryStore::with(&[("lang", "tr")]);
        let mut app = App::new(
            RuntimeConfig::default(),
            Box::new(store),
            Ok(catalog()),
            Translations::from_json(translations_json()).unwrap(),
        );
        let effects = app.init();
        assert!(matches!(&effects[1], Effect::Translate { lang, .. } if lang == "tr"));
    }

    #[test]
    fn events_deserialize_from_host_json() {
        let event: Event = serde_json::from_str(r#"{"type":"selectFilter","filter":"opensource"}"#).unwrap();
        assert_eq!(
            event,
            Event::SelectFilter {
                filter: Filter::OpenSource
            }
        );
        let event: Event =
            serde_json::from_str(r#"{"type":"imageLoaded","index":1,"width":600,"height":900}"#).unwrap();
        assert!(matches!(event, Event::ImageLoaded { height: 900, .. }));
        let event: Event = serde_json::from_str(r#"{"type":"cvDownload"}"#).unwrap();
        assert_eq!(event, Event::CvDownload { track: None });
    }

    #[test]
    fn fetched_candidates_pick_first_parsable() {
        let fetched = vec![
            FetchedCandidate {
                candidate: "a.json".into(),
                body: None,
                error: Some("HTTP 404".into()),
            },
            FetchedCandidate {
                candidate: "b.json".into(),
                body: Some("{\"nope\": true}".into()),
                error: None,
            },
            FetchedCandidate {
                candidate: "c.json".into(),
                body: Some(r#"{"projects":[{"id":"x","name":"X","category":"Tools","description":"d"}]}"#.into()),
                error: None,
            },
        ];
        let (used, catalog) = load_fetched(&fetched).unwrap();
        assert_eq!(used, "c.json");
        assert_eq!(catalog.len(), 1);
    }
}
