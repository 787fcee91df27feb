//! # Simple Folio
//!
//! A static site generator and page runtime for developer portfolios. A
//! project catalog and a translation table become a single page with a
//! featured-projects carousel, a filterable and searchable project grid,
//! project detail modals with trailers and screenshots, a theme and language
//! switch, and a CV viewer.
//!
//! # Architecture: Build Half and Page Runtime
//!
//! ```text
//! build     content/  →  dist/index.html + data/*.json + folio.js   (native CLI)
//! runtime   DOM event →  App::handle  →  Vec<Effect>  →  DOM        (wasm, in the page)
//! ```
//!
//! The generator renders every element the page will ever show: all cards,
//! all slides and one template per project modal. The runtime never builds
//! markup. It is a set of plain state machines owned by [`app::App`]; each
//! event produces an ordered list of [`effect::Effect`]s that the host glue
//! applies to the retained DOM. Because the state machines never touch the
//! DOM, the whole page behaviour is tested natively.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | Catalog entry and project type |
//! | [`catalog`] | Catalog store and first-usable-candidate loading |
//! | [`filter`] | Category filter and free-text search |
//! | [`grid`] | Capped grid with the expand toggle |
//! | [`carousel`] | Featured-projects carousel and its auto-advance timer tokens |
//! | [`media`] | Trailer embeds, media sequences, player commands |
//! | [`modal`] | Detail modal and the image viewer stacked above it |
//! | [`prefs`] | Theme and stored preferences |
//! | [`i18n`] | Translation table lookup and the locale switch |
//! | [`cv`] | CV document paths and the CV viewer |
//! | [`effect`] | The runtime's output vocabulary |
//! | [`app`] | Event dispatch over all of the above |
//! | `config` | `config.toml` loading, validation and color CSS (native only) |
//! | `generate` | Maud page rendering, data files and asset copy (native only) |
//! | `output` | CLI output formatting (native only) |
//!
//! # Design Decisions
//!
//! ## Host-Owned Timer
//!
//! The carousel never runs a timer itself. It hands the host a fresh token
//! with every arm; ticks with a stale token are dropped. A re-arm therefore
//! cannot leave two timers advancing the carousel.
//!
//! ## Player Commands Only Where Accepted
//!
//! Embedded players receive `postMessage` commands only when their URL
//! enables the JS API. Anything else is stopped by clearing its source.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/): malformed markup
//! is a compile error and all interpolation is escaped, which matters here
//! because catalog text is author-supplied.

pub mod app;
pub mod carousel;
pub mod catalog;
pub mod cv;
pub mod effect;
pub mod filter;
pub mod grid;
pub mod i18n;
pub mod media;
pub mod modal;
pub mod prefs;
pub mod types;

#[cfg(not(target_arch = "wasm32"))]
pub mod config;
#[cfg(not(target_arch = "wasm32"))]
pub mod generate;
#[cfg(not(target_arch = "wasm32"))]
pub mod output;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

#[cfg(test)]
pub(crate) mod test_helpers;
