//! Effects: the page runtime's only output.
//!
//! Components never touch the DOM. Each state transition returns the effects
//! that describe the new observable state, in the order the host must apply
//! them. The host (the JS glue shipped as `folio.js`) owns the retained
//! elements, the singleton carousel timer, `postMessage` delivery and the
//! scroll position; it swallows delivery failures of player messages.
//!
//! Effects serialize as `{"op": "...", ...}` objects with camelCase fields.

use crate::prefs::Theme;
use serde::Serialize;
use std::collections::BTreeMap;

/// Placeholder regions that can show a load error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Region {
    Grid,
    Carousel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Effect {
    /// Show exactly these cards, in this order; hide every other card.
    ShowCards { ids: Vec<String> },
    /// Toggle the "no projects found" message.
    GridEmpty { visible: bool },
    ExpandButton {
        visible: bool,
        expanded: bool,
        label: String,
    },
    /// Scroll the viewport to the element with this id.
    ScrollTo { target: String },
    /// Show a load-error placeholder in place of a region.
    LoadError { region: Region, message: String },

    /// Rebuild the dots (one per slide) and show/hide prev/next/dots.
    CarouselRebuild { slides: usize, controls: bool },
    CarouselEmpty { message: String },
    ActivateSlide {
        index: usize,
        previous: usize,
        backwards: bool,
    },
    /// Replace the carousel timer. The host clears any running interval first
    /// and then calls `tick(token)` every `interval_ms`.
    ArmTimer { token: u64, interval_ms: u32 },
    CancelTimer,

    /// Clone the pre-rendered body for this project into the modal and show it.
    ShowModal { project_id: String, media_count: usize },
    /// Activate one media item; `counter` is `None` for single-item sequences.
    ActivateMedia {
        index: usize,
        counter: Option<String>,
        navigation: bool,
    },
    /// Portrait/landscape class for the image at `index` and the modal header.
    Orientation { index: usize, portrait: bool },
    /// Cross-frame command to an embedded player frame.
    PostToFrame { frame: String, message: String },
    /// Clear a frame's source so playback stops unconditionally.
    UnloadFrame { frame: String },
    /// Restore a frame's source after an unload.
    LoadFrame { frame: String, src: String },
    HideModal,

    ShowViewer {
        url: String,
        alt: String,
        counter: String,
        navigation: bool,
    },
    HideViewer,

    SetTheme { theme: Theme, icon: String },
    /// Apply resolved texts to every element bound to one of these keys.
    Translate {
        lang: String,
        entries: BTreeMap<String, String>,
    },

    ShowCv { src: String },
    HideCv,
    Download { href: String, filename: String },
}

impl Effect {
    pub fn op(&self) -> &'static str {
        match self {
            Effect::ShowCards { .. } => "showCards",
            Effect::GridEmpty { .. } => "gridEmpty",
            Effect::ExpandButton { .. } => "expandButton",
            Effect::ScrollTo { .. } => "scrollTo",
            Effect::LoadError { .. } => "loadError",
            Effect::CarouselRebuild { .. } => "carouselRebuild",
            Effect::CarouselEmpty { .. } => "carouselEmpty",
            Effect::ActivateSlide { .. } => "activateSlide",
            Effect::ArmTimer { .. } => "armTimer",
            Effect::CancelTimer => "cancelTimer",
            Effect::ShowModal { .. } => "showModal",
            Effect::ActivateMedia { .. } => "activateMedia",
            Effect::Orientation { .. } => "orientation",
            Effect::PostToFrame { .. } => "postToFrame",
            Effect::UnloadFrame { .. } => "unloadFrame",
            Effect::LoadFrame { .. } => "loadFrame",
            Effect::HideModal => "hideModal",
            Effect::ShowViewer { .. } => "showViewer",
            Effect::HideViewer => "hideViewer",
            Effect::SetTheme { .. } => "setTheme",
            Effect::Translate { .. } => "translate",
            Effect::ShowCv { .. } => "showCv",
            Effect::HideCv => "hideCv",
            Effect::Download { .. } => "download",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_op_tag_and_camel_case_fields() {
        let effect = Effect::ArmTimer {
            token: 3,
            interval_ms: 5000,
        };
        let json = serde_json::to_value(&effect).unwrap();
        assert_eq!(json["op"], "armTimer");
        assert_eq!(json["intervalMs"], 5000);
        assert_eq!(json["op"], effect.op());
    }

    #[test]
    fn unit_variants_serialize_as_bare_tag() {
        let json = serde_json::to_string(&Effect::HideModal).unwrap();
        assert_eq!(json, r#"{"op":"hideModal"}"#);
    }

    #[test]
    fn option_fields_serialize_as_null() {
        let json = serde_json::to_value(Effect::ActivateMedia {
            index: 0,
            counter: None,
            navigation: false,
        })
        .unwrap();
        assert!(json["counter"].is_null());
    }

    #[test]
    fn region_is_camel_case() {
        let json = serde_json::to_value(Effect::LoadError {
            region: Region::Carousel,
            message: "x".into(),
        })
        .unwrap();
        assert_eq!(json["region"], "carousel");
    }
}
