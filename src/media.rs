//! Media sequences for the project detail modal.
//!
//! A project's media sequence is its trailer (when the URL converts to an
//! embeddable player) followed by its screenshots. Video items are embedded
//! player frames that are controlled by cross-frame messages; this module
//! decides which frames can receive those messages at all.

use crate::types::Project;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static YOUTUBE_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:youtube\.com/watch\?(?:[^#]*&)?v=|youtu\.be/|youtube\.com/embed/)([A-Za-z0-9_-]+)")
        .expect("static regex")
});

/// Query parameter that makes a YouTube frame accept `postMessage` commands.
const JS_API_PARAM: &str = "enablejsapi=1";

/// Convert a YouTube watch, short or embed URL into an autoplaying embed URL.
///
/// Returns `None` for anything else; such trailers are left out of the
/// sequence rather than embedded blindly.
pub fn youtube_embed(url: &str) -> Option<String> {
    let id = YOUTUBE_ID.captures(url)?.get(1)?.as_str();
    Some(format!(
        "https://www.youtube.com/embed/{id}?autoplay=1&mute=0&rel=0&modestbranding=1&{JS_API_PARAM}"
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MediaItem {
    Video { embed: String },
    Image { url: String },
}

impl MediaItem {
    pub fn is_video(&self) -> bool {
        matches!(self, MediaItem::Video { .. })
    }

    pub fn url(&self) -> &str {
        match self {
            MediaItem::Video { embed } => embed,
            MediaItem::Image { url } => url,
        }
    }
}

/// Trailer first (if convertible), then screenshots in catalog order.
pub fn sequence(project: &Project) -> Vec<MediaItem> {
    let trailer = project
        .trailer
        .as_deref()
        .and_then(youtube_embed)
        .map(|embed| MediaItem::Video { embed });
    trailer
        .into_iter()
        .chain(
            project
                .screenshots
                .iter()
                .map(|url| MediaItem::Image { url: url.clone() }),
        )
        .collect()
}

/// Element id of the player frame for the video at `index`.
pub fn frame_id(index: usize) -> String {
    format!("trailer-frame-{index}")
}

/// Player commands understood by the embedded frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    Play,
    Pause,
}

impl PlayerCommand {
    fn func(self) -> &'static str {
        match self {
            PlayerCommand::Play => "playVideo",
            PlayerCommand::Pause => "pauseVideo",
        }
    }

    /// Wire message posted to the frame.
    pub fn message(self) -> String {
        #[derive(Serialize)]
        struct Wire {
            event: &'static str,
            func: &'static str,
            args: &'static str,
        }
        serde_json::to_string(&Wire {
            event: "command",
            func: self.func(),
            args: "",
        })
        .unwrap_or_default()
    }
}

/// A player frame and what it can be told to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedTarget {
    pub frame: String,
    pub src: String,
}

impl EmbedTarget {
    pub fn new(index: usize, src: &str) -> Self {
        Self {
            frame: frame_id(index),
            src: src.to_string(),
        }
    }

    /// Only frames loaded with the JS API enabled listen for commands.
    pub fn accepts_commands(&self) -> bool {
        self.src
            .split(['?', '&'])
            .skip(1)
            .any(|param| param == JS_API_PARAM)
    }
}

/// Image orientation from natural dimensions. Square counts as landscape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    pub fn from_size(width: u32, height: u32) -> Self {
        if height > width {
            Orientation::Portrait
        } else {
            Orientation::Landscape
        }
    }

    pub fn is_portrait(self) -> bool {
        self == Orientation::Portrait
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
        }
    }
}
