//! Project detail modal and the full-size image viewer stacked above it.
//!
//! The modal owns the media sequence of the open project and a cursor into
//! it. The viewer is independent: it pages through the image-only
//! subsequence with its own cursor and sits above the modal, so it takes
//! keyboard input first.
//!
//! Playback rules for video items:
//! - leaving a video pauses it before the next item becomes visible;
//! - activating a video resumes it;
//! - closing the modal pauses and then unloads every video frame, so nothing
//!   keeps playing behind a hidden element.
//!
//! Frames that do not accept player commands are unloaded instead of paused
//! and reloaded when they become active again.

use crate::catalog::Catalog;
use crate::effect::Effect;
use crate::media::{self, EmbedTarget, MediaItem, Orientation, PlayerCommand};
use tracing::error;

/// Keys the overlays react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Escape,
    Other,
}

impl Key {
    /// Parse a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Self {
        match key {
            "ArrowLeft" => Key::Left,
            "ArrowRight" => Key::Right,
            "Escape" | "Esc" => Key::Escape,
            _ => Key::Other,
        }
    }
}

fn counter(position: usize, total: usize) -> Option<String> {
    (total > 1).then(|| format!("{} / {}", position + 1, total))
}

#[derive(Debug, Clone, Default)]
pub struct ImageViewer {
    images: Vec<String>,
    cursor: usize,
    open: bool,
}

impl ImageViewer {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Open on the image at `media_index` of `media`. Videos don't open the viewer.
    pub fn open(&mut self, media: &[MediaItem], media_index: usize) -> Vec<Effect> {
        match media.get(media_index) {
            Some(MediaItem::Image { .. }) => {}
            _ => return Vec::new(),
        }
        self.images = media
            .iter()
            .filter_map(|item| match item {
                MediaItem::Image { url } => Some(url.clone()),
                MediaItem::Video { .. } => None,
            })
            .collect();
        self.cursor = media[..media_index].iter().filter(|m| !m.is_video()).count();
        self.open = true;
        vec![self.show()]
    }

    fn show(&self) -> Effect {
        let total = self.images.len();
        Effect::ShowViewer {
            url: self.images[self.cursor].clone(),
            alt: format!("Full size image {}", self.cursor + 1),
            counter: format!("{} / {}", self.cursor + 1, total),
            navigation: total > 1,
        }
    }

    pub fn next(&mut self) -> Vec<Effect> {
        if !self.open || self.images.len() <= 1 {
            return Vec::new();
        }
        self.cursor = (self.cursor + 1) % self.images.len();
        vec![self.show()]
    }

    pub fn prev(&mut self) -> Vec<Effect> {
        if !self.open || self.images.len() <= 1 {
            return Vec::new();
        }
        let len = self.images.len();
        self.cursor = (self.cursor + len - 1) % len;
        vec![self.show()]
    }

    pub fn close(&mut self) -> Vec<Effect> {
        if !self.open {
            return Vec::new();
        }
        self.open = false;
        self.images.clear();
        self.cursor = 0;
        vec![Effect::HideViewer]
    }
}

#[derive(Debug, Clone)]
struct OpenProject {
    project_id: String,
    media: Vec<MediaItem>,
    cursor: usize,
    /// Natural size reported by the host once an image has loaded.
    sizes: Vec<Option<(u32, u32)>>,
    /// Video frames whose source was cleared to stop them.
    unloaded: Vec<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct DetailModal {
    open: Option<OpenProject>,
    viewer: ImageViewer,
}

impl DetailModal {
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn project_id(&self) -> Option<&str> {
        self.open.as_ref().map(|o| o.project_id.as_str())
    }

    pub fn cursor(&self) -> Option<usize> {
        self.open.as_ref().map(|o| o.cursor)
    }

    pub fn media(&self) -> &[MediaItem] {
        self.open.as_ref().map(|o| o.media.as_slice()).unwrap_or_default()
    }

    pub fn viewer(&self) -> &ImageViewer {
        &self.viewer
    }

    /// Open the modal on `project_id`. Unknown ids are logged and ignored.
    pub fn open(&mut self, catalog: &Catalog, project_id: &str) -> Vec<Effect> {
        let Some(project) = catalog.get(project_id) else {
            error!(project_id, "project not found");
            return Vec::new();
        };

        let mut effects = Vec::new();
        let playing = self
            .open
            .as_ref()
            .and_then(|o| o.media.iter().position(MediaItem::is_video));
        if let Some(index) = playing {
            effects.extend(self.stop(index));
        }
        effects.extend(self.viewer.close());

        let media = media::sequence(project);
        let len = media.len();
        self.open = Some(OpenProject {
            project_id: project.id.clone(),
            media,
            cursor: 0,
            sizes: vec![None; len],
            unloaded: vec![false; len],
        });

        effects.push(Effect::ShowModal {
            project_id: project.id.clone(),
            media_count: len,
        });
        if len > 0 {
            effects.push(Effect::ActivateMedia {
                index: 0,
                counter: counter(0, len),
                navigation: len > 1,
            });
        }
        effects
    }

    pub fn next(&mut self) -> Vec<Effect> {
        let target = match &self.open {
            Some(o) if o.media.len() > 1 => (o.cursor + 1) % o.media.len(),
            _ => return Vec::new(),
        };
        self.move_to(target)
    }

    pub fn prev(&mut self) -> Vec<Effect> {
        let target = match &self.open {
            Some(o) if o.media.len() > 1 => (o.cursor + o.media.len() - 1) % o.media.len(),
            _ => return Vec::new(),
        };
        self.move_to(target)
    }

    pub fn jump_to(&mut self, index: usize) -> Vec<Effect> {
        match &self.open {
            Some(o) if index < o.media.len() && index != o.cursor => {}
            _ => return Vec::new(),
        }
        self.move_to(index)
    }

    fn move_to(&mut self, target: usize) -> Vec<Effect> {
        let Some(current) = self.open.as_ref().map(|o| o.cursor) else {
            return Vec::new();
        };
        let mut effects = self.stop(current);
        let Some(open) = self.open.as_mut() else {
            return effects;
        };
        open.cursor = target;
        let len = open.media.len();
        effects.push(Effect::ActivateMedia {
            index: target,
            counter: counter(target, len),
            navigation: len > 1,
        });
        effects.extend(self.resume(target));
        let size = self.open.as_ref().and_then(|o| o.sizes[target]);
        if let Some((w, h)) = size {
            effects.push(Effect::Orientation {
                index: target,
                portrait: Orientation::from_size(w, h).is_portrait(),
            });
        }
        effects
    }

    /// Pause (or unload) the video at `index`. Images need nothing.
    fn stop(&mut self, index: usize) -> Vec<Effect> {
        let Some(open) = self.open.as_mut() else {
            return Vec::new();
        };
        let Some(MediaItem::Video { embed }) = open.media.get(index) else {
            return Vec::new();
        };
        let target = EmbedTarget::new(index, embed);
        if target.accepts_commands() {
            vec![Effect::PostToFrame {
                frame: target.frame,
                message: PlayerCommand::Pause.message(),
            }]
        } else {
            open.unloaded[index] = true;
            vec![Effect::UnloadFrame {
                frame: target.frame,
            }]
        }
    }

    fn resume(&mut self, index: usize) -> Vec<Effect> {
        let Some(open) = self.open.as_mut() else {
            return Vec::new();
        };
        let Some(MediaItem::Video { embed }) = open.media.get(index) else {
            return Vec::new();
        };
        let target = EmbedTarget::new(index, embed);
        if std::mem::take(&mut open.unloaded[index]) {
            // A reloaded frame autoplays from its embed URL.
            return vec![Effect::LoadFrame {
                frame: target.frame,
                src: target.src,
            }];
        }
        if target.accepts_commands() {
            vec![Effect::PostToFrame {
                frame: target.frame,
                message: PlayerCommand::Play.message(),
            }]
        } else {
            Vec::new()
        }
    }

    /// The host reports an image's natural size after it loaded.
    pub fn image_loaded(&mut self, index: usize, width: u32, height: u32) -> Vec<Effect> {
        let Some(open) = self.open.as_mut() else {
            return Vec::new();
        };
        if !matches!(open.media.get(index), Some(MediaItem::Image { .. })) {
            return Vec::new();
        }
        open.sizes[index] = Some((width, height));
        if open.cursor != index {
            return Vec::new();
        }
        vec![Effect::Orientation {
            index,
            portrait: Orientation::from_size(width, height).is_portrait(),
        }]
    }

    /// Force-stop every video, close the viewer and drop the cached sequence.
    pub fn close(&mut self) -> Vec<Effect> {
        let Some(open) = self.open.take() else {
            return Vec::new();
        };
        let mut effects = self.viewer.close();
        for (index, item) in open.media.iter().enumerate() {
            if let MediaItem::Video { embed } = item {
                let target = EmbedTarget::new(index, embed);
                if target.accepts_commands() && !open.unloaded[index] {
                    effects.push(Effect::PostToFrame {
                        frame: target.frame.clone(),
                        message: PlayerCommand::Pause.message(),
                    });
                }
                effects.push(Effect::UnloadFrame {
                    frame: target.frame,
                });
            }
        }
        effects.push(Effect::HideModal);
        effects
    }

    pub fn open_viewer(&mut self, media_index: usize) -> Vec<Effect> {
        match &self.open {
            Some(open) => self.viewer.open(&open.media, media_index),
            None => Vec::new(),
        }
    }

    pub fn viewer_next(&mut self) -> Vec<Effect> {
        self.viewer.next()
    }

    pub fn viewer_prev(&mut self) -> Vec<Effect> {
        self.viewer.prev()
    }

    pub fn close_viewer(&mut self) -> Vec<Effect> {
        self.viewer.close()
    }

    /// Keyboard routing: the viewer, when open, takes priority over the modal.
    pub fn key(&mut self, key: Key) -> Vec<Effect> {
        if self.viewer.is_open() {
            return match key {
                Key::Left => self.viewer.prev(),
                Key::Right => self.viewer.next(),
                Key::Escape => self.viewer.close(),
                Key::Other => Vec::new(),
            };
        }
        if self.is_open() {
            return match key {
                Key::Left => self.prev(),
                Key::Right => self.next(),
                Key::Escape => self.close(),
                Key::Other => Vec::new(),
            };
        }
        Vec::new()
    }
}
