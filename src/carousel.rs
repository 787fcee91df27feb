//! Highlights carousel over the projects flagged `highlight`.
//!
//! The slide index is a plain ring over `0..N`. Auto-advance uses a single
//! host-side interval that the carousel controls through [`Effect::ArmTimer`]
//! and [`Effect::CancelTimer`]. Each arm hands out a fresh token and only a
//! tick carrying the current token advances the carousel, so a timer the host
//! failed to clear can never double-step.
//!
//! ```text
//!            hover enter ──► cancel
//!            hover leave ──► arm
//! prev / next / dot jump ──► move, cancel, arm
//!          tick(current) ──► move
//!            tick(stale) ──► ignored
//! ```
//!
//! With zero or one slide there is nothing to navigate: controls are hidden
//! and the timer is never armed.

use crate::effect::Effect;

pub const DEFAULT_INTERVAL_MS: u32 = 5000;

/// Singleton auto-advance timer, owned by the host and addressed by token.
#[derive(Debug, Clone)]
pub struct AutoAdvance {
    interval_ms: u32,
    armed: Option<u64>,
    issued: u64,
}

impl AutoAdvance {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            armed: None,
            issued: 0,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Arm with a fresh token. The host replaces any running interval.
    pub fn arm(&mut self) -> Effect {
        self.issued += 1;
        self.armed = Some(self.issued);
        Effect::ArmTimer {
            token: self.issued,
            interval_ms: self.interval_ms,
        }
    }

    pub fn cancel(&mut self) -> Option<Effect> {
        self.armed.take().map(|_| Effect::CancelTimer)
    }

    pub fn accepts(&self, token: u64) -> bool {
        self.armed == Some(token)
    }
}

#[derive(Debug, Clone)]
pub struct Carousel {
    slides: Vec<String>,
    index: usize,
    hovered: bool,
    timer: AutoAdvance,
}

impl Carousel {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            slides: Vec::new(),
            index: 0,
            hovered: false,
            timer: AutoAdvance::new(interval_ms),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Project id of the active slide.
    pub fn current(&self) -> Option<&str> {
        self.slides.get(self.index).map(String::as_str)
    }

    pub fn timer(&self) -> &AutoAdvance {
        &self.timer
    }

    fn navigable(&self) -> bool {
        self.slides.len() > 1
    }

    /// Replace the slide set (data load or reload): index back to 0, dots rebuilt.
    pub fn reload(&mut self, slides: Vec<String>, empty_message: &str) -> Vec<Effect> {
        let mut effects = Vec::new();
        effects.extend(self.timer.cancel());
        self.slides = slides;
        self.index = 0;

        if self.slides.is_empty() {
            effects.push(Effect::CarouselEmpty {
                message: empty_message.to_string(),
            });
            return effects;
        }

        effects.push(Effect::CarouselRebuild {
            slides: self.slides.len(),
            controls: self.navigable(),
        });
        effects.push(Effect::ActivateSlide {
            index: 0,
            previous: 0,
            backwards: false,
        });
        if self.navigable() && !self.hovered {
            effects.push(self.timer.arm());
        }
        effects
    }

    pub fn next(&mut self) -> Vec<Effect> {
        if !self.navigable() {
            return Vec::new();
        }
        let target = (self.index + 1) % self.slides.len();
        self.manual_move(target, false)
    }

    pub fn prev(&mut self) -> Vec<Effect> {
        if !self.navigable() {
            return Vec::new();
        }
        let len = self.slides.len();
        let target = (self.index + len - 1) % len;
        self.manual_move(target, true)
    }

    /// Jump to slide `k`; out-of-range `k` is ignored.
    pub fn jump_to(&mut self, k: usize) -> Vec<Effect> {
        if !self.navigable() || k >= self.slides.len() {
            return Vec::new();
        }
        self.manual_move(k, false)
    }

    fn manual_move(&mut self, target: usize, backwards: bool) -> Vec<Effect> {
        let mut effects = vec![self.activate(target, backwards)];
        effects.extend(self.timer.cancel());
        effects.push(self.timer.arm());
        effects
    }

    fn activate(&mut self, target: usize, backwards: bool) -> Effect {
        let previous = self.index;
        self.index = target;
        Effect::ActivateSlide {
            index: target,
            previous,
            backwards,
        }
    }

    /// Timer callback from the host.
    pub fn tick(&mut self, token: u64) -> Vec<Effect> {
        if !self.navigable() || !self.timer.accepts(token) {
            return Vec::new();
        }
        let target = (self.index + 1) % self.slides.len();
        vec![self.activate(target, false)]
    }

    pub fn hover_enter(&mut self) -> Vec<Effect> {
        self.hovered = true;
        self.timer.cancel().into_iter().collect()
    }

    pub fn hover_leave(&mut self) -> Vec<Effect> {
        self.hovered = false;
        if !self.navigable() {
            return Vec::new();
        }
        let mut effects: Vec<Effect> = self.timer.cancel().into_iter().collect();
        effects.push(self.timer.arm());
        effects
    }
}
