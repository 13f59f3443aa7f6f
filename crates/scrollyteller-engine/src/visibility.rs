//! Viewport visibility tracking.
//!
//! [`VisibilityController`] turns a stream of intersection ratios into the
//! `is_visible` signal, honouring the threshold and the reveal-once rule.
//! [`IntersectionSource`] is the observer capability hosts provide; every
//! subscription is released when its [`Subscription`] guard is dropped.
//! [`ScrollPollingSource`] is the host-independent source that derives
//! ratios from scroll position and element geometry.

use std::cell::Cell;
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum VisibilityError {
    #[error("visibility threshold must be within [0, 1], got {0}")]
    ThresholdOutOfRange(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityConfig {
    threshold: f64,
    once: bool,
}

impl VisibilityConfig {
    /// Reveal when a fifth of the element is on screen, then stay revealed
    pub const REVEAL_ONCE: Self = Self {
        threshold: 0.2,
        once: true,
    };

    pub fn new(threshold: f64, once: bool) -> Result<Self, VisibilityError> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(VisibilityError::ThresholdOutOfRange(threshold));
        }
        Ok(Self { threshold, once })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn once(&self) -> bool {
        self.once
    }

    /// Whether an intersection ratio meets the threshold.
    ///
    /// A zero threshold means "any part on screen", so a ratio of exactly
    /// zero never counts.
    pub fn is_met_by(&self, ratio: f64) -> bool {
        let ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
        if self.threshold == 0.0 {
            ratio > 0.0
        } else {
            ratio >= self.threshold
        }
    }
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self::REVEAL_ONCE
    }
}

/// View-local state owned by one mounted element
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibilityState {
    pub has_been_revealed: bool,
}

#[derive(Debug, Clone)]
pub struct VisibilityController {
    config: VisibilityConfig,
    state: VisibilityState,
    visible: bool,
}

impl VisibilityController {
    pub fn new(config: VisibilityConfig) -> Self {
        Self {
            config,
            state: VisibilityState::default(),
            visible: false,
        }
    }

    pub fn config(&self) -> VisibilityConfig {
        self.config
    }

    pub fn state(&self) -> VisibilityState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feed the latest intersection ratio and return the resulting signal
    pub fn observe(&mut self, ratio: f64) -> bool {
        if self.config.once && self.state.has_been_revealed {
            return self.visible;
        }

        self.visible = self.config.is_met_by(ratio);
        if self.visible {
            self.state.has_been_revealed = true;
        }
        self.visible
    }
}

/// Vertical extent of an observed element, in page coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementBounds {
    pub top: f64,
    pub height: f64,
}

impl ElementBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Fraction of this element inside the viewport `[viewport_top, viewport_top + viewport_height)`
    pub fn intersection_ratio(&self, viewport_top: f64, viewport_height: f64) -> f64 {
        let viewport_bottom = viewport_top + viewport_height;
        let bottom = self.top + self.height;

        if self.height <= 0.0 {
            let inside = self.top >= viewport_top && self.top < viewport_bottom;
            return if inside { 1.0 } else { 0.0 };
        }

        let overlap = bottom.min(viewport_bottom) - self.top.max(viewport_top);
        (overlap / self.height).clamp(0.0, 1.0)
    }
}

/// Handle identifying one observed element within its source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObservationId(u64);

/// Live observation of one element.
///
/// Dropping the guard ends the observation; the source stops delivering
/// updates for it and frees its bookkeeping on the next pass.
#[derive(Debug)]
pub struct Subscription {
    id: ObservationId,
    live: Rc<Cell<bool>>,
    visible: Rc<Cell<bool>>,
}

impl Subscription {
    pub fn id(&self) -> ObservationId {
        self.id
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.live.set(false);
    }
}

/// A change of an observed element's signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityChange {
    pub id: ObservationId,
    pub is_visible: bool,
}

/// Capability to watch elements cross a visibility threshold
pub trait IntersectionSource {
    fn subscribe(&mut self, element: ElementBounds, config: VisibilityConfig) -> Subscription;

    /// Number of observations that have not been released
    fn active_subscriptions(&self) -> usize;
}

struct Observed {
    id: ObservationId,
    bounds: ElementBounds,
    controller: VisibilityController,
    live: Rc<Cell<bool>>,
    visible: Rc<Cell<bool>>,
}

/// Polls element geometry against a scroll position
pub struct ScrollPollingSource {
    viewport_height: f64,
    next_id: u64,
    observed: Vec<Observed>,
}

impl ScrollPollingSource {
    pub fn new(viewport_height: f64) -> Self {
        Self {
            viewport_height,
            next_id: 0,
            observed: Vec::new(),
        }
    }

    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    /// Recompute every live observation for the viewport starting at `scroll_top`
    pub fn poll(&mut self, scroll_top: f64) -> Vec<VisibilityChange> {
        self.observed.retain(|entry| entry.live.get());

        let mut changes = Vec::new();
        for entry in &mut self.observed {
            let ratio = entry
                .bounds
                .intersection_ratio(scroll_top, self.viewport_height);
            let was_visible = entry.controller.is_visible();
            let is_visible = entry.controller.observe(ratio);
            if is_visible != was_visible {
                entry.visible.set(is_visible);
                changes.push(VisibilityChange {
                    id: entry.id,
                    is_visible,
                });
            }
        }
        changes
    }
}

impl IntersectionSource for ScrollPollingSource {
    fn subscribe(&mut self, element: ElementBounds, config: VisibilityConfig) -> Subscription {
        let id = ObservationId(self.next_id);
        self.next_id += 1;

        let live = Rc::new(Cell::new(true));
        let visible = Rc::new(Cell::new(false));
        self.observed.push(Observed {
            id,
            bounds: element,
            controller: VisibilityController::new(config),
            live: Rc::clone(&live),
            visible: Rc::clone(&visible),
        });

        Subscription { id, live, visible }
    }

    fn active_subscriptions(&self) -> usize {
        self.observed.iter().filter(|entry| entry.live.get()).count()
    }
}
