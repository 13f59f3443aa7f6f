//! Headless scroll-through of a laid-out narrative.
//!
//! Tracks the scroll offset, reports which pinned background is stuck to
//! the viewport, and reveals fragments through a [`ScrollPollingSource`].
//! Each fragment is observed over its whole slot.

use crate::layout::{LayoutPlan, PlannedSection, VIEWPORT_VH};
use crate::visibility::{
    ElementBounds, IntersectionSource, ScrollPollingSource, Subscription, VisibilityChange,
    VisibilityConfig,
};

/// Where the viewport sits relative to the plan's sections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinState {
    /// Above the first section
    Hero,
    /// A pinned background is stuck to the viewport
    Pinned { index: usize },
    /// Normal flow inside a section (full-bleed, or a pinned section releasing)
    Flowing { index: usize },
    /// Past the last section
    End,
}

struct TrackedFragment {
    section_index: usize,
    fragment_index: usize,
    subscription: Subscription,
}

pub struct ScrollSimulation {
    plan: LayoutPlan,
    source: ScrollPollingSource,
    fragments: Vec<TrackedFragment>,
    scroll_top_vh: f32,
}

impl ScrollSimulation {
    pub fn new(plan: LayoutPlan) -> Self {
        let mut source = ScrollPollingSource::new(VIEWPORT_VH as f64);
        let mut fragments = Vec::new();

        for section in &plan.sections {
            for (fragment_index, slot) in section.layout.slots().iter().enumerate() {
                let bounds = ElementBounds::new(
                    (section.offset_vh as f32 + slot.top_vh) as f64,
                    slot.height_vh as f64,
                );
                fragments.push(TrackedFragment {
                    section_index: section.index,
                    fragment_index,
                    subscription: source.subscribe(bounds, VisibilityConfig::REVEAL_ONCE),
                });
            }
        }

        let mut simulation = Self {
            plan,
            source,
            fragments,
            scroll_top_vh: 0.0,
        };
        simulation.source.poll(0.0);
        simulation
    }

    pub fn plan(&self) -> &LayoutPlan {
        &self.plan
    }

    pub fn scroll_top_vh(&self) -> f32 {
        self.scroll_top_vh
    }

    pub fn max_scroll_vh(&self) -> f32 {
        self.plan.total_height_vh().saturating_sub(VIEWPORT_VH) as f32
    }

    /// Jump to an absolute offset, clamped to the page
    pub fn scroll_to(&mut self, top_vh: f32) -> Vec<VisibilityChange> {
        self.scroll_top_vh = top_vh.clamp(0.0, self.max_scroll_vh());
        self.source.poll(self.scroll_top_vh as f64)
    }

    pub fn scroll_by(&mut self, delta_vh: f32) -> Vec<VisibilityChange> {
        self.scroll_to(self.scroll_top_vh + delta_vh)
    }

    pub fn pin_state(&self) -> PinState {
        let top = self.scroll_top_vh;
        match self.plan.section_at(top) {
            Some(section) => {
                let releases_at = section.end_vh().saturating_sub(VIEWPORT_VH) as f32;
                if section.layout.is_pinned() && top <= releases_at {
                    PinState::Pinned {
                        index: section.index,
                    }
                } else {
                    PinState::Flowing {
                        index: section.index,
                    }
                }
            }
            None if self
                .plan
                .sections
                .first()
                .is_none_or(|first| top < first.offset_vh as f32) =>
            {
                PinState::Hero
            }
            None => PinState::End,
        }
    }

    pub fn current_section(&self) -> Option<&PlannedSection> {
        self.plan.section_at(self.scroll_top_vh)
    }

    pub fn is_revealed(&self, section_index: usize, fragment_index: usize) -> bool {
        self.fragments
            .iter()
            .find(|f| f.section_index == section_index && f.fragment_index == fragment_index)
            .is_some_and(|f| f.subscription.is_visible())
    }

    pub fn revealed_count(&self) -> usize {
        self.fragments
            .iter()
            .filter(|f| f.subscription.is_visible())
            .count()
    }

    pub fn fragment_count(&self) -> usize {
        self.fragments.len()
    }
}
