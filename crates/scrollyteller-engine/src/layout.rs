//! Scroll-length sizing for narrative sections.
//!
//! All lengths are in viewport-height units (`vh`). A pinned section is
//! `max(PINNED_FLOOR_VH, n * PER_FRAGMENT_VH)` tall; its fragments share the
//! region between two `FRAGMENT_INSET_VH` insets in equal slots. Full-bleed
//! sections are always one viewport tall.

use crate::models::{Narrative, NarrativeSection, PinnedBackgroundSection};

pub const PINNED_FLOOR_VH: u32 = 200;
pub const PER_FRAGMENT_VH: u32 = 120;
pub const FRAGMENT_INSET_VH: u32 = 20;
pub const FULL_BLEED_VH: u32 = 100;
pub const HERO_VH: u32 = 100;
pub const VIEWPORT_VH: u32 = 100;

/// Scroll length a pinned section occupies for `fragment_count` fragments
pub fn pinned_scroll_length(fragment_count: usize) -> u32 {
    u32::try_from(fragment_count)
        .unwrap_or(u32::MAX)
        .saturating_mul(PER_FRAGMENT_VH)
        .max(PINNED_FLOOR_VH)
}

/// Vertical band reserved for one fragment inside its pinned section
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FragmentSlot {
    pub top_vh: f32,
    pub height_vh: f32,
}

impl FragmentSlot {
    pub fn bottom_vh(&self) -> f32 {
        self.top_vh + self.height_vh
    }
}

/// Evenly distribute `fragment_count` slots between the top and bottom insets
pub fn fragment_slots(fragment_count: usize, height_vh: u32) -> Vec<FragmentSlot> {
    if fragment_count == 0 {
        return Vec::new();
    }

    let usable = height_vh.saturating_sub(2 * FRAGMENT_INSET_VH) as f32;
    let slot_height = usable / fragment_count as f32;

    (0..fragment_count)
        .map(|index| FragmentSlot {
            top_vh: FRAGMENT_INSET_VH as f32 + slot_height * index as f32,
            height_vh: slot_height,
        })
        .collect()
}

/// Computed geometry for one renderable section
#[derive(Debug, Clone, PartialEq)]
pub enum SectionLayout {
    Pinned {
        height_vh: u32,
        slots: Vec<FragmentSlot>,
        has_background: bool,
    },
    FullBleed {
        height_vh: u32,
        has_image: bool,
    },
}

impl SectionLayout {
    pub fn pinned(section: &PinnedBackgroundSection) -> Self {
        let height_vh = pinned_scroll_length(section.fragments.len());
        SectionLayout::Pinned {
            height_vh,
            slots: fragment_slots(section.fragments.len(), height_vh),
            has_background: section.background().is_some(),
        }
    }

    pub fn height_vh(&self) -> u32 {
        match self {
            SectionLayout::Pinned { height_vh, .. } | SectionLayout::FullBleed { height_vh, .. } => {
                *height_vh
            }
        }
    }

    pub fn is_pinned(&self) -> bool {
        matches!(self, SectionLayout::Pinned { .. })
    }

    pub fn slots(&self) -> &[FragmentSlot] {
        match self {
            SectionLayout::Pinned { slots, .. } => slots,
            SectionLayout::FullBleed { .. } => &[],
        }
    }
}

/// Layout for a single section, or `None` when no renderer handles its tag
pub fn layout_section(section: &NarrativeSection) -> Option<SectionLayout> {
    match section {
        NarrativeSection::PinnedBackground(pinned) => Some(SectionLayout::pinned(pinned)),
        NarrativeSection::FullBleed(full_bleed) => Some(SectionLayout::FullBleed {
            height_vh: FULL_BLEED_VH,
            has_image: full_bleed.image().is_some(),
        }),
        NarrativeSection::Unrecognized { .. } => None,
    }
}

/// A renderable section placed on the page
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedSection {
    /// Position in the narrative's `sections` list
    pub index: usize,
    /// Distance from the top of the page, hero included
    pub offset_vh: u32,
    pub layout: SectionLayout,
}

impl PlannedSection {
    pub fn end_vh(&self) -> u32 {
        self.offset_vh + self.layout.height_vh()
    }
}

/// The composer's dispatch result for a whole narrative
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutPlan {
    pub sections: Vec<PlannedSection>,
    /// Indices of sections that were skipped because their tag is unknown
    pub skipped: Vec<usize>,
}

impl LayoutPlan {
    pub fn total_height_vh(&self) -> u32 {
        self.sections
            .last()
            .map(PlannedSection::end_vh)
            .unwrap_or(HERO_VH)
    }

    pub fn heights(&self) -> Vec<u32> {
        self.sections
            .iter()
            .map(|section| section.layout.height_vh())
            .collect()
    }

    /// Section whose region contains the given page offset
    pub fn section_at(&self, offset_vh: f32) -> Option<&PlannedSection> {
        self.sections.iter().find(|section| {
            offset_vh >= section.offset_vh as f32 && offset_vh < section.end_vh() as f32
        })
    }
}

/// Walk the narrative in order and size every renderable section
pub fn plan_narrative(narrative: &Narrative) -> LayoutPlan {
    let mut plan = LayoutPlan::default();
    let mut offset_vh = HERO_VH;

    for (index, section) in narrative.sections.iter().enumerate() {
        match layout_section(section) {
            Some(layout) => {
                let height_vh = layout.height_vh();
                plan.sections.push(PlannedSection {
                    index,
                    offset_vh,
                    layout,
                });
                offset_vh = offset_vh.saturating_add(height_vh);
            }
            None => {
                log::debug!(
                    "Skipping section {index} with unrecognized kind {:?}",
                    section.tag().unwrap_or("<missing>")
                );
                plan.skipped.push(index);
            }
        }
    }

    plan
}
