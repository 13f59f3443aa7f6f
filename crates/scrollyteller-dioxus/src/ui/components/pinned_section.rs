use crate::ui::components::text_fragment::TextFragmentCard;
use dioxus::prelude::*;
use scrollyteller_engine::{PinnedBackgroundSection, SectionLayout};

/// Background that sticks to the viewport while the section's fragments
/// scroll over it.
///
/// The section is as tall as its computed scroll length. The background
/// layer is a sticky, viewport-sized child; the fragment layer is
/// absolutely positioned over the full height with one slot per fragment.
#[component]
pub fn PinnedSection(section: PinnedBackgroundSection) -> Element {
    let layout = SectionLayout::pinned(&section);
    let height_vh = layout.height_vh();
    let slots = layout.slots().to_vec();

    rsx! {
        section {
            class: "pinned-section",
            "data-section-kind": "pinned-background",
            style: "height: {height_vh}vh;",
            div {
                class: "pinned-background-layer",
                if let Some(image) = section.background() {
                    img {
                        class: "pinned-background-image",
                        src: image.as_str().to_string(),
                        alt: section.alt_text.clone(),
                    }
                } else {
                    div { class: "image-placeholder" }
                }
            }
            div {
                class: "fragment-layer",
                style: "height: {height_vh}vh;",
                for (index, (fragment, slot)) in section.fragments.iter().zip(slots).enumerate() {
                    TextFragmentCard {
                        key: "{index}",
                        fragment: fragment.clone(),
                        slot,
                    }
                }
            }
        }
    }
}
