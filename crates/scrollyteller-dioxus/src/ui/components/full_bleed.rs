use dioxus::prelude::*;
use scrollyteller_engine::FullBleedSection;
use scrollyteller_engine::layout::FULL_BLEED_VH;

/// A single viewport-filling image between pinned sections
#[component]
pub fn FullBleed(section: FullBleedSection) -> Element {
    rsx! {
        section {
            class: "full-bleed-section",
            "data-section-kind": "full-bleed",
            style: "height: {FULL_BLEED_VH}vh;",
            if let Some(image) = section.image() {
                img {
                    class: "full-bleed-image",
                    src: image.as_str().to_string(),
                    alt: section.alt_text.clone(),
                }
            } else {
                div { class: "image-placeholder" }
            }
        }
    }
}
