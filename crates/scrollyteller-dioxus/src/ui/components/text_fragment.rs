use crate::ui::hooks::use_visibility;
use dioxus::prelude::*;
use scrollyteller_engine::layout::FragmentSlot;
use scrollyteller_engine::{TextFragment, VisibilityConfig};

/// One paragraph card placed in its slot, fading in the first time a fifth
/// of it is on screen
#[component]
pub fn TextFragmentCard(fragment: TextFragment, slot: FragmentSlot) -> Element {
    let visibility = use_visibility(VisibilityConfig::REVEAL_ONCE);
    let card_class = if visibility.is_visible() {
        "fragment-card revealed"
    } else {
        "fragment-card"
    };
    let alignment = fragment.alignment.css_class();
    let element_id = visibility.element_id().to_string();

    rsx! {
        div {
            class: "fragment-slot {alignment}",
            style: "top: {slot.top_vh}vh; height: {slot.height_vh}vh;",
            div {
                id: "{element_id}",
                class: "{card_class}",
                onmounted: move |_| visibility.start(),
                if !fragment.is_empty() {
                    p { "{fragment.content}" }
                }
            }
        }
    }
}
