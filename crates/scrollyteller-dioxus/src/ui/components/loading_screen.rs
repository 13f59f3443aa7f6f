use dioxus::prelude::*;

/// Neutral placeholder shown until a narrative has fully loaded
#[component]
pub fn LoadingScreen() -> Element {
    rsx! {
        div {
            class: "loading-screen",
            role: "status",
            p { "Loading story…" }
        }
    }
}
