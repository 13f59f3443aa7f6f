use dioxus::prelude::*;

/// Full-screen error for failures other than a missing story, such as an
/// unreadable narratives directory or a corrupt narrative file
#[component]
pub fn ErrorScreen(
    title: String,
    message: String,
    details: Option<String>,
    on_back: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        div {
            class: "error-screen",
            h1 { "{title}" }
            p { "{message}" }
            if let Some(ref detail_text) = details {
                pre { class: "error-details", "{detail_text}" }
            }
            if let Some(on_back) = on_back {
                button {
                    class: "back-link",
                    onclick: move |_| on_back.call(()),
                    "Back to all stories"
                }
            }
        }
    }
}
