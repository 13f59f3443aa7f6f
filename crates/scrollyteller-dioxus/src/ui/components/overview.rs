use dioxus::prelude::*;
use scrollyteller_engine::derive_title;

/// List of available stories; also where "not found" sends the reader back to
#[component]
pub fn Overview(keys: Vec<String>, on_select: EventHandler<String>) -> Element {
    rsx! {
        nav {
            class: "overview",
            h1 { "Stories" }
            if keys.is_empty() {
                p { class: "overview-empty", "No stories yet." }
            }
            ul {
                for key in keys {
                    li {
                        key: "{key}",
                        button {
                            class: "overview-item",
                            onclick: {
                                let key = key.clone();
                                move |_| on_select.call(key.clone())
                            },
                            {derive_title(&key)}
                        }
                    }
                }
            }
        }
    }
}
