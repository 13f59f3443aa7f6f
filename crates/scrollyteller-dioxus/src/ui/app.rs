use super::components::{ErrorScreen, NarrativePage, Overview, SourceHandle};
use dioxus::prelude::*;
use scrollyteller_engine::DirectorySource;
use std::path::PathBuf;

const SCROLLYTELLER_CSS: &str = include_str!("../assets/scrollyteller.css");

/// Which screen the single window shows
#[derive(Debug, Clone, PartialEq)]
enum View {
    Overview,
    Story(String),
}

#[component]
pub fn App(narratives_path: PathBuf, initial_key: Option<String>) -> Element {
    let opened = use_hook(|| {
        DirectorySource::new(narratives_path.clone())
            .map(|directory| (SourceHandle::new(directory.clone()), directory))
            .map_err(|e| e.to_string())
    });
    let mut view = use_signal(|| match initial_key.clone() {
        Some(key) => View::Story(key),
        None => View::Overview,
    });

    let (source, directory) = match opened {
        Ok(opened) => opened,
        Err(message) => {
            log::error!("Cannot open narratives directory: {message}");
            return rsx! {
                style { {SCROLLYTELLER_CSS} }
                ErrorScreen {
                    title: "Narratives unavailable",
                    message: "The stories folder could not be opened.",
                    details: Some(message),
                }
            };
        }
    };

    let current = view.read().clone();
    let body = match current {
        View::Overview => {
            let keys = directory.keys().unwrap_or_else(|e| {
                log::error!("Error listing narratives: {e}");
                Vec::new()
            });
            rsx! {
                Overview {
                    keys,
                    on_select: move |key: String| view.set(View::Story(key)),
                }
            }
        }
        View::Story(key) => rsx! {
            NarrativePage {
                key: "{key}",
                source,
                narrative_key: key.clone(),
                on_back: move |_| view.set(View::Overview),
            }
        },
    };

    rsx! {
        style { {SCROLLYTELLER_CSS} }
        main { class: "app-container", {body} }
    }
}
