use crate::ui::components::{ErrorScreen, LoadingScreen, NarrativeView, NotFound};
use dioxus::prelude::*;
use scrollyteller_engine::{Narrative, NarrativeSource, PageLifecycle, PageState, SourceError};
use std::rc::Rc;

/// Shared handle to the narrative supplier, comparable by identity
#[derive(Clone)]
pub struct SourceHandle(Rc<dyn NarrativeSource>);

impl SourceHandle {
    pub fn new(source: impl NarrativeSource + 'static) -> Self {
        Self(Rc::new(source))
    }

    pub fn fetch(&self, key: &str) -> Result<Narrative, SourceError> {
        self.0.fetch(key)
    }
}

impl PartialEq for SourceHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Loads one narrative and renders it once complete.
///
/// The fetch runs as a task owned by this component. A result arriving after
/// the page is dropped is discarded.
#[component]
pub fn NarrativePage(
    source: SourceHandle,
    narrative_key: String,
    on_back: EventHandler<()>,
) -> Element {
    let lifecycle = use_hook(|| Rc::new(PageLifecycle::new()));
    let mut state = use_signal(|| PageState::Loading);

    use_drop({
        let lifecycle = Rc::clone(&lifecycle);
        move || lifecycle.teardown()
    });

    use_hook({
        let lifecycle = Rc::clone(&lifecycle);
        let key = narrative_key.clone();
        move || {
            let load = lifecycle.begin_load();
            spawn(async move {
                log::info!("Loading narrative {key}");
                let result = source.fetch(&key);
                if let Some(next) = load.deliver(&key, result) {
                    state.set(next);
                }
            });
        }
    });

    rsx! {
        PageBody { state: state.read().clone(), on_back }
    }
}

/// What the page shows for each load state
#[component]
pub fn PageBody(state: PageState, on_back: EventHandler<()>) -> Element {
    match state {
        PageState::Loading => rsx! { LoadingScreen {} },
        PageState::Ready { key, narrative } => rsx! {
            NarrativeView { narrative_key: key, narrative }
        },
        PageState::NotFound { key } => rsx! {
            NotFound { narrative_key: key, on_back }
        },
        PageState::Failed { key, message } => rsx! {
            ErrorScreen {
                title: "Story unavailable",
                message: "The story \"{key}\" could not be loaded.",
                details: Some(message),
                on_back: Some(on_back),
            }
        },
    }
}
