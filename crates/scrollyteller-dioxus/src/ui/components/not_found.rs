use dioxus::prelude::*;

/// Terminal screen for a narrative key the source does not know
#[component]
pub fn NotFound(narrative_key: String, on_back: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "not-found",
            h1 { "Story not found" }
            p { "There is no story called \"{narrative_key}\"." }
            button {
                class: "back-link",
                onclick: move |_| on_back.call(()),
                "Back to all stories"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    #[test]
    fn test_not_found_offers_way_back() {
        fn root() -> Element {
            rsx! {
                NotFound { narrative_key: "unknown-artist", on_back: |_| {} }
            }
        }

        let mut dom = VirtualDom::new(root);
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("Story not found"));
        assert!(html.contains("unknown-artist"));
        assert!(html.contains("Back to all stories"));
    }
}
