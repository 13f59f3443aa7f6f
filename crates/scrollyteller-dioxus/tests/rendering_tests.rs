//! Rendering tests across the page boundary: load state in, markup out.

use dioxus::dioxus_core::{NoOpMutations, VirtualDom};
use dioxus::prelude::*;
use dioxus_ssr::render;
use pretty_assertions::assert_eq;

use scrollyteller_dioxus::ui::components::{NarrativePage, PageBody, SourceHandle};
use scrollyteller_engine::{
    Alignment, FullBleedSection, InMemorySource, Narrative, PageState, PinnedBackgroundSection,
    TextFragment,
};

const WEAVER_JSON: &str = r#"{
    "heroSubtitle": "Forty years at the loom",
    "heroImage": "hero.jpg",
    "sections": [
        {
            "kind": "pinned-background",
            "backgroundImage": "workshop.jpg",
            "altText": "The workshop at dawn",
            "fragments": [
                { "kind": "text", "content": "The shuttle starts before sunrise.", "alignment": "left" },
                { "kind": "text", "content": "Every thread is counted twice.", "alignment": "right" }
            ]
        },
        { "kind": "full-bleed", "image": "silk.jpg", "altText": "Silk drying in the yard" },
        {
            "kind": "pinned-background",
            "backgroundImage": "market.jpg",
            "altText": "The weekly market",
            "fragments": [
                { "kind": "text", "content": "Saturday is for selling.", "alignment": "center" }
            ]
        }
    ]
}"#;

#[component]
fn BodyHarness(state: PageState) -> Element {
    rsx! {
        PageBody { state, on_back: |_| {} }
    }
}

fn render_body(state: PageState) -> String {
    let mut dom = VirtualDom::new_with_props(BodyHarness, BodyHarnessProps { state });
    dom.rebuild_in_place();
    render(&dom)
}

/// Inline height of every rendered `<section>`, in document order
fn section_heights(html: &str) -> Vec<String> {
    html.split("<section")
        .skip(1)
        .filter_map(|chunk| {
            let start = chunk.find("height: ")? + "height: ".len();
            let end = chunk[start..].find(';')?;
            Some(chunk[start..start + end].to_string())
        })
        .collect()
}

#[test]
fn test_unknown_artist_renders_not_found_without_sections() {
    let html = render_body(PageState::NotFound {
        key: "unknown-artist".to_string(),
    });

    assert!(html.contains("not-found"));
    assert!(html.contains("Back to all stories"));
    assert!(!html.contains("<section"));
}

#[test]
fn test_ready_narrative_renders_sections_with_layout_heights() {
    let narrative = Narrative::from_json(WEAVER_JSON).unwrap();

    let html = render_body(PageState::Ready {
        key: "weaver".to_string(),
        narrative,
    });

    assert_eq!(section_heights(&html), vec!["240vh", "100vh", "200vh"]);
    assert!(html.contains("Weaver"));
    assert!(html.contains("Forty years at the loom"));
    assert_eq!(html.matches("fragment-card").count(), 3);
}

#[test]
fn test_fragments_keep_their_alignment_class() {
    let narrative = Narrative::from_json(WEAVER_JSON).unwrap();

    let html = render_body(PageState::Ready {
        key: "weaver".to_string(),
        narrative,
    });

    let left = html.find("align-left").unwrap();
    let right = html.find("align-right").unwrap();
    let center = html.find("align-center").unwrap();
    assert!(left < right && right < center);
}

#[test]
fn test_fragments_start_hidden() {
    let narrative = Narrative::from_json(WEAVER_JSON).unwrap();

    let html = render_body(PageState::Ready {
        key: "weaver".to_string(),
        narrative,
    });

    assert!(!html.contains("revealed"));
}

#[test]
fn test_failed_load_shows_error_details() {
    let html = render_body(PageState::Failed {
        key: "weaver".to_string(),
        message: "expected value at line 1 column 1".to_string(),
    });

    assert!(html.contains("Story unavailable"));
    assert!(html.contains("expected value at line 1 column 1"));
    assert!(!html.contains("<section"));
}

#[test]
fn test_loading_state_renders_no_sections() {
    let html = render_body(PageState::Loading);

    assert!(html.contains("loading-screen"));
    assert!(!html.contains("<section"));
}

#[component]
fn PageHarness(source: SourceHandle, narrative_key: String) -> Element {
    rsx! {
        NarrativePage { source, narrative_key, on_back: |_| {} }
    }
}

#[test]
fn test_page_shows_loading_until_fetch_completes() {
    let narrative = Narrative {
        sections: vec![
            PinnedBackgroundSection::new(
                "loom.jpg",
                "A loom",
                vec![TextFragment::new("Warp and weft.", Alignment::Center)],
            )
            .into(),
            FullBleedSection::new("thread.jpg", "Thread").into(),
        ],
        ..Narrative::default()
    };
    let source = SourceHandle::new(InMemorySource::new().with("weaver", narrative));

    let mut dom = VirtualDom::new_with_props(
        PageHarness,
        PageHarnessProps {
            source,
            narrative_key: "weaver".to_string(),
        },
    );
    dom.rebuild_in_place();
    let html = render(&dom);

    assert!(html.contains("loading-screen"));
    assert!(!html.contains("<section"));
}

fn weaver_page(narrative_key: &str) -> VirtualDom {
    let narrative = Narrative::from_json(WEAVER_JSON).unwrap();
    let source = SourceHandle::new(InMemorySource::new().with("weaver", narrative));

    let mut dom = VirtualDom::new_with_props(
        PageHarness,
        PageHarnessProps {
            source,
            narrative_key: narrative_key.to_string(),
        },
    );
    dom.rebuild_in_place();
    dom
}

#[tokio::test]
async fn test_page_fetch_completes_with_layout_heights() {
    let mut dom = weaver_page("weaver");

    dom.wait_for_work().await;
    dom.render_immediate(&mut NoOpMutations);
    let html = render(&dom);

    assert!(!html.contains("loading-screen"));
    assert_eq!(section_heights(&html), vec!["240vh", "100vh", "200vh"]);
}

#[tokio::test]
async fn test_page_fetch_for_unknown_artist_ends_not_found() {
    let mut dom = weaver_page("unknown-artist");

    dom.wait_for_work().await;
    dom.render_immediate(&mut NoOpMutations);
    let html = render(&dom);

    assert!(html.contains("Story not found"));
    assert_eq!(html.matches("<section").count(), 0);
}
