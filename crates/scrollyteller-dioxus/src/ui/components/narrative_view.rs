use crate::ui::components::{FullBleed, Hero, PinnedSection};
use dioxus::prelude::*;
use scrollyteller_engine::{Narrative, NarrativeSection};

/// Hero followed by every section, in order, as one scroll surface
#[component]
pub fn NarrativeView(narrative_key: String, narrative: Narrative) -> Element {
    let title = narrative.title_for(&narrative_key);

    rsx! {
        article {
            class: "narrative",
            Hero {
                title,
                subtitle: narrative.hero_subtitle.clone(),
                image: narrative.hero_image.clone(),
            }
            for (index, section) in narrative.sections.iter().enumerate() {
                {render_section(index, section)}
            }
        }
    }
}

/// The single dispatch point from section tag to renderer
fn render_section(index: usize, section: &NarrativeSection) -> Element {
    match section {
        NarrativeSection::PinnedBackground(pinned) => rsx! {
            PinnedSection { key: "{index}", section: pinned.clone() }
        },
        NarrativeSection::FullBleed(full_bleed) => rsx! {
            FullBleed { key: "{index}", section: full_bleed.clone() }
        },
        NarrativeSection::Unrecognized { kind } => {
            log::warn!(
                "Not rendering section {index} with unrecognized kind {:?}",
                kind.as_deref().unwrap_or("<missing>")
            );
            rsx! {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use scrollyteller_engine::{
        Alignment, FullBleedSection, PinnedBackgroundSection, TextFragment,
    };

    fn render_view(narrative: Narrative) -> String {
        let mut dom = VirtualDom::new_with_props(
            NarrativeView,
            NarrativeViewProps {
                narrative_key: "ramesh-kumar".to_string(),
                narrative,
            },
        );
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_derived_title_when_none_supplied() {
        let html = render_view(Narrative::default());
        assert!(html.contains("Ramesh Kumar"));
    }

    #[test]
    fn test_sections_render_in_input_order() {
        let narrative = Narrative {
            sections: vec![
                FullBleedSection::new("first.jpg", "First").into(),
                PinnedBackgroundSection::new(
                    "second.jpg",
                    "Second",
                    vec![TextFragment::new("Middle", Alignment::Left)],
                )
                .into(),
                FullBleedSection::new("third.jpg", "Third").into(),
            ],
            ..Narrative::default()
        };

        let html = render_view(narrative);

        let first = html.find("first.jpg").unwrap();
        let second = html.find("second.jpg").unwrap();
        let third = html.find("third.jpg").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_unrecognized_section_renders_nothing() {
        let narrative = Narrative {
            sections: vec![
                FullBleedSection::new("before.jpg", "Before").into(),
                NarrativeSection::Unrecognized {
                    kind: Some("hologram".to_string()),
                },
                FullBleedSection::new("after.jpg", "After").into(),
            ],
            ..Narrative::default()
        };

        let html = render_view(narrative);

        assert_eq!(html.matches("<section").count(), 2);
        assert!(!html.contains("hologram"));
        assert!(html.find("before.jpg").unwrap() < html.find("after.jpg").unwrap());
    }
}
