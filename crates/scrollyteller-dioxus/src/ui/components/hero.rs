use crate::ui::hooks::use_visibility;
use dioxus::prelude::*;
use scrollyteller_engine::layout::HERO_VH;
use scrollyteller_engine::{ImageRef, VisibilityConfig};

/// Opening screen of a narrative; the title fades in once like a fragment
#[component]
pub fn Hero(title: String, subtitle: String, image: Option<ImageRef>) -> Element {
    let visibility = use_visibility(VisibilityConfig::REVEAL_ONCE);
    let title_class = if visibility.is_visible() {
        "hero-title revealed"
    } else {
        "hero-title"
    };
    let element_id = visibility.element_id().to_string();

    rsx! {
        header {
            class: "hero",
            style: "height: {HERO_VH}vh;",
            if let Some(image) = image.as_ref().filter(|image| !image.is_empty()) {
                img {
                    class: "hero-image",
                    src: image.as_str().to_string(),
                    alt: "",
                }
            }
            div {
                class: "hero-text",
                h1 {
                    id: "{element_id}",
                    class: "{title_class}",
                    onmounted: move |_| visibility.start(),
                    "{title}"
                }
                if !subtitle.is_empty() {
                    p { class: "hero-subtitle", "{subtitle}" }
                }
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
    fn test_hero_renders_title_subtitle_and_image() {
        let mut dom = VirtualDom::new_with_props(
            Hero,
            HeroProps {
                title: "Ramesh Kumar".to_string(),
                subtitle: "Forty years at the loom".to_string(),
                image: Some("hero.jpg".into()),
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("Ramesh Kumar"));
        assert!(html.contains("Forty years at the loom"));
        assert!(html.contains("src=\"hero.jpg\""));
        assert!(html.contains("hero-title"));
        assert!(!html.contains("revealed"));
    }

    #[test]
    fn test_hero_without_image_or_subtitle() {
        let mut dom = VirtualDom::new_with_props(
            Hero,
            HeroProps {
                title: "Meera".to_string(),
                subtitle: String::new(),
                image: None,
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("Meera"));
        assert!(!html.contains("<img"));
        assert!(!html.contains("hero-subtitle"));
    }
}
