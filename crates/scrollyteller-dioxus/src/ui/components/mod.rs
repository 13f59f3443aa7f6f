pub mod error_screen;
pub mod full_bleed;
pub mod hero;
pub mod loading_screen;
pub mod narrative_page;
pub mod narrative_view;
pub mod not_found;
pub mod overview;
pub mod pinned_section;
pub mod text_fragment;

pub use error_screen::ErrorScreen;
pub use full_bleed::FullBleed;
pub use hero::Hero;
pub use loading_screen::LoadingScreen;
pub use narrative_page::{NarrativePage, PageBody, SourceHandle};
pub use narrative_view::NarrativeView;
pub use not_found::NotFound;
pub use overview::Overview;
pub use pinned_section::PinnedSection;
pub use text_fragment::TextFragmentCard;
