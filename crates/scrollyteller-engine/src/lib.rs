pub mod io;
pub mod layout;
pub mod models;
pub mod page;
pub mod simulate;
pub mod title;
pub mod visibility;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::*;
pub use layout::{LayoutPlan, PlannedSection, SectionLayout, plan_narrative};
pub use models::*;
pub use page::{PageLifecycle, PageLoad, PageState};
pub use title::derive_title;
pub use visibility::{VisibilityConfig, VisibilityController, VisibilityState};
