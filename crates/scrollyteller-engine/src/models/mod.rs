pub mod fragment;
pub mod narrative;
pub mod section;

pub use fragment::{Alignment, FragmentKind, TextFragment};
pub use narrative::Narrative;
pub use section::{FullBleedSection, ImageRef, NarrativeSection, PinnedBackgroundSection, SectionKind};

use serde::{Deserialize, Deserializer};

/// Deserialize a list that may be absent or `null`, treating both as empty
pub(crate) fn nullable_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserialize a string that may be absent or `null`, treating both as empty
pub(crate) fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
