use super::{nullable_list, nullable_string};
use super::section::{ImageRef, NarrativeSection};
use crate::title::derive_title;
use serde::{Deserialize, Serialize};

/// A complete scrollytelling page: hero followed by ordered sections
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Narrative {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_title: Option<String>,
    #[serde(default, deserialize_with = "nullable_string")]
    pub hero_subtitle: String,
    #[serde(default)]
    pub hero_image: Option<ImageRef>,
    #[serde(default, deserialize_with = "nullable_list")]
    pub sections: Vec<NarrativeSection>,
}

impl Narrative {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Hero title, derived from the narrative key when none was supplied
    pub fn title_for(&self, key: &str) -> String {
        match self.hero_title.as_deref().map(str::trim) {
            Some(title) if !title.is_empty() => title.to_string(),
            _ => derive_title(key),
        }
    }

    pub fn hero_image(&self) -> Option<&ImageRef> {
        self.hero_image.as_ref().filter(|image| !image.is_empty())
    }

    /// Number of sections that some renderer knows how to draw
    pub fn renderable_count(&self) -> usize {
        self.sections
            .iter()
            .filter(|section| section.kind().is_some())
            .count()
    }
}
