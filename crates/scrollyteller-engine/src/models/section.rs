use super::fragment::TextFragment;
use super::{nullable_list, nullable_string};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Opaque image reference (URL or inline data URI), passed through unmodified
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for ImageRef {
    fn from(reference: &str) -> Self {
        Self::new(reference)
    }
}

impl From<String> for ImageRef {
    fn from(reference: String) -> Self {
        Self(reference)
    }
}

/// Background that stays pinned while its fragments scroll past
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PinnedBackgroundSection {
    #[serde(default)]
    pub background_image: Option<ImageRef>,
    #[serde(default, deserialize_with = "nullable_string")]
    pub alt_text: String,
    #[serde(default, deserialize_with = "fragment_list")]
    pub fragments: Vec<TextFragment>,
}

impl PinnedBackgroundSection {
    pub fn new(
        background_image: impl Into<ImageRef>,
        alt_text: impl Into<String>,
        fragments: Vec<TextFragment>,
    ) -> Self {
        Self {
            background_image: Some(background_image.into()),
            alt_text: alt_text.into(),
            fragments,
        }
    }

    /// The background reference, if the data source supplied a usable one
    pub fn background(&self) -> Option<&ImageRef> {
        self.background_image.as_ref().filter(|image| !image.is_empty())
    }
}

/// Fragment list where an undecodable entry is dropped instead of failing
/// the section that holds it
fn fragment_list<'de, D>(deserializer: D) -> Result<Vec<TextFragment>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries: Vec<Value> = nullable_list(deserializer)?;
    Ok(entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(fragment) => Some(fragment),
            Err(e) => {
                log::warn!("Dropping malformed fragment {index}: {e}");
                None
            }
        })
        .collect())
}

/// Edge-to-edge image with no overlay
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullBleedSection {
    #[serde(default)]
    pub image: Option<ImageRef>,
    #[serde(default, deserialize_with = "nullable_string")]
    pub alt_text: String,
}

impl FullBleedSection {
    pub fn new(image: impl Into<ImageRef>, alt_text: impl Into<String>) -> Self {
        Self {
            image: Some(image.into()),
            alt_text: alt_text.into(),
        }
    }

    pub fn image(&self) -> Option<&ImageRef> {
        self.image.as_ref().filter(|image| !image.is_empty())
    }
}

/// The closed set of section tags renderers know how to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    PinnedBackground,
    FullBleed,
}

impl SectionKind {
    pub fn tag(self) -> &'static str {
        match self {
            SectionKind::PinnedBackground => "pinned-background",
            SectionKind::FullBleed => "full-bleed",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "pinned-background" => Some(SectionKind::PinnedBackground),
            "full-bleed" => Some(SectionKind::FullBleed),
            _ => None,
        }
    }
}

/// One slot of a narrative, tagged by `kind` on the wire.
///
/// Sections whose tag is unknown or whose body fails to decode become
/// `Unrecognized` so that a single bad entry never rejects the narrative.
#[derive(Debug, Clone, PartialEq)]
pub enum NarrativeSection {
    PinnedBackground(PinnedBackgroundSection),
    FullBleed(FullBleedSection),
    Unrecognized { kind: Option<String> },
}

impl NarrativeSection {
    pub fn kind(&self) -> Option<SectionKind> {
        match self {
            NarrativeSection::PinnedBackground(_) => Some(SectionKind::PinnedBackground),
            NarrativeSection::FullBleed(_) => Some(SectionKind::FullBleed),
            NarrativeSection::Unrecognized { .. } => None,
        }
    }

    /// Raw tag as it appeared in the source data
    pub fn tag(&self) -> Option<&str> {
        match self {
            NarrativeSection::Unrecognized { kind } => kind.as_deref(),
            other => other.kind().map(SectionKind::tag),
        }
    }

    /// Classify a decoded JSON value by its `kind` tag
    pub fn from_value(value: Value) -> Self {
        let kind = value.get("kind").and_then(Value::as_str).map(str::to_owned);

        let decoded = match kind.as_deref().and_then(SectionKind::from_tag) {
            Some(SectionKind::PinnedBackground) => {
                serde_json::from_value(value).map(NarrativeSection::PinnedBackground)
            }
            Some(SectionKind::FullBleed) => {
                serde_json::from_value(value).map(NarrativeSection::FullBleed)
            }
            None => return NarrativeSection::Unrecognized { kind },
        };

        decoded.unwrap_or_else(|e| {
            log::warn!("Malformed {:?} section: {e}", kind.as_deref().unwrap_or(""));
            NarrativeSection::Unrecognized { kind }
        })
    }
}

impl From<PinnedBackgroundSection> for NarrativeSection {
    fn from(section: PinnedBackgroundSection) -> Self {
        NarrativeSection::PinnedBackground(section)
    }
}

impl From<FullBleedSection> for NarrativeSection {
    fn from(section: FullBleedSection) -> Self {
        NarrativeSection::FullBleed(section)
    }
}

impl<'de> Deserialize<'de> for NarrativeSection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(NarrativeSection::from_value(value))
    }
}

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
enum TaggedSection<'a> {
    PinnedBackground(&'a PinnedBackgroundSection),
    FullBleed(&'a FullBleedSection),
}

impl Serialize for NarrativeSection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            NarrativeSection::PinnedBackground(section) => {
                TaggedSection::PinnedBackground(section).serialize(serializer)
            }
            NarrativeSection::FullBleed(section) => {
                TaggedSection::FullBleed(section).serialize(serializer)
            }
            NarrativeSection::Unrecognized { kind } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("kind", kind)?;
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Alignment;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_decode_pinned_background_section() {
        let section: NarrativeSection = serde_json::from_value(json!({
            "kind": "pinned-background",
            "backgroundImage": "https://img.example/loom.jpg",
            "altText": "A handloom",
            "fragments": [
                { "kind": "text", "content": "The loom hums.", "alignment": "left" },
                { "kind": "text", "content": "Threads cross.", "alignment": "right" }
            ]
        }))
        .unwrap();

        let NarrativeSection::PinnedBackground(pinned) = section else {
            panic!("expected pinned-background");
        };
        assert_eq!(
            pinned.background().map(ImageRef::as_str),
            Some("https://img.example/loom.jpg")
        );
        assert_eq!(pinned.alt_text, "A handloom");
        assert_eq!(pinned.fragments.len(), 2);
        assert_eq!(pinned.fragments[1].alignment, Alignment::Right);
    }

    #[test]
    fn test_decode_full_bleed_section() {
        let section: NarrativeSection = serde_json::from_value(json!({
            "kind": "full-bleed",
            "image": "data:image/png;base64,AAAA",
            "altText": "Dyed cloth drying"
        }))
        .unwrap();

        assert_eq!(section.kind(), Some(SectionKind::FullBleed));
        assert_eq!(section.tag(), Some("full-bleed"));
    }

    #[test]
    fn test_absent_and_null_fragments_are_empty() {
        for body in [
            json!({ "kind": "pinned-background", "backgroundImage": "a.jpg" }),
            json!({ "kind": "pinned-background", "backgroundImage": "a.jpg", "fragments": null }),
        ] {
            let section = NarrativeSection::from_value(body);
            let NarrativeSection::PinnedBackground(pinned) = section else {
                panic!("expected pinned-background");
            };
            assert!(pinned.fragments.is_empty());
        }
    }

    #[test]
    fn test_missing_background_still_decodes() {
        let section = NarrativeSection::from_value(json!({
            "kind": "pinned-background",
            "backgroundImage": "",
            "fragments": []
        }));
        let NarrativeSection::PinnedBackground(pinned) = section else {
            panic!("expected pinned-background");
        };
        assert!(pinned.background().is_none());
    }

    #[test]
    fn test_unknown_tag_is_unrecognized() {
        let section = NarrativeSection::from_value(json!({ "kind": "carousel", "images": [] }));
        assert_eq!(
            section,
            NarrativeSection::Unrecognized {
                kind: Some("carousel".to_string())
            }
        );
        assert_eq!(section.kind(), None);
    }

    #[test]
    fn test_missing_tag_is_unrecognized() {
        let section = NarrativeSection::from_value(json!({ "image": "x.jpg" }));
        assert_eq!(section, NarrativeSection::Unrecognized { kind: None });
    }

    #[test]
    fn test_malformed_body_is_unrecognized() {
        let section = NarrativeSection::from_value(json!({
            "kind": "full-bleed",
            "image": 42
        }));
        assert_eq!(
            section,
            NarrativeSection::Unrecognized {
                kind: Some("full-bleed".to_string())
            }
        );
    }

    #[test]
    fn test_null_fields_keep_the_pinned_section() {
        let section = NarrativeSection::from_value(json!({
            "kind": "pinned-background",
            "backgroundImage": "loom.jpg",
            "altText": null,
            "fragments": [
                { "kind": "text", "content": null, "alignment": "left" },
                { "kind": "text", "content": "Threads cross.", "alignment": "justify" },
                { "kind": "text", "content": "Warp.", "alignment": null }
            ]
        }));

        let NarrativeSection::PinnedBackground(pinned) = section else {
            panic!("expected pinned-background");
        };
        assert_eq!(pinned.alt_text, "");
        assert_eq!(
            pinned.fragments,
            vec![
                TextFragment::new("", Alignment::Left),
                TextFragment::new("Threads cross.", Alignment::Center),
                TextFragment::new("Warp.", Alignment::Center),
            ]
        );
    }

    #[test]
    fn test_undecodable_fragment_is_dropped_not_the_section() {
        let section = NarrativeSection::from_value(json!({
            "kind": "pinned-background",
            "backgroundImage": "loom.jpg",
            "fragments": [
                { "kind": "video", "content": "ignored" },
                "not an object",
                { "kind": "text", "content": "Kept.", "alignment": "right" }
            ]
        }));

        let NarrativeSection::PinnedBackground(pinned) = section else {
            panic!("expected pinned-background");
        };
        assert_eq!(
            pinned.fragments,
            vec![TextFragment::new("Kept.", Alignment::Right)]
        );
    }

    #[test]
    fn test_null_alt_text_keeps_full_bleed_section() {
        let section = NarrativeSection::from_value(json!({
            "kind": "full-bleed",
            "image": "wide.jpg",
            "altText": null
        }));

        let NarrativeSection::FullBleed(full_bleed) = section else {
            panic!("expected full-bleed");
        };
        assert_eq!(full_bleed.alt_text, "");
        assert_eq!(full_bleed.image().map(ImageRef::as_str), Some("wide.jpg"));
    }

    #[test]
    fn test_serialize_writes_kebab_case_tag() {
        let section: NarrativeSection = FullBleedSection::new("wide.jpg", "Fields").into();
        let value = serde_json::to_value(&section).unwrap();
        assert_eq!(
            value,
            json!({ "kind": "full-bleed", "image": "wide.jpg", "altText": "Fields" })
        );

        let decoded: NarrativeSection = serde_json::from_value(value).unwrap();
        assert_eq!(decoded, section);
    }
}
