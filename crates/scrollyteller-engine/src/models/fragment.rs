use super::nullable_string;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Horizontal placement of a fragment card within its section
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    #[default]
    Center,
    Right,
}

impl Alignment {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "left" => Some(Alignment::Left),
            "center" => Some(Alignment::Center),
            "right" => Some(Alignment::Right),
            _ => None,
        }
    }

    /// CSS class used by renderers to place the card
    pub fn css_class(self) -> &'static str {
        match self {
            Alignment::Left => "align-left",
            Alignment::Center => "align-center",
            Alignment::Right => "align-right",
        }
    }
}

/// Tag carried by every fragment on the wire. Only plain text exists today.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FragmentKind {
    #[default]
    Text,
}

/// One paragraph of narrative copy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextFragment {
    #[serde(default)]
    pub kind: FragmentKind,
    #[serde(default, deserialize_with = "nullable_string")]
    pub content: String,
    #[serde(default, deserialize_with = "lenient_alignment")]
    pub alignment: Alignment,
}

impl TextFragment {
    pub fn new(content: impl Into<String>, alignment: Alignment) -> Self {
        Self {
            kind: FragmentKind::Text,
            content: content.into(),
            alignment,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }
}

/// Unknown, null or non-string alignments fall back to the default
fn lenient_alignment<'de, D>(deserializer: D) -> Result<Alignment, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => Alignment::default(),
        Some(Value::String(name)) => Alignment::from_name(&name).unwrap_or_else(|| {
            log::warn!("Unknown fragment alignment {name:?}, using center");
            Alignment::default()
        }),
        Some(other) => {
            log::warn!("Unexpected fragment alignment {other}, using center");
            Alignment::default()
        }
    })
}
