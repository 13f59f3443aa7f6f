//! Shared fixtures for engine unit tests

use crate::models::{
    Alignment, FullBleedSection, Narrative, PinnedBackgroundSection, TextFragment,
};
use tempfile::TempDir;

pub fn create_test_narratives_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

pub fn write_narrative(dir: &TempDir, key: &str, narrative: &Narrative) {
    let json = serde_json::to_string_pretty(narrative).unwrap();
    std::fs::write(dir.path().join(format!("{key}.json")), json).unwrap();
}

/// Two pinned sections (2 fragments, then 1) around a full-bleed beat
pub fn sample_narrative() -> Narrative {
    Narrative {
        hero_title: None,
        hero_subtitle: "Forty years at the loom".to_string(),
        hero_image: Some("hero.jpg".into()),
        sections: vec![
            PinnedBackgroundSection::new(
                "workshop.jpg",
                "The workshop at dawn",
                vec![
                    TextFragment::new("The shuttle starts before sunrise.", Alignment::Left),
                    TextFragment::new("Every thread is counted twice.", Alignment::Right),
                ],
            )
            .into(),
            FullBleedSection::new("silk.jpg", "Silk drying in the yard").into(),
            PinnedBackgroundSection::new(
                "market.jpg",
                "The weekly market",
                vec![TextFragment::new("Saturday is for selling.", Alignment::Center)],
            )
            .into(),
        ],
    }
}
