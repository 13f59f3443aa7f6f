use crate::models::Narrative;
use relative_path::RelativePathBuf;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Narrative not found: {0}")]
    NotFound(String),
    #[error("Invalid narrative key: {0:?}")]
    InvalidKey(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to decode narrative {key}: {source}")]
    Decode {
        key: String,
        source: serde_json::Error,
    },
    #[error("Invalid narratives directory: {0}")]
    InvalidNarrativesDir(String),
}

impl SourceError {
    /// Whether the reader should see the "story not found" screen
    pub fn is_not_found(&self) -> bool {
        matches!(self, SourceError::NotFound(_) | SourceError::InvalidKey(_))
    }
}

/// Supplies narratives by key. The result is stable for one render pass.
pub trait NarrativeSource {
    fn fetch(&self, key: &str) -> Result<Narrative, SourceError>;
}

const NARRATIVE_EXTENSION: &str = "json";

/// Keys are single path segments of letters, digits, `-` and `_`
fn validate_key(key: &str) -> Result<(), SourceError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(SourceError::InvalidKey(key.to_string()))
    }
}

/// Reads `<root>/<key>.json` files
#[derive(Debug, Clone, PartialEq)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, SourceError> {
        let root = root.into();
        validate_narratives_dir(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        RelativePathBuf::from(key)
            .with_extension(NARRATIVE_EXTENSION)
            .to_path(&self.root)
    }

    /// Sorted keys of every narrative file in the directory
    pub fn keys(&self) -> Result<Vec<String>, SourceError> {
        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.is_file()
                && let Some(ext) = path.extension()
                && ext == NARRATIVE_EXTENSION
                && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
                && validate_key(stem).is_ok()
            {
                keys.push(stem.to_string());
            }
        }
        keys.sort();
        Ok(keys)
    }
}

impl NarrativeSource for DirectorySource {
    fn fetch(&self, key: &str) -> Result<Narrative, SourceError> {
        validate_key(key)?;
        let path = self.path_for(key);
        if !path.exists() {
            log::debug!("No narrative file at {}", path.display());
            return Err(SourceError::NotFound(key.to_string()));
        }

        log::debug!("Loading narrative {key} from {}", path.display());
        let content = fs::read_to_string(&path)?;
        Narrative::from_json(&content).map_err(|source| {
            log::warn!("Failed to decode narrative {key}: {source}");
            SourceError::Decode {
                key: key.to_string(),
                source,
            }
        })
    }
}

/// Narratives held in memory, for tests and embedded content
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InMemorySource {
    narratives: HashMap<String, Narrative>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, narrative: Narrative) -> Self {
        self.insert(key, narrative);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, narrative: Narrative) {
        self.narratives.insert(key.into(), narrative);
    }

    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<_> = self.narratives.keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl NarrativeSource for InMemorySource {
    fn fetch(&self, key: &str) -> Result<Narrative, SourceError> {
        self.narratives
            .get(key)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(key.to_string()))
    }
}

pub fn validate_narratives_dir(path: &Path) -> Result<(), SourceError> {
    if !path.exists() || !path.is_dir() {
        return Err(SourceError::InvalidNarrativesDir(format!(
            "{} is not a directory",
            path.display()
        )));
    }

    Ok(())
}
