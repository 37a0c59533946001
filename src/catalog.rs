use std::collections::BTreeSet;

use crate::error::{VitrineError, VitrineResult};
use crate::texture::{TextureHandle, TextureLibrary};

/// Declarative catalog content, deserializable from JSON. Texture fields
/// are keys into the [`TextureLibrary`]; resolution happens in
/// [`GalleryCatalog::from_config`].
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct CatalogConfig {
    pub entries: Vec<EntryConfig>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct EntryConfig {
    pub id: String,
    pub display: String,
    pub description: String,
    #[serde(default)]
    pub live_demo: Option<String>,
    #[serde(default)]
    pub source_code: Option<String>,
    /// The entry the gallery boots on is declared already seen.
    #[serde(default)]
    pub seen: bool,
}

/// One showcased work. Immutable after construction; the seen flag lives in
/// the catalog, not here.
#[derive(Clone, Debug)]
pub struct GalleryEntry {
    pub id: String,
    pub display: TextureHandle,
    pub description: TextureHandle,
    pub live_demo: Option<String>,
    pub source_code: Option<String>,
}

/// Ordered, fixed list of showcase entries plus their seen flags.
///
/// Entries are never added or removed at runtime. Seen flags flip
/// false→true exactly once each and never revert.
#[derive(Debug)]
pub struct GalleryCatalog {
    entries: Vec<GalleryEntry>,
    seen: Vec<bool>,
}

impl GalleryCatalog {
    /// Resolves texture keys against the pre-loaded library. Any missing
    /// key, duplicate id, or empty entry list aborts startup.
    pub fn from_config(config: &CatalogConfig, textures: &TextureLibrary) -> VitrineResult<Self> {
        if config.entries.is_empty() {
            return Err(VitrineError::config("catalog must have at least one entry"));
        }

        let mut ids = BTreeSet::new();
        let mut entries = Vec::with_capacity(config.entries.len());
        let mut seen = Vec::with_capacity(config.entries.len());

        for entry in &config.entries {
            if entry.id.trim().is_empty() {
                return Err(VitrineError::config("entry id must be non-empty"));
            }
            if !ids.insert(entry.id.as_str()) {
                return Err(VitrineError::config(format!(
                    "duplicate entry id '{}'",
                    entry.id
                )));
            }

            entries.push(GalleryEntry {
                id: entry.id.clone(),
                display: textures.get(&entry.display)?,
                description: textures.get(&entry.description)?,
                live_demo: entry.live_demo.clone(),
                source_code: entry.source_code.clone(),
            });
            seen.push(entry.seen);
        }

        Ok(Self { entries, seen })
    }

    /// Index is always produced by wrap-around arithmetic, so it is in
    /// range by construction.
    pub fn entry(&self, index: usize) -> &GalleryEntry {
        &self.entries[index]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Idempotent: marking an already-seen entry changes nothing.
    pub fn mark_seen(&mut self, index: usize) {
        self.seen[index] = true;
    }

    pub fn is_seen(&self, index: usize) -> bool {
        self.seen[index]
    }

    pub fn all_seen(&self) -> bool {
        self.seen.iter().all(|&s| s)
    }
}
