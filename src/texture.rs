use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::{VitrineError, VitrineResult};

/// Opaque handle to a pre-loaded GPU texture.
///
/// The core never touches pixel data; a handle is just a cheaply clonable
/// reference the renderer resolves. Equality compares the resource key, which
/// is what tests assert against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextureHandle(Arc<str>);

impl TextureHandle {
    pub fn new(key: impl Into<Arc<str>>) -> Self {
        Self(key.into())
    }

    pub fn key(&self) -> &str {
        &self.0
    }
}

/// Pre-loaded textures keyed by resource id, handed over by the asset
/// loader at startup.
#[derive(Debug, Default)]
pub struct TextureLibrary {
    items: BTreeMap<String, TextureHandle>,
}

impl TextureLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, handle: TextureHandle) {
        self.items.insert(key.into(), handle);
    }

    /// A missing key means the asset loader never delivered a declared
    /// resource. The catalog is static, so this is fatal at startup.
    pub fn get(&self, key: &str) -> VitrineResult<TextureHandle> {
        self.items
            .get(key)
            .cloned()
            .ok_or_else(|| VitrineError::config(format!("missing texture for key '{key}'")))
    }

}
