//! Name-keyed asset store
//!
//! One store per asset kind (textures, sounds, fonts). Lookups never insert:
//! a missing name is reported as `None` and the caller picks the fallback.

use std::collections::HashMap;

use super::AssetError;

/// Loaded assets keyed by name, remembering insertion order for iteration.
#[derive(Debug)]
pub struct AssetStore<A> {
    /// Loaded assets keyed by name
    assets: HashMap<String, A>,
    /// Names in the order they were first stored
    names: Vec<String>,
}

impl<A> AssetStore<A> {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            assets: HashMap::new(),
            names: Vec::new(),
        }
    }

    /// Store an asset under `name`.
    ///
    /// If an asset with the same name exists, it will be replaced.
    pub fn insert(&mut self, name: impl Into<String>, asset: A) {
        let name = name.into();
        if !self.assets.contains_key(&name) {
            self.names.push(name.clone());
        }
        self.assets.insert(name, asset);
    }

    /// Record the outcome of a load attempt.
    ///
    /// A successful load is stored under `name`, replacing any earlier asset.
    /// A failed load leaves the store untouched and hands the error back.
    pub fn store_loaded(&mut self, name: &str, result: Result<A, AssetError>) -> Result<(), AssetError> {
        let asset = result?;
        self.insert(name, asset);
        Ok(())
    }

    /// Get an asset by name
    pub fn get(&self, name: &str) -> Option<&A> {
        self.assets.get(name)
    }

    /// Check if an asset with the given name exists
    pub fn contains(&self, name: &str) -> bool {
        self.assets.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Iterate over asset names in the order they were first stored
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|s| s.as_str())
    }
}

impl<A> Default for AssetStore<A> {
    fn default() -> Self {
        Self::new()
    }
}
