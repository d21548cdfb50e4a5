//! Flat-file JSON library store

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use crate::model::Library;
use crate::store::LibraryStore;
use crate::Result;

/// Library store backed by a single JSON file.
///
/// `load` reads and parses the file fresh on every call; there is no
/// in-memory cache. `save` overwrites the whole file pretty-printed with
/// two-space indentation, matching the published file format.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl LibraryStore for JsonFileStore {
    async fn load(&self) -> Result<Library> {
        let contents = tokio::fs::read_to_string(&self.path).await?;
        let library = serde_json::from_str(&contents)?;
        Ok(library)
    }

    async fn save(&self, library: &Library) -> Result<()> {
        let contents = serde_json::to_string_pretty(library)?;
        tokio::fs::write(&self.path, contents).await?;
        debug!("Wrote library file {}", self.path.display());
        Ok(())
    }
}
