//! In-memory library store

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::model::Library;
use crate::store::LibraryStore;
use crate::Result;

/// Library store held entirely in memory. Used by tests to exercise the
/// refresh and query paths without file I/O.
pub struct MemoryStore {
    library: RwLock<Library>,
}

impl MemoryStore {
    pub fn new(library: Library) -> Self {
        Self {
            library: RwLock::new(library),
        }
    }
}

#[async_trait]
impl LibraryStore for MemoryStore {
    async fn load(&self) -> Result<Library> {
        Ok(self.library.read().await.clone())
    }

    async fn save(&self, library: &Library) -> Result<()> {
        *self.library.write().await = library.clone();
        Ok(())
    }
}
