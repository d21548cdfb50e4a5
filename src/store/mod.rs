//! Library storage backends
//!
//! The refresh task and the HTTP handlers both go through the
//! `LibraryStore` trait, so they can be tested against the in-memory
//! backend without touching the filesystem.

pub mod file;
pub mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;

use crate::model::Library;
use crate::Result;

/// Storage interface for the artist library.
#[async_trait]
pub trait LibraryStore: Send + Sync {
    /// Load the full library from the backing store.
    async fn load(&self) -> Result<Library>;

    /// Persist the full library, replacing the previous contents.
    async fn save(&self, library: &Library) -> Result<()>;
}
