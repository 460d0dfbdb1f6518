//! Key-value storage abstraction.
//!
//! The terminal persists its two preference flags through the
//! [`KeyValueStore`] trait. Two implementations are provided:
//! [`MemoryStore`] for tests and ephemeral sessions, and [`JsonFileStore`]
//! which keeps a flat JSON object on disk, the desktop stand-in for browser
//! local storage.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use folio_types::error::Result;

/// A string-to-string key-value store.
pub trait KeyValueStore {
    /// Look up a key. Missing keys are `Ok(None)`, not an error.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Insert or overwrite a key.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove a key. Removing a missing key is a no-op.
    fn remove(&mut self, key: &str) -> Result<()>;

    /// All keys currently stored, in sorted order.
    fn keys(&self) -> Result<Vec<String>>;
}
