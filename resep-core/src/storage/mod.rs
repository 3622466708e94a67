//! Local persistence for Resep Nusantara.
//!
//! Everything the application remembers lives in a single key-value store
//! of JSON strings, one key per piece of state:
//!
//! ```text
//! rn-profile          Profile object
//! rn-favorites        [FavoriteEntry]
//! rn-reviews          { "<type>-<id>": [Review] }
//! rn-cache-makanan    [Recipe] snapshot
//! rn-cache-minuman    [Recipe] snapshot
//! ```
//!
//! With [`FileStore`] each key is a `<key>.json` file in the data directory.

mod backend;
mod persistent;
mod storage_key;

pub use backend::{FileStore, KeyValueStore, MemoryStore, StorageError};
pub use persistent::PersistentStore;
pub use storage_key::StorageKey;
