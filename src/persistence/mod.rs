//! Saving and restoring games.
//!
//! ## Layers
//!
//! - [`SaveStore`]: string key-value backend ([`MemoryStore`], [`FileStore`])
//! - [`SaveData`]: the JSON record and its validation
//! - [`SaveSlot`]: best-effort `save` / `load` / `clear` under one key
//!
//! Persistence never surfaces failures to the player. A missing, corrupt or
//! inconsistent record loads as `None` and the caller starts a fresh game.

mod record;
mod slot;
mod store;

pub use record::{SaveData, SaveError};
pub use slot::SaveSlot;
pub use store::{FileStore, MemoryStore, SaveStore, StoreError};
