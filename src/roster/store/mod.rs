//! # Storage Layer
//!
//! This module defines the storage abstraction for roster. The [`Store`]
//! trait allows the rest of the crate to work with different backends.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - The entire store is one file holding a JSON array of records
//!   - Created empty on first use if the file does not exist
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - Same byte-level contract, no filesystem, no persistence
//!
//! ## Storage Contract
//!
//! `load` hands back a [`Snapshot`]: the raw bytes exactly as stored plus
//! the collection decoded from them. A zero-length store decodes to the
//! empty collection rather than failing — a fresh file holds no JSON at
//! all until the first write. Anything else must be a JSON array of
//! records; content that does not decode is a fatal format error, since
//! the store is assumed to be written exclusively by this system.
//!
//! `persist` replaces the entire store with the serialization of the
//! given collection. Writes are whole-store rewrites, never patches, and
//! they are not atomic: no temp file, no rename, no locking. A store file
//! is owned by one invocation at a time; concurrent invocations race and
//! the last full write wins.

use crate::error::Result;
use crate::model::User;

pub mod fs;
pub mod memory;

/// One full read of the backing store.
#[derive(Debug, Default)]
pub struct Snapshot {
    /// Store content exactly as persisted, byte for byte.
    pub raw: Vec<u8>,
    /// The decoded collection, in stored order.
    pub users: Vec<User>,
}

/// Abstract interface for record storage.
pub trait Store {
    /// Read the whole store: raw bytes plus the decoded collection.
    fn load(&mut self) -> Result<Snapshot>;

    /// Replace the whole store with the given collection.
    fn persist(&mut self, users: &[User]) -> Result<()>;
}

pub(crate) fn decode(raw: &[u8]) -> Result<Vec<User>> {
    if raw.is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_slice(raw)?)
}
