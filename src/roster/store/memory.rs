use super::{decode, Snapshot, Store};
use crate::error::Result;
use crate::model::User;

/// In-memory storage for testing and development.
/// Holds the same byte content a store file would; does NOT persist.
#[derive(Default)]
pub struct InMemoryStore {
    content: Vec<u8>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: impl Into<Vec<u8>>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Current backing content, byte for byte.
    pub fn content(&self) -> &[u8] {
        &self.content
    }
}

impl Store for InMemoryStore {
    fn load(&mut self) -> Result<Snapshot> {
        let raw = self.content.clone();
        let users = decode(&raw)?;
        Ok(Snapshot { raw, users })
    }

    fn persist(&mut self, users: &[User]) -> Result<()> {
        self.content = serde_json::to_vec(users)?;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// A store pre-seeded with the given records.
    pub fn seeded(users: &[User]) -> InMemoryStore {
        let mut store = InMemoryStore::new();
        store.persist(users).unwrap();
        store
    }

    /// A store whose raw content was "hand-edited" to hold duplicates of
    /// the given record.
    pub fn with_duplicates(user: &User, copies: usize) -> InMemoryStore {
        let users: Vec<User> = std::iter::repeat(user.clone()).take(copies).collect();
        let mut store = InMemoryStore::new();
        store.persist(&users).unwrap();
        store
    }
}
