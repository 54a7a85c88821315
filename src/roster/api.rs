//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the
//! single entry point for all roster operations, regardless of the UI in
//! front of it.
//!
//! Each method performs one full invocation against the store: load once,
//! run exactly one command, return its structured result. Mutating
//! commands persist through the same store before returning.
//!
//! `RosterApi<S: Store>` is generic over the storage backend:
//! - Production: `RosterApi<FileStore>`
//! - Testing: `RosterApi<InMemoryStore>`
//!
//! The facade holds no business logic and performs no output formatting;
//! that belongs to `commands/*.rs` and the CLI layer respectively.

use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::store::Store;

/// The main API facade for roster operations.
pub struct RosterApi<S: Store> {
    store: S,
}

impl<S: Store> RosterApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Emit the store content verbatim.
    pub fn list(&mut self) -> Result<CmdResult> {
        let snapshot = self.store.load()?;
        commands::list::run(&snapshot)
    }

    /// Emit every record matching the given id.
    pub fn find_by_id(&mut self, id: &str) -> Result<CmdResult> {
        let snapshot = self.store.load()?;
        commands::find::run(&snapshot, id)
    }

    /// Decode the item payload and append it, rejecting duplicate ids.
    pub fn add(&mut self, item: &str) -> Result<CmdResult> {
        let snapshot = self.store.load()?;
        commands::add::run(&mut self.store, snapshot, item)
    }

    /// Remove every record matching the given id.
    pub fn remove(&mut self, id: &str) -> Result<CmdResult> {
        let snapshot = self.store.load()?;
        commands::remove::run(&mut self.store, snapshot, id)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
