use super::{decode, Snapshot, Store};
use crate::error::{Result, RosterError};
use crate::model::User;
use std::fs::{self, File, OpenOptions};
use std::io::Read;
use std::path::{Path, PathBuf};

/// File-based store: one JSON-array file is the entire persistent state.
pub struct FileStore {
    path: PathBuf,
    // Held open from load until the invocation ends. Rewrites go through
    // the path, not this handle, so persist always replaces the file in
    // full.
    handle: Option<File>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            handle: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True once `load` has opened the backing file. The handle stays
    /// open until the store is dropped; rewrites still go through the
    /// path.
    pub fn is_open(&self) -> bool {
        self.handle.is_some()
    }

    fn io_err(&self, op: &'static str, source: std::io::Error) -> RosterError {
        RosterError::Storage {
            op,
            path: self.path.clone(),
            source,
        }
    }
}

impl Store for FileStore {
    fn load(&mut self) -> Result<Snapshot> {
        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .open(&self.path)
            .map_err(|e| self.io_err("open", e))?;

        let mut raw = Vec::new();
        file.read_to_end(&mut raw)
            .map_err(|e| self.io_err("read", e))?;
        self.handle = Some(file);

        let users = decode(&raw)?;
        Ok(Snapshot { raw, users })
    }

    fn persist(&mut self, users: &[User]) -> Result<()> {
        let bytes = serde_json::to_vec(users)?;
        fs::write(&self.path, bytes)
            .map_err(|e| self.io_err("write", e))?;
        Ok(())
    }
}
