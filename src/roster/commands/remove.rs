use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::User;
use crate::store::{Snapshot, Store};

/// Remove every record whose id matches, preserving the order of the
/// remainder, and persist the result.
///
/// A miss is a normal outcome: the sink gets a human-readable message.
/// The store is rewritten either way, so a remove on an unknown id still
/// replaces the file with unchanged content — callers observe the same
/// write whether or not anything matched.
pub fn run<S: Store>(store: &mut S, snapshot: Snapshot, id: &str) -> Result<CmdResult> {
    let (removed, kept): (Vec<User>, Vec<User>) =
        snapshot.users.into_iter().partition(|u| u.id == id);

    let mut result = CmdResult::default();
    if removed.is_empty() {
        result = result.with_output(format!("Item with id {} not found", id));
    }

    store.persist(&kept)?;

    Ok(result.with_affected(removed))
}
