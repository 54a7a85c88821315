use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::Snapshot;

/// Emit the store content exactly as persisted.
///
/// Works on the raw bytes rather than the decoded collection, so the
/// output keeps whatever formatting (or hand-edited duplicates) the file
/// currently holds. A fresh, empty store emits zero bytes.
pub fn run(snapshot: &Snapshot) -> Result<CmdResult> {
    Ok(CmdResult::default().with_output(snapshot.raw.clone()))
}
