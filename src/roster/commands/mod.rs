use crate::model::User;

pub mod add;
pub mod find;
pub mod list;
pub mod remove;

/// Outcome of one operation.
///
/// `output` is the exact byte content destined for the caller's sink;
/// nothing is appended or reformatted on the way out. `affected` carries
/// the records an operation matched, added, or removed, for callers that
/// want structure instead of bytes.
///
/// Expected misses (duplicate id on add, unknown id on remove or find)
/// are reported through `output`, never through the error path.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub output: Vec<u8>,
    pub affected: Vec<User>,
}

impl CmdResult {
    pub fn with_output(mut self, output: impl Into<Vec<u8>>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_affected(mut self, users: Vec<User>) -> Self {
        self.affected = users;
        self
    }
}
