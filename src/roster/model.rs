use serde::{Deserialize, Serialize};

/// One user entry in the store.
///
/// `id` is the lookup key. Uniqueness is enforced when adding, not when
/// loading: a hand-edited store file may carry duplicates, and scans act
/// on every match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub age: i64,
}

impl User {
    pub fn new(id: impl Into<String>, email: impl Into<String>, age: i64) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            age,
        }
    }
}
