use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::User;
use crate::store::{Snapshot, Store};

/// Decode the item payload and append it to the collection, unless a
/// record with the same id already exists.
///
/// A duplicate id is a normal outcome: the store is left untouched and
/// the sink gets a human-readable message. A successful add persists the
/// full collection (existing order kept, new record last) and emits
/// nothing.
pub fn run<S: Store>(store: &mut S, snapshot: Snapshot, item: &str) -> Result<CmdResult> {
    let user: User = serde_json::from_str(item)?;

    if let Some(existing) = snapshot.users.iter().find(|u| u.id == user.id) {
        return Ok(CmdResult::default()
            .with_output(format!("Item with id {} already exists", existing.id)));
    }

    let mut users = snapshot.users;
    users.push(user.clone());
    store.persist(&users)?;

    Ok(CmdResult::default().with_affected(vec![user]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosterError;
    use crate::store::memory::{fixtures, InMemoryStore};

    #[test]
    fn appends_to_an_empty_store() {
        let mut store = InMemoryStore::new();
        let snapshot = store.load().unwrap();

        let result = run(
            &mut store,
            snapshot,
            "{\"id\":\"1\",\"email\":\"a@x.com\",\"age\":30}",
        )
        .unwrap();

        assert!(result.output.is_empty());
        assert_eq!(result.affected, vec![User::new("1", "a@x.com", 30)]);
        assert_eq!(
            store.content(),
            b"[{\"id\":\"1\",\"email\":\"a@x.com\",\"age\":30}]"
        );
    }

    #[test]
    fn appends_after_existing_records() {
        let mut store = fixtures::seeded(&[User::new("1", "a@x.com", 30)]);
        let snapshot = store.load().unwrap();

        run(
            &mut store,
            snapshot,
            "{\"id\":\"2\",\"email\":\"b@x.com\",\"age\":41}",
        )
        .unwrap();

        let users = store.load().unwrap().users;
        assert_eq!(
            users,
            vec![User::new("1", "a@x.com", 30), User::new("2", "b@x.com", 41)]
        );
    }

    #[test]
    fn duplicate_id_reports_and_leaves_store_untouched() {
        let mut store = fixtures::seeded(&[User::new("1", "a@x.com", 30)]);
        let before = store.content().to_vec();
        let snapshot = store.load().unwrap();

        let result = run(
            &mut store,
            snapshot,
            "{\"id\":\"1\",\"email\":\"other@x.com\",\"age\":99}",
        )
        .unwrap();

        assert_eq!(result.output, b"Item with id 1 already exists");
        assert!(result.affected.is_empty());
        assert_eq!(store.content(), before.as_slice());
    }

    #[test]
    fn malformed_item_is_a_format_error() {
        let mut store = InMemoryStore::new();
        let snapshot = store.load().unwrap();

        let err = run(&mut store, snapshot, "not json").unwrap_err();
        assert!(matches!(err, RosterError::Format(_)));
    }
}
