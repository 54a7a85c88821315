use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::Snapshot;

/// Scan the collection once, in order, emitting every record whose id
/// matches. Duplicate ids (possible in a hand-edited store) all match, in
/// stored order. Zero matches emit zero bytes; a miss is not an error.
pub fn run(snapshot: &Snapshot, id: &str) -> Result<CmdResult> {
    let mut output = Vec::new();
    let mut matched = Vec::new();

    for user in &snapshot.users {
        if user.id == id {
            output.extend_from_slice(&serde_json::to_vec(user)?);
            matched.push(user.clone());
        }
    }

    Ok(CmdResult::default()
        .with_output(output)
        .with_affected(matched))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::User;
    use crate::store::memory::fixtures;
    use crate::store::Store;

    #[test]
    fn emits_the_matching_record() {
        let mut store = fixtures::seeded(&[
            User::new("1", "a@x.com", 30),
            User::new("2", "b@x.com", 41),
        ]);
        let snapshot = store.load().unwrap();

        let result = run(&snapshot, "1").unwrap();
        assert_eq!(
            result.output,
            b"{\"id\":\"1\",\"email\":\"a@x.com\",\"age\":30}"
        );
        assert_eq!(result.affected, vec![User::new("1", "a@x.com", 30)]);
    }

    #[test]
    fn no_match_emits_nothing() {
        let mut store = fixtures::seeded(&[User::new("1", "a@x.com", 30)]);
        let snapshot = store.load().unwrap();

        let result = run(&snapshot, "7").unwrap();
        assert!(result.output.is_empty());
        assert!(result.affected.is_empty());
    }

    #[test]
    fn duplicate_ids_all_match_in_order() {
        let user = User::new("1", "a@x.com", 30);
        let mut store = fixtures::with_duplicates(&user, 2);
        let snapshot = store.load().unwrap();

        let result = run(&snapshot, "1").unwrap();
        let one = "{\"id\":\"1\",\"email\":\"a@x.com\",\"age\":30}";
        assert_eq!(result.output, format!("{}{}", one, one).as_bytes());
        assert_eq!(result.affected.len(), 2);
    }
}
