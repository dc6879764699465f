use myers_diff::myers::{reconstruct, search, shortest_edit_script, to_entries};
use myers_diff::*;
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_round_trip_lines(
        old in prop::collection::vec("[abc]{0,2}", 0..15),
        new in prop::collection::vec("[abc]{0,2}", 0..15),
    ) {
        let changes = diff(&old, &new);
        let result = apply(&old, &changes);
        prop_assert_eq!(result, Ok(new));
    }

    #[test]
    fn test_round_trip_text(old in "[ab\n]{0,40}", new in "[ab\n]{0,40}") {
        let changes = diff_lines(&old, &new);
        let result = apply(&split_lines(&old), &changes);
        prop_assert_eq!(result, Ok(split_lines(&new)));
    }

    #[test]
    fn test_script_length_is_distance_plus_matches(
        old in prop::collection::vec(any::<bool>(), 0..25),
        new in prop::collection::vec(any::<bool>(), 0..25),
    ) {
        let trace = search(&old, &new);
        let script = reconstruct(&old, &new, &trace);
        let edits = script.iter().filter(|op| **op != Operation::Match).count();
        prop_assert_eq!(edits, trace.distance());
        prop_assert_eq!(script, shortest_edit_script(&old, &new));
    }
}

#[test]
fn test_pipeline_by_hand() {
    let old = split_lines("a\nb\nc\n");
    let new = split_lines("a\nb\nd\nc\n");
    let trace = search(&old, &new);
    assert_eq!(trace.distance(), 1);

    let script = reconstruct(&old, &new, &trace);
    assert_eq!(
        script,
        vec![
            Operation::Match,
            Operation::Match,
            Operation::Insert,
            Operation::Match
        ]
    );

    let entries = to_entries(&script, &old, &new);
    let mut out = Vec::new();
    Renderer { color: false }
        .write_diff(&mut out, &entries)
        .unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), " a\n b\n+d\n c\n");
}

#[test]
fn test_pure_insertion_and_deletion() {
    let lines = split_lines("x\ny\nz");
    let empty: Vec<String> = vec![];

    let inserted = diff(&empty, &lines);
    assert!(inserted.iter().all(|e| e.op() == Operation::Insert));
    assert_eq!(
        inserted.into_iter().map(Edit::into_value).collect::<Vec<_>>(),
        lines
    );

    let deleted = diff(&lines, &empty);
    assert!(deleted.iter().all(|e| e.op() == Operation::Delete));
    assert_eq!(
        deleted.into_iter().map(Edit::into_value).collect::<Vec<_>>(),
        lines
    );
}

#[test]
fn test_undecodable_lines_stay_distinct() {
    let old = split_bytes(b"keep\n\xe9t\xe9\n");
    let new = split_bytes(b"keep\n\xe8t\xe8\n");

    let changes = diff(&old, &new);
    assert_eq!(
        changes.iter().map(Edit::op).collect::<Vec<_>>(),
        vec![Operation::Match, Operation::Delete, Operation::Insert]
    );
    assert_eq!(apply(&old, &changes), Ok(new));

    let mut out = Vec::new();
    Renderer { color: false }
        .write_diff(&mut out, &changes)
        .unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        " keep\n-\u{fffd}t\u{fffd}\n+\u{fffd}t\u{fffd}\n"
    );
}
