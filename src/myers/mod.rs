mod backtrack;
pub mod trace;
pub mod types;

pub use backtrack::reconstruct;
pub use trace::{search, Frontier, Trace};
pub use types::*;

use crate::lines::split_lines;

/// Computes the minimal edit script between two sequences.
///
/// Among several scripts of the same length, the one whose deletions come
/// before insertions at each change is returned.
pub fn shortest_edit_script<T: PartialEq>(old: &[T], new: &[T]) -> EditScript {
    let trace = search(old, new);
    tracing::debug!(
        n = old.len(),
        m = new.len(),
        distance = trace.distance(),
        "edit graph searched"
    );
    reconstruct(old, new, &trace)
}

/// Attaches the element each operation consumes.
///
/// Insertions take the next element of `new`, deletions the next element of
/// `old`, matches one from each (they are equal).
///
/// # Panics
///
/// If `script` consumes more elements than `old` or `new` hold.
pub fn to_entries<T: Clone>(script: &[Operation], old: &[T], new: &[T]) -> Diff<T> {
    let mut old_index = 0;
    let mut new_index = 0;
    script
        .iter()
        .map(|&op| {
            let value = match op {
                Operation::Insert => {
                    new_index += 1;
                    &new[new_index - 1]
                }
                Operation::Delete => {
                    old_index += 1;
                    &old[old_index - 1]
                }
                Operation::Match => {
                    old_index += 1;
                    new_index += 1;
                    &old[old_index - 1]
                }
            };
            Edit::new(op, value.clone())
        })
        .collect()
}

/// Computes the diff between two sequences using the Myers algorithm.
///
/// # Examples
///
/// ```
/// use myers_diff::myers::{diff, Edit};
///
/// let old = vec!["a", "b", "c"];
/// let new = vec!["a", "b", "d", "c"];
/// let result = diff(&old, &new);
/// assert_eq!(result, vec![
///     Edit::Match("a"),
///     Edit::Match("b"),
///     Edit::Insert("d"),
///     Edit::Match("c"),
/// ]);
/// ```
pub fn diff<T: PartialEq + Clone>(old: &[T], new: &[T]) -> Diff<T> {
    let script = shortest_edit_script(old, new);
    to_entries(&script, old, new)
}

/// Computes the diff between two strings after breaking them into lines
/// and running `diff`.
pub fn diff_lines(old: &str, new: &str) -> Diff<String> {
    diff(&split_lines(old), &split_lines(new))
}
