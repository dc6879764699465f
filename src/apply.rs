use crate::myers::Edit;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplyError {
    #[error("diff does not match the old sequence at index {index}")]
    Mismatch { index: usize },
    #[error("diff runs past the end of the old sequence at index {index}")]
    OutOfBounds { index: usize },
    #[error("diff leaves {remaining} elements of the old sequence unconsumed")]
    Unconsumed { remaining: usize },
}

/// Replays `diff` against `old`, producing the new sequence.
///
/// Matched and deleted elements are checked against `old`; inserted ones are
/// taken from the diff as-is.
pub fn apply<T: PartialEq + Clone>(old: &[T], diff: &[Edit<T>]) -> Result<Vec<T>, ApplyError> {
    let mut result = Vec::with_capacity(diff.len());
    let mut old_index = 0;

    for edit in diff {
        match edit {
            Edit::Insert(t) => result.push(t.clone()),
            Edit::Match(t) | Edit::Delete(t) => {
                let current = old
                    .get(old_index)
                    .ok_or(ApplyError::OutOfBounds { index: old_index })?;
                if current != t {
                    return Err(ApplyError::Mismatch { index: old_index });
                }
                if let Edit::Match(_) = edit {
                    result.push(current.clone());
                }
                old_index += 1;
            }
        }
    }

    if old_index < old.len() {
        return Err(ApplyError::Unconsumed {
            remaining: old.len() - old_index,
        });
    }
    Ok(result)
}
