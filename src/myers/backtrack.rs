use super::trace::{follows_insertion, Trace};
use super::types::{EditScript, Operation};

/// Walks `trace` back from `(old.len(), new.len())` to the origin and
/// returns the edit script in forward order.
///
/// `trace` must come from [`super::search`] over the same two sequences.
pub fn reconstruct<T>(old: &[T], new: &[T], trace: &Trace) -> EditScript {
    let levels = trace.levels();
    let mut script = EditScript::with_capacity(old.len() + new.len());
    let Some(start) = levels.first() else {
        return script;
    };

    let mut x = old.len() as isize;
    let mut y = new.len() as isize;
    for d in (1..levels.len()).rev() {
        let prev = &levels[d - 1];
        let d = d as isize;
        let k = x - y;
        let prev_k = if follows_insertion(prev, k, d) {
            k + 1
        } else {
            k - 1
        };
        let prev_x = prev.get(prev_k) as isize;
        let prev_y = prev_x - prev_k;

        while x > prev_x && y > prev_y {
            script.push(Operation::Match);
            x -= 1;
            y -= 1;
        }
        if x == prev_x {
            script.push(Operation::Insert);
        } else {
            script.push(Operation::Delete);
        }
        x = prev_x;
        y = prev_y;
    }

    let prefix = start.get(0);
    script.extend(std::iter::repeat(Operation::Match).take(prefix));

    script.reverse();
    script
}
