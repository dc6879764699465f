//! Forward search through the edit graph.
//!
//! Each level `d` of the search records, for every diagonal `k = x - y` it
//! reached, the furthest `x` obtainable with exactly `d` insertions and
//! deletions. The full history of levels is kept so the path can be
//! walked back afterwards (see [`super::reconstruct`]).

use std::fmt;

/// Furthest-reaching x per diagonal for a single edit cost `d`.
///
/// Only diagonals with the same parity as `d` are reachable, so slot `i`
/// holds diagonal `k = 2i - d`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frontier {
    d: isize,
    data: Vec<usize>,
}

impl Frontier {
    fn new(d: usize) -> Self {
        Frontier {
            d: d as isize,
            data: Vec::with_capacity(d + 1),
        }
    }

    fn index(&self, k: isize) -> usize {
        debug_assert!((k + self.d) % 2 == 0, "diagonal {k} not on level {}", self.d);
        ((k + self.d) / 2) as usize
    }

    /// Edit cost this frontier belongs to.
    pub fn d(&self) -> usize {
        self.d as usize
    }

    /// Furthest x reached on diagonal `k`.
    ///
    /// # Panics
    ///
    /// If `k` was not computed on this level.
    pub fn get(&self, k: isize) -> usize {
        self.data[self.index(k)]
    }

    /// Computed diagonals in increasing `k` order, with their x.
    pub fn diagonals(&self) -> impl Iterator<Item = (isize, usize)> + '_ {
        self.data
            .iter()
            .enumerate()
            .map(move |(i, &x)| (2 * i as isize - self.d, x))
    }

    fn push(&mut self, x: usize) {
        self.data.push(x);
    }
}

/// Complete search history, one frontier per edit cost `0..=D`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    levels: Vec<Frontier>,
}

impl Trace {
    /// Frontiers in order of increasing `d`.
    pub fn levels(&self) -> &[Frontier] {
        &self.levels
    }

    /// True only when both inputs were empty.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Minimum number of insertions and deletions, `D`.
    pub fn distance(&self) -> usize {
        self.levels.len().saturating_sub(1)
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for frontier in &self.levels {
            writeln!(f, "d = {}:", frontier.d())?;
            for (k, x) in frontier.diagonals() {
                let y = x as isize - k;
                writeln!(f, "  k = {k:2}: ({x}, {y})")?;
            }
        }
        Ok(())
    }
}

/// Direction rule shared by the search and the backtrack.
///
/// Returns `true` when diagonal `k` on level `d` is entered from `k + 1`
/// (y advances: an insertion), `false` when it is entered from `k - 1`
/// (x advances: a deletion). Ties go to the deletion.
pub(crate) fn follows_insertion(prev: &Frontier, k: isize, d: isize) -> bool {
    k == -d || (k != d && prev.get(k - 1) < prev.get(k + 1))
}

/// Runs the greedy forward search until `(old.len(), new.len())` is reached.
///
/// Returns an empty trace when both inputs are empty.
pub fn search<T: PartialEq>(old: &[T], new: &[T]) -> Trace {
    let n = old.len();
    let m = new.len();
    let max_d = n + m;
    let mut trace = Trace::default();
    if max_d == 0 {
        return trace;
    }

    let mut start = Frontier::new(0);
    let mut x = 0;
    while x < n && x < m && old[x] == new[x] {
        x += 1;
    }
    start.push(x);
    trace.levels.push(start);
    if x == n && x == m {
        return trace;
    }

    for d in 1..=max_d {
        let mut current = Frontier::new(d);
        let reached = extend(&trace.levels[d - 1], &mut current, old, new);
        tracing::trace!(d, diagonals = current.data.len(), "search level");
        trace.levels.push(current);
        if reached {
            break;
        }
    }
    trace
}

/// Fills `current` from `prev`, stopping at the first diagonal that hits the end.
fn extend<T: PartialEq>(prev: &Frontier, current: &mut Frontier, old: &[T], new: &[T]) -> bool {
    let n = old.len();
    let m = new.len();
    let d = current.d;
    for k in (-d..=d).step_by(2) {
        let mut x = if follows_insertion(prev, k, d) {
            prev.get(k + 1)
        } else {
            prev.get(k - 1) + 1
        };
        let mut y = (x as isize - k) as usize;
        while x < n && y < m && old[x] == new[y] {
            x += 1;
            y += 1;
        }
        current.push(x);
        if x == n && y == m {
            return true;
        }
    }
    false
}
