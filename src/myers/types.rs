use std::fmt;

/// Ordered operations turning the old sequence into the new one.
pub type EditScript = Vec<Operation>;

/// Alias for a vector of Edit
/// Result of the Myers diff function
pub type Diff<T> = Vec<Edit<T>>;

/// Tag of a single step in an edit script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Present unchanged in both sequences (context).
    Match,
    /// Present only in the new sequence.
    Insert,
    /// Present only in the old sequence.
    Delete,
}

impl Operation {
    /// Three-letter tag used in log output.
    pub fn label(self) -> &'static str {
        match self {
            Operation::Match => "MAT",
            Operation::Insert => "INS",
            Operation::Delete => "DEL",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Each element in a diff can be
/// new (Insert)
/// removed (Delete)
/// unchanged (Match)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit<T> {
    Match(T),
    Insert(T),
    Delete(T),
}

impl<T> Edit<T> {
    /// Builds the entry for `op` carrying `value`.
    pub fn new(op: Operation, value: T) -> Self {
        match op {
            Operation::Match => Edit::Match(value),
            Operation::Insert => Edit::Insert(value),
            Operation::Delete => Edit::Delete(value),
        }
    }

    /// Tag of this entry.
    pub fn op(&self) -> Operation {
        match self {
            Edit::Match(_) => Operation::Match,
            Edit::Insert(_) => Operation::Insert,
            Edit::Delete(_) => Operation::Delete,
        }
    }

    /// Element carried by this entry.
    pub fn value(&self) -> &T {
        match self {
            Edit::Match(v) | Edit::Insert(v) | Edit::Delete(v) => v,
        }
    }

    /// Consumes the entry, returning its element.
    pub fn into_value(self) -> T {
        match self {
            Edit::Match(v) | Edit::Insert(v) | Edit::Delete(v) => v,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Edit<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edit::Match(el) => write!(f, " {el}"),
            Edit::Insert(el) => write!(f, "+{el}"),
            Edit::Delete(el) => write!(f, "-{el}"),
        }
    }
}
