//! Line-level diffing with the Myers O(ND) algorithm.
//!
//! [`myers::search`] explores the edit graph, [`myers::reconstruct`] walks the
//! recorded frontiers back into an [`myers::EditScript`], and
//! [`myers::to_entries`] attaches the elements each operation consumes.

pub mod apply;
pub mod lines;
pub mod myers;
pub mod render;

pub use apply::{apply, ApplyError};
pub use lines::{read_lines, split_bytes, split_lines, Line, LineSourceError};
pub use myers::{diff, diff_lines, Diff, Edit, EditScript, Operation};
pub use render::{ColorChoice, Renderer};
