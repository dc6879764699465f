use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LineSourceError {
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One line of a file, without its terminator.
///
/// Lines compare by their raw bytes; decoding only happens for display, where
/// bytes that are not valid UTF-8 are shown as U+FFFD.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Line(Vec<u8>);

impl Line {
    /// Raw content, as read.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<&[u8]> for Line {
    fn from(bytes: &[u8]) -> Self {
        Line(bytes.to_vec())
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

/// Breaks text into lines. `\n` and `\r\n` both terminate a line and a
/// trailing terminator does not produce an empty last line.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(ToString::to_string).collect()
}

/// Byte-level counterpart of [`split_lines`]: splits on `\n` and drops one
/// `\r` at the end of each line.
pub fn split_bytes(bytes: &[u8]) -> Vec<Line> {
    if bytes.is_empty() {
        return vec![];
    }
    let body = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    body.split(|&b| b == b'\n')
        .map(|line| Line::from(line.strip_suffix(b"\r").unwrap_or(line)))
        .collect()
}

/// Reads a file and splits it into lines.
///
/// Content is kept as raw bytes, so files that are not valid UTF-8 still
/// diff exactly; such files are reported with a warning.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<Line>, LineSourceError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| LineSourceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    if std::str::from_utf8(&bytes).is_err() {
        tracing::warn!(path = %path.display(), "file is not valid UTF-8, invalid bytes display as U+FFFD");
    }
    let lines = split_bytes(&bytes);
    tracing::debug!(path = %path.display(), lines = lines.len(), "read lines");
    Ok(lines)
}
