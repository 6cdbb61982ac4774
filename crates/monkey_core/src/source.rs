//! Decoded source text.

use std::fmt;
use std::ops::Deref;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while turning raw input into source text.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read `{}`", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("input is not valid UTF-8 (invalid sequence at byte {offset})")]
    InvalidUtf8 { offset: usize },
}

/// A finite, decoded sequence of Unicode scalar values.
///
/// Derefs to `[char]`, which is what a scanner borrows.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SourceText {
    chars: Vec<char>,
}

impl SourceText {
    /// Decode raw bytes, rejecting anything that is not well-formed UTF-8.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SourceError> {
        let text = simdutf8::compat::from_utf8(bytes).map_err(|e| SourceError::InvalidUtf8 {
            offset: e.valid_up_to(),
        })?;
        Ok(Self::from(text))
    }

    /// Number of characters (not bytes).
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    #[inline]
    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }
}

impl From<&str> for SourceText {
    fn from(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
        }
    }
}

impl Deref for SourceText {
    type Target = [char];

    fn deref(&self) -> &[char] {
        &self.chars
    }
}

impl fmt::Debug for SourceText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: String = self.chars.iter().collect();
        f.debug_tuple("SourceText").field(&text).finish()
    }
}

/// Read a file from disk and decode it as UTF-8.
pub fn read_source_file(path: impl AsRef<Path>) -> Result<SourceText, SourceError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "loaded source file");
    SourceText::from_bytes(&bytes)
}
