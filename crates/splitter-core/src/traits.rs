//! Core traits defining the interface between splitters and their callers.

use tracing::warn;

use crate::error::{Result, SplitError};
use crate::length::LengthPolicy;
use crate::types::{Document, SplitReport};

/// Splitting configuration.
///
/// Built once by the caller and treated as read-only for the lifetime of a
/// split.
#[derive(Debug, Clone)]
pub struct SplitConfig {
    /// Target chunk size, in length-policy units.
    pub chunk_size: usize,

    /// Length of trailing content repeated at the start of the next chunk.
    pub chunk_overlap: usize,

    /// Trim surrounding whitespace from emitted chunks.
    pub trim_space: bool,

    /// Reattach the separator as a prefix of the piece that follows it.
    pub keep_separator: bool,

    /// Function used to measure text.
    pub length: LengthPolicy,
}

impl SplitConfig {
    /// Set the chunk size.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Set the chunk overlap.
    pub fn with_chunk_overlap(mut self, chunk_overlap: usize) -> Self {
        self.chunk_overlap = chunk_overlap;
        self
    }

    /// Set whether chunks are trimmed.
    pub fn with_trim_space(mut self, trim_space: bool) -> Self {
        self.trim_space = trim_space;
        self
    }

    /// Set whether separators are kept in the output.
    pub fn with_keep_separator(mut self, keep_separator: bool) -> Self {
        self.keep_separator = keep_separator;
        self
    }

    /// Set the length policy.
    pub fn with_length(mut self, length: LengthPolicy) -> Self {
        self.length = length;
        self
    }

    /// Reject configurations the merge step cannot honor.
    ///
    /// An overlap equal to the chunk size is allowed: the merge keeps
    /// evicting until the next piece fits.
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(SplitError::invalid_config("chunk size must be positive"));
        }
        if self.chunk_overlap > self.chunk_size {
            return Err(SplitError::invalid_config(format!(
                "chunk overlap {} is larger than chunk size {}",
                self.chunk_overlap, self.chunk_size
            )));
        }
        Ok(())
    }
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            chunk_size: 100,
            chunk_overlap: 10,
            trim_space: true,
            keep_separator: false,
            length: LengthPolicy::chars(),
        }
    }
}

/// Splits text into bounded, ordered chunks.
pub trait TextSplitter: Send + Sync {
    /// Split text, returning chunks together with oversized-chunk diagnostics.
    fn split_with_report(&self, text: &str) -> Result<SplitReport>;

    /// Split text into chunks, logging any oversized chunk as a warning.
    fn split_text(&self, text: &str) -> Result<Vec<String>> {
        let report = self.split_with_report(text)?;
        for oversized in &report.oversized {
            warn!(
                "Created a chunk of size {}, which is longer than the requested {}",
                oversized.length, oversized.chunk_size
            );
        }
        Ok(report.chunks)
    }

    /// Split a document's content into chunks.
    fn split_document(&self, doc: &Document) -> Result<Vec<String>> {
        self.split_text(&doc.content)
    }
}
