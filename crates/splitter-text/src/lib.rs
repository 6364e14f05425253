//! splitter-text - Separator-based text splitters
//!
//! This crate splits arbitrarily long text into bounded-size, optionally
//! overlapping chunks.
//!
//! # Splitters
//!
//! - [`FlatSplitter`]: Splits on a single literal or regex separator and
//!   merges the pieces back into size-bounded chunks.
//!
//! - [`RecursiveSplitter`]: Tries separators in priority order (paragraphs,
//!   lines, words, characters) and re-splits anything still too large.
//!
//! Chunk size is soft: a piece that cannot be split further is emitted as
//! is and reported through [`SplitReport::oversized`].
//!
//! # Example
//!
//! ```rust
//! use splitter_text::{RecursiveSplitter, SplitConfig, TextSplitter};
//!
//! let config = SplitConfig::default()
//!     .with_chunk_size(7)
//!     .with_chunk_overlap(3);
//! let splitter = RecursiveSplitter::with_default_separators(config).unwrap();
//! let chunks = splitter.split_text("foo bar baz 123").unwrap();
//! assert_eq!(chunks, vec!["foo bar", "bar baz", "baz 123"]);
//! ```

mod flat;
mod pattern;
mod recursive;

pub use flat::FlatSplitter;
pub use recursive::RecursiveSplitter;

// Re-export types for convenience
pub use splitter_core::{
    Document, LengthPolicy, Result, Separator, SplitConfig, SplitError, SplitReport, TextSplitter,
};
