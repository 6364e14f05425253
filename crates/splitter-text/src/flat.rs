//! Single-separator splitter.
//!
//! Splits text on one separator and greedily merges the pieces back into
//! chunks bounded by the configured size, carrying a trailing overlap from
//! one chunk into the next.

use std::collections::VecDeque;

use splitter_core::{Result, Separator, SplitConfig, SplitReport, TextSplitter};
use tracing::debug;

use crate::pattern::CompiledSeparator;

/// Splitter that uses a single separator.
#[derive(Debug, Clone)]
pub struct FlatSplitter {
    config: SplitConfig,
    separator: CompiledSeparator,
}

impl FlatSplitter {
    /// Create a splitter for `separator`.
    ///
    /// Fails if the configuration is invalid or the separator is a
    /// malformed regex.
    pub fn new(config: SplitConfig, separator: Separator) -> Result<Self> {
        config.validate()?;
        let separator = CompiledSeparator::compile(&separator)?;
        Ok(Self { config, separator })
    }

    /// The configuration this splitter was built with.
    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    /// The separator used by [`TextSplitter::split_text`].
    pub fn separator(&self) -> &Separator {
        self.separator.separator()
    }

    /// Split `text` on `separator` into non-empty pieces.
    ///
    /// Honors `keep_separator`: the separator is prefixed to every piece
    /// but the first. An empty separator yields one piece per character.
    pub fn split<'a>(&self, text: &'a str, separator: &Separator) -> Result<Vec<&'a str>> {
        let compiled = CompiledSeparator::compile(separator)?;
        Ok(self.split_on(text, &compiled))
    }

    pub(crate) fn split_on<'a>(&self, text: &'a str, separator: &CompiledSeparator) -> Vec<&'a str> {
        separator.split(text, self.config.keep_separator)
    }

    /// Merge pieces into size-bounded chunks joined by `separator`.
    pub fn merge<S: AsRef<str>>(&self, pieces: &[S], separator: &str) -> Vec<String> {
        let mut report = SplitReport::new();
        self.merge_into(pieces, separator, &mut report);
        report.chunks
    }

    /// Text used to rejoin pieces split on `separator`.
    ///
    /// Kept separators already live inside the pieces.
    pub(crate) fn merge_separator<'s>(&self, separator: &'s Separator) -> &'s str {
        if self.config.keep_separator {
            ""
        } else {
            &separator.value
        }
    }

    /// Greedy merge with overlap, appending chunks to `report`.
    pub(crate) fn merge_into<S: AsRef<str>>(
        &self,
        pieces: &[S],
        separator: &str,
        report: &mut SplitReport,
    ) {
        let chunk_size = self.config.chunk_size;
        let sep_len = self.config.length.measure(separator);

        let mut buffer: VecDeque<(&str, usize)> = VecDeque::new();
        // Length of the buffer once joined: every piece after the first
        // also pays for one separator.
        let mut running_len = 0usize;

        for piece in pieces {
            let piece = piece.as_ref();
            if piece.is_empty() {
                continue;
            }
            let piece_len = self.config.length.measure(piece);

            if !buffer.is_empty() && running_len + piece_len + sep_len > chunk_size {
                self.emit(&buffer, separator, running_len, report);

                // Drop pieces from the front until what is left fits in the
                // overlap window and leaves room for the incoming piece.
                loop {
                    let join_len = if buffer.is_empty() { 0 } else { sep_len };
                    let must_evict = running_len > self.config.chunk_overlap
                        || (running_len > 0 && running_len + piece_len + join_len > chunk_size);
                    if !must_evict {
                        break;
                    }
                    let Some((_, front_len)) = buffer.pop_front() else {
                        break;
                    };
                    let freed = if buffer.is_empty() {
                        front_len
                    } else {
                        front_len + sep_len
                    };
                    running_len = running_len.saturating_sub(freed);
                }
                if buffer.is_empty() {
                    running_len = 0;
                }
            }

            buffer.push_back((piece, piece_len));
            running_len += if buffer.len() > 1 {
                piece_len + sep_len
            } else {
                piece_len
            };
        }

        if !buffer.is_empty() {
            self.emit(&buffer, separator, running_len, report);
        }
    }

    /// Join the buffered pieces and append the result unless it is empty.
    fn emit(
        &self,
        buffer: &VecDeque<(&str, usize)>,
        separator: &str,
        running_len: usize,
        report: &mut SplitReport,
    ) {
        let joined = buffer
            .iter()
            .map(|(piece, _)| *piece)
            .collect::<Vec<_>>()
            .join(separator);
        let chunk = if self.config.trim_space {
            joined.trim()
        } else {
            joined.as_str()
        };
        if !chunk.is_empty() {
            report.push(chunk.to_string(), running_len, self.config.chunk_size);
        }
    }
}

impl TextSplitter for FlatSplitter {
    fn split_with_report(&self, text: &str) -> Result<SplitReport> {
        let pieces = self.split_on(text, &self.separator);
        let mut report = SplitReport::new();
        self.merge_into(&pieces, self.merge_separator(self.separator()), &mut report);

        debug!(
            "Split {} pieces into {} chunks on {:?}",
            pieces.len(),
            report.len(),
            self.separator().value
        );
        Ok(report)
    }
}
