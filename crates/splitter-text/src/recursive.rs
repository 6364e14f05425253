//! Recursive text splitter.
//!
//! Splits text on the highest-priority separator that occurs in it, then
//! re-splits any piece that is still too large using the separators that
//! follow, down to individual characters.

use splitter_core::{
    default_separators, Result, Separator, SplitConfig, SplitError, SplitReport, TextSplitter,
};
use tracing::debug;

use crate::flat::FlatSplitter;
use crate::pattern::CompiledSeparator;

/// Recursive splitter over a priority-ordered list of separators.
///
/// The default list tries, in order:
/// 1. Double newline (paragraph breaks)
/// 2. Single newline
/// 3. Word boundaries (space)
/// 4. Character (last resort)
#[derive(Debug, Clone)]
pub struct RecursiveSplitter {
    splitter: FlatSplitter,
    separators: Vec<CompiledSeparator>,
}

impl RecursiveSplitter {
    /// Create a recursive splitter.
    ///
    /// Every separator is compiled up front; the first malformed regex
    /// fails the whole construction.
    pub fn new(config: SplitConfig, separators: Vec<Separator>) -> Result<Self> {
        let Some(primary) = separators.first().cloned() else {
            return Err(SplitError::invalid_config(
                "recursive splitter needs at least one separator",
            ));
        };
        let splitter = FlatSplitter::new(config, primary)?;
        let separators = separators
            .iter()
            .map(CompiledSeparator::compile)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            splitter,
            separators,
        })
    }

    /// Create a recursive splitter using paragraph, line, word and
    /// character separators.
    pub fn with_default_separators(config: SplitConfig) -> Result<Self> {
        Self::new(config, default_separators())
    }

    /// The configuration this splitter was built with.
    pub fn config(&self) -> &SplitConfig {
        self.splitter.config()
    }

    /// Separators in priority order.
    pub fn separators(&self) -> impl Iterator<Item = &Separator> {
        self.separators.iter().map(CompiledSeparator::separator)
    }

    /// Pick the first separator that occurs in `text`.
    ///
    /// Returns the chosen separator and the lower-priority ones left for
    /// recursion. The empty separator always wins and ends the recursion.
    fn choose<'s>(
        text: &str,
        separators: &'s [CompiledSeparator],
    ) -> Option<(&'s CompiledSeparator, &'s [CompiledSeparator])> {
        for (i, separator) in separators.iter().enumerate() {
            if separator.separator().is_empty() {
                return Some((separator, &[][..]));
            }
            if separator.is_match(text) {
                return Some((separator, &separators[i + 1..]));
            }
        }
        separators.last().map(|last| (last, &[][..]))
    }

    fn split_recursive(
        &self,
        text: &str,
        separators: &[CompiledSeparator],
        report: &mut SplitReport,
    ) {
        let config = self.splitter.config();
        let Some((chosen, remaining)) = Self::choose(text, separators) else {
            let length = config.length.measure(text);
            report.push(text.to_string(), length, config.chunk_size);
            return;
        };

        let merge_separator = self.splitter.merge_separator(chosen.separator());
        let mut staged: Vec<&str> = Vec::new();

        for piece in self.splitter.split_on(text, chosen) {
            let length = config.length.measure(piece);
            if length < config.chunk_size {
                staged.push(piece);
                continue;
            }

            if !staged.is_empty() {
                self.splitter.merge_into(&staged, merge_separator, report);
                staged.clear();
            }

            if remaining.is_empty() {
                // Nothing finer to split on
                report.push(piece.to_string(), length, config.chunk_size);
            } else {
                self.split_recursive(piece, remaining, report);
            }
        }

        if !staged.is_empty() {
            self.splitter.merge_into(&staged, merge_separator, report);
        }
    }
}

impl TextSplitter for RecursiveSplitter {
    fn split_with_report(&self, text: &str) -> Result<SplitReport> {
        let mut report = SplitReport::new();
        self.split_recursive(text, &self.separators, &mut report);

        debug!(
            "Split {} chars into {} chunks ({} oversized)",
            text.chars().count(),
            report.len(),
            report.oversized.len()
        );
        Ok(report)
    }
}
