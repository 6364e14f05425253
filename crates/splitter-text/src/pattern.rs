//! Separator compilation and raw text partitioning.

use regex::Regex;
use splitter_core::{Result, Separator, SplitError};

/// A separator together with its compiled matcher.
///
/// The empty separator has no matcher; it splits text into characters.
#[derive(Debug, Clone)]
pub(crate) struct CompiledSeparator {
    separator: Separator,
    regex: Option<Regex>,
}

impl CompiledSeparator {
    /// Compile a separator, escaping literal values first.
    pub(crate) fn compile(separator: &Separator) -> Result<Self> {
        let regex = if separator.is_empty() {
            None
        } else {
            let pattern = separator.pattern();
            let regex = Regex::new(&pattern)
                .map_err(|e| SplitError::pattern(pattern.clone(), e.to_string()))?;
            Some(regex)
        };

        Ok(Self {
            separator: separator.clone(),
            regex,
        })
    }

    pub(crate) fn separator(&self) -> &Separator {
        &self.separator
    }

    /// Whether the separator occurs anywhere in `text`.
    pub(crate) fn is_match(&self, text: &str) -> bool {
        match &self.regex {
            Some(regex) => regex.is_match(text),
            None => true,
        }
    }

    /// Partition `text` into non-empty pieces.
    ///
    /// With `keep_separator`, each match stays attached to the start of the
    /// piece that follows it, so pieces remain contiguous slices of `text`.
    pub(crate) fn split<'a>(&self, text: &'a str, keep_separator: bool) -> Vec<&'a str> {
        let Some(regex) = &self.regex else {
            // Character-level split as last resort
            return text
                .char_indices()
                .map(|(i, c)| &text[i..i + c.len_utf8()])
                .collect();
        };

        if !keep_separator {
            return regex.split(text).filter(|s| !s.is_empty()).collect();
        }

        let mut pieces = Vec::new();
        let mut start = 0;
        for m in regex.find_iter(text) {
            pieces.push(&text[start..m.start()]);
            start = m.start();
        }
        pieces.push(&text[start..]);
        pieces.retain(|s| !s.is_empty());
        pieces
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compile(sep: Separator) -> CompiledSeparator {
        CompiledSeparator::compile(&sep).unwrap()
    }

    #[test]
    fn test_literal_metacharacters_match_verbatim() {
        let sep = compile(Separator::literal("."));
        assert!(!sep.is_match("foo"));
        assert!(sep.is_match("foo.bar"));
        assert_eq!(sep.split("foo.bar.baz", false), vec!["foo", "bar", "baz"]);
    }

    #[test]
    fn test_keep_separator_prefixes_following_piece() {
        let sep = compile(Separator::literal("."));
        assert_eq!(
            sep.split("foo.bar.baz.123", true),
            vec!["foo", ".bar", ".baz", ".123"]
        );
    }

    #[test]
    fn test_keep_separator_leading_match() {
        let sep = compile(Separator::literal("\n"));
        assert_eq!(sep.split("\n\nabc", true), vec!["\n", "\nabc"]);
    }

    #[test]
    fn test_empty_pieces_dropped() {
        let sep = compile(Separator::literal(" "));
        assert_eq!(sep.split("foo  bar ", false), vec!["foo", "bar"]);
        assert_eq!(sep.split("foo  bar", true), vec!["foo", " ", " bar"]);
    }

    #[test]
    fn test_regex_separator_keeps_matched_text() {
        let sep = compile(Separator::regex(r"\s+"));
        assert_eq!(sep.split("foo  bar\tbaz", false), vec!["foo", "bar", "baz"]);
        assert_eq!(sep.split("foo  bar\tbaz", true), vec!["foo", "  bar", "\tbaz"]);
    }

    #[test]
    fn test_empty_separator_splits_characters() {
        let sep = compile(Separator::chars());
        assert!(sep.is_match(""));
        assert_eq!(sep.split("héllo", false), vec!["h", "é", "l", "l", "o"]);
        assert_eq!(sep.split("日本", true), vec!["日", "本"]);
        assert!(sep.split("", false).is_empty());
    }

    #[test]
    fn test_invalid_regex() {
        let err = CompiledSeparator::compile(&Separator::regex("(")).unwrap_err();
        assert_eq!(err.error_code(), "PATTERN_ERROR");

        // Literal separators are escaped and never fail.
        assert!(CompiledSeparator::compile(&Separator::literal("(")).is_ok());
    }
}
