//! Core domain types for the text splitter.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

use crate::length::LengthPolicy;

/// Delimiter used to split text into pieces.
///
/// A literal separator is regex-escaped before being compiled, so it always
/// matches its text verbatim. The empty separator splits text into
/// individual characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Separator {
    /// Literal text or regex pattern.
    pub value: String,

    /// Treat `value` as a regex pattern rather than literal text.
    #[serde(default)]
    pub is_regex: bool,
}

impl Separator {
    /// A literal separator.
    pub fn literal(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            is_regex: false,
        }
    }

    /// A regex separator.
    pub fn regex(pattern: impl Into<String>) -> Self {
        Self {
            value: pattern.into(),
            is_regex: true,
        }
    }

    /// The empty separator: split into individual characters.
    pub fn chars() -> Self {
        Self::literal("")
    }

    /// Whether this is the empty "split to characters" separator.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Regex source for this separator.
    pub fn pattern(&self) -> String {
        if self.is_regex {
            self.value.clone()
        } else {
            regex::escape(&self.value)
        }
    }
}

impl Default for Separator {
    fn default() -> Self {
        Self::literal("\n\n")
    }
}

/// Paragraphs, then lines, then words, then characters.
pub fn default_separators() -> Vec<Separator> {
    vec![
        Separator::literal("\n\n"),
        Separator::literal("\n"),
        Separator::literal(" "),
        Separator::chars(),
    ]
}

/// Serializable selector for the built-in length policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthKind {
    #[default]
    Chars,
    Bytes,
}

impl LengthKind {
    /// Build the matching length policy.
    pub fn policy(&self) -> LengthPolicy {
        match self {
            Self::Chars => LengthPolicy::chars(),
            Self::Bytes => LengthPolicy::bytes(),
        }
    }
}

impl FromStr for LengthKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "chars" | "runes" => Ok(Self::Chars),
            "bytes" => Ok(Self::Bytes),
            other => Err(format!("unknown length policy: {}", other)),
        }
    }
}

impl std::fmt::Display for LengthKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Chars => "chars",
            Self::Bytes => "bytes",
        };
        write!(f, "{}", s)
    }
}

/// A document with its associated metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Text content.
    pub content: String,

    /// User-provided metadata.
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl Document {
    /// Create a document with no metadata.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            metadata: HashMap::new(),
        }
    }

    /// Attach a metadata entry.
    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }
}

/// A chunk emitted while its buffered length exceeded the configured size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OversizedChunk {
    /// Position of the chunk in the output sequence.
    pub index: usize,

    /// Measured length at emission time.
    pub length: usize,

    /// Configured chunk size.
    pub chunk_size: usize,
}

/// Output of a split: the chunks plus any size diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SplitReport {
    /// Chunks in source order.
    pub chunks: Vec<String>,

    /// Chunks that exceeded the configured size.
    pub oversized: Vec<OversizedChunk>,
}

impl SplitReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chunk, flagging it when `length` exceeds `chunk_size`.
    pub fn push(&mut self, chunk: String, length: usize, chunk_size: usize) {
        if length > chunk_size {
            self.oversized.push(OversizedChunk {
                index: self.chunks.len(),
                length,
                chunk_size,
            });
        }
        self.chunks.push(chunk);
    }

    /// Whether the chunk at `index` was flagged oversized.
    pub fn is_oversized(&self, index: usize) -> bool {
        self.oversized.iter().any(|o| o.index == index)
    }

    /// Number of chunks.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Whether no chunks were produced.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_pattern_is_escaped() {
        assert_eq!(Separator::literal(".").pattern(), "\\.");
        assert_eq!(Separator::literal("a+b").pattern(), "a\\+b");
        assert_eq!(Separator::regex("\\s+").pattern(), "\\s+");
    }

    #[test]
    fn test_default_separators() {
        let seps = default_separators();
        assert_eq!(seps.len(), 4);
        assert_eq!(seps[0].value, "\n\n");
        assert!(seps[3].is_empty());
        assert!(seps.iter().all(|s| !s.is_regex));
    }

    #[test]
    fn test_separator_deserialize_defaults_to_literal() {
        let sep: Separator = serde_json::from_str(r#"{"value": "."}"#).unwrap();
        assert_eq!(sep, Separator::literal("."));
    }

    #[test]
    fn test_length_kind_parse() {
        assert_eq!("chars".parse::<LengthKind>().unwrap(), LengthKind::Chars);
        assert_eq!("BYTES".parse::<LengthKind>().unwrap(), LengthKind::Bytes);
        assert!("tokens".parse::<LengthKind>().is_err());
        assert_eq!(LengthKind::Bytes.to_string(), "bytes");
        assert_eq!(LengthKind::Bytes.policy().measure("é"), 2);
    }

    #[test]
    fn test_report_flags_oversized() {
        let mut report = SplitReport::new();
        report.push("abc".to_string(), 3, 5);
        report.push("abcdefg".to_string(), 7, 5);

        assert_eq!(report.len(), 2);
        assert!(!report.is_oversized(0));
        assert!(report.is_oversized(1));
        assert_eq!(
            report.oversized,
            vec![OversizedChunk {
                index: 1,
                length: 7,
                chunk_size: 5
            }]
        );
    }

    #[test]
    fn test_document_metadata() {
        let doc = Document::new("hello").with_metadata("source", serde_json::json!("a.txt"));
        assert_eq!(doc.content, "hello");
        assert_eq!(doc.metadata["source"], "a.txt");
    }
}
