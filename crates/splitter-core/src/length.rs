//! Pluggable length policies used to measure chunk sizes.

use std::fmt;
use std::sync::Arc;

/// Measures the "length" of a text fragment.
///
/// Chunk sizes and overlaps are expressed in the units of whichever policy
/// the splitter is configured with. Cloning is cheap; the measuring function
/// is shared.
#[derive(Clone)]
pub struct LengthPolicy {
    name: &'static str,
    measure: Arc<dyn Fn(&str) -> usize + Send + Sync>,
}

impl LengthPolicy {
    /// Count Unicode scalar values (runes).
    pub fn chars() -> Self {
        Self {
            name: "chars",
            measure: Arc::new(|s: &str| s.chars().count()),
        }
    }

    /// Count UTF-8 bytes. Faster, but overcounts non-ASCII text.
    pub fn bytes() -> Self {
        Self {
            name: "bytes",
            measure: Arc::new(|s: &str| s.len()),
        }
    }

    /// Use a caller-supplied length function.
    pub fn custom<F>(name: &'static str, measure: F) -> Self
    where
        F: Fn(&str) -> usize + Send + Sync + 'static,
    {
        Self {
            name,
            measure: Arc::new(measure),
        }
    }

    /// Measure a text fragment.
    pub fn measure(&self, text: &str) -> usize {
        (self.measure)(text)
    }

    /// Name of this policy, for diagnostics.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Default for LengthPolicy {
    fn default() -> Self {
        Self::chars()
    }
}

impl fmt::Debug for LengthPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LengthPolicy").field(&self.name).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chars_counts_runes() {
        let policy = LengthPolicy::chars();
        assert_eq!(policy.measure("héllo"), 5);
        assert_eq!(policy.measure("日本語"), 3);
        assert_eq!(policy.measure(""), 0);
    }

    #[test]
    fn test_bytes_counts_utf8_bytes() {
        let policy = LengthPolicy::bytes();
        assert_eq!(policy.measure("héllo"), 6);
        assert_eq!(policy.measure("日本語"), 9);
    }

    #[test]
    fn test_custom_policy() {
        let policy = LengthPolicy::custom("words", |s| s.split_whitespace().count());
        assert_eq!(policy.measure("one two  three"), 3);
        assert_eq!(policy.name(), "words");
        assert_eq!(format!("{:?}", policy), "LengthPolicy(\"words\")");
    }

    #[test]
    fn test_default_is_chars() {
        assert_eq!(LengthPolicy::default().name(), "chars");
    }
}
