//! File-based configuration for the text splitter.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::traits::SplitConfig;
use crate::types::{default_separators, LengthKind, Separator};

/// Main configuration, loaded from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SplitterConfig {
    /// Chunking configuration.
    #[serde(default)]
    pub chunking: ChunkingConfig,
}

/// Chunking configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkingConfig {
    /// Target chunk size in length units.
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Overlap between consecutive chunks.
    #[serde(default = "default_chunk_overlap")]
    pub chunk_overlap: usize,

    /// Trim whitespace around chunks.
    #[serde(default = "default_true")]
    pub trim_space: bool,

    /// Keep separators as a prefix of the following piece.
    #[serde(default)]
    pub keep_separator: bool,

    /// How chunk length is measured.
    #[serde(default)]
    pub length: LengthKind,

    /// Separators, highest priority first.
    #[serde(default = "default_separators")]
    pub separators: Vec<Separator>,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_size: 100,
            chunk_overlap: 10,
            trim_space: true,
            keep_separator: false,
            length: LengthKind::Chars,
            separators: default_separators(),
        }
    }
}

impl ChunkingConfig {
    /// Build the runtime split configuration.
    pub fn split_config(&self) -> SplitConfig {
        SplitConfig {
            chunk_size: self.chunk_size,
            chunk_overlap: self.chunk_overlap,
            trim_space: self.trim_space,
            keep_separator: self.keep_separator,
            length: self.length.policy(),
        }
    }
}

// Default value functions

fn default_true() -> bool {
    true
}

fn default_chunk_size() -> usize {
    100
}

fn default_chunk_overlap() -> usize {
    10
}

impl SplitterConfig {
    /// Load configuration from file.
    pub fn load(path: &std::path::Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|e| crate::error::SplitError::Config {
            message: format!("Failed to parse config: {}", e),
        })?;
        Ok(config)
    }

    /// Load configuration from default paths.
    pub fn load_default() -> crate::error::Result<Self> {
        // Try user config first
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("text-splitter").join("config.toml");
            if user_config.exists() {
                return Self::load(&user_config);
            }
        }

        let local_config = PathBuf::from("text-splitter.toml");
        if local_config.exists() {
            return Self::load(&local_config);
        }

        Ok(Self::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = SplitterConfig::default();
        assert_eq!(config.chunking.chunk_size, 100);
        assert_eq!(config.chunking.chunk_overlap, 10);
        assert!(config.chunking.trim_space);
        assert_eq!(config.chunking.separators, default_separators());
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[chunking]
chunk_size = 42
length = "bytes"

[[chunking.separators]]
value = "\\s+"
is_regex = true

[[chunking.separators]]
value = ""
"#
        )
        .unwrap();

        let config = SplitterConfig::load(file.path()).unwrap();
        assert_eq!(config.chunking.chunk_size, 42);
        assert_eq!(config.chunking.chunk_overlap, 10);
        assert_eq!(config.chunking.length, LengthKind::Bytes);
        assert_eq!(
            config.chunking.separators,
            vec![Separator::regex("\\s+"), Separator::chars()]
        );

        let split = config.chunking.split_config();
        assert_eq!(split.chunk_size, 42);
        assert_eq!(split.length.name(), "bytes");
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[chunking]\nchunk_size = \"big\"").unwrap();

        let err = SplitterConfig::load(file.path()).unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_load_missing_file() {
        let err = SplitterConfig::load(std::path::Path::new("/nonexistent/splitter.toml"))
            .unwrap_err();
        assert_eq!(err.error_code(), "IO_ERROR");
    }
}
