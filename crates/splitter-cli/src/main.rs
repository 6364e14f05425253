//! Splitter CLI - Split a document into chunks from the command line.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use splitter_core::{LengthKind, Separator, SplitterConfig};
use splitter_text::{RecursiveSplitter, TextSplitter};

/// Split a text document into bounded, overlapping chunks
#[derive(Parser)]
#[command(name = "splitter")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Document to split
    input: PathBuf,

    /// Configuration file (default: user config dir, then ./text-splitter.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Chunk size, in length units
    #[arg(long)]
    chunk_size: Option<usize>,

    /// Overlap between consecutive chunks, in length units
    #[arg(long)]
    chunk_overlap: Option<usize>,

    /// Trim whitespace around chunks
    #[arg(long)]
    trim: Option<bool>,

    /// Keep separators in chunks
    #[arg(long)]
    keep_separator: Option<bool>,

    /// Separator to split on, highest priority first (repeatable)
    #[arg(short, long = "separator")]
    separators: Vec<String>,

    /// Treat separators given with --separator as regular expressions
    #[arg(long)]
    regex: bool,

    /// How chunk length is measured (chars or bytes)
    #[arg(long)]
    length: Option<LengthKind>,

    /// Print chunks as a JSON array
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn load_config(path: Option<&Path>) -> splitter_core::Result<SplitterConfig> {
    match path {
        Some(path) => SplitterConfig::load(path),
        None => SplitterConfig::load_default(),
    }
}

/// Apply command-line overrides on top of the file configuration.
fn apply_overrides(cli: &Cli, config: &mut SplitterConfig) {
    let chunking = &mut config.chunking;
    if let Some(size) = cli.chunk_size {
        chunking.chunk_size = size;
    }
    if let Some(overlap) = cli.chunk_overlap {
        chunking.chunk_overlap = overlap;
    }
    if let Some(trim) = cli.trim {
        chunking.trim_space = trim;
    }
    if let Some(keep) = cli.keep_separator {
        chunking.keep_separator = keep;
    }
    if let Some(length) = cli.length {
        chunking.length = length;
    }
    if !cli.separators.is_empty() {
        chunking.separators = cli
            .separators
            .iter()
            .map(|s| {
                let value = unescape(s);
                if cli.regex {
                    Separator::regex(value)
                } else {
                    Separator::literal(value)
                }
            })
            .collect();
    }
}

/// Expand `\n`, `\t` and `\\` so separators can be typed in a shell.
fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = load_config(cli.config.as_deref())?;
    apply_overrides(cli, &mut config);
    debug!("Using chunking config: {:?}", config.chunking);

    let content = fs::read_to_string(&cli.input)?;

    let splitter = RecursiveSplitter::new(
        config.chunking.split_config(),
        config.chunking.separators.clone(),
    )?;
    let chunks = splitter.split_text(&content)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&chunks)?);
    } else {
        println!("{}", chunks.len());
        for (i, chunk) in chunks.iter().enumerate() {
            println!("{} {}", i, chunk);
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unescape() {
        assert_eq!(unescape("\\n\\n"), "\n\n");
        assert_eq!(unescape("a\\tb"), "a\tb");
        assert_eq!(unescape("\\\\"), "\\");
        assert_eq!(unescape("\\s+"), "\\s+");
        assert_eq!(unescape("trailing\\"), "trailing\\");
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from([
            "splitter",
            "doc.txt",
            "--chunk-size",
            "50",
            "--keep-separator",
            "true",
            "--length",
            "bytes",
            "-s",
            "\\n",
            "-s",
            "",
        ]);
        let mut config = SplitterConfig::default();
        apply_overrides(&cli, &mut config);

        assert_eq!(config.chunking.chunk_size, 50);
        assert_eq!(config.chunking.chunk_overlap, 10);
        assert!(config.chunking.keep_separator);
        assert_eq!(config.chunking.length, LengthKind::Bytes);
        assert_eq!(
            config.chunking.separators,
            vec![Separator::literal("\n"), Separator::chars()]
        );
    }

    #[test]
    fn test_regex_overrides() {
        let cli = Cli::parse_from(["splitter", "doc.txt", "--regex", "-s", "\\s+"]);
        let mut config = SplitterConfig::default();
        apply_overrides(&cli, &mut config);

        assert_eq!(config.chunking.separators, vec![Separator::regex("\\s+")]);
    }
}
