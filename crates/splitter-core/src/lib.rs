//! splitter-core - Core types and traits for the text splitter
//!
//! This crate provides the separator and length-policy types, the split
//! configuration, the [`TextSplitter`] trait and the error handling shared
//! by the splitter implementations and the CLI.

pub mod config;
pub mod error;
pub mod length;
pub mod traits;
pub mod types;

pub use config::*;
pub use error::{Result, SplitError};
pub use length::LengthPolicy;
pub use traits::*;
pub use types::*;
