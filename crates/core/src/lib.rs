//! Core types and traits for the lextags tag extraction system
//!
//! This crate provides the foundational abstractions shared by the
//! lexer, extraction and command-line crates:
//!
//! - **Tags**: Definition and reference occurrences of symbols
//! - **Sinks**: The emission capability callers implement to receive tags
//! - **Language maps**: Extension to language-name resolution
//! - **Configuration**: System configuration management
//! - **Error handling**: Unified error types
//!

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

pub mod config;
pub mod error;
pub mod langmap;
pub mod sink;
pub mod tag;

// Re-export main types for convenience
pub use config::{Config, DefinitionsConfig, ExtractionConfig, LangMapConfig};
pub use error::{Error, Result, ResultExt};
pub use langmap::{LangMap, LangMapResolver};
pub use sink::{CollectingSink, EmittedTag, TagSink};
pub use tag::{Tag, TagKind};

/// Version of the core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::error::{Result, ResultExt};
    pub use crate::sink::TagSink;
    pub use crate::tag::{Tag, TagKind};
}
