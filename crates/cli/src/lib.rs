//! Library interface for the lextags CLI
//!
//! This module exposes request building and the output sinks for
//! integration testing while keeping the main binary logic in main.rs.

pub mod input;
pub mod output;

// Re-export commonly needed types for tests
pub use anyhow::Result;
pub use lextags_core::config::Config;
pub use input::extract_request;
pub use output::{OutputFormat, OutputSummary, StreamSink};
