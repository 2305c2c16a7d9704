//! # Error Types
//!
//! This module defines error types used throughout the crtgen library.

use thiserror::Error;

/// Main error type for crtgen operations
#[derive(Debug, Error)]
pub enum CrtgenError {
    /// Message contains a character with no glyph
    #[error("Unsupported character {ch:?} at position {index}")]
    UnsupportedCharacter { ch: char, index: usize },

    /// Puzzle input line that could not be parsed
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Invalid generator or raster configuration
    #[error("Config error: {0}")]
    Config(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON config error wrapper
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
