//! # Generator Configuration
//!
//! What to spell and how to lay it out. Loadable from JSON; any missing
//! field falls back to its default.
//!
//! ```
//! use crtgen::GeneratorConfig;
//!
//! let config: GeneratorConfig = serde_json::from_str(r#"{"message": "DUNE"}"#).unwrap();
//! assert_eq!(config.message, "DUNE");
//! assert_eq!(config.raster.granularity, 10);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CrtgenError;
use crate::raster::RasterConfig;

/// Message shipped in the stock puzzle input.
pub const DEFAULT_MESSAGE: &str = "SEND NUDES";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Text to spell; every character needs a glyph.
    pub message: String,
    pub raster: RasterConfig,
    /// Seed for filler noise. `None` draws a fresh one.
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    /// Read a JSON config file.
    pub fn load(path: &Path) -> Result<Self, CrtgenError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn validate(&self) -> Result<(), CrtgenError> {
        self.raster.validate()
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            message: DEFAULT_MESSAGE.to_string(),
            raster: RasterConfig::STANDARD,
            seed: None,
        }
    }
}
