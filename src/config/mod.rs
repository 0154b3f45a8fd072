use std::fs;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::Deserialize;

pub const DEFAULT_SLOT_LENGTH: f64 = 7.0;
pub const DEFAULT_END_PAD: f64 = 0.35;
pub const DEFAULT_EMPTY_TEXT: &str = "[no narration]";
pub const DEFAULT_LANGUAGE: &str = "en";

/// Parameters for pouring a transcript into subtitle slots
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SlotConfig {
    /// Nominal slot length in seconds; the last slot may be shorter
    pub slot_length: f64,
    /// Seconds added to each fragment's end before overlap is measured
    pub end_pad: f64,
    /// Text emitted for slots that received no words
    pub empty_text: String,
    /// Language hint for the transcription engine; `None` auto-detects
    pub language: Option<String>,
}

impl Default for SlotConfig {
    fn default() -> Self {
        Self {
            slot_length: DEFAULT_SLOT_LENGTH,
            end_pad: DEFAULT_END_PAD,
            empty_text: DEFAULT_EMPTY_TEXT.to_string(),
            language: Some(DEFAULT_LANGUAGE.to_string()),
        }
    }
}

impl SlotConfig {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {:?}", path))?;
        Self::from_json_str(&raw).with_context(|| format!("invalid config file {:?}", path))
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw).context("failed to parse config JSON")?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.slot_length.is_finite() && self.slot_length > 0.0,
            "slot length must be positive, got: {}",
            self.slot_length
        );
        ensure!(
            self.end_pad.is_finite() && self.end_pad >= 0.0,
            "end padding must be non-negative, got: {}",
            self.end_pad
        );
        Ok(())
    }
}
