//! Encoder configuration.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Smallest substring length considered before the window narrows.
pub const DEFAULT_MIN_LEN: usize = 2;

/// Largest substring length considered in a round.
pub const DEFAULT_MAX_LEN: usize = 400;

/// Settings for the dictionary encoder.
///
/// Missing fields fall back to their defaults when deserializing, so a
/// document containing only `{"max_len": 64}` is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    /// Shortest candidate substring in the initial window.
    pub min_len: usize,
    /// Longest candidate substring. Runs shorter than this are clamped.
    pub max_len: usize,
    /// Optional cap on substitution rounds. `None` runs to completion.
    pub max_rounds: Option<usize>,
}

impl EncoderConfig {
    /// Creates a config with the given window and no round cap.
    pub fn window(min_len: usize, max_len: usize) -> Self {
        Self {
            min_len,
            max_len,
            max_rounds: None,
        }
    }

    /// Sets the round cap.
    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = Some(max_rounds);
        self
    }

    /// Checks the window bounds and round cap.
    pub fn validate(&self) -> Result<()> {
        if self.min_len == 0 {
            return Err(Error::ZeroMinLength);
        }
        if self.min_len > self.max_len {
            return Err(Error::InvalidWindow {
                min_len: self.min_len,
                max_len: self.max_len,
            });
        }
        if self.max_rounds == Some(0) {
            return Err(Error::ZeroRoundLimit);
        }
        Ok(())
    }
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self::window(DEFAULT_MIN_LEN, DEFAULT_MAX_LEN)
    }
}
