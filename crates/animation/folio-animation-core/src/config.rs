//! Core configuration for folio-animation-core.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::intro::IntroConfig;
use crate::sequencer::StageTable;

/// Scramble alphabet used when no other is configured.
pub const DEFAULT_ALPHABET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()";

/// Tuning for the cipher reveal.
///
/// `lock_probability` and `frame_budget` are presentation constants; any
/// values that pass [`CipherConfig::validate`] still reveal left to right
/// and terminate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CipherConfig {
    /// Chance that the frontier character locks in on an acting tick.
    pub lock_probability: f64,
    /// Raw ticks granted per position before lock-in is forced.
    pub frame_budget: u64,
    /// Act on every `tick_divisor`-th raw tick only.
    pub tick_divisor: u64,
    /// Characters sampled for scramble noise.
    pub alphabet: String,
}

impl Default for CipherConfig {
    fn default() -> Self {
        Self {
            lock_probability: 0.08,
            frame_budget: 40,
            tick_divisor: 2,
            alphabet: DEFAULT_ALPHABET.to_string(),
        }
    }
}

impl CipherConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.lock_probability) {
            return Err(ConfigError::LockProbability(self.lock_probability));
        }
        if self.frame_budget == 0 {
            return Err(ConfigError::ZeroFrameBudget);
        }
        if self.tick_divisor == 0 {
            return Err(ConfigError::ZeroTickDivisor);
        }
        if self.alphabet.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }
        Ok(())
    }

    /// Worst-case effective ticks to reveal `len` characters.
    pub fn max_effective_ticks(&self, len: usize) -> u64 {
        // At most one lock per acting tick; position k is forced on the first
        // acting tick whose raw count exceeds budget * (k + 1).
        let mut tick = 0u64;
        for k in 0..len as u64 {
            let forced = self.frame_budget.saturating_mul(k + 1) / self.tick_divisor + 1;
            tick = forced.max(tick.saturating_add(1));
        }
        tick
    }
}

/// Aggregate configuration a host can hand over as one JSON document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub cipher: CipherConfig,
    pub printer: StageTable,
    pub intro: IntroConfig,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.cipher.validate()?;
        self.printer.validate()?;
        crate::printer::check_stage_names(&self.printer)
    }

    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}
