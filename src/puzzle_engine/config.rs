//! Tunable numbers behind tile generation and target selection.
//!
//! The defaults are the values the shipped game plays with. Everything here is
//! plain data: load it from JSON with [`GameConfig::from_json`] or build it in
//! code, then call [`GameConfig::validate`] before handing it to a generator.

use serde::{Deserialize, Serialize};
use crate::puzzle_engine::errors::ConfigError;

/// Labels run A..Z, so a round can never hold more tiles than this.
pub const MAX_LABELS: usize = 26;

/// Largest target a round may ask for; the display has room for no more.
pub const TARGET_NUMBER_CAP: u32 = 15;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Tiles per round.
    pub tile_count: usize,
    /// Numbers at or above this count as "big".
    pub big_number_threshold: u32,
    /// Largest number a tile may carry.
    pub max_tile_number: u32,
    pub max_big_number_tiles: usize,
    pub max_multiply_tiles: usize,
    pub max_divide_tiles: usize,
    /// Lower edge of the solution-count band a target must fall in.
    pub min_valid_equations: usize,
    /// Upper edge of the solution-count band.
    pub max_valid_equations: usize,
    /// Largest result the enumerator keeps as a possible target.
    /// May be lowered but never raised past [`TARGET_NUMBER_CAP`].
    pub max_target_number: u32,
    /// Chance that a fresh tile draws from the small range.
    pub small_number_bias: f64,
    /// Resamples per tile before switching to a safe `+`/`-` tile.
    pub max_tile_attempts: usize,
    /// Random draws for the safe tile before scanning for a free one.
    pub max_safe_tile_attempts: usize,
    /// Whole-round retries before the final pass.
    pub max_generation_attempts: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            tile_count: 10,
            big_number_threshold: 10,
            max_tile_number: 15,
            max_big_number_tiles: 3,
            max_multiply_tiles: 2,
            max_divide_tiles: 2,
            min_valid_equations: 2,
            max_valid_equations: 4,
            max_target_number: TARGET_NUMBER_CAP,
            small_number_bias: 0.7,
            max_tile_attempts: 50,
            max_safe_tile_attempts: 20,
            max_generation_attempts: 10,
        }
    }
}

impl GameConfig {
    /// Parse a config from JSON. Missing fields take their default.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tile_count == 0 {
            return Err(ConfigError::EmptyTileSet);
        }
        if self.tile_count > MAX_LABELS {
            return Err(ConfigError::TooManyTiles { count: self.tile_count, max: MAX_LABELS });
        }
        if self.big_number_threshold < 2 || self.big_number_threshold > self.max_tile_number {
            return Err(ConfigError::ThresholdOutOfRange {
                threshold: self.big_number_threshold,
                max_tile_number: self.max_tile_number,
            });
        }
        if self.min_valid_equations == 0 || self.min_valid_equations > self.max_valid_equations {
            return Err(ConfigError::InvalidEquationBand {
                min: self.min_valid_equations,
                max: self.max_valid_equations,
            });
        }
        if !(0.0..=1.0).contains(&self.small_number_bias) {
            return Err(ConfigError::BiasOutOfRange(self.small_number_bias));
        }
        if self.max_tile_attempts == 0 {
            return Err(ConfigError::ZeroAttemptBudget("max_tile_attempts"));
        }
        if self.max_generation_attempts == 0 {
            return Err(ConfigError::ZeroAttemptBudget("max_generation_attempts"));
        }
        if !(1..=TARGET_NUMBER_CAP).contains(&self.max_target_number) {
            return Err(ConfigError::TargetOutOfRange {
                max_target: self.max_target_number,
                cap: TARGET_NUMBER_CAP,
            });
        }
        let available = self.safe_tile_supply();
        if self.tile_count > available {
            return Err(ConfigError::SafeTileShortage { tile_count: self.tile_count, available });
        }
        Ok(())
    }

    /// Numbers below the big threshold: `1..big_number_threshold`.
    pub fn small_range_max(&self) -> u32 {
        self.big_number_threshold.saturating_sub(1).max(1)
    }

    /// Distinct `+`/`-` tiles the safe fallback can choose from.
    pub fn safe_tile_supply(&self) -> usize {
        2 * self.small_range_max() as usize
    }
}

/// Input to [`generate_round`](crate::puzzle_engine::generator::generate_round).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoundRequest {
    pub config: GameConfig,
    /// `Some(seed)` reproduces the exact same round; `None` draws from entropy.
    pub rng_seed: Option<u64>,
}

impl RoundRequest {
    /// Default config, entropy seed.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(seed: u64) -> Self {
        RoundRequest { config: GameConfig::default(), rng_seed: Some(seed) }
    }

    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }
}
