//! Session configuration.
//!
//! Defaults come from the constants in `blockfall_types`; frontends may
//! override them once at startup. [`GameConfig::validate`] fails fast on
//! anything the engine cannot run with.

use std::time::Duration;

use crate::error::{BoardError, ConfigError};
use crate::types::{
    BASE_FALL_INTERVAL_MS, COLUMNS, LEVEL_SPEEDUP, LINES_PER_LEVEL, MAX_SHAPE_DIM,
    MIN_FALL_INTERVAL_MS, ROWS,
};

/// Largest accepted board side.
pub const MAX_BOARD_DIM: u16 = 256;

/// Level and fall-speed rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressionRules {
    /// Fall interval at level 1
    pub base_fall_interval: Duration,
    pub lines_per_level: u32,
    /// Multiplier applied to the fall interval on each level-up
    pub speedup: f64,
    /// The fall interval never drops below this
    pub min_fall_interval: Duration,
}

impl Default for ProgressionRules {
    fn default() -> Self {
        Self {
            base_fall_interval: Duration::from_millis(BASE_FALL_INTERVAL_MS),
            lines_per_level: LINES_PER_LEVEL,
            speedup: LEVEL_SPEEDUP,
            min_fall_interval: Duration::from_millis(MIN_FALL_INTERVAL_MS),
        }
    }
}

impl ProgressionRules {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lines_per_level == 0 {
            return Err(ConfigError::ZeroLinesPerLevel);
        }
        if self.base_fall_interval.is_zero() || self.min_fall_interval.is_zero() {
            return Err(ConfigError::ZeroFallInterval);
        }
        if !(self.speedup > 0.0 && self.speedup <= 1.0) {
            return Err(ConfigError::InvalidSpeedup(self.speedup));
        }
        if self.min_fall_interval > self.base_fall_interval {
            return Err(ConfigError::FloorAboveBase {
                base: self.base_fall_interval,
                min: self.min_fall_interval,
            });
        }
        Ok(())
    }
}

/// Everything needed to start a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub columns: u16,
    pub rows: u16,
    pub progression: ProgressionRules,
    /// Lock the piece immediately on hard drop instead of waiting for the
    /// next gravity step.
    pub lock_on_hard_drop: bool,
    /// Seed for the piece generator
    pub seed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            columns: COLUMNS,
            rows: ROWS,
            progression: ProgressionRules::default(),
            lock_on_hard_drop: false,
            seed: 1,
        }
    }
}

impl GameConfig {
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_size(mut self, columns: u16, rows: u16) -> Self {
        self.columns = columns;
        self.rows = rows;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_dimensions(self.columns, self.rows)?;
        self.progression.validate()
    }
}

/// Reject grids that cannot hold every piece in every orientation.
pub(crate) fn check_dimensions(columns: u16, rows: u16) -> Result<(), BoardError> {
    let min = MAX_SHAPE_DIM as u16;
    if columns < min || rows < min {
        return Err(BoardError::TooSmall { columns, rows, min });
    }
    if columns > MAX_BOARD_DIM || rows > MAX_BOARD_DIM {
        return Err(BoardError::TooLarge {
            columns,
            rows,
            max: MAX_BOARD_DIM,
        });
    }
    Ok(())
}
