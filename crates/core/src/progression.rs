//! Progression module - score, lines, level and fall speed
//!
//! Scoring is `lines * level * 100`. A level-up happens whenever the running
//! line total crosses a multiple of `lines_per_level`; each level-up scales
//! the fall interval by `speedup`, clamped at `min_fall_interval`.

use std::time::Duration;

use crate::config::ProgressionRules;
use crate::types::SCORE_PER_LINE;

/// Points awarded for clearing `lines` rows at `level`
pub fn score_for_lines(lines: u32, level: u32) -> u32 {
    lines.saturating_mul(level).saturating_mul(SCORE_PER_LINE)
}

/// Outcome of recording one clear
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClearScore {
    pub score_delta: u32,
    pub leveled_up: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progression {
    score: u32,
    lines_cleared: u32,
    level: u32,
    fall_interval: Duration,
}

impl Progression {
    /// Level 1, nothing scored, base fall interval
    pub fn new(rules: &ProgressionRules) -> Self {
        Self {
            score: 0,
            lines_cleared: 0,
            level: 1,
            fall_interval: rules.base_fall_interval,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Time per gravity step at the current level
    pub fn fall_interval(&self) -> Duration {
        self.fall_interval
    }

    /// Apply `cleared` lines: score at the current level, then level-up check
    pub fn record_clear(&mut self, cleared: u32, rules: &ProgressionRules) -> ClearScore {
        if cleared == 0 {
            return ClearScore::default();
        }

        let score_delta = score_for_lines(cleared, self.level);
        self.score = self.score.saturating_add(score_delta);

        let before = self.lines_cleared;
        self.lines_cleared = before.saturating_add(cleared);

        let per_level = rules.lines_per_level.max(1);
        let leveled_up = self.lines_cleared / per_level > before / per_level;
        if leveled_up {
            self.level += 1;
            // Clamped at the floor, but never slower than before.
            self.fall_interval = self
                .fall_interval
                .mul_f64(rules.speedup)
                .max(rules.min_fall_interval)
                .min(self.fall_interval);
        }

        ClearScore {
            score_delta,
            leveled_up,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_scales_with_lines_and_level() {
        assert_eq!(score_for_lines(0, 5), 0);
        assert_eq!(score_for_lines(1, 1), 100);
        assert_eq!(score_for_lines(2, 3), 600);
        assert_eq!(score_for_lines(4, 2), 800);
    }

    #[test]
    fn starts_at_level_one() {
        let rules = ProgressionRules::default();
        let p = Progression::new(&rules);
        assert_eq!(p.level(), 1);
        assert_eq!(p.score(), 0);
        assert_eq!(p.lines_cleared(), 0);
        assert_eq!(p.fall_interval(), rules.base_fall_interval);
    }

    #[test]
    fn zero_lines_changes_nothing() {
        let rules = ProgressionRules::default();
        let mut p = Progression::new(&rules);
        assert_eq!(p.record_clear(0, &rules), ClearScore::default());
        assert_eq!(p, Progression::new(&rules));
    }

    #[test]
    fn levels_up_once_when_crossing_threshold() {
        let rules = ProgressionRules::default();
        let mut p = Progression::new(&rules);
        p.lines_cleared = 4;

        let out = p.record_clear(2, &rules);
        assert!(out.leveled_up);
        assert_eq!(out.score_delta, 200);
        assert_eq!(p.lines_cleared(), 6);
        assert_eq!(p.level(), 2);
        assert_eq!(p.fall_interval(), rules.base_fall_interval.mul_f64(0.9));

        let out = p.record_clear(3, &rules);
        assert!(!out.leveled_up);
        assert_eq!(p.level(), 2);
    }

    #[test]
    fn fall_interval_never_drops_below_floor() {
        let rules = ProgressionRules::default();
        let mut p = Progression::new(&rules);
        for _ in 0..200 {
            p.record_clear(rules.lines_per_level, &rules);
        }
        assert_eq!(p.level(), 201);
        assert_eq!(p.fall_interval(), rules.min_fall_interval);
    }

    #[test]
    fn level_up_never_slows_a_base_below_the_floor() {
        let rules = ProgressionRules {
            base_fall_interval: Duration::from_millis(30),
            ..ProgressionRules::default()
        };
        let mut p = Progression::new(&rules);

        let out = p.record_clear(5, &rules);
        assert!(out.leveled_up);
        assert_eq!(p.fall_interval(), Duration::from_millis(30));
    }
}
