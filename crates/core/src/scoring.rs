//! Scoring module - points, lines, levels and gravity speed-up
//!
//! Rows are credited one at a time: every cleared row adds
//! `points_per_line * level`, bumps the line counter, and on every
//! `lines_per_level`-th line raises the level and multiplies the drop
//! interval by `speedup_factor`. A level-up in the middle of a multi-row
//! clear therefore scores the remaining rows at the new level.

use serde::{Deserialize, Serialize};

use crate::types::{BASE_DROP_MS, INITIAL_LEVEL, LINES_PER_LEVEL, POINTS_PER_LINE, SPEEDUP_FACTOR};

/// Tunable progression rules
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringRules {
    /// Gravity interval at level 1, in milliseconds
    pub base_drop_ms: f64,
    /// Points per cleared line, multiplied by the level
    pub points_per_line: u32,
    /// Lines needed for each level-up
    pub lines_per_level: u32,
    /// Drop interval multiplier per level-up, in `(0, 1]`
    pub speedup_factor: f64,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            base_drop_ms: BASE_DROP_MS,
            points_per_line: POINTS_PER_LINE,
            lines_per_level: LINES_PER_LEVEL,
            speedup_factor: SPEEDUP_FACTOR,
        }
    }
}

/// Points for a single cleared line at `level`
pub fn line_clear_points(points_per_line: u32, level: u32) -> u32 {
    points_per_line.saturating_mul(level)
}

/// Outcome of crediting one sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClearOutcome {
    pub points: u32,
    pub levels_gained: u32,
}

/// Running score, level, line count and current drop interval
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub drop_interval_ms: f64,
}

impl Progress {
    /// Counters at the start of a game
    pub fn initial(rules: &ScoringRules) -> Self {
        Self {
            score: 0,
            level: INITIAL_LEVEL,
            lines: 0,
            drop_interval_ms: rules.base_drop_ms,
        }
    }

    /// Credit `cleared_rows` rows, one at a time
    pub fn credit_rows(&mut self, cleared_rows: u32, rules: &ScoringRules) -> ClearOutcome {
        let mut outcome = ClearOutcome::default();

        for _ in 0..cleared_rows {
            let points = line_clear_points(rules.points_per_line, self.level);
            self.score = self.score.saturating_add(points);
            outcome.points = outcome.points.saturating_add(points);

            self.lines += 1;
            if rules.lines_per_level > 0 && self.lines % rules.lines_per_level == 0 {
                self.level += 1;
                self.drop_interval_ms *= rules.speedup_factor;
                outcome.levels_gained += 1;
            }
        }

        outcome
    }
}
