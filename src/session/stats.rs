//! Session statistics
//!
//! Counters for the progress line and the end-of-session summary:
//! - Rounds presented and solved
//! - Toggle totals and per-dot miss counts
//! - Session duration
//!
//! Recording here never feeds back into correctness.

use std::time::Instant;

use crate::braille::CELL_DOTS;

/// Miss count at which a dot is flagged as troublesome
const MISS_THRESHOLD: u32 = 3;

/// Accumulated counters for one session
#[derive(Clone, Debug)]
pub struct SessionStats {
    /// Letters shown this session, including the current one
    pub rounds_presented: u32,
    /// Letters matched at least once
    pub rounds_solved: u32,
    /// Total dot toggles
    pub total_toggles: u32,
    /// Per-dot miss counts (a toggle that left the dot differing from the target)
    pub per_dot_misses: [u32; CELL_DOTS],
    /// Session start time
    start_time: Option<Instant>,
    /// Whether the current round has already been counted as solved
    round_solved: bool,
}

#[allow(dead_code)]
impl SessionStats {
    /// Create counters for a fresh session (the starting letter counts as
    /// the first round)
    pub fn new() -> Self {
        SessionStats {
            rounds_presented: 1,
            rounds_solved: 0,
            total_toggles: 0,
            per_dot_misses: [0; CELL_DOTS],
            start_time: None,
            round_solved: false,
        }
    }

    /// Start the session timer
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Get session duration in seconds
    pub fn duration_secs(&self) -> f64 {
        self.start_time
            .map(|t| t.elapsed().as_secs_f64())
            .unwrap_or(0.0)
    }

    /// Get session duration in minutes
    pub fn duration_mins(&self) -> f64 {
        self.duration_secs() / 60.0
    }

    /// Record one dot toggle; `missed` means the dot now differs from the
    /// target
    pub fn record_toggle(&mut self, dot: usize, missed: bool) {
        self.total_toggles += 1;
        if missed && dot < CELL_DOTS {
            self.per_dot_misses[dot] += 1;
        }
    }

    /// Record that the current round reached a correct pattern
    ///
    /// Counted once per round no matter how often the pattern is broken
    /// and rebuilt.
    pub fn record_solved(&mut self) {
        if !self.round_solved {
            self.rounds_solved += 1;
            self.round_solved = true;
        }
    }

    /// Record the start of a new round
    pub fn record_round(&mut self) {
        self.rounds_presented += 1;
        self.round_solved = false;
    }

    /// Dots missed at least `MISS_THRESHOLD` times, as 1-based dot numbers
    pub fn troublesome_dots(&self) -> Vec<u8> {
        self.per_dot_misses
            .iter()
            .enumerate()
            .filter_map(|(idx, &misses)| {
                if misses >= MISS_THRESHOLD {
                    Some(idx as u8 + 1)
                } else {
                    None
                }
            })
            .collect()
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_counting() {
        let mut stats = SessionStats::new();

        stats.record_toggle(0, false);
        stats.record_toggle(2, true);
        stats.record_toggle(2, true);

        assert_eq!(stats.total_toggles, 3);
        assert_eq!(stats.per_dot_misses[0], 0);
        assert_eq!(stats.per_dot_misses[2], 2);
    }

    #[test]
    fn test_solved_counted_once_per_round() {
        let mut stats = SessionStats::new();

        stats.record_solved();
        stats.record_solved();
        assert_eq!(stats.rounds_solved, 1);

        stats.record_round();
        assert_eq!(stats.rounds_presented, 2);

        stats.record_solved();
        assert_eq!(stats.rounds_solved, 2);
    }

    #[test]
    fn test_troublesome_dots_threshold() {
        let mut stats = SessionStats::new();

        for _ in 0..3 {
            stats.record_toggle(1, true);
        }
        stats.record_toggle(4, true);

        assert_eq!(stats.troublesome_dots(), vec![2]);
    }

    #[test]
    fn test_duration_before_start() {
        let stats = SessionStats::new();
        assert_eq!(stats.duration_secs(), 0.0);
    }
}
