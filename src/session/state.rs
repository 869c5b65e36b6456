//! Session state machine
//!
//! Maintains:
//! - The current target character
//! - The user's in-progress dot pattern
//! - The correctness of the attempt, recomputed on every toggle

use crate::braille::{BrailleCharacter, Charset, DotPattern, CELL_DOTS};

/// Result of comparing the user's pattern against the target
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Correctness {
    /// No dot toggled yet for this target
    Unknown,
    /// Pattern matches the target in every position
    Correct,
    /// Pattern differs from the target in at least one position
    Incorrect,
}

/// Mutable state of one practice round
///
/// `correctness` is `Unknown` only between picking a target and the first
/// toggle; after that every toggle recomputes it, never back to `Unknown`.
#[derive(Clone, Debug)]
pub struct Session {
    target: BrailleCharacter,
    user_pattern: DotPattern,
    correctness: Correctness,
}

impl Session {
    /// Create a session targeting the charset's first entry
    pub fn new(charset: &Charset) -> Self {
        Session {
            target: charset.first().clone(),
            user_pattern: [false; CELL_DOTS],
            correctness: Correctness::Unknown,
        }
    }

    /// Create a session with an explicit target
    #[allow(dead_code)]
    pub fn with_target(target: BrailleCharacter) -> Self {
        Session {
            target,
            user_pattern: [false; CELL_DOTS],
            correctness: Correctness::Unknown,
        }
    }

    /// Flip one dot and recompute correctness
    ///
    /// `index` must be in `0..CELL_DOTS`; the key map never produces
    /// anything else.
    pub fn toggle_dot(&mut self, index: usize) {
        debug_assert!(index < CELL_DOTS, "dot index out of range: {}", index);
        if index >= CELL_DOTS {
            return;
        }

        self.user_pattern[index] = !self.user_pattern[index];
        self.correctness = if self.user_pattern == self.target.pattern {
            Correctness::Correct
        } else {
            Correctness::Incorrect
        };
    }

    /// Replace the target with a uniform draw (with replacement) and
    /// reset the attempt
    pub fn new_character<R: rand::Rng>(&mut self, charset: &Charset, rng: &mut R) {
        self.target = charset.choose(rng).clone();
        self.user_pattern = [false; CELL_DOTS];
        self.correctness = Correctness::Unknown;
    }

    /// Current target character
    pub fn target(&self) -> &BrailleCharacter {
        &self.target
    }

    /// The user's in-progress pattern
    pub fn user_pattern(&self) -> &DotPattern {
        &self.user_pattern
    }

    /// Stored correctness tri-state; no recomputation
    pub fn correctness(&self) -> Correctness {
        self.correctness
    }

    /// Whether one dot position currently agrees with the target
    pub fn dot_matches(&self, index: usize) -> bool {
        self.user_pattern[index] == self.target.pattern[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_initial_state() {
        let charset = Charset::builtin();
        let session = Session::new(&charset);

        assert_eq!(session.target().letter, 'A');
        assert_eq!(*session.user_pattern(), [false; CELL_DOTS]);
        assert_eq!(session.correctness(), Correctness::Unknown);
    }

    #[test]
    fn test_target_a_scenario() {
        let charset = Charset::builtin();
        let mut session = Session::new(&charset);

        session.toggle_dot(0);
        assert_eq!(
            *session.user_pattern(),
            [true, false, false, false, false, false]
        );
        assert_eq!(session.correctness(), Correctness::Correct);

        session.toggle_dot(0);
        assert_eq!(*session.user_pattern(), [false; CELL_DOTS]);
        assert_eq!(session.correctness(), Correctness::Incorrect);
    }

    #[test]
    fn test_target_b_zero_overlap() {
        let charset = Charset::builtin();
        let mut session = Session::with_target(charset.get('B').unwrap().clone());

        session.toggle_dot(3);
        assert_eq!(
            *session.user_pattern(),
            [false, false, false, true, false, false]
        );
        assert_eq!(session.correctness(), Correctness::Incorrect);
    }

    #[test]
    fn test_reproducing_any_pattern_is_correct() {
        let charset = Charset::builtin();

        for entry in charset.entries() {
            let mut session = Session::with_target(entry.clone());
            for (idx, &on) in entry.pattern.iter().enumerate() {
                if on {
                    session.toggle_dot(idx);
                }
            }
            assert_eq!(
                session.correctness(),
                Correctness::Correct,
                "{}",
                entry.letter
            );
        }
    }

    #[test]
    fn test_extra_dot_is_incorrect() {
        let charset = Charset::builtin();

        for entry in charset.entries() {
            let mut session = Session::with_target(entry.clone());
            for (idx, &on) in entry.pattern.iter().enumerate() {
                if on {
                    session.toggle_dot(idx);
                }
            }
            // Dot 3 is unused by every entry of the built-in table
            session.toggle_dot(2);
            assert_eq!(session.correctness(), Correctness::Incorrect);
        }
    }

    #[test]
    fn test_double_toggle_round_trip() {
        let charset = Charset::builtin();
        let mut session = Session::with_target(charset.get('D').unwrap().clone());

        session.toggle_dot(0);
        let before = *session.user_pattern();

        session.toggle_dot(4);
        session.toggle_dot(4);

        assert_eq!(*session.user_pattern(), before);
        assert_eq!(session.correctness(), Correctness::Incorrect);
    }

    #[test]
    fn test_new_character_resets() {
        let charset = Charset::builtin();
        let mut rng = StdRng::seed_from_u64(7);
        let mut session = Session::new(&charset);

        session.toggle_dot(0);
        session.toggle_dot(5);
        session.new_character(&charset, &mut rng);

        assert_eq!(*session.user_pattern(), [false; CELL_DOTS]);
        assert_eq!(session.correctness(), Correctness::Unknown);
        assert!(charset.get(session.target().letter).is_some());
    }

    #[test]
    fn test_new_character_roughly_uniform() {
        let charset = Charset::builtin();
        let mut rng = StdRng::seed_from_u64(42);
        let mut session = Session::new(&charset);

        let mut counts = std::collections::HashMap::new();
        for _ in 0..1000 {
            session.new_character(&charset, &mut rng);
            *counts.entry(session.target().letter).or_insert(0u32) += 1;
        }

        assert_eq!(counts.len(), 6);
        for (letter, count) in counts {
            assert!(count > 100, "letter {} drawn only {} times", letter, count);
        }
    }
}
