//! Six-dot cell patterns
//!
//! Handles:
//! - The fixed-size on/off pattern type
//! - Conversion between patterns and 1-based dot numbers
//! - Chart-style labels ("Dots 1-2-4")

/// Number of dot positions in a Braille cell
pub const CELL_DOTS: usize = 6;

/// On/off state of the six dot positions
///
/// Index order follows the standard cell reading: 0..=2 are the left
/// column top to bottom (dots 1-3), 3..=5 the right column (dots 4-6).
pub type DotPattern = [bool; CELL_DOTS];

/// Convert 1-based dot numbers to a pattern
///
/// Numbers outside 1-6 are ignored.
pub fn dots_to_pattern(dots: &[u8]) -> DotPattern {
    let mut pattern = [false; CELL_DOTS];
    for &dot in dots {
        if (1..=CELL_DOTS as u8).contains(&dot) {
            pattern[(dot - 1) as usize] = true;
        }
    }
    pattern
}

/// Convert a pattern to its raised 1-based dot numbers
pub fn pattern_to_dots(pattern: &DotPattern) -> Vec<u8> {
    pattern
        .iter()
        .enumerate()
        .filter_map(|(idx, &on)| if on { Some(idx as u8 + 1) } else { None })
        .collect()
}

/// Chart label for a pattern ("Dot 1", "Dots 1-2-4", "No dots")
pub fn dots_label(pattern: &DotPattern) -> String {
    let dots = pattern_to_dots(pattern);
    match dots.len() {
        0 => "No dots".to_string(),
        1 => format!("Dot {}", dots[0]),
        _ => format!(
            "Dots {}",
            dots.iter()
                .map(|d| d.to_string())
                .collect::<Vec<_>>()
                .join("-")
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dots_to_pattern() {
        assert_eq!(
            dots_to_pattern(&[1]),
            [true, false, false, false, false, false]
        );
        assert_eq!(
            dots_to_pattern(&[1, 4, 5]),
            [true, false, false, true, true, false]
        );
        assert_eq!(dots_to_pattern(&[]), [false; CELL_DOTS]);
    }

    #[test]
    fn test_out_of_range_dots_ignored() {
        assert_eq!(dots_to_pattern(&[0, 7, 2]), dots_to_pattern(&[2]));
    }

    #[test]
    fn test_pattern_to_dots_round_trip() {
        let dots = vec![1, 2, 4];
        assert_eq!(pattern_to_dots(&dots_to_pattern(&dots)), dots);
    }

    #[test]
    fn test_dots_label() {
        assert_eq!(dots_label(&dots_to_pattern(&[])), "No dots");
        assert_eq!(dots_label(&dots_to_pattern(&[1])), "Dot 1");
        assert_eq!(dots_label(&dots_to_pattern(&[1, 2, 4])), "Dots 1-2-4");
    }
}
