//! Reference chart binary for the Braille cell trainer
//!
//! Prints the character table with cell renderings to stdout.
//! Usage: cargo run --bin chart -- --chars data/braille_chars.json

use clap::Parser;
use serde::Deserialize;
use std::error::Error;
use std::fs;

#[derive(Parser, Debug)]
#[command(name = "Braille Cell Trainer - Character Chart")]
#[command(about = "Print the Braille character reference chart")]
struct Args {
    /// Path to character set file
    #[arg(short, long, default_value = "data/braille_chars.json")]
    chars: String,
}

#[derive(Debug, Deserialize)]
struct CharsetFile {
    characters: Vec<CharEntry>,
}

#[derive(Debug, Deserialize)]
struct CharEntry {
    letter: String,
    dots: Vec<u8>,
    #[serde(default)]
    description: Option<String>,
}

/// Render a dot list as the three rows of a 2x3 cell
fn cell_rows(dots: &[u8]) -> [String; 3] {
    let mut on = [false; 6];
    for &dot in dots {
        if (1..=6).contains(&dot) {
            on[(dot - 1) as usize] = true;
        }
    }

    let glyph = |raised: bool| if raised { '●' } else { '○' };
    [
        format!("{} {}", glyph(on[0]), glyph(on[3])),
        format!("{} {}", glyph(on[1]), glyph(on[4])),
        format!("{} {}", glyph(on[2]), glyph(on[5])),
    ]
}

/// Chart label for a dot list ("Dot 1", "Dots 1-2-4")
fn dots_label(dots: &[u8]) -> String {
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

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let content = fs::read_to_string(&args.chars)
        .map_err(|e| format!("could not read {}: {}", args.chars, e))?;
    let file: CharsetFile = serde_json::from_str(&content)?;

    println!("⠿ Braille Character Chart ({} letters)", file.characters.len());
    println!();

    for entry in &file.characters {
        let rows = cell_rows(&entry.dots);
        let label = entry
            .description
            .clone()
            .unwrap_or_else(|| dots_label(&entry.dots));

        println!("{:<4}{}", entry.letter, rows[0]);
        println!("    {}   {}", rows[1], label);
        println!("    {}", rows[2]);
        println!();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_rows() {
        let rows = cell_rows(&[1, 2, 4]);
        assert_eq!(rows[0], "● ●");
        assert_eq!(rows[1], "● ○");
        assert_eq!(rows[2], "○ ○");
    }

    #[test]
    fn test_dots_label() {
        assert_eq!(dots_label(&[1]), "Dot 1");
        assert_eq!(dots_label(&[1, 4, 5]), "Dots 1-4-5");
    }
}
