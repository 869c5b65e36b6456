//! Character reference table
//!
//! Handles:
//! - The built-in six-letter table (A-F)
//! - Letter → entry lookup
//! - Optional JSON character file with built-in fallback

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fs;

use super::pattern::{dots_label, dots_to_pattern, pattern_to_dots, DotPattern};

/// One entry of the reference table
#[derive(Clone, Debug, PartialEq)]
pub struct BrailleCharacter {
    pub letter: char,
    pub pattern: DotPattern,
    pub description: Option<String>,
}

impl BrailleCharacter {
    /// Build an entry from 1-based dot numbers
    pub fn new(letter: char, dots: &[u8], description: &str) -> Self {
        BrailleCharacter {
            letter,
            pattern: dots_to_pattern(dots),
            description: Some(description.to_string()),
        }
    }

    /// Hint text: the description, or a dot label derived from the pattern
    pub fn hint_text(&self) -> String {
        self.description
            .clone()
            .unwrap_or_else(|| dots_label(&self.pattern))
    }
}

/// JSON file layout for a character set
#[derive(Debug, Serialize, Deserialize)]
struct CharsetFile {
    #[serde(default)]
    version: String,
    characters: Vec<CharEntry>,
}

/// One character entry as stored on disk (patterns as raised dot numbers)
#[derive(Debug, Serialize, Deserialize)]
struct CharEntry {
    letter: String,
    dots: Vec<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

/// Ordered, immutable character table with letter lookup
pub struct Charset {
    /// Entries in chart order
    entries: Vec<BrailleCharacter>,
    /// Letter → index into `entries` (first occurrence wins)
    by_letter: FxHashMap<char, usize>,
}

#[allow(dead_code)]
impl Charset {
    /// Built-in table: the first six letters of the alphabet
    pub fn builtin() -> Self {
        let entries = vec![
            BrailleCharacter::new('A', &[1], "Dot 1"),
            BrailleCharacter::new('B', &[1, 2], "Dots 1-2"),
            BrailleCharacter::new('C', &[1, 4], "Dots 1-4"),
            BrailleCharacter::new('D', &[1, 4, 5], "Dots 1-4-5"),
            BrailleCharacter::new('E', &[1, 5], "Dots 1-5"),
            BrailleCharacter::new('F', &[1, 2, 4], "Dots 1-2-4"),
        ];
        let by_letter = Self::index(&entries);
        Charset { entries, by_letter }
    }

    /// Load a character set from a JSON file
    ///
    /// Falls back to the built-in table when the file does not exist; a
    /// file that exists but fails to parse is an error.
    pub fn load(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        if let Ok(content) = fs::read_to_string(path) {
            Self::from_json(&content)
        } else {
            Ok(Self::builtin())
        }
    }

    /// Parse a character set from JSON text
    pub fn from_json(content: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let file: CharsetFile = serde_json::from_str(content)?;

        let mut entries = Vec::new();
        for entry in &file.characters {
            if let Some(letter) = entry.letter.chars().next() {
                entries.push(BrailleCharacter {
                    letter,
                    pattern: dots_to_pattern(&entry.dots),
                    description: entry.description.clone(),
                });
            }
        }

        Self::from_entries(entries)
    }

    fn from_entries(entries: Vec<BrailleCharacter>) -> Result<Self, Box<dyn std::error::Error>> {
        if entries.is_empty() {
            return Err("character set has no entries".into());
        }
        let by_letter = Self::index(&entries);
        Ok(Charset { entries, by_letter })
    }

    fn index(entries: &[BrailleCharacter]) -> FxHashMap<char, usize> {
        let mut by_letter = FxHashMap::default();
        for (idx, c) in entries.iter().enumerate() {
            by_letter.entry(c.letter).or_insert(idx);
        }
        by_letter
    }

    /// Look up an entry by letter
    pub fn get(&self, letter: char) -> Option<&BrailleCharacter> {
        self.by_letter.get(&letter).map(|&idx| &self.entries[idx])
    }

    /// First entry of the table (the fixed starting target)
    pub fn first(&self) -> &BrailleCharacter {
        &self.entries[0]
    }

    /// All entries in chart order
    pub fn entries(&self) -> &[BrailleCharacter] {
        &self.entries
    }

    /// Uniform draw from the table (with replacement)
    pub fn choose<R: rand::Rng>(&self, rng: &mut R) -> &BrailleCharacter {
        &self.entries[rng.gen_range(0..self.entries.len())]
    }

    /// Number of entries
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    /// Serialize the table to JSON text
    pub fn to_json(&self) -> Result<String, Box<dyn std::error::Error>> {
        let file = CharsetFile {
            version: "0.1.0".to_string(),
            characters: self
                .entries
                .iter()
                .map(|c| CharEntry {
                    letter: c.letter.to_string(),
                    dots: pattern_to_dots(&c.pattern),
                    description: c.description.clone(),
                })
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    /// Save the table to a JSON file
    pub fn save(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

impl Default for Charset {
    fn default() -> Self {
        Self::builtin()
    }
}
