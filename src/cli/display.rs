//! Terminal display and UI rendering
//!
//! Features:
//! - Braille cell grid with filled/empty dot glyphs
//! - Live correctness feedback with color coding
//! - Hint panel and session progress line

#[allow(unused_imports)]
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{
    cursor, execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use std::io::{stdout, Write};

use crate::braille::DotPattern;
use crate::session::Correctness;

/// Terminal display manager
pub struct Display {
    /// Whether we're using alternate screen
    use_alternate_screen: bool,
}

impl Display {
    /// Create display without alternate screen (simpler mode)
    pub fn simple() -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Display {
            use_alternate_screen: false,
        })
    }

    /// Clear screen
    pub fn clear(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();
        execute!(
            stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        Ok(())
    }

    /// Render the target letter with its prompt
    pub fn show_target(&self, letter: char) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();

        execute!(
            stdout,
            cursor::MoveTo(0, 1),
            SetForegroundColor(Color::Cyan),
            Print("Target letter: "),
            ResetColor,
            Print(letter),
            Print("  "),
            SetForegroundColor(Color::DarkGrey),
            Print("(reproduce it in the cell below)"),
            ResetColor,
            Print("\n")
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Render the six-dot cell as a 2x3 grid with dot numbers
    /// Left column holds dots 1-3, right column dots 4-6
    pub fn show_cell(&self, pattern: &DotPattern) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();

        for row in 0..3u16 {
            let left = row as usize;
            let right = left + 3;

            execute!(
                stdout,
                cursor::MoveTo(4, 3 + row),
                SetForegroundColor(Color::DarkGrey),
                Print(format!("{} ", left + 1)),
                SetForegroundColor(if pattern[left] {
                    Color::Blue
                } else {
                    Color::DarkGrey
                }),
                Print(if pattern[left] { "●" } else { "○" }),
                ResetColor,
                Print("   "),
                SetForegroundColor(Color::DarkGrey),
                Print(format!("{} ", right + 1)),
                SetForegroundColor(if pattern[right] {
                    Color::Blue
                } else {
                    Color::DarkGrey
                }),
                Print(if pattern[right] { "●" } else { "○" }),
                ResetColor,
            )?;
        }

        execute!(stdout, Print("\n"))?;
        stdout.flush()?;
        Ok(())
    }

    /// Show live feedback for the current attempt
    pub fn show_feedback(
        &self,
        correctness: Correctness,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();

        execute!(stdout, cursor::MoveTo(0, 7))?;

        match correctness {
            Correctness::Unknown => {
                execute!(
                    stdout,
                    SetForegroundColor(Color::DarkGrey),
                    Print("Toggle dots 1-6 to match the letter."),
                    ResetColor,
                    Print("\n")
                )?;
            }
            Correctness::Correct => {
                execute!(
                    stdout,
                    SetForegroundColor(Color::Green),
                    Print("✨ Correct! Well done!"),
                    ResetColor,
                    Print("\n")
                )?;
            }
            Correctness::Incorrect => {
                execute!(
                    stdout,
                    SetForegroundColor(Color::Red),
                    Print("Try again!"),
                    ResetColor,
                    Print("\n")
                )?;
            }
        }

        stdout.flush()?;
        Ok(())
    }

    /// Show the hint panel for the current target
    pub fn show_hint(&self, hint: &str) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();

        execute!(
            stdout,
            cursor::MoveTo(0, 9),
            SetForegroundColor(Color::Yellow),
            Print("Hint: "),
            ResetColor,
            Print(hint),
            Print("\n"),
            cursor::MoveTo(0, 10),
            SetForegroundColor(Color::DarkGrey),
            Print("The standard Braille cell is six dots in two columns of three."),
            ResetColor,
            Print("\n")
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Display progress (letters solved, letters shown, toggle count)
    pub fn show_progress(
        &self,
        solved: u32,
        presented: u32,
        toggles: u32,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();

        execute!(
            stdout,
            cursor::MoveTo(0, 12),
            SetForegroundColor(Color::Magenta),
            Print("Progress: "),
            ResetColor,
            Print(format!("{}/{} letters solved", solved, presented)),
            Print(format!("  |  {} toggles\n", toggles)),
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Show help text
    pub fn show_help(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();

        execute!(
            stdout,
            cursor::MoveTo(0, 14),
            SetForegroundColor(Color::DarkGrey),
            Print("1-6 toggle dots  |  h hint  |  n new letter  |  Esc to exit\n"),
            ResetColor
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Reset terminal state and cleanup
    pub fn shutdown(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();

        if self.use_alternate_screen {
            execute!(stdout, LeaveAlternateScreen, cursor::Show,)?;
        }

        terminal::disable_raw_mode()?;
        Ok(())
    }
}

impl Default for Display {
    fn default() -> Self {
        // Return simple display that doesn't use alternate screen
        Display {
            use_alternate_screen: false,
        }
    }
}

impl Drop for Display {
    fn drop(&mut self) {
        // Best effort cleanup
        let _ = self.shutdown();
    }
}
