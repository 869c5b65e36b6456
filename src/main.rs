//! Braille Cell Trainer - interactive six-dot pattern drills
//!
//! Single-session, self-contained CLI application.
//! Shows a target letter, the user toggles dots to reproduce its cell
//! pattern, and correctness is recomputed on every toggle.

mod braille;
mod cli;
mod session;

use braille::Charset;
use clap::Parser;
use cli::display::Display;
use cli::input::InputHandler;
use session::{Correctness, Session, SessionStats};
use std::error::Error;

#[derive(Parser, Debug)]
#[command(name = "Braille Cell Trainer")]
#[command(about = "Learn six-dot Braille patterns with live feedback")]
struct Args {
    /// Path to character set file
    #[arg(short, long, default_value = "data/braille_chars.json")]
    chars: String,

    /// Enable debug mode
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    println!("⠿ Braille Cell Trainer v0.1.0");
    println!("Charset: {}", args.chars);

    // Initialize display
    let display = Display::simple()?;
    display.clear()?;

    // Load the character table
    let charset = match Charset::load(&args.chars) {
        Ok(c) => {
            if args.debug {
                println!("✓ Character set loaded: {} letters", c.size());
            }
            c
        }
        Err(e) => {
            // Fallback: built-in six-letter table
            if args.debug {
                eprintln!("⚠ Could not load {}: {} (using built-in set)", args.chars, e);
            }
            Charset::builtin()
        }
    };

    // Initialize session
    let mut rng = rand::thread_rng();
    let mut session = Session::new(&charset);
    let mut stats = SessionStats::new();
    stats.start();

    // Hint visibility is UI state, not part of the session
    let mut show_hint = false;

    // Initialize input handler
    InputHandler::enable_raw_mode()?;
    let input = InputHandler::new();

    // Event loop
    'session: loop {
        // Display current state
        display.clear()?;
        display.show_target(session.target().letter)?;
        display.show_cell(session.user_pattern())?;
        display.show_feedback(session.correctness())?;

        if show_hint {
            display.show_hint(&session.target().hint_text())?;
        }

        display.show_progress(
            stats.rounds_solved,
            stats.rounds_presented,
            stats.total_toggles,
        )?;
        display.show_help()?;

        // Read input
        match input.read_key()? {
            Some(key) => {
                // Check for exit
                if InputHandler::is_exit(&key) {
                    break 'session;
                }

                // Handle dot toggles
                if let Some(dot) = InputHandler::dot_index(&key) {
                    session.toggle_dot(dot);
                    stats.record_toggle(dot, !session.dot_matches(dot));

                    if session.correctness() == Correctness::Correct {
                        stats.record_solved();
                    }
                    continue;
                }

                // Handle hint toggle
                if InputHandler::is_hint(&key) {
                    show_hint = !show_hint;
                    continue;
                }

                // Handle new letter
                if InputHandler::is_new_letter(&key) {
                    session.new_character(&charset, &mut rng);
                    stats.record_round();
                    show_hint = false;
                }
            }
            None => {
                // Timeout - just continue
            }
        }
    }

    // Cleanup
    InputHandler::disable_raw_mode()?;
    display.shutdown()?;

    // Summary
    println!("\n🎉 Session Complete!");
    println!(
        "📊 Final Stats: {}/{} letters solved | {} toggles | {:.1}s",
        stats.rounds_solved,
        stats.rounds_presented,
        stats.total_toggles,
        stats.duration_secs()
    );

    let trouble = stats.troublesome_dots();
    if !trouble.is_empty() {
        println!("⚠️  Dots to practice: {:?}", trouble);
    }

    println!("⠿ Thanks for practicing!");

    Ok(())
}
