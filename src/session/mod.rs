//! Session management: state machine and statistics
//!
//! # Components
//! - `state.rs`: Session state machine (target, user pattern, correctness)
//! - `stats.rs`: round and toggle counters for the summary

pub mod state;
pub mod stats;

pub use state::{Correctness, Session};
pub use stats::SessionStats;
