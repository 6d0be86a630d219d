// src/lib.rs

//! Internal library for the diceware CLI – not published on crates.io

pub mod app_controller;
pub mod engine;
pub mod ui;

// Re-export a narrow, testable API surface
pub use engine::{
    config::{DicewareConfig, DicewareConfigBuilder},
    passphrase::assemble,
    roll::{RollError, check_roll, validate_roll},
    wordlist::Wordlist,
};
pub use ui::prompt::collect_rolls;
