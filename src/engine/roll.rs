//! Validation rules for a single Diceware roll.
//!
//! A valid roll is a string of exactly five digits, each between 1 and 6,
//! representing five throws of a six-sided die.

use thiserror::Error;

/// Number of dice throws encoded in one roll.
pub const ROLL_LEN: usize = 5;

/// One variant per validation rule, so the user can be told exactly which
/// rule their input broke.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RollError {
    #[error("Diceware rolls must be numbers.")]
    NotNumeric,

    #[error("Diceware rolls must be exactly five digits (got {0}).")]
    WrongLength(usize),

    #[error("Diceware uses six-sided dice. Only numbers from 1 through 6 are valid (got '{0}').")]
    OutOfRange(char),
}

/// Checks a token against the roll rules, in order, stopping at the first
/// failure:
///
/// 1. every character is an ASCII digit (no sign, whitespace, or point),
/// 2. the token is exactly [`ROLL_LEN`] characters long,
/// 3. every digit is in the inclusive range 1–6.
pub fn check_roll(token: &str) -> Result<(), RollError> {
    // An empty token carries no digits, so it is not numeric.
    if token.is_empty() || !token.chars().all(|c| c.is_ascii_digit()) {
        return Err(RollError::NotNumeric);
    }
    if token.chars().count() != ROLL_LEN {
        return Err(RollError::WrongLength(token.chars().count()));
    }
    for digit in token.chars() {
        if !('1'..='6').contains(&digit) {
            return Err(RollError::OutOfRange(digit));
        }
    }
    Ok(())
}

/// Boolean convenience wrapper around [`check_roll`]: prints the diagnostic
/// for the broken rule to stderr and reports validity as a plain `bool`.
/// Never panics.
pub fn validate_roll(token: &str) -> bool {
    match check_roll(token) {
        Ok(()) => true,
        Err(e) => {
            eprintln!("{e}");
            false
        }
    }
}
