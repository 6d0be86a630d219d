//! The interactive read/validate/re-prompt loop.

use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};

use crate::engine::roll::check_roll;

/// Collects one valid roll per word by prompting on `output` and reading
/// lines from `input`.
///
/// Prompts are numbered from 1, matching what the user sees. An invalid
/// line gets the diagnostic for the rule it broke and an identical
/// re-prompt; the position is only advanced by a valid roll, so the
/// returned sequence is exactly `count` long and in prompt order. There is
/// no bound on retries. If `input` reaches end-of-file before every
/// position is filled, the shortfall is an error.
pub fn collect_rolls<R, W>(count: usize, input: &mut R, output: &mut W) -> Result<Vec<String>>
where
    R: BufRead,
    W: Write,
{
    let mut rolls = Vec::with_capacity(count);
    for num in 1..=count {
        loop {
            write!(output, "Please enter the rolls for word {num}: ")?;
            output.flush()?;

            let mut line = String::new();
            let read = input
                .read_line(&mut line)
                .context("Failed to read from the input channel")?;
            if read == 0 {
                bail!("Input ended after {} of {count} words", num - 1);
            }

            let token = line.trim_end_matches(['\r', '\n']);
            match check_roll(token) {
                Ok(()) => {
                    rolls.push(token.to_owned());
                    break;
                }
                Err(e) => writeln!(output, "{e}")?,
            }
        }
    }
    Ok(rolls)
}
