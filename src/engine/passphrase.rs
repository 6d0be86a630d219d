//! Turning a sequence of validated rolls into a passphrase.

use anyhow::{Context, Result};

use crate::engine::wordlist::Wordlist;

/// Looks up every roll in order and joins the words with single spaces.
///
/// Rolls reaching this stage are already syntactically valid, but a custom
/// wordlist may not cover every valid roll; a missing entry is a fatal
/// error naming the roll, since retrying the same lookup cannot succeed.
/// The result carries no leading or trailing whitespace.
pub fn assemble(rolls: &[String], wordlist: &Wordlist) -> Result<String> {
    let mut words = Vec::with_capacity(rolls.len());
    for roll in rolls {
        let word = wordlist
            .get(roll)
            .with_context(|| format!("Roll {roll} has no entry in the wordlist"))?;
        words.push(word);
    }
    Ok(words.join(" "))
}
