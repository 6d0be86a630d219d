//! Loading and lookup of Diceware wordlists.

use std::{collections::HashMap, fs, path::Path};

use anyhow::{Context, Result};
use log::{debug, warn};

/// A roll-to-word mapping read from a tab-separated wordlist file.
///
/// A standard Diceware list covers all 7776 rolls from "11111" to "66666";
/// custom lists may cover fewer, in which case lookups for uncovered rolls
/// fail at assembly time. The mapping is built once per run and never
/// mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wordlist {
    entries: HashMap<String, String>,
}

impl Wordlist {
    /// Reads a wordlist file where each line is `<roll>\t<word>`.
    ///
    /// Fields are split on tabs with no quoting convention; quote characters
    /// are literal word content. Fields beyond the second are ignored. Lines
    /// without a tab separator carry no word and are skipped with a warning.
    /// If the same roll appears on more than one line, the last line wins.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read wordlist file: {}", path.display()))?;

        let mut entries = HashMap::new();
        for (idx, line) in raw.lines().enumerate() {
            let mut fields = line.split('\t');
            match (fields.next(), fields.next()) {
                (Some(roll), Some(word)) => {
                    entries.insert(roll.to_owned(), word.to_owned());
                }
                _ => warn!(
                    "Skipping wordlist line {} of {}: no tab-separated word field",
                    idx + 1,
                    path.display()
                ),
            }
        }

        debug!("Loaded {} entries from {}", entries.len(), path.display());
        Ok(Self { entries })
    }

    /// Looks up the word for a roll.
    pub fn get(&self, roll: &str) -> Option<&str> {
        self.entries.get(roll).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
