// src/engine/config.rs

use derive_builder::Builder;
use std::path::PathBuf;

/// Path of the wordlist used when the user does not supply one. Resolved
/// into the config by the CLI layer; the loader itself has no default.
pub const DEFAULT_WORDLIST: &str = "wordlists/defaultwordlist.txt";

#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(name = "build_internal"))]
pub struct DicewareConfig {
    /// Number of words in the generated passphrase.
    pub words: usize,

    #[builder(default = "PathBuf::from(DEFAULT_WORDLIST)")]
    pub wordlist_path: PathBuf,
}

impl DicewareConfigBuilder {
    pub fn build(&self) -> Result<DicewareConfig, DicewareConfigBuilderError> {
        self.build_internal()
    }
}
