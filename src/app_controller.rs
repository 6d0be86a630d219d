use std::io;

use anyhow::{Context, Result, bail};

use crate::{
    engine::{config::DicewareConfigBuilder, passphrase, wordlist::Wordlist},
    ui::{cli::Cli, output, prompt},
};

/// The primary orchestration function for the application.
///
/// Wires the pipeline together: resolve the configuration, load the
/// wordlist, collect the rolls interactively, assemble, print. Every
/// component below this receives already-resolved, typed values.
pub fn run(args: Cli) -> Result<()> {
    let config = DicewareConfigBuilder::default()
        .words(args.words as usize)
        .wordlist_path(args.wordlist)
        .build()
        .context("Failed to build configuration")?;

    // The file is fully consumed and closed before the first prompt.
    let wordlist = Wordlist::load(&config.wordlist_path)?;
    if wordlist.is_empty() {
        bail!(
            "Wordlist {} contains no usable entries",
            config.wordlist_path.display()
        );
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut prompts = io::stderr();
    let rolls = prompt::collect_rolls(config.words, &mut input, &mut prompts)?;

    let passphrase = passphrase::assemble(&rolls, &wordlist)?;
    output::print_passphrase(&passphrase);
    output::print_summary(config.words, wordlist.len());

    Ok(())
}
