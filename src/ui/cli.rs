// src/ui/cli.rs

use crate::engine::config::DEFAULT_WORDLIST;
use clap::Parser;
use std::path::PathBuf;

// ~~~ CLI Arguments ~~~
#[derive(Parser, Debug, Clone)]
#[clap(
    name = env!("CARGO_PKG_NAME"),
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION")
)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Number of words in the passphrase
    #[clap(value_parser = clap::value_parser!(u32).range(1..))]
    pub words: u32,

    /// Path to a Diceware wordlist file
    #[clap(short = 'w', long = "wordlist", default_value = DEFAULT_WORDLIST)]
    pub wordlist: PathBuf,
}
