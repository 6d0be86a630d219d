//! Final output helpers. The passphrase is the only thing written to
//! stdout; everything else goes to stderr so the result stays pipeable.

use colored::Colorize;

pub fn print_passphrase(passphrase: &str) {
    println!("{passphrase}");
}

pub fn print_summary(words: usize, entries: usize) {
    eprintln!(
        "{}",
        format!("[✓] Generated a {words}-word passphrase from a {entries}-entry wordlist.")
            .yellow()
    );
}
