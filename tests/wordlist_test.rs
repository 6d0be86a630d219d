use std::io::Write;

use diceware::Wordlist;
use tempfile::NamedTempFile;

fn write_wordlist(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_simple_wordlist() {
    let file = write_wordlist("11111\ta\n12345\tapathy\n66666\t@\n");
    let wordlist = Wordlist::load(file.path()).unwrap();
    assert_eq!(wordlist.len(), 3);
    assert_eq!(wordlist.get("11111"), Some("a"));
    assert_eq!(wordlist.get("12345"), Some("apathy"));
    assert_eq!(wordlist.get("66666"), Some("@"));
}

#[test]
fn test_missing_file_is_an_error() {
    let err = Wordlist::load(std::path::Path::new("no/such/wordlist.txt")).unwrap_err();
    assert!(err.to_string().contains("no/such/wordlist.txt"));
}

#[test]
fn test_duplicate_keys_last_line_wins() {
    let file = write_wordlist("11111\tfirst\n22222\tother\n11111\tsecond\n");
    let wordlist = Wordlist::load(file.path()).unwrap();
    assert_eq!(wordlist.len(), 2);
    assert_eq!(wordlist.get("11111"), Some("second"));
}

#[test]
fn test_lines_without_a_word_field_are_skipped() {
    let file = write_wordlist("11111\ta\nmalformed line\n22222\tb\n");
    let wordlist = Wordlist::load(file.path()).unwrap();
    assert_eq!(wordlist.len(), 2);
    assert_eq!(wordlist.get("11111"), Some("a"));
    assert_eq!(wordlist.get("22222"), Some("b"));
}

#[test]
fn test_no_quoting_convention() {
    // Quote characters are literal word content, never stripped.
    let file = write_wordlist("11111\t\"quoted\"\n22222\tdon't\n");
    let wordlist = Wordlist::load(file.path()).unwrap();
    assert_eq!(wordlist.get("11111"), Some("\"quoted\""));
    assert_eq!(wordlist.get("22222"), Some("don't"));
}

#[test]
fn test_fields_beyond_the_second_are_ignored() {
    let file = write_wordlist("11111\ta\textra\tfields\n");
    let wordlist = Wordlist::load(file.path()).unwrap();
    assert_eq!(wordlist.get("11111"), Some("a"));
}

#[test]
fn test_round_trip_preserves_word_content() {
    let entries = [("11111", "a"), ("12345", "apathy"), ("66666", "@")];
    let contents: String = entries
        .iter()
        .map(|(roll, word)| format!("{roll}\t{word}\n"))
        .collect();
    let file = write_wordlist(&contents);
    let wordlist = Wordlist::load(file.path()).unwrap();
    for (roll, word) in entries {
        assert_eq!(wordlist.get(roll), Some(word));
    }
}

#[test]
fn test_loading_twice_is_idempotent() {
    let file = write_wordlist("11111\ta\n22222\tb\n");
    let first = Wordlist::load(file.path()).unwrap();
    let second = Wordlist::load(file.path()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_empty_file_yields_empty_wordlist() {
    let file = write_wordlist("");
    let wordlist = Wordlist::load(file.path()).unwrap();
    assert!(wordlist.is_empty());
}
