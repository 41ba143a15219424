// src/tally/tokenize.rs
// =============================================================================
// Splits a line of text into lowercase words.
//
// A word character is an ASCII letter, an ASCII digit or '_'. Any run of other
// characters (spaces, punctuation, accented letters, emoji...) is a separator.
//
//   "The cat sat. The CAT ran!" -> ["the", "cat", "sat", "the", "cat", "ran"]
// =============================================================================

// True for [A-Za-z0-9_]
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Returns the lowercase words of `line`, in order, skipping empty pieces.
pub fn words(line: &str) -> impl Iterator<Item = String> + '_ {
    line.split(|c: char| !is_word_char(c))
        .filter(|piece| !piece.is_empty())
        .map(|piece| piece.to_ascii_lowercase())
}
