//! Part-of-speech tagging with Penn Treebank tags.
//!
//! Tags are assigned from surface form only (digits, suffixes). Input is the
//! filtered token stream, which is mostly content words, so the closed-class
//! tags are rarely needed.

const ADJECTIVE_SUFFIXES: &[&str] = &[
    "able", "ible", "ful", "less", "ous", "ive", "ical", "ish", "ic", "al",
];

#[must_use]
pub fn tag_word(word: &str) -> &'static str {
    let len = word.chars().count();

    if word.chars().all(|c| c.is_ascii_digit()) {
        return "CD";
    }
    if len > 4 && word.ends_with("ing") {
        return "VBG";
    }
    if len > 3 && word.ends_with("ed") {
        return "VBD";
    }
    if len > 3 && word.ends_with("ly") {
        return "RB";
    }
    if len > 4 && ADJECTIVE_SUFFIXES.iter().any(|s| word.ends_with(s)) {
        return "JJ";
    }
    if len > 3 && word.ends_with('s') && !word.ends_with("ss") {
        return "NNS";
    }
    "NN"
}

#[must_use]
pub fn pos_tag(words: &[String]) -> Vec<(String, String)> {
    words
        .iter()
        .map(|w| (w.clone(), tag_word(w).to_string()))
        .collect()
}
