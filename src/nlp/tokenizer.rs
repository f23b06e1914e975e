//! Word and sentence segmentation.
//!
//! Words follow UAX #29 boundaries via `unicode-segmentation`. Sentences end
//! at `.`, `!` or `?` (plus any closing quotes or brackets) followed by
//! whitespace, independent of the case of the next word; the text is often
//! already lower-cased when it gets here. A period right after one of
//! [`ABBREVIATIONS`] does not end a sentence.

use regex::Regex;
use std::sync::OnceLock;
use unicode_segmentation::UnicodeSegmentation;

/// Lower-cased, without the trailing period.
const ABBREVIATIONS: &[&str] = &[
    "e.g", "i.e", "etc", "vs", "mr", "mrs", "ms", "dr", "prof", "st", "jr", "sr",
];

fn sentence_end() -> Option<&'static Regex> {
    static INSTANCE: OnceLock<Option<Regex>> = OnceLock::new();
    INSTANCE
        .get_or_init(|| Regex::new(r#"[.!?]+["')\]]*\s+"#).ok())
        .as_ref()
}

/// Lower-cased UAX #29 words. Punctuation-only segments are not produced.
#[must_use]
pub fn words(text: &str) -> Vec<String> {
    text.to_lowercase()
        .unicode_words()
        .map(str::to_string)
        .collect()
}

/// True when `before` ends in a known abbreviation and the cut starts at
/// its period.
fn ends_with_abbreviation(before: &str, cut: &str) -> bool {
    if !cut.starts_with('.') || cut.starts_with("..") {
        return false;
    }
    let Some(last) = before.split_whitespace().next_back() else {
        return false;
    };
    let last = last
        .trim_start_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase();
    ABBREVIATIONS.contains(&last.as_str())
}

/// Sentences with their terminal punctuation, trimmed. Blank pieces are
/// dropped, so empty or whitespace-only input yields no sentences.
#[must_use]
pub fn sentences(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut push = |piece: &str| {
        let piece = piece.trim();
        if !piece.is_empty() {
            out.push(piece.to_string());
        }
    };

    let mut start = 0;
    if let Some(re) = sentence_end() {
        for m in re.find_iter(text) {
            if ends_with_abbreviation(&text[start..m.start()], m.as_str()) {
                continue;
            }
            push(&text[start..m.end()]);
            start = m.end();
        }
    }
    push(&text[start..]);

    out
}

#[inline]
#[must_use]
pub fn is_alphanumeric(word: &str) -> bool {
    !word.is_empty() && word.chars().all(char::is_alphanumeric)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_are_lowercased_without_punctuation() {
        assert_eq!(
            words("Hello, this is a TEST message!"),
            vec!["hello", "this", "is", "a", "test", "message"]
        );
    }

    #[test]
    fn sentences_keep_terminal_punctuation() {
        assert_eq!(
            sentences("First one. Second one! Third?"),
            vec!["First one.", "Second one!", "Third?"]
        );
    }

    #[test]
    fn lowercase_text_still_splits() {
        assert_eq!(
            sentences("also, this works. also, it scales."),
            vec!["also, this works.", "also, it scales."]
        );
    }

    #[test]
    fn decimals_do_not_split() {
        assert_eq!(sentences("Version 1.5 is out."), vec!["Version 1.5 is out."]);
    }

    #[test]
    fn abbreviations_do_not_split() {
        assert_eq!(
            sentences("It is e.g. fast. It works."),
            vec!["It is e.g. fast.", "It works."]
        );
        assert_eq!(
            sentences("dr. smith arrived (i.e. late). he left."),
            vec!["dr. smith arrived (i.e. late).", "he left."]
        );
    }

    #[test]
    fn abbreviation_lookalikes_still_split() {
        assert_eq!(sentences("Ask the doctor. Then rest."), vec!["Ask the doctor.", "Then rest."]);
    }

    #[test]
    fn blank_input_has_no_sentences() {
        assert!(sentences("").is_empty());
        assert!(sentences("   \n ").is_empty());
    }

    #[test]
    fn alphanumeric_check() {
        assert!(is_alphanumeric("rust2024"));
        assert!(!is_alphanumeric("don't"));
        assert!(!is_alphanumeric(""));
    }
}
