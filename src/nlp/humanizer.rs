//! Rewrites formal text into a conversational register.

use super::tokenizer;

/// Formal phrase to casual phrase, applied top to bottom.
///
/// Order matters: every rule runs on the output of the rules above it, so
/// overlapping phrases (`additionally` / `in addition`) resolve differently
/// if the table is reordered. Keep new rules at the end.
pub const REPLACEMENTS: &[(&str, &str)] = &[
    ("additionally", "also"),
    ("furthermore", "also"),
    ("moreover", "plus"),
    ("consequently", "so"),
    ("therefore", "so"),
    ("thus", "so"),
    ("nevertheless", "but"),
    ("however", "but"),
    ("in addition", "also"),
    ("in conclusion", "finally"),
];

const SENTENCE_SEPARATOR: &str = ". ";
const CONNECTOR: &str = ". Well, ";

fn capitalize(sentence: &str) -> String {
    let mut chars = sentence.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
    })
}

/// Lower-cases `text`, applies [`REPLACEMENTS`] as plain substring
/// substitutions, capitalizes each sentence and joins them with `". "`.
/// With more than one sentence, every separator but the last becomes
/// `". Well, "`.
#[must_use]
pub fn humanize(text: &str) -> String {
    let mut result = text.to_lowercase();
    for (formal, casual) in REPLACEMENTS {
        result = result.replace(formal, casual);
    }

    let sentences = tokenizer::sentences(&result);
    let joined = sentences
        .iter()
        .map(|s| capitalize(s))
        .collect::<Vec<_>>()
        .join(SENTENCE_SEPARATOR);

    if sentences.len() > 1 {
        let separators = joined.matches(SENTENCE_SEPARATOR).count();
        return joined.replacen(SENTENCE_SEPARATOR, CONNECTOR, separators.saturating_sub(1));
    }

    joined
}
