//! Noun lemmatization by inflection rules.
//!
//! Words are treated as nouns, so only plural endings are folded. There is no
//! dictionary behind the rules; short words and Latin/Greek singular endings
//! (`-ss`, `-us`, `-is`) are left alone to avoid producing non-words.

/// Irregular plurals that suffix rules cannot reach.
const IRREGULAR: &[(&str, &str)] = &[
    ("children", "child"),
    ("data", "datum"),
    ("feet", "foot"),
    ("geese", "goose"),
    ("men", "man"),
    ("mice", "mouse"),
    ("people", "person"),
    ("teeth", "tooth"),
    ("women", "woman"),
];

/// Ordered suffix rewrites; the first matching suffix wins.
const SUFFIX_RULES: &[(&str, &str)] = &[
    ("sses", "ss"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("xes", "x"),
    ("zes", "z"),
    ("ies", "y"),
];

const KEEP_ENDINGS: &[&str] = &["ss", "us", "is", "ous"];

#[must_use]
pub fn lemmatize(word: &str) -> String {
    if let Some((_, lemma)) = IRREGULAR.iter().find(|(plural, _)| *plural == word) {
        return (*lemma).to_string();
    }

    if word.chars().count() <= 3 || !word.ends_with('s') {
        return word.to_string();
    }

    for (suffix, replacement) in SUFFIX_RULES {
        if let Some(stem) = word.strip_suffix(suffix)
            && stem.chars().count() >= 2
        {
            return format!("{stem}{replacement}");
        }
    }

    if KEEP_ENDINGS.iter().any(|ending| word.ends_with(ending)) {
        return word.to_string();
    }

    word.strip_suffix('s').unwrap_or(word).to_string()
}
