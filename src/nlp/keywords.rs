//! TF-IDF keyword extraction over a single document.
//!
//! Terms are lower-cased runs of two or more word characters. The corpus is
//! the input text alone, so with smoothed IDF every term gets
//! `idf = ln((1 + 1) / (1 + 1)) + 1 = 1` and the score is the L2-normalized
//! term count. Ranking sorts `(score, term)` descending, which breaks ties by
//! reverse lexicographic order of the term.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

fn term_regex() -> Option<&'static Regex> {
    static INSTANCE: OnceLock<Option<Regex>> = OnceLock::new();
    INSTANCE.get_or_init(|| Regex::new(r"\b\w\w+\b").ok()).as_ref()
}

/// Term counts keyed by term, in vocabulary (lexicographic) order.
fn term_counts(text: &str) -> BTreeMap<String, u32> {
    let mut counts = BTreeMap::new();
    let Some(re) = term_regex() else {
        return counts;
    };

    let lowered = text.to_lowercase();
    for m in re.find_iter(&lowered) {
        *counts.entry(m.as_str().to_string()).or_insert(0) += 1;
    }
    counts
}

/// `(score, term)` pairs for every vocabulary term, unsorted.
#[must_use]
pub fn tfidf_scores(text: &str) -> Vec<(f64, String)> {
    let counts = term_counts(text);

    // Single-document corpus: smoothed idf is exactly 1 for every term.
    let idf = ((1.0_f64 + 1.0) / (1.0 + 1.0)).ln() + 1.0;

    let weighted: Vec<(f64, String)> = counts
        .into_iter()
        .map(|(term, count)| (f64::from(count) * idf, term))
        .collect();

    if weighted.is_empty() {
        return weighted;
    }
    let norm = weighted.iter().map(|(w, _)| w * w).sum::<f64>().sqrt();

    weighted
        .into_iter()
        .map(|(w, term)| (w / norm, term))
        .collect()
}

/// Top `top_n` terms. Text without any term yields an empty list.
#[must_use]
pub fn extract_keywords(text: &str, top_n: usize) -> Vec<String> {
    let mut scores = tfidf_scores(text);

    scores.sort_by(|(a_score, a_term), (b_score, b_term)| {
        b_score
            .partial_cmp(a_score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| b_term.cmp(a_term))
    });

    scores
        .into_iter()
        .take(top_n)
        .map(|(_, term)| term)
        .collect()
}
