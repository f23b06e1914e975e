use serde::Serialize;

use super::{humanizer, keywords, lemmatizer, stopwords, tagger, tokenizer};

/// Keywords reported by [`TextAnalyzer::analyze`].
pub const ANALYSIS_KEYWORDS: usize = 5;

/// Keywords joined into a search query.
pub const SEARCH_QUERY_KEYWORDS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tokens {
    /// Lemmatized content words, stop-words and punctuation removed.
    pub words: Vec<String>,
    pub sentences: Vec<String>,
    pub original_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextAnalysis {
    pub keywords: Vec<String>,
    pub pos_tags: Vec<(String, String)>,
    pub tokens: Tokens,
    pub sentence_count: usize,
}

/// Stateless front for the `nlp` helpers, built once and shared.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextAnalyzer;

impl TextAnalyzer {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn tokenize(&self, text: &str) -> Tokens {
        let words = tokenizer::words(text)
            .into_iter()
            .filter(|w| tokenizer::is_alphanumeric(w) && !stopwords::is_stopword(w))
            .map(|w| lemmatizer::lemmatize(&w))
            .collect();

        Tokens {
            words,
            sentences: tokenizer::sentences(text),
            original_text: text.to_string(),
        }
    }

    #[must_use]
    pub fn extract_keywords(&self, text: &str, top_n: usize) -> Vec<String> {
        keywords::extract_keywords(text, top_n)
    }

    #[must_use]
    pub fn analyze(&self, text: &str) -> TextAnalysis {
        let tokens = self.tokenize(text);
        let keywords = self.extract_keywords(text, ANALYSIS_KEYWORDS);
        let pos_tags = tagger::pos_tag(&tokens.words);
        let sentence_count = tokens.sentences.len();

        TextAnalysis {
            keywords,
            pos_tags,
            tokens,
            sentence_count,
        }
    }

    /// Top keywords in score order; the original word order is not kept.
    #[must_use]
    pub fn format_search_query(&self, text: &str) -> String {
        self.extract_keywords(text, SEARCH_QUERY_KEYWORDS).join(" ")
    }

    #[must_use]
    pub fn humanize(&self, text: &str) -> String {
        humanizer::humanize(text)
    }
}
