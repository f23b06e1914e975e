//! Text analysis and rewriting.
//!
//! Everything here is synchronous and allocation-light; callers hold a
//! [`TextAnalyzer`] by value or behind an `Arc`.

pub mod analyzer;
pub mod humanizer;
pub mod keywords;
pub mod lemmatizer;
pub mod stopwords;
pub mod tagger;
pub mod tokenizer;

pub use analyzer::{TextAnalysis, TextAnalyzer, Tokens};
pub use humanizer::humanize;
pub use keywords::extract_keywords;
