use serde::{Deserialize, Serialize};

/// Which provider produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchSource {
    Google,
    DuckDuckGo,
}

impl SearchSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::DuckDuckGo => "duckduckgo",
        }
    }
}

impl std::fmt::Display for SearchSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,

    pub link: String,

    pub snippet: String,

    pub source: SearchSource,
}

/// Citation attached to a chat answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLink {
    pub title: String,
    pub link: String,
}

impl From<&SearchResult> for SourceLink {
    fn from(result: &SearchResult) -> Self {
        Self {
            title: result.title.clone(),
            link: result.link.clone(),
        }
    }
}
