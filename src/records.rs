use serde::{Deserialize, Serialize};

/// A fetched page: the URL that was requested plus whatever body text the
/// reader produced for it (including literal error text for failed fetches)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRecord {
    /// URL of the page as given in the input list
    pub source_url: String,

    /// Rendered text content returned by the reader
    pub body_text: String,
}

impl PageRecord {
    /// Create a new page record
    pub fn new(source_url: String, body_text: String) -> Self {
        Self {
            source_url,
            body_text,
        }
    }
}

/// A keyword and the URL it should link to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordTarget {
    /// Keyword to look for in page text
    pub keyword: String,

    /// URL the keyword should be linked to
    pub target_url: String,
}

impl KeywordTarget {
    pub fn new(keyword: impl Into<String>, target_url: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            target_url: target_url.into(),
        }
    }
}

/// One reported instance of an unlinked keyword mention: this sentence on
/// this page mentions the keyword but does not link to its target URL.
///
/// The serialized field names (`sentence/paragraph`, `link_text`) are fixed
/// for compatibility with downstream consumers of the report CSV.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub source_url: String,

    #[serde(rename = "sentence/paragraph")]
    pub sentence: String,

    #[serde(rename = "link_text")]
    pub keyword: String,

    pub target_url: String,
}
