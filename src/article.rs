// Article records and the bilingual language tag.
//
// Articles arrive fully prepared from the upstream collector: title and
// source metadata plus an ordered list of lowercase keyword tokens extracted
// by a separate step. This crate never fetches or re-extracts anything.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The two languages the gap analysis compares.
///
/// The system is fundamentally bilingual: every article is either domestic
/// (Japanese) or overseas (English) coverage. Keeping this a two-variant
/// enum makes the language split in the gap formula exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "en")]
    English,
}

/// A collected news article, ready for topic analysis.
///
/// `url`, `source`, and `published_at` are carried through untouched for the
/// downstream generator; the pipeline itself only reads `title`, `language`,
/// and `keywords`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub url: String,
    pub source: String,
    pub language: Language,
    pub published_at: DateTime<Utc>,
    /// Lowercase keyword tokens extracted upstream, in document order.
    pub keywords: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_wire_tags() {
        // The collector tags articles "ja"/"en" on the wire.
        assert_eq!(serde_json::to_string(&Language::Japanese).unwrap(), "\"ja\"");
        assert_eq!(serde_json::to_string(&Language::English).unwrap(), "\"en\"");
        let lang: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(lang, Language::English);
    }
}
