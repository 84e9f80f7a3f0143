// Stopword and noise filtering for topic candidates.
//
// Combines the Stopwords-ISO lists for both tracked languages with a curated
// news-register list: words like "report" or "latest" clear generic stopword
// lists but never make a useful topic on their own. Single tokens and
// two-word phrases are filtered by different rules — "out of" has to be
// rejected as a phrase even though neither word alone is length-disqualified.

use std::collections::HashSet;

use stop_words::{get, LANGUAGE};

/// English words common in headlines that carry no topical signal.
static NEWS_REGISTER_WORDS: &[&str] = &[
    "news", "report", "reports", "reported", "according", "update", "latest",
    "top", "best", "worst", "year", "years", "day", "days", "time", "week",
    "month", "people", "world", "part", "good", "right", "left", "light",
    "life", "work", "home", "help", "big", "old", "long", "high",
];

/// Japanese particles, light verbs, and demonstratives the keyword extractor
/// occasionally lets through.
static JAPANESE_FUNCTION_WORDS: &[&str] = &[
    "の", "に", "を", "は", "が", "で", "と", "から", "まで", "や", "も",
    "こと", "もの", "ため", "する", "ある", "なる", "いる", "れる", "できる",
    "その", "この", "それ", "これ", "あの", "どの", "ない", "よう", "など",
];

/// Two-word phrases that pass the per-word checks but mean nothing as topics.
static STOP_PHRASES: &[&str] = &[
    "up to", "out of", "as well", "so far", "at least", "no longer",
    "such as", "due to", "in order", "each other", "even though",
    "go to", "come back", "look like", "turn out", "find out",
];

/// Classifies tokens and phrases as noise vs. topic candidates.
///
/// Built once per pipeline run; the sets are immutable after construction
/// so the filter can be shared freely.
pub struct NoiseFilter {
    stop_words: HashSet<String>,
    stop_phrases: HashSet<&'static str>,
}

impl NoiseFilter {
    pub fn new() -> Self {
        let mut stop_words: HashSet<String> = HashSet::new();

        for word in get(LANGUAGE::English) {
            stop_words.insert(word.to_lowercase());
        }
        for word in get(LANGUAGE::Japanese) {
            stop_words.insert(word);
        }
        for word in NEWS_REGISTER_WORDS.iter().chain(JAPANESE_FUNCTION_WORDS) {
            stop_words.insert((*word).to_string());
        }

        Self {
            stop_words,
            stop_phrases: STOP_PHRASES.iter().copied().collect(),
        }
    }

    /// Case-insensitive stopword lookup.
    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(&token.to_lowercase())
    }

    /// A token is noise when it is a stopword or a 1-2 character ASCII word.
    pub fn is_noise(&self, token: &str) -> bool {
        if self.is_stop_word(token) {
            return true;
        }
        let len = token.chars().count();
        (1..=2).contains(&len) && token.chars().all(|c| c.is_ascii_alphabetic())
    }

    /// Phrase-level check for bigram candidates: a fixed stop-phrase list,
    /// plus any pair whose words are both noise on their own.
    pub fn is_noise_phrase(&self, phrase: &str) -> bool {
        let lower = phrase.to_lowercase();
        if self.stop_phrases.contains(lower.as_str()) {
            return true;
        }
        lower.split_whitespace().all(|w| self.is_noise(w))
    }
}

impl Default for NoiseFilter {
    fn default() -> Self {
        Self::new()
    }
}
