// Keyword and bigram frequency aggregation over the article pool.
//
// Counts are distinct-article coverage counts, never raw term frequency: an
// article that repeats a keyword still counts once. Maps keep insertion
// order so downstream ranking ties break the same way on every run.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use tracing::debug;

use super::filter::NoiseFilter;
use crate::article::Article;

/// Minimum distinct articles for a bigram to stay a candidate. Lower than
/// the dynamic unigram bar: two-word phrases are rarer and higher-signal.
pub const BIGRAM_MIN_ARTICLES: usize = 2;

/// One candidate topic token or phrase and the articles that carry it.
#[derive(Debug, Clone)]
pub struct FrequencyEntry {
    /// Display form. Bigrams keep the casing they were first seen with.
    pub name: String,
    /// Indices into the input pool. An article appears at most once no
    /// matter how often it repeats the token.
    pub articles: BTreeSet<usize>,
}

impl FrequencyEntry {
    pub fn count(&self) -> usize {
        self.articles.len()
    }
}

/// The two candidate maps the cluster builder consumes.
pub struct FrequencyMaps {
    pub unigrams: IndexMap<String, FrequencyEntry>,
    pub bigrams: IndexMap<String, FrequencyEntry>,
}

/// Run both counting passes over the pool.
pub fn aggregate(articles: &[Article], filter: &NoiseFilter) -> FrequencyMaps {
    FrequencyMaps {
        unigrams: count_keywords(articles, filter),
        bigrams: count_title_bigrams(articles, filter),
    }
}

/// Unigram pass: one count per keyword per distinct article, noise dropped.
fn count_keywords(articles: &[Article], filter: &NoiseFilter) -> IndexMap<String, FrequencyEntry> {
    let mut map: IndexMap<String, FrequencyEntry> = IndexMap::new();
    let mut excluded: Vec<&str> = Vec::new();

    for (idx, article) in articles.iter().enumerate() {
        for keyword in &article.keywords {
            if filter.is_noise(keyword) {
                excluded.push(keyword);
                continue;
            }
            map.entry(keyword.clone())
                .or_insert_with(|| FrequencyEntry {
                    name: keyword.clone(),
                    articles: BTreeSet::new(),
                })
                .articles
                .insert(idx);
        }
    }

    if !excluded.is_empty() {
        excluded.sort_unstable();
        excluded.dedup();
        let sample = &excluded[..excluded.len().min(15)];
        debug!(dropped = excluded.len(), ?sample, "Dropped noise keywords");
    }

    map
}

/// Tokenize a title for bigram discovery: strip punctuation but keep
/// intra-word apostrophes and hyphens, split on whitespace, and drop
/// single-character tokens.
fn title_tokens(title: &str) -> Vec<String> {
    let cleaned: String = title
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() || c == '\'' || c == '-' {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned
        .split_whitespace()
        .filter(|w| w.chars().count() >= 2)
        .map(str::to_string)
        .collect()
}

/// Bigram pass over article titles.
///
/// Adjacent token pairs only nominate a candidate; membership is then
/// re-verified by case-insensitive substring search against each title.
/// The substring match is intentionally looser than the tokenization that
/// discovered the pair, and it also rejects pairs the tokenizer bridged
/// across a dropped one-character word.
fn count_title_bigrams(
    articles: &[Article],
    filter: &NoiseFilter,
) -> IndexMap<String, FrequencyEntry> {
    // Discovery: adjacent pairs and their raw occurrence counts, keyed
    // case-insensitively so casing variants collapse into one candidate.
    let mut discovered: IndexMap<String, (String, usize)> = IndexMap::new();
    for article in articles {
        let words = title_tokens(&article.title);
        for pair in words.windows(2) {
            let display = format!("{} {}", pair[0], pair[1]);
            let lower = display.to_lowercase();
            let entry = discovered.entry(lower).or_insert((display, 0));
            entry.1 += 1;
        }
    }

    let mut map: IndexMap<String, FrequencyEntry> = IndexMap::new();
    for (lower, (display, occurrences)) in discovered {
        if occurrences < BIGRAM_MIN_ARTICLES {
            continue;
        }
        if filter.is_noise_phrase(&lower) {
            continue;
        }

        let members: BTreeSet<usize> = articles
            .iter()
            .enumerate()
            .filter(|(_, a)| a.title.to_lowercase().contains(&lower))
            .map(|(i, _)| i)
            .collect();

        if members.len() >= BIGRAM_MIN_ARTICLES {
            map.insert(
                lower,
                FrequencyEntry {
                    name: display,
                    articles: members,
                },
            );
        }
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::Language;
    use chrono::Utc;

    fn article(title: &str, keywords: &[&str]) -> Article {
        Article {
            title: title.to_string(),
            url: format!("https://example.com/{}", title.len()),
            source: "test".to_string(),
            language: Language::English,
            published_at: Utc::now(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    #[test]
    fn repeated_keyword_counts_once_per_article() {
        let filter = NoiseFilter::new();
        let pool = vec![
            article("First piece", &["rocket", "rocket"]),
            article("Second piece", &["rocket"]),
        ];
        let maps = aggregate(&pool, &filter);
        assert_eq!(maps.unigrams["rocket"].count(), 2);
    }

    #[test]
    fn noise_keywords_never_enter_the_map() {
        let filter = NoiseFilter::new();
        let pool = vec![article("Quiet day", &["the", "and", "qz"])];
        let maps = aggregate(&pool, &filter);
        assert!(maps.unigrams.is_empty());
    }

    #[test]
    fn bigram_needs_two_distinct_articles() {
        let filter = NoiseFilter::new();
        let pool = vec![
            article("Astronomers Spot Black Hole", &[]),
            article("Black Hole Devours Star", &[]),
            article("Quiet Markets Today", &[]),
        ];
        let maps = aggregate(&pool, &filter);
        assert_eq!(maps.bigrams["black hole"].count(), 2);
        // Pairs unique to one title never become candidates.
        assert!(!maps.bigrams.contains_key("devours star"));
    }

    #[test]
    fn bigram_membership_is_substring_based() {
        let filter = NoiseFilter::new();
        let pool = vec![
            article("Astronomers Spot Black Hole", &[]),
            article("Black Hole Devours Star", &[]),
            // Tokenization keeps "pitch-black" as one word, so no adjacent
            // pair nominates this title; the substring match still counts
            // it as a member.
            article("Pitch-black holes everywhere", &[]),
        ];
        let maps = aggregate(&pool, &filter);
        assert_eq!(maps.bigrams["black hole"].count(), 3);
    }

    #[test]
    fn tokenizer_bridged_pairs_fail_the_substring_check() {
        let filter = NoiseFilter::new();
        // "a" is dropped by tokenization, so the pair "Inside Black" forms
        // twice, but neither title contains it literally.
        let pool = vec![
            article("Inside a Black Hole", &[]),
            article("Inside a Black Chamber", &[]),
        ];
        let maps = aggregate(&pool, &filter);
        assert!(!maps.bigrams.contains_key("inside black"));
    }

    #[test]
    fn stop_phrases_never_become_candidates() {
        let filter = NoiseFilter::new();
        let pool = vec![
            article("Prices Up To Record Levels", &[]),
            article("Savings Up To Half Off", &[]),
        ];
        let maps = aggregate(&pool, &filter);
        assert!(!maps.bigrams.contains_key("up to"));
    }

    #[test]
    fn bigram_casing_variants_collapse() {
        let filter = NoiseFilter::new();
        let pool = vec![
            article("Black Hole Imaged Again", &[]),
            article("The black hole nobody expected", &[]),
        ];
        let maps = aggregate(&pool, &filter);
        assert_eq!(maps.bigrams.len(), 1);
        // First-seen casing is the display form.
        assert_eq!(maps.bigrams["black hole"].name, "Black Hole");
    }
}
