// Cluster building: significance thresholds, proper-noun ranking, and the
// sparse-data fallback ladder.
//
// Every surviving keyword or phrase becomes one named cluster over the
// articles that carry it. When nothing clears the bars, the whole pool is
// folded into a single catch-all topic rather than producing nothing.

use std::cmp::Reverse;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::frequency::{FrequencyEntry, FrequencyMaps};
use crate::article::{Article, Language};

/// Tunable knobs for cluster building and deduplication.
pub struct ClusterConfig {
    /// Ranking bonus for likely proper nouns and multi-word names (default 2).
    pub proper_noun_bonus: usize,
    /// A unigram cluster is absorbed when a containing bigram cluster covers
    /// at least this fraction of its articles (default 0.5).
    pub absorption_ratio: f64,
    /// Name given to the catch-all cluster when nothing clears the bars.
    pub fallback_name: String,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            proper_noun_bonus: 2,
            absorption_ratio: 0.5,
            fallback_name: "Latest News".to_string(),
        }
    }
}

/// A named topic cluster over part of the article pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicCluster {
    /// A single keyword, or a two-word phrase joined by a space.
    pub name: String,
    /// Member indices into the input pool.
    pub article_indices: BTreeSet<usize>,
    pub japanese_count: usize,
    pub english_count: usize,
}

impl TopicCluster {
    /// Build a cluster from a member set, splitting counts by language.
    pub fn from_members(name: String, members: BTreeSet<usize>, articles: &[Article]) -> Self {
        let japanese_count = members
            .iter()
            .filter(|&&i| articles[i].language == Language::Japanese)
            .count();
        let english_count = members.len() - japanese_count;
        Self {
            name,
            article_indices: members,
            japanese_count,
            english_count,
        }
    }

    pub fn total_count(&self) -> usize {
        self.article_indices.len()
    }

    pub fn is_multi_word(&self) -> bool {
        self.name.contains(' ')
    }
}

/// Dynamic significance threshold: larger pools demand broader coverage
/// before a single keyword counts as a topic.
pub fn min_articles_for_pool(pool_size: usize) -> usize {
    if pool_size > 100 {
        5
    } else if pool_size > 50 {
        3
    } else {
        2
    }
}

/// All-caps tokens (acronyms, and caseless scripts where uppercasing is the
/// identity) and Capitalized words rank as likely proper nouns.
pub fn is_likely_proper_noun(word: &str) -> bool {
    let mut chars = word.chars();
    let (Some(first), Some(second)) = (chars.next(), chars.next()) else {
        return false;
    };
    word == word.to_uppercase() || (first.is_uppercase() && second.is_lowercase())
}

/// Coverage count plus the proper-noun/multi-word bonus.
fn ranking_score(entry: &FrequencyEntry, config: &ClusterConfig) -> usize {
    let bonus = if is_likely_proper_noun(&entry.name) || entry.name.contains(' ') {
        config.proper_noun_bonus
    } else {
        0
    };
    entry.count() + bonus
}

/// Turn the frequency maps into ranked topic clusters.
///
/// Bigram candidates already passed their own bar during aggregation and are
/// always kept. Unigrams must clear the pool-size threshold; if nothing does,
/// the bar drops to 2 shared articles, and failing that the whole pool
/// becomes one catch-all cluster. An empty pool yields no clusters at all.
pub fn build_clusters(
    articles: &[Article],
    freq: &FrequencyMaps,
    config: &ClusterConfig,
) -> Vec<TopicCluster> {
    let min_articles = min_articles_for_pool(articles.len());

    let mut candidates: Vec<&FrequencyEntry> = freq.bigrams.values().collect();
    candidates.extend(freq.unigrams.values().filter(|e| e.count() >= min_articles));

    if candidates.is_empty() {
        candidates = freq
            .bigrams
            .values()
            .chain(freq.unigrams.values())
            .filter(|e| e.count() >= 2)
            .collect();
        if !candidates.is_empty() {
            info!(
                candidates = candidates.len(),
                min_articles, "Nothing cleared the dynamic threshold, lowered the bar to 2 articles"
            );
        }
    }

    if candidates.is_empty() {
        if articles.is_empty() {
            return Vec::new();
        }
        warn!("No shared keywords at all, folding the whole pool into one catch-all topic");
        let members: BTreeSet<usize> = (0..articles.len()).collect();
        return vec![TopicCluster::from_members(
            config.fallback_name.clone(),
            members,
            articles,
        )];
    }

    // Stable sort: equal scores keep map insertion order, bigrams ahead of
    // unigrams.
    candidates.sort_by_key(|e| Reverse(ranking_score(e, config)));

    let clusters: Vec<TopicCluster> = candidates
        .into_iter()
        .map(|e| TopicCluster::from_members(e.name.clone(), e.articles.clone(), articles))
        .collect();

    info!(
        clusters = clusters.len(),
        min_articles,
        top = clusters.first().map(|c| c.name.as_str()).unwrap_or(""),
        "Built topic clusters"
    );

    clusters
}

/// Display-capitalize a topic name: first letter of each word uppercased,
/// short all-caps tokens (acronyms like AI, NASA) kept verbatim, caseless
/// scripts unchanged.
pub fn refine_name(name: &str) -> String {
    name.split(' ')
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_word(word: &str) -> String {
    if word.chars().count() <= 4 && word == word.to_uppercase() {
        return word.to_string();
    }
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
