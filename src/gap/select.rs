// Final topic selection: the widest gap, plus one wildcard.
//
// The first slot always goes to the top of the gap-sorted list. The second
// is drawn at random from the rest so the output doesn't fixate on the same
// two topics every run; the randomness source is injected so tests can pin
// the pick.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::score::ScoredTopic;
use crate::article::{Article, Language};

/// Markers used in a headline sample when one side has no coverage at all.
pub const NO_JAPANESE_COVERAGE: &str = "(no Japanese coverage)";
pub const NO_ENGLISH_COVERAGE: &str = "(no English coverage)";

/// How many member headlines to quote per language.
const SAMPLE_HEADLINES: usize = 3;

/// A selected topic plus the headline samples the generator quotes from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectedTopic {
    pub topic: ScoredTopic,
    /// Up to three member headlines per language as a `- title` list, or
    /// the absence marker when that side has no articles.
    pub japanese_sample: String,
    pub english_sample: String,
}

/// The zero, one, or two topics carried forward to generation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TopicSelection {
    pub first: Option<SelectedTopic>,
    pub second: Option<SelectedTopic>,
}

/// Pick up to two topics from the gap-sorted list.
///
/// An empty selection slot means "nothing worth generating", not a failure;
/// callers skip that slot.
pub fn select_topics<R: Rng>(
    topics: &[ScoredTopic],
    articles: &[Article],
    rng: &mut R,
) -> TopicSelection {
    if topics.is_empty() {
        warn!("No topics to select from");
        return TopicSelection::default();
    }

    let first = &topics[0];
    info!(topic = %first.cluster.name, gap = first.gap_score, "First slot: widest gap");

    // Wildcard pool: every remaining topic with a non-negative gap. Gap
    // scores are never negative, so today this keeps everything; the
    // explicit bar stays so it can be raised without rederiving the
    // selection logic.
    let pool: Vec<&ScoredTopic> = topics[1..].iter().filter(|t| t.gap_score >= 0.0).collect();

    let second: Option<&ScoredTopic> = if !pool.is_empty() {
        let pick = pool[rng.random_range(0..pool.len())];
        info!(topic = %pick.cluster.name, gap = pick.gap_score, "Second slot: random gap pick");
        Some(pick)
    } else {
        // Only reachable with a single-topic list; kept for parity with the
        // pool filter above: fall back to the most covered remaining topic.
        let hottest = topics[1..].iter().max_by_key(|t| t.cluster.total_count());
        match hottest {
            Some(t) => info!(topic = %t.cluster.name, "Second slot: most covered fallback"),
            None => debug!("No second topic available"),
        }
        hottest
    };

    TopicSelection {
        first: Some(with_samples(first, articles)),
        second: second.map(|t| with_samples(t, articles)),
    }
}

fn with_samples(topic: &ScoredTopic, articles: &[Article]) -> SelectedTopic {
    SelectedTopic {
        topic: topic.clone(),
        japanese_sample: headline_sample(topic, articles, Language::Japanese, NO_JAPANESE_COVERAGE),
        english_sample: headline_sample(topic, articles, Language::English, NO_ENGLISH_COVERAGE),
    }
}

/// First few member headlines in one language, as a bullet list.
fn headline_sample(
    topic: &ScoredTopic,
    articles: &[Article],
    language: Language,
    absence_marker: &str,
) -> String {
    let titles: Vec<String> = topic
        .cluster
        .article_indices
        .iter()
        .filter(|&&i| articles[i].language == language)
        .take(SAMPLE_HEADLINES)
        .map(|&i| format!("- {}", articles[i].title))
        .collect();

    if titles.is_empty() {
        absence_marker.to_string()
    } else {
        titles.join("\n")
    }
}
