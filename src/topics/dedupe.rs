// Absorbing unigram clusters into stronger bigram phrases.
//
// "Black" and "Hole" say nothing that "Black Hole" doesn't, as long as the
// phrase covers a comparable share of the word's articles. A word with
// independent coverage well beyond the phrase keeps its own cluster.

use tracing::debug;

use super::cluster::{ClusterConfig, TopicCluster};

/// Remove unigram clusters subsumed by a co-occurring bigram cluster.
///
/// Bigram clusters are never removed. A unigram goes when its name matches a
/// whitespace-delimited word of some bigram's name (case-insensitive) and
/// that bigram covers at least `absorption_ratio` of the unigram's articles.
/// Output order: bigrams first, then surviving unigrams; sorting by score
/// happens later.
pub fn dedupe_clusters(clusters: Vec<TopicCluster>, config: &ClusterConfig) -> Vec<TopicCluster> {
    let (bigrams, unigrams): (Vec<TopicCluster>, Vec<TopicCluster>) =
        clusters.into_iter().partition(|c| c.is_multi_word());

    let survivors: Vec<TopicCluster> = unigrams
        .into_iter()
        .filter(|unigram| {
            let word = unigram.name.to_lowercase();
            let absorbed_by = bigrams.iter().find(|bigram| {
                bigram
                    .name
                    .to_lowercase()
                    .split_whitespace()
                    .any(|w| w == word)
                    && bigram.total_count() as f64
                        >= config.absorption_ratio * unigram.total_count() as f64
            });
            if let Some(bigram) = absorbed_by {
                debug!(
                    unigram = %unigram.name,
                    bigram = %bigram.name,
                    "Absorbed into a stronger phrase cluster"
                );
            }
            absorbed_by.is_none()
        })
        .collect();

    bigrams.into_iter().chain(survivors).collect()
}
