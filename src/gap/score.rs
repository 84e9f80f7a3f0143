// Gap scoring: how asymmetrically a topic is covered across languages.
//
//   gap = |japanese - english| / total
//
// 0.0 means both sides cover the topic equally; 1.0 means only one side
// covers it at all. Scores are rounded to two decimals at construction so
// downstream display and storage see a stable precision.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::topics::cluster::TopicCluster;

/// A topic cluster annotated with its coverage-gap score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredTopic {
    pub cluster: TopicCluster,
    /// Normalized coverage asymmetry in [0, 1], rounded to 2 decimals.
    pub gap_score: f64,
}

/// The gap formula. A zero-member cluster scores 0.0.
pub fn gap_score(japanese: usize, english: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = (japanese as f64 - english as f64).abs() / total as f64;
    (raw * 100.0).round() / 100.0
}

/// Score every cluster and sort the list for selection.
///
/// Highest gap first; total coverage breaks ties so equal scores still
/// order deterministically.
pub fn score_clusters(clusters: Vec<TopicCluster>) -> Vec<ScoredTopic> {
    info!(clusters = clusters.len(), "Scoring coverage gaps");

    let mut topics: Vec<ScoredTopic> = clusters
        .into_iter()
        .map(|cluster| {
            let gap_score = gap_score(
                cluster.japanese_count,
                cluster.english_count,
                cluster.total_count(),
            );
            ScoredTopic { cluster, gap_score }
        })
        .collect();

    topics.sort_by(|a, b| {
        b.gap_score
            .partial_cmp(&a.gap_score)
            .unwrap_or(Ordering::Equal)
            .then(b.cluster.total_count().cmp(&a.cluster.total_count()))
    });

    for topic in topics.iter().take(5) {
        debug!(
            topic = %topic.cluster.name,
            gap = topic.gap_score,
            japanese = topic.cluster.japanese_count,
            english = topic.cluster.english_count,
            "Scored topic"
        );
    }

    topics
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn cluster(name: &str, japanese: usize, english: usize) -> TopicCluster {
        let members: BTreeSet<usize> = (0..japanese + english).collect();
        TopicCluster {
            name: name.to_string(),
            article_indices: members,
            japanese_count: japanese,
            english_count: english,
        }
    }

    #[test]
    fn one_sided_coverage_scores_one() {
        assert_eq!(gap_score(3, 0, 3), 1.0);
        assert_eq!(gap_score(0, 7, 7), 1.0);
    }

    #[test]
    fn balanced_coverage_scores_zero() {
        assert_eq!(gap_score(2, 2, 4), 0.0);
    }

    #[test]
    fn empty_cluster_scores_zero() {
        assert_eq!(gap_score(0, 0, 0), 0.0);
    }

    #[test]
    fn scores_round_to_two_decimals() {
        // |2 - 1| / 3 = 0.333... -> 0.33
        assert_eq!(gap_score(2, 1, 3), 0.33);
        // |5 - 1| / 6 = 0.666... -> 0.67
        assert_eq!(gap_score(5, 1, 6), 0.67);
    }

    #[test]
    fn sorted_by_gap_then_coverage() {
        let topics = score_clusters(vec![
            cluster("balanced", 3, 3),
            cluster("one-sided small", 2, 0),
            cluster("lopsided", 4, 1),
            cluster("one-sided big", 5, 0),
        ]);
        let names: Vec<&str> = topics.iter().map(|t| t.cluster.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["one-sided big", "one-sided small", "lopsided", "balanced"]
        );
    }

    #[test]
    fn scores_stay_in_range() {
        for ja in 0..6 {
            for en in 0..6 {
                let s = gap_score(ja, en, ja + en);
                assert!((0.0..=1.0).contains(&s), "gap_score({ja}, {en}) = {s}");
            }
        }
    }
}
