// Pipeline façade: articles in, gap-ranked topics and a final pick out.
//
// One invocation is one batch: all maps and clusters are allocated fresh,
// nothing is shared between runs, and the whole pass is synchronous.

use anyhow::Result;
use rand::Rng;
use tracing::info;

use crate::article::{Article, Language};
use crate::gap::score::{self, ScoredTopic};
use crate::gap::select::{self, TopicSelection};
use crate::topics::cluster::{self, ClusterConfig};
use crate::topics::dedupe;
use crate::topics::filter::NoiseFilter;
use crate::topics::frequency;

/// Cluster the pool and return every topic, gap-sorted, using default
/// thresholds.
pub fn extract_topics(articles: &[Article]) -> Result<Vec<ScoredTopic>> {
    extract_topics_with(articles, &NoiseFilter::new(), &ClusterConfig::default())
}

/// Cluster the pool with a caller-supplied filter and thresholds.
pub fn extract_topics_with(
    articles: &[Article],
    filter: &NoiseFilter,
    config: &ClusterConfig,
) -> Result<Vec<ScoredTopic>> {
    check_input(articles)?;

    let japanese = articles
        .iter()
        .filter(|a| a.language == Language::Japanese)
        .count();
    info!(
        total = articles.len(),
        japanese,
        english = articles.len() - japanese,
        "Extracting topics"
    );

    let freq = frequency::aggregate(articles, filter);
    let clusters = cluster::build_clusters(articles, &freq, config);
    let clusters = dedupe::dedupe_clusters(clusters, config);
    let clusters = clusters
        .into_iter()
        .map(|mut c| {
            c.name = cluster::refine_name(&c.name);
            c
        })
        .collect();

    Ok(score::score_clusters(clusters))
}

/// Full batch run: extract, score, and select up to two topics.
///
/// The random source drives only the second-topic pick; seed it for
/// reproducible output.
pub fn run<R: Rng>(articles: &[Article], rng: &mut R) -> Result<TopicSelection> {
    let topics = extract_topics(articles)?;
    Ok(select::select_topics(&topics, articles, rng))
}

/// Fail fast on upstream contract violations rather than miscounting:
/// keywords must arrive lowercased or unigram dedup silently splits
/// ("Tokyo" and "tokyo" would count as different topics).
fn check_input(articles: &[Article]) -> Result<()> {
    for article in articles {
        if let Some(keyword) = article
            .keywords
            .iter()
            .find(|k| k.chars().any(|c| c.is_ascii_uppercase()))
        {
            anyhow::bail!(
                "article '{}' carries non-lowercase keyword '{}'; \
                 the upstream extractor must lowercase keywords",
                article.title,
                keyword
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn article(title: &str, language: Language, keywords: &[&str]) -> Article {
        Article {
            title: title.to_string(),
            url: "https://example.com/a".to_string(),
            source: "test".to_string(),
            language,
            published_at: Utc::now(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    #[test]
    fn uppercase_keywords_are_rejected() {
        let pool = vec![article("Broken feed", Language::English, &["Tokyo"])];
        let err = extract_topics(&pool).unwrap_err();
        assert!(err.to_string().contains("non-lowercase"));
    }

    #[test]
    fn japanese_keywords_pass_the_contract_check() {
        let pool = vec![
            article("日銀が利上げを検討", Language::Japanese, &["日銀"]),
            article("日銀の決定会合", Language::Japanese, &["日銀"]),
        ];
        let topics = extract_topics(&pool).unwrap();
        assert_eq!(topics[0].cluster.name, "日銀");
    }

    #[test]
    fn empty_pool_yields_no_topics() {
        let mut rng = StdRng::seed_from_u64(1);
        let selection = run(&[], &mut rng).unwrap();
        assert!(selection.first.is_none());
        assert!(selection.second.is_none());
    }
}
