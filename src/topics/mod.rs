// Topic clustering — noise filtering, frequency counting, cluster building
// and deduplication.

pub mod cluster;
pub mod dedupe;
pub mod filter;
pub mod frequency;
