// Thermocline: cross-language coverage gap detection for news topics.
//
// Takes a pool of collected articles in two languages, clusters them into
// candidate topics, scores how lopsided each topic's coverage is between
// the two languages, and picks the topics worth writing about. Collection,
// storage, and article generation live elsewhere; this crate is the
// analysis step in between.

pub mod article;
pub mod gap;
pub mod pipeline;
pub mod topics;
