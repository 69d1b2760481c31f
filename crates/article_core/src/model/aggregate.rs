//! Derived tag/date aggregation result.

use serde::Serialize;

/// Statistics for one tag across every article published on one date.
///
/// Never persisted; recomputed on every query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagDateAggregate {
    /// Queried tag, echoed back verbatim even when no article carries it.
    pub tag: String,
    /// Total tag occurrences across all articles on the date, including the
    /// queried tag itself.
    pub count: usize,
    /// Up to 10 article ids, sorted descending by string order.
    pub article_ids: Vec<String>,
    /// Distinct co-occurring tags other than `tag`. Order is unspecified.
    pub related_tags: Vec<String>,
}

impl TagDateAggregate {
    /// Result for a date with no articles.
    pub fn empty(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            count: 0,
            article_ids: Vec::new(),
            related_tags: Vec::new(),
        }
    }
}
