//! Tag/date aggregation engine.
//!
//! # Responsibility
//! - Compute tag statistics over the articles published on one date.
//!
//! # Invariants
//! - `count` is the total number of tag occurrences across the input
//!   articles, not the number of matches for the queried tag.
//! - `related_tags` never contains the queried tag (case-sensitive compare)
//!   and holds each other tag once.
//! - `article_ids` is sorted descending by string order and holds at most
//!   `MAX_AGGREGATE_ARTICLE_IDS` entries.

use crate::model::aggregate::TagDateAggregate;
use crate::model::article::Article;
use std::collections::HashSet;

/// Maximum number of article ids returned by one aggregate.
pub const MAX_AGGREGATE_ARTICLE_IDS: usize = 10;

/// Aggregates `articles` (all assumed to share one date) for `tag_name`.
///
/// Ids are ordered as a proxy for recency: a greater id is assumed to be a
/// later submission. This only holds for zero-padded or otherwise
/// lexicographically monotonic ids; nothing enforces it.
pub fn aggregate_tag_by_date(tag_name: &str, articles: &[Article]) -> TagDateAggregate {
    let mut related: HashSet<&str> = HashSet::new();
    let mut count = 0usize;
    let mut article_ids: Vec<&str> = Vec::with_capacity(articles.len());

    for article in articles {
        for tag in &article.tags {
            if tag != tag_name {
                related.insert(tag.as_str());
            }
        }
        count += article.tags.len();
        article_ids.push(article.id.as_str());
    }

    article_ids.sort_unstable_by(|a, b| b.cmp(a));
    article_ids.truncate(MAX_AGGREGATE_ARTICLE_IDS);

    TagDateAggregate {
        tag: tag_name.to_string(),
        count,
        article_ids: article_ids.into_iter().map(str::to_string).collect(),
        related_tags: related.into_iter().map(str::to_string).collect(),
    }
}
