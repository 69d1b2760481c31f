//! Wire request/response shapes and request validation.
//!
//! # Responsibility
//! - Decode create requests and check field presence.
//! - Check and normalize date inputs before they reach the service.
//!
//! # Invariants
//! - Creation dates only need to contain a `dddd-dd-dd` run somewhere; the
//!   pattern is not anchored.
//! - Route dates are exactly 8 bytes and become `YYYY-MM-DD` by positional
//!   slicing; characters are not checked to be digits.

use crate::error::ApiError;
use article_core::{CreateArticleInput, TagDateAggregate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const MISSING_VALUES_MESSAGE: &str = "missing values in request body";
pub const INVALID_DATE_MESSAGE: &str = "invalid date format";
pub const INVALID_BODY_MESSAGE: &str = "invalid request body";

static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{4}-\d{2}-\d{2}").expect("valid date regex"));

/// Create request body. Every field is required.
///
/// Fields are optional at the decode step so that a missing field is
/// reported as a validation failure rather than a decode failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreateArticleRequest {
    pub id: Option<String>,
    pub title: Option<String>,
    pub date: Option<String>,
    pub body: Option<String>,
    /// `[]` is accepted; missing or `null` is not.
    pub tags: Option<Vec<String>>,
}

impl CreateArticleRequest {
    /// Checks presence and date shape, then builds the service input.
    pub fn into_input(self) -> Result<CreateArticleInput, ApiError> {
        let (Some(id), Some(title), Some(date), Some(body), Some(tags)) =
            (self.id, self.title, self.date, self.body, self.tags)
        else {
            return Err(ApiError::invalid_argument(MISSING_VALUES_MESSAGE));
        };

        if [&id, &title, &date, &body].iter().any(|value| value.is_empty()) {
            return Err(ApiError::invalid_argument(MISSING_VALUES_MESSAGE));
        }

        if !valid_date(&date) {
            return Err(ApiError::invalid_argument(INVALID_DATE_MESSAGE));
        }

        Ok(CreateArticleInput {
            id,
            title,
            date,
            body,
            tags,
        })
    }
}

/// Aggregate response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticlesByTagAndDateResponse {
    pub tag: String,
    pub count: usize,
    #[serde(rename = "articles")]
    pub article_ids: Vec<String>,
    pub related_tags: Vec<String>,
}

impl From<TagDateAggregate> for ArticlesByTagAndDateResponse {
    fn from(value: TagDateAggregate) -> Self {
        Self {
            tag: value.tag,
            count: value.count,
            article_ids: value.article_ids,
            related_tags: value.related_tags,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Returns whether `date` contains a `dddd-dd-dd` run.
pub fn valid_date(date: &str) -> bool {
    DATE_RE.is_match(date)
}

/// Converts an 8-byte route date (`YYYYMMDD`) to `YYYY-MM-DD`.
///
/// Returns `None` when `date` is not exactly 8 bytes long. Each character is
/// placed by the byte offset it starts at (0-3 year, 4-5 month, 6-7 day), so
/// a multi-byte character never gets split.
pub fn to_hyphenated_date(date: &str) -> Option<String> {
    if date.len() != 8 {
        return None;
    }

    let mut year = String::with_capacity(4);
    let mut month = String::with_capacity(2);
    let mut day = String::with_capacity(2);
    for (offset, ch) in date.char_indices() {
        match offset {
            0..=3 => year.push(ch),
            4..=5 => month.push(ch),
            _ => day.push(ch),
        }
    }
    Some(format!("{year}-{month}-{day}"))
}
