//! Publication rules for questions.
//!
//! A question is *visible* once its publication instant is not in the future,
//! and *recently published* while that instant lies within the trailing
//! 24 hours. Every rule takes `now` explicitly so the outcome depends only on
//! its arguments.

use super::ids::QuestionId;
use crate::error::{PollError, PollResult};
use crate::models::Question;
use chrono::{DateTime, Duration, Utc};

/// Width of the "recently published" window.
pub const RECENT_WINDOW_HOURS: i64 = 24;

/// Whether `pub_date` falls in `(now - 24h, now]`.
///
/// # Example
///
/// ```
/// use chrono::{Duration, Utc};
/// use polls_mcp_server::domain::was_published_recently;
///
/// let now = Utc::now();
/// assert!(was_published_recently(now - Duration::hours(1), now));
/// assert!(!was_published_recently(now + Duration::seconds(1), now));
/// ```
pub fn was_published_recently(pub_date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now - Duration::hours(RECENT_WINDOW_HOURS) < pub_date && pub_date <= now
}

/// Whether a question published at `pub_date` may be shown at `now`.
pub fn is_visible(pub_date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    pub_date <= now
}

/// Select the questions visible at `now`, earliest publication first.
///
/// Ties on `pub_date` are ordered by ascending ID.
pub fn list_visible(records: &[Question], now: DateTime<Utc>) -> Vec<&Question> {
    let mut visible: Vec<&Question> = records
        .iter()
        .filter(|q| is_visible(q.pub_date, now))
        .collect();
    visible.sort_by(|a, b| a.pub_date.cmp(&b.pub_date).then(a.id.cmp(&b.id)));
    visible
}

/// Look up a question that is visible at `now`.
///
/// Missing and future-dated questions produce the same `NotFound` error.
pub fn get_visible_or_not_found(
    record_id: QuestionId,
    records: &[Question],
    now: DateTime<Utc>,
) -> PollResult<&Question> {
    records
        .iter()
        .find(|q| q.id == record_id && is_visible(q.pub_date, now))
        .ok_or_else(|| PollError::NotFound(format!("No question matches id {}", record_id)))
}
