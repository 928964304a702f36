//! Question model representing a poll question.

use crate::domain::{self, QuestionId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A poll question.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Question {
    /// Unique identifier assigned by the repository
    pub id: QuestionId,

    /// The text shown to users
    pub question_text: String,

    /// When the question becomes visible (RFC 3339 on the wire)
    pub pub_date: DateTime<Utc>,
}

impl Question {
    /// Create a question with all fields.
    pub fn new(id: QuestionId, question_text: String, pub_date: DateTime<Utc>) -> Self {
        Self {
            id,
            question_text,
            pub_date,
        }
    }

    /// Whether this question was published within the 24 hours ending at `now`.
    pub fn was_published_recently(&self, now: DateTime<Utc>) -> bool {
        domain::was_published_recently(self.pub_date, now)
    }

    /// Whether this question may be shown at `now`.
    pub fn is_visible(&self, now: DateTime<Utc>) -> bool {
        domain::is_visible(self.pub_date, now)
    }
}

/// A question that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
}
