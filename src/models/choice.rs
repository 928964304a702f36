//! Choice model representing an answer option of a question.

use crate::domain::{ChoiceId, QuestionId};
use serde::{Deserialize, Serialize};

/// An answer option with its running vote count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Choice {
    /// Unique identifier assigned by the repository
    pub id: ChoiceId,

    /// The question this choice belongs to
    pub question_id: QuestionId,

    /// The text shown to users
    pub choice_text: String,

    /// Number of votes cast for this choice
    #[serde(default)]
    pub votes: u64,
}

impl Choice {
    /// Create a choice with no votes.
    pub fn new(id: ChoiceId, question_id: QuestionId, choice_text: String) -> Self {
        Self {
            id,
            question_id,
            choice_text,
            votes: 0,
        }
    }
}

/// A choice that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChoice {
    pub question_id: QuestionId,
    pub choice_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_new_starts_without_votes() {
        let choice = Choice::new(
            ChoiceId::new(1).unwrap(),
            QuestionId::new(2).unwrap(),
            "Not much".to_string(),
        );
        assert_eq!(choice.votes, 0);
        assert_eq!(choice.question_id.get(), 2);
    }

    #[test]
    fn test_choice_deserialization_defaults_votes() {
        let json = r#"{"id": 3, "question_id": 1, "choice_text": "The sky"}"#;
        let choice: Choice = serde_json::from_str(json).unwrap();
        assert_eq!(choice.votes, 0);
        assert_eq!(choice.choice_text, "The sky");
    }
}
