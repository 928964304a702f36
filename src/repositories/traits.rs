use crate::domain::{ChoiceId, QuestionId};
use crate::error::PollResult;
use crate::models::*;
use async_trait::async_trait;

/// Repository for managing questions.
///
/// Provides abstraction over question storage and retrieval,
/// enabling different implementations (in-memory, mock).
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Store a new question and return it with its assigned ID.
    async fn create(&self, question: NewQuestion) -> PollResult<Question>;

    /// Retrieve a single question by ID, regardless of visibility.
    async fn get(&self, id: QuestionId) -> PollResult<Question>;

    /// Snapshot of every stored question in ID order.
    async fn list(&self) -> PollResult<Vec<Question>>;
}

/// Repository for managing choices.
#[async_trait]
pub trait ChoiceRepository: Send + Sync {
    /// Store a new choice and return it with its assigned ID.
    async fn create(&self, choice: NewChoice) -> PollResult<Choice>;

    /// Choices of one question in ID order.
    async fn list_for_question(&self, question_id: QuestionId) -> PollResult<Vec<Choice>>;

    /// Add one vote to a choice of the given question.
    ///
    /// Fails with `NotFound` if the choice does not exist or belongs to
    /// another question.
    async fn increment_votes(
        &self,
        question_id: QuestionId,
        choice_id: ChoiceId,
    ) -> PollResult<Choice>;
}
