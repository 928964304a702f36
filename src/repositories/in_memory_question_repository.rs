use crate::domain::QuestionId;
use crate::error::{PollError, PollResult};
use crate::models::{NewQuestion, Question};
use crate::repositories::traits::QuestionRepository;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

/// Question repository backed by a process-local map.
///
/// IDs are handed out from 1 upwards and never reused.
pub struct InMemoryQuestionRepository {
    questions: RwLock<BTreeMap<QuestionId, Question>>,
    next_id: AtomicU64,
}

impl InMemoryQuestionRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self {
            questions: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    fn allocate_id(&self) -> PollResult<QuestionId> {
        let raw = self.next_id.fetch_add(1, Ordering::Relaxed);
        Ok(QuestionId::new(raw)?)
    }
}

impl Default for InMemoryQuestionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn create(&self, question: NewQuestion) -> PollResult<Question> {
        let id = self.allocate_id()?;
        let stored = Question::new(id, question.question_text, question.pub_date);

        let mut questions = self.questions.write().unwrap_or_else(|e| e.into_inner());
        questions.insert(id, stored.clone());
        Ok(stored)
    }

    async fn get(&self, id: QuestionId) -> PollResult<Question> {
        let questions = self.questions.read().unwrap_or_else(|e| e.into_inner());
        questions
            .get(&id)
            .cloned()
            .ok_or_else(|| PollError::NotFound(format!("No question matches id {}", id)))
    }

    async fn list(&self) -> PollResult<Vec<Question>> {
        let questions = self.questions.read().unwrap_or_else(|e| e.into_inner());
        Ok(questions.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn new_question(text: &str) -> NewQuestion {
        NewQuestion {
            question_text: text.to_string(),
            pub_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let repo = InMemoryQuestionRepository::new();
        let first = repo.create(new_question("first")).await.unwrap();
        let second = repo.create(new_question("second")).await.unwrap();

        assert_eq!(first.id.get(), 1);
        assert_eq!(second.id.get(), 2);
    }

    #[tokio::test]
    async fn test_get_round_trips_and_reports_missing() {
        let repo = InMemoryQuestionRepository::new();
        let created = repo.create(new_question("What's up?")).await.unwrap();

        assert_eq!(repo.get(created.id).await.unwrap(), created);

        let missing = repo.get(QuestionId::new(99).unwrap()).await;
        assert!(matches!(missing, Err(PollError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_returns_id_order() {
        let repo = InMemoryQuestionRepository::new();
        for text in ["a", "b", "c"] {
            repo.create(new_question(text)).await.unwrap();
        }

        let texts: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|q| q.question_text)
            .collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
    }
}
