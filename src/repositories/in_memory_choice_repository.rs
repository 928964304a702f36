use crate::domain::{ChoiceId, QuestionId};
use crate::error::{PollError, PollResult};
use crate::models::{Choice, NewChoice};
use crate::repositories::traits::ChoiceRepository;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

/// Choice repository backed by a process-local map.
pub struct InMemoryChoiceRepository {
    choices: RwLock<BTreeMap<ChoiceId, Choice>>,
    next_id: AtomicU64,
}

impl InMemoryChoiceRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self {
            choices: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
        }
    }
}

impl Default for InMemoryChoiceRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChoiceRepository for InMemoryChoiceRepository {
    async fn create(&self, choice: NewChoice) -> PollResult<Choice> {
        let id = ChoiceId::new(self.next_id.fetch_add(1, Ordering::Relaxed))?;
        let stored = Choice::new(id, choice.question_id, choice.choice_text);

        let mut choices = self.choices.write().unwrap_or_else(|e| e.into_inner());
        choices.insert(id, stored.clone());
        Ok(stored)
    }

    async fn list_for_question(&self, question_id: QuestionId) -> PollResult<Vec<Choice>> {
        let choices = self.choices.read().unwrap_or_else(|e| e.into_inner());
        Ok(choices
            .values()
            .filter(|c| c.question_id == question_id)
            .cloned()
            .collect())
    }

    async fn increment_votes(
        &self,
        question_id: QuestionId,
        choice_id: ChoiceId,
    ) -> PollResult<Choice> {
        let mut choices = self.choices.write().unwrap_or_else(|e| e.into_inner());
        match choices.get_mut(&choice_id) {
            Some(choice) if choice.question_id == question_id => {
                choice.votes += 1;
                Ok(choice.clone())
            }
            _ => Err(PollError::NotFound(format!(
                "Choice {} not found for question {}",
                choice_id, question_id
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn qid(id: u64) -> QuestionId {
        QuestionId::new(id).unwrap()
    }

    async fn seeded() -> InMemoryChoiceRepository {
        let repo = InMemoryChoiceRepository::new();
        for (question, text) in [(1, "Not much"), (1, "The sky"), (2, "Red")] {
            repo.create(NewChoice {
                question_id: qid(question),
                choice_text: text.to_string(),
            })
            .await
            .unwrap();
        }
        repo
    }

    #[tokio::test]
    async fn test_list_for_question_filters_by_owner() {
        let repo = seeded().await;
        let choices = repo.list_for_question(qid(1)).await.unwrap();
        let texts: Vec<&str> = choices.iter().map(|c| c.choice_text.as_str()).collect();
        assert_eq!(texts, vec!["Not much", "The sky"]);

        assert!(repo.list_for_question(qid(3)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_increment_votes_counts_one_choice() {
        let repo = seeded().await;
        let sky = ChoiceId::new(2).unwrap();

        repo.increment_votes(qid(1), sky).await.unwrap();
        let updated = repo.increment_votes(qid(1), sky).await.unwrap();
        assert_eq!(updated.votes, 2);

        let others = repo.list_for_question(qid(1)).await.unwrap();
        assert_eq!(others[0].votes, 0);
    }

    #[tokio::test]
    async fn test_increment_votes_rejects_foreign_choice() {
        let repo = seeded().await;
        let red = ChoiceId::new(3).unwrap();

        let result = repo.increment_votes(qid(1), red).await;
        assert!(matches!(result, Err(PollError::NotFound(_))));
        assert_eq!(repo.list_for_question(qid(2)).await.unwrap()[0].votes, 0);
    }
}
