use async_trait::async_trait;
use polls_mcp_server::domain::QuestionId;
use polls_mcp_server::error::{PollError, PollResult};
use polls_mcp_server::models::{NewQuestion, Question};
use polls_mcp_server::repositories::QuestionRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock question repository for testing.
///
/// Questions can be inserted with explicit IDs, and every trait call is counted.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockQuestionRepository {
    questions: Arc<Mutex<HashMap<QuestionId, Question>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockQuestionRepository {
    pub fn new() -> Self {
        Self {
            questions: Arc::new(Mutex::new(HashMap::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn add_question(&self, question: Question) {
        let mut questions = self.questions.lock().unwrap();
        questions.insert(question.id, question);
    }

    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    pub fn reset_call_counts(&self) {
        let mut counts = self.call_counts.lock().unwrap();
        counts.clear();
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockQuestionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuestionRepository for MockQuestionRepository {
    async fn create(&self, question: NewQuestion) -> PollResult<Question> {
        self.track_call("create");

        let mut questions = self.questions.lock().unwrap();
        let next = questions.keys().map(|id| id.get()).max().unwrap_or(0) + 1;
        let stored = Question::new(
            QuestionId::new(next)?,
            question.question_text,
            question.pub_date,
        );
        questions.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn get(&self, id: QuestionId) -> PollResult<Question> {
        self.track_call("get");

        let questions = self.questions.lock().unwrap();
        questions
            .get(&id)
            .cloned()
            .ok_or_else(|| PollError::NotFound(format!("Question {} not found", id)))
    }

    async fn list(&self) -> PollResult<Vec<Question>> {
        self.track_call("list");

        // HashMap order is arbitrary; callers must not rely on it.
        let questions = self.questions.lock().unwrap();
        Ok(questions.values().cloned().collect())
    }
}
