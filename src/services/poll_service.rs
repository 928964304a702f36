//! Poll service layer.
//!
//! Business logic for creating questions and serving the index, detail,
//! results and vote operations. "Now" is read from the injected clock once per
//! operation.

use crate::clock::Clock;
use crate::domain::{self, validate_text, ChoiceId, QuestionId};
use crate::error::{PollError, PollResult};
use crate::models::{Choice, NewChoice, NewQuestion, Question};
use crate::observability::{MetricsTracker, Timer};
use crate::repositories::{ChoiceRepository, QuestionRepository};
use crate::views::{DetailPage, IndexPage, ResultsPage};
use async_trait::async_trait;
use chrono::Duration;
use std::sync::Arc;

/// Message returned when a vote names a choice outside the question.
pub const NO_CHOICE_SELECTED: &str = "You didn't select a choice.";

/// Poll service trait for business operations.
#[async_trait]
pub trait PollService: Send + Sync {
    /// Create a question published `days_offset` days from now (negative for the past).
    async fn create_question(&self, question_text: String, days_offset: i64)
        -> PollResult<Question>;

    /// Attach a choice to an existing question.
    async fn add_choice(&self, question_id: QuestionId, choice_text: String)
        -> PollResult<Choice>;

    /// All questions visible now, earliest first.
    async fn index(&self) -> PollResult<IndexPage>;

    /// A visible question with its choices.
    async fn detail(&self, question_id: QuestionId) -> PollResult<DetailPage>;

    /// Vote tallies of a visible question.
    async fn results(&self, question_id: QuestionId) -> PollResult<ResultsPage>;

    /// Record one vote and return the updated tallies.
    async fn vote(&self, question_id: QuestionId, choice_id: ChoiceId)
        -> PollResult<ResultsPage>;
}

/// Default implementation of PollService.
pub struct PollServiceImpl {
    questions: Arc<dyn QuestionRepository>,
    choices: Arc<dyn ChoiceRepository>,
    clock: Arc<dyn Clock>,
    metrics: MetricsTracker,
    max_text_length: usize,
}

impl PollServiceImpl {
    /// Create a new poll service.
    pub fn new(
        questions: Arc<dyn QuestionRepository>,
        choices: Arc<dyn ChoiceRepository>,
        clock: Arc<dyn Clock>,
        metrics: MetricsTracker,
        max_text_length: usize,
    ) -> Self {
        Self {
            questions,
            choices,
            clock,
            metrics,
            max_text_length,
        }
    }

    /// Resolve a question visible at the clock's current instant.
    async fn visible_question(&self, question_id: QuestionId) -> PollResult<Question> {
        let now = self.clock.now();
        let snapshot = self.questions.list().await?;
        domain::get_visible_or_not_found(question_id, &snapshot, now).cloned()
    }

    /// Record a page outcome and pass the result through.
    fn observe<T>(&self, timer: Timer, result: PollResult<T>) -> PollResult<T> {
        let page = timer.operation().to_string();
        let found = !matches!(result, Err(PollError::NotFound(_)));
        self.metrics.track_page_view(&page, timer.finish(), found);
        if !found {
            tracing::debug!(page = %page, "Lookup hidden or missing");
        }
        result
    }
}

#[async_trait]
impl PollService for PollServiceImpl {
    async fn create_question(
        &self,
        question_text: String,
        days_offset: i64,
    ) -> PollResult<Question> {
        validate_text(&question_text, self.max_text_length)?;

        let offset = Duration::try_days(days_offset).ok_or_else(|| {
            PollError::InvalidRequest(format!("Day offset out of range: {}", days_offset))
        })?;
        let pub_date = self
            .clock
            .now()
            .checked_add_signed(offset)
            .ok_or_else(|| {
                PollError::InvalidRequest(format!("Day offset out of range: {}", days_offset))
            })?;

        let question = self
            .questions
            .create(NewQuestion {
                question_text,
                pub_date,
            })
            .await?;

        self.metrics.track_question_created(question.id.get());
        tracing::info!(
            "Question created: id={}, pub_date={}",
            question.id,
            question.pub_date
        );
        Ok(question)
    }

    async fn add_choice(
        &self,
        question_id: QuestionId,
        choice_text: String,
    ) -> PollResult<Choice> {
        validate_text(&choice_text, self.max_text_length)?;

        // Choices may be prepared before a question goes live.
        self.questions.get(question_id).await?;

        let choice = self
            .choices
            .create(NewChoice {
                question_id,
                choice_text,
            })
            .await?;

        tracing::debug!("Choice {} added to question {}", choice.id, question_id);
        Ok(choice)
    }

    async fn index(&self) -> PollResult<IndexPage> {
        let timer = Timer::new("index");
        let now = self.clock.now();
        let result = async {
            let snapshot = self.questions.list().await?;
            let latest_question_list = domain::list_visible(&snapshot, now)
                .into_iter()
                .cloned()
                .collect();
            Ok::<_, PollError>(IndexPage {
                latest_question_list,
            })
        }
        .await;
        self.observe(timer, result)
    }

    async fn detail(&self, question_id: QuestionId) -> PollResult<DetailPage> {
        let timer = Timer::new("detail");
        let result = async {
            let question = self.visible_question(question_id).await?;
            let choices = self.choices.list_for_question(question_id).await?;
            Ok::<_, PollError>(DetailPage { question, choices })
        }
        .await;
        self.observe(timer, result)
    }

    async fn results(&self, question_id: QuestionId) -> PollResult<ResultsPage> {
        let timer = Timer::new("results");
        let result = async {
            let question = self.visible_question(question_id).await?;
            let choices = self.choices.list_for_question(question_id).await?;
            Ok::<_, PollError>(ResultsPage::new(question, choices))
        }
        .await;
        self.observe(timer, result)
    }

    async fn vote(&self, question_id: QuestionId, choice_id: ChoiceId) -> PollResult<ResultsPage> {
        let timer = Timer::new("vote");
        let result = async {
            let question = self.visible_question(question_id).await?;

            match self.choices.increment_votes(question_id, choice_id).await {
                Ok(_) => {}
                Err(PollError::NotFound(_)) => {
                    return Err(PollError::InvalidRequest(NO_CHOICE_SELECTED.to_string()))
                }
                Err(e) => return Err(e),
            }
            self.metrics.track_vote(question_id.get(), choice_id.get());

            let choices = self.choices.list_for_question(question_id).await?;
            Ok::<_, PollError>(ResultsPage::new(question, choices))
        }
        .await;
        self.observe(timer, result)
    }
}
