//! Shared fixtures for integration tests.

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use polls_mcp_server::repositories::{InMemoryChoiceRepository, InMemoryQuestionRepository};
use polls_mcp_server::{FixedClock, MetricsTracker, PollService, PollServiceImpl, Question};
use std::sync::Arc;

/// The instant every test starts at.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
}

/// A service over empty in-memory repositories and a clock frozen at `fixed_now()`.
pub fn setup_service() -> (PollServiceImpl, Arc<FixedClock>) {
    let clock = Arc::new(FixedClock::new(fixed_now()));
    let service = PollServiceImpl::new(
        Arc::new(InMemoryQuestionRepository::new()),
        Arc::new(InMemoryChoiceRepository::new()),
        clock.clone(),
        MetricsTracker::new(),
        200,
    );
    (service, clock)
}

/// Create a question with the given text published `days` days from now.
pub async fn create_question(service: &dyn PollService, question_text: &str, days: i64) -> Question {
    service
        .create_question(question_text.to_string(), days)
        .await
        .expect("question should be created")
}
