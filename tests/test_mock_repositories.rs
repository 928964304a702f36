mod mocks;

use chrono::{Duration, TimeZone, Utc};
use mocks::MockQuestionRepository;
use polls_mcp_server::domain::QuestionId;
use polls_mcp_server::repositories::{InMemoryChoiceRepository, QuestionRepository};
use polls_mcp_server::{FixedClock, MetricsTracker, PollService, PollServiceImpl, Question};
use std::sync::Arc;

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap()
}

fn question(id: u64, text: &str, pub_date: chrono::DateTime<Utc>) -> Question {
    Question::new(QuestionId::new(id).unwrap(), text.to_string(), pub_date)
}

fn service_over(repo: &MockQuestionRepository) -> PollServiceImpl {
    PollServiceImpl::new(
        Arc::new(repo.clone()),
        Arc::new(InMemoryChoiceRepository::new()),
        Arc::new(FixedClock::new(now())),
        MetricsTracker::new(),
        200,
    )
}

#[tokio::test]
async fn test_mock_repository_get_not_found() {
    let repo = MockQuestionRepository::new();
    let result = repo.get(QuestionId::new(1).unwrap()).await;
    assert!(result.is_err());
    assert_eq!(repo.get_call_count("get"), 1);
}

#[tokio::test]
async fn test_index_sorts_unordered_repository_output() {
    let repo = MockQuestionRepository::new();
    repo.add_question(question(10, "newest", now() - Duration::days(1)));
    repo.add_question(question(3, "oldest", now() - Duration::days(90)));
    repo.add_question(question(7, "middle", now() - Duration::days(10)));
    repo.add_question(question(8, "future", now() + Duration::days(10)));

    let service = service_over(&repo);
    let page = service.index().await.unwrap();

    let texts: Vec<&str> = page
        .latest_question_list
        .iter()
        .map(|q| q.question_text.as_str())
        .collect();
    assert_eq!(texts, vec!["oldest", "middle", "newest"]);
    assert_eq!(repo.get_call_count("list"), 1);
}

#[tokio::test]
async fn test_detail_reads_one_snapshot() {
    let repo = MockQuestionRepository::new();
    repo.add_question(question(1, "Past question", now() - Duration::days(5)));

    let service = service_over(&repo);
    repo.reset_call_counts();
    service.detail(QuestionId::new(1).unwrap()).await.unwrap();

    assert_eq!(repo.get_call_count("list"), 1);
    assert_eq!(repo.get_call_count("get"), 0);
}

#[tokio::test]
async fn test_create_question_goes_through_repository() {
    let repo = MockQuestionRepository::new();
    let service = service_over(&repo);

    let created = service
        .create_question("Stored".to_string(), -2)
        .await
        .unwrap();

    assert_eq!(repo.get_call_count("create"), 1);
    assert_eq!(created.pub_date, now() - Duration::days(2));
}
