pub mod mock_question_repository;

pub use mock_question_repository::MockQuestionRepository;
