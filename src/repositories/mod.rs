mod in_memory_choice_repository;
mod in_memory_question_repository;
mod traits;

pub use in_memory_choice_repository::InMemoryChoiceRepository;
pub use in_memory_question_repository::InMemoryQuestionRepository;
pub use traits::{ChoiceRepository, QuestionRepository};
