//! Seed fixtures.
//!
//! A seed file lists questions by day offset relative to start-up time, so the
//! same file produces past and future questions whenever the server starts:
//!
//! ```json
//! { "questions": [
//!     { "question_text": "What's up?", "days_offset": -1, "choices": ["Not much", "The sky"] }
//! ] }
//! ```

use crate::error::{PollError, PollResult};
use crate::services::PollService;
use serde::Deserialize;
use std::path::Path;

/// One question in a seed file.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SeedQuestion {
    pub question_text: String,
    #[serde(default)]
    pub days_offset: i64,
    #[serde(default)]
    pub choices: Vec<String>,
}

/// Parsed seed file.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SeedData {
    #[serde(default)]
    pub questions: Vec<SeedQuestion>,
}

impl SeedData {
    /// Parse seed data from JSON text.
    pub fn from_json(json: &str) -> PollResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Read and parse a seed file.
pub fn load_seed_file(path: &Path) -> PollResult<SeedData> {
    let contents = std::fs::read_to_string(path)?;
    SeedData::from_json(&contents)
        .map_err(|e| PollError::Seed(format!("{}: {}", path.display(), e)))
}

/// Create every seeded question and its choices through the service.
///
/// Returns the number of questions created. Stops at the first failure.
pub async fn apply_seed(service: &dyn PollService, seed: SeedData) -> PollResult<usize> {
    let mut created = 0;
    for entry in seed.questions {
        let question = service
            .create_question(entry.question_text, entry.days_offset)
            .await?;
        for choice_text in entry.choices {
            service.add_choice(question.id, choice_text).await?;
        }
        created += 1;
    }
    tracing::info!("Seeded {} question(s)", created);
    Ok(created)
}
