//! Domain value objects and rules.
//!
//! This module contains type-safe wrappers for question and choice IDs, the
//! validation errors they raise, and the publication rules that decide which
//! questions may be shown at a given instant.

pub mod errors;
pub mod ids;
pub mod publication;

pub use errors::{validate_text, ValidationError};
pub use ids::{ChoiceId, QuestionId};
pub use publication::{
    get_visible_or_not_found, is_visible, list_visible, was_published_recently, RECENT_WINDOW_HOURS,
};
