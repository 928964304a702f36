//! Application service layer.
//!
//! Services contain business logic and orchestrate interactions between
//! repositories, the clock and the publication rules. They provide a clean
//! boundary between the MCP handlers and the data access layer.

mod poll_service;

pub use poll_service::{PollService, PollServiceImpl};

// Re-export common types used by services
pub use crate::models::{Choice, Question};
pub use crate::views::{DetailPage, IndexPage, ResultsPage};
