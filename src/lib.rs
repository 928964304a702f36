//! Polls MCP Server - a small polls application served over the Model Context Protocol.
//!
//! Questions carry a publication timestamp. Only questions whose timestamp is
//! not in the future are listed or shown; users vote on the choices of
//! published questions and read back the tallies.
//!
//! # Architecture
//!
//! - **domain**: IDs, validation and the publication rules
//! - **clock**: Injected time source
//! - **models**: Questions and choices
//! - **repositories**: Storage traits and in-memory implementations
//! - **services**: Poll business logic
//! - **views**: Page contexts and text rendering
//! - **seed**: JSON fixtures loaded at start-up
//! - **observability**: Request counters
//! - **server**: MCP protocol server
//! - **config** / **error**: Configuration and error types

pub mod clock;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod observability;
pub mod repositories;
pub mod seed;
pub mod server;
pub mod services;
pub mod views;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use error::{ConfigError, PollError, PollResult};
pub use models::{Choice, Question};
pub use observability::MetricsTracker;
pub use server::PollsMcpServer;
pub use services::{PollService, PollServiceImpl};
pub use views::{DetailPage, IndexPage, ResultsPage, NO_POLLS_MESSAGE};
