//! Data models for polls entities.
//!
//! This module contains the data structures representing questions and the
//! choices users vote on.

pub mod choice;
pub mod question;

pub use choice::{Choice, NewChoice};
pub use question::{NewQuestion, Question};
