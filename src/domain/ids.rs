//! QuestionId and ChoiceId value objects.

use super::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A type-safe wrapper for question IDs.
///
/// IDs are assigned by the repository, start at 1 and are never zero.
///
/// # Example
///
/// ```
/// use polls_mcp_server::domain::QuestionId;
///
/// let id = QuestionId::new(7).unwrap();
/// assert_eq!(id.get(), 7);
/// assert!(QuestionId::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct QuestionId(u64);

impl QuestionId {
    /// Create a new QuestionId, validating that it's positive.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidId` for zero.
    pub fn new(id: u64) -> Result<Self, ValidationError> {
        if id == 0 {
            return Err(ValidationError::InvalidId(id.to_string()));
        }
        Ok(Self(id))
    }

    /// Get the raw numeric value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl TryFrom<u64> for QuestionId {
    type Error = ValidationError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<QuestionId> for u64 {
    fn from(id: QuestionId) -> Self {
        id.0
    }
}

impl FromStr for QuestionId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u64>()
            .map_err(|_| ValidationError::InvalidId(s.to_string()))?;
        Self::new(value)
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A type-safe wrapper for choice IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct ChoiceId(u64);

impl ChoiceId {
    /// Create a new ChoiceId, validating that it's positive.
    pub fn new(id: u64) -> Result<Self, ValidationError> {
        if id == 0 {
            return Err(ValidationError::InvalidId(id.to_string()));
        }
        Ok(Self(id))
    }

    /// Get the raw numeric value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl TryFrom<u64> for ChoiceId {
    type Error = ValidationError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ChoiceId> for u64 {
    fn from(id: ChoiceId) -> Self {
        id.0
    }
}

impl fmt::Display for ChoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
