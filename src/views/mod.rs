//! Page contexts and their plain-text rendering.
//!
//! Each page carries the data a client needs (serialized as JSON) and a
//! `render()` method producing the text body shown to a person.

use crate::models::{Choice, Question};
use serde::Serialize;
use std::fmt::Write;

/// Body of the index page when nothing is visible.
pub const NO_POLLS_MESSAGE: &str = "No polls are available.";

/// The index listing: every visible question, earliest first.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct IndexPage {
    pub latest_question_list: Vec<Question>,
}

impl IndexPage {
    pub fn render(&self) -> String {
        if self.latest_question_list.is_empty() {
            return NO_POLLS_MESSAGE.to_string();
        }
        self.latest_question_list
            .iter()
            .map(|q| format!("{}. {}", q.id, q.question_text))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A single visible question with its choices.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DetailPage {
    pub question: Question,
    pub choices: Vec<Choice>,
}

impl DetailPage {
    pub fn render(&self) -> String {
        let mut body = self.question.question_text.clone();
        for choice in &self.choices {
            let _ = write!(body, "\n  [{}] {}", choice.id, choice.choice_text);
        }
        body
    }
}

/// Vote tallies for a visible question.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ResultsPage {
    pub question: Question,
    pub choices: Vec<Choice>,
    pub total_votes: u64,
}

impl ResultsPage {
    /// Build the page, summing the votes of `choices`.
    pub fn new(question: Question, choices: Vec<Choice>) -> Self {
        let total_votes = choices.iter().map(|c| c.votes).sum();
        Self {
            question,
            choices,
            total_votes,
        }
    }

    pub fn render(&self) -> String {
        let mut body = self.question.question_text.clone();
        for choice in &self.choices {
            let noun = if choice.votes == 1 { "vote" } else { "votes" };
            let _ = write!(body, "\n{} -- {} {}", choice.choice_text, choice.votes, noun);
        }
        body
    }
}
