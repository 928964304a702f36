//! Request counters for the polls server.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Shared counters for the application.
#[derive(Debug, Clone)]
pub struct MetricsTracker {
    page_views_total: Arc<AtomicU64>,
    not_found_total: Arc<AtomicU64>,
    votes_total: Arc<AtomicU64>,
    questions_created_total: Arc<AtomicU64>,
}

impl MetricsTracker {
    /// Create a new metrics tracker.
    pub fn new() -> Self {
        Self {
            page_views_total: Arc::new(AtomicU64::new(0)),
            not_found_total: Arc::new(AtomicU64::new(0)),
            votes_total: Arc::new(AtomicU64::new(0)),
            questions_created_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Track a page view (index, detail or results).
    pub fn track_page_view(&self, page: &str, duration_ms: u128, found: bool) {
        self.page_views_total.fetch_add(1, Ordering::Relaxed);

        if !found {
            self.not_found_total.fetch_add(1, Ordering::Relaxed);
        }

        tracing::debug!(
            page = %page,
            duration_ms = duration_ms,
            found = found,
            "Page served"
        );
    }

    /// Track an accepted vote.
    pub fn track_vote(&self, question_id: u64, choice_id: u64) {
        self.votes_total.fetch_add(1, Ordering::Relaxed);

        tracing::info!(
            question_id = question_id,
            choice_id = choice_id,
            "Vote recorded"
        );
    }

    /// Track a newly created question.
    pub fn track_question_created(&self, question_id: u64) {
        self.questions_created_total.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(question_id = question_id, "Question created");
    }

    /// Get the total number of page views.
    pub fn page_views_total(&self) -> u64 {
        self.page_views_total.load(Ordering::Relaxed)
    }

    /// Get the number of lookups that ended in not-found.
    pub fn not_found_total(&self) -> u64 {
        self.not_found_total.load(Ordering::Relaxed)
    }

    /// Get the total number of accepted votes.
    pub fn votes_total(&self) -> u64 {
        self.votes_total.load(Ordering::Relaxed)
    }

    /// Get the total number of created questions.
    pub fn questions_created_total(&self) -> u64 {
        self.questions_created_total.load(Ordering::Relaxed)
    }

    /// Get the not-found rate (0.0 to 1.0).
    pub fn not_found_rate(&self) -> f64 {
        let misses = self.not_found_total() as f64;
        let total = self.page_views_total() as f64;

        if total == 0.0 {
            0.0
        } else {
            misses / total
        }
    }

    /// Print a summary of all metrics.
    pub fn summary(&self) -> String {
        format!(
            "Metrics Summary:\n\
             Page Views: {}\n\
             Not Found: {} ({:.2}% of views)\n\
             Votes: {}\n\
             Questions Created: {}",
            self.page_views_total(),
            self.not_found_total(),
            self.not_found_rate() * 100.0,
            self.votes_total(),
            self.questions_created_total(),
        )
    }
}

impl Default for MetricsTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// A timer for tracking operation duration.
pub struct Timer {
    start: Instant,
    operation: String,
}

impl Timer {
    /// Start a new timer for the given operation.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            operation: operation.into(),
        }
    }

    /// Name of the operation being timed.
    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// Finish the timer and return the elapsed time in milliseconds.
    pub fn finish(self) -> u128 {
        let duration_ms = self.start.elapsed().as_millis();

        tracing::trace!(
            operation = %self.operation,
            duration_ms = duration_ms,
            "Operation completed"
        );

        duration_ms
    }
}
