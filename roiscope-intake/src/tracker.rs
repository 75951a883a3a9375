//! Single-in-flight submission tracking.
//!
//! The lead form allows one submission at a time: the submit control
//! disables itself while a call is pending. This is that rule as a
//! type: `begin` refuses while a submission is in flight, and the view
//! layer reads `status` to decide what to render.

use crate::error::{IntakeError, IntakeResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    /// No submission attempted yet.
    Idle,
    /// A submission is in flight; further submissions are refused.
    Pending,
    /// The last submission was acknowledged.
    Succeeded,
    /// The last submission failed; the caller may try again.
    Failed,
}

#[derive(Debug)]
pub struct SubmissionTracker {
    status: SubmissionStatus,
}

impl SubmissionTracker {
    pub fn new() -> Self {
        Self {
            status: SubmissionStatus::Idle,
        }
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Mark a submission as started. Refused while one is pending.
    pub fn begin(&mut self) -> IntakeResult<()> {
        if self.status == SubmissionStatus::Pending {
            return Err(IntakeError::AlreadyPending);
        }
        self.status = SubmissionStatus::Pending;
        Ok(())
    }

    /// Record the outcome of the in-flight submission.
    pub fn finish(&mut self, success: bool) {
        self.status = if success {
            SubmissionStatus::Succeeded
        } else {
            SubmissionStatus::Failed
        };
    }
}

impl Default for SubmissionTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_while_pending_is_refused() {
        let mut tracker = SubmissionTracker::new();
        tracker.begin().unwrap();
        assert_eq!(tracker.status(), SubmissionStatus::Pending);
        assert!(matches!(
            tracker.begin(),
            Err(IntakeError::AlreadyPending)
        ));
    }

    #[test]
    fn finish_transitions_match_the_outcome() {
        let mut tracker = SubmissionTracker::new();
        tracker.begin().unwrap();
        tracker.finish(true);
        assert_eq!(tracker.status(), SubmissionStatus::Succeeded);

        tracker.begin().unwrap();
        tracker.finish(false);
        assert_eq!(tracker.status(), SubmissionStatus::Failed);
    }

    #[test]
    fn failed_submission_can_be_retried_by_the_caller() {
        let mut tracker = SubmissionTracker::new();
        tracker.begin().unwrap();
        tracker.finish(false);
        // The tracker never blocks a retry; it only blocks concurrency.
        assert!(tracker.begin().is_ok());
    }
}
