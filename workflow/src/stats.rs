//! Derived dashboard statistics
//!
//! Pure functions over the current collections; callers recompute on
//! every render. The collections are small and local, so there is no
//! caching layer.

use serde::Serialize;

use shared::models::{ApplicationStatus, InspectorApplication, SeedSubmission, SubmissionStatus};

/// Per-status counts for a collection of records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusSummary {
    pub total: usize,
    pub draft: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

impl StatusSummary {
    /// Share of approved records among all reviewed ones, rounded
    ///
    /// Drafts are excluded from the denominator. `None` when there is
    /// nothing to divide by.
    pub fn approval_percentage(&self) -> Option<u8> {
        let reviewed = self.approved + self.rejected + self.pending;
        if reviewed == 0 {
            return None;
        }
        Some((100.0 * self.approved as f64 / reviewed as f64).round() as u8)
    }
}

/// Summarize seed submissions by status
pub fn summarize_submissions<'a, I>(submissions: I) -> StatusSummary
where
    I: IntoIterator<Item = &'a SeedSubmission>,
{
    let mut summary = StatusSummary::default();
    for submission in submissions {
        summary.total += 1;
        match submission.status {
            SubmissionStatus::Draft => summary.draft += 1,
            SubmissionStatus::Pending => summary.pending += 1,
            SubmissionStatus::Approved => summary.approved += 1,
            SubmissionStatus::Rejected => summary.rejected += 1,
        }
    }
    summary
}

/// Summarize inspector applications by status
pub fn summarize_inspector_applications<'a, I>(applications: I) -> StatusSummary
where
    I: IntoIterator<Item = &'a InspectorApplication>,
{
    let mut summary = StatusSummary::default();
    for application in applications {
        summary.total += 1;
        match application.status {
            ApplicationStatus::Pending => summary.pending += 1,
            ApplicationStatus::Approved => summary.approved += 1,
            ApplicationStatus::Rejected => summary.rejected += 1,
        }
    }
    summary
}

/// Total lab reports across a collection of submissions
pub fn total_lab_reports<'a, I>(submissions: I) -> usize
where
    I: IntoIterator<Item = &'a SeedSubmission>,
{
    submissions.into_iter().map(|s| s.lab_reports.len()).sum()
}

/// Total seed reports across a collection of submissions
pub fn total_seed_reports<'a, I>(submissions: I) -> usize
where
    I: IntoIterator<Item = &'a SeedSubmission>,
{
    submissions.into_iter().map(|s| s.seed_reports.len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(approved: usize, rejected: usize, pending: usize) -> StatusSummary {
        StatusSummary {
            total: approved + rejected + pending,
            draft: 0,
            pending,
            approved,
            rejected,
        }
    }

    #[test]
    fn test_approval_percentage_rounds() {
        assert_eq!(summary(1, 1, 1).approval_percentage(), Some(33));
        assert_eq!(summary(2, 1, 0).approval_percentage(), Some(67));
        assert_eq!(summary(3, 0, 0).approval_percentage(), Some(100));
        assert_eq!(summary(0, 2, 3).approval_percentage(), Some(0));
    }

    #[test]
    fn test_approval_percentage_undefined_when_empty() {
        assert_eq!(summary(0, 0, 0).approval_percentage(), None);
    }

    #[test]
    fn test_drafts_excluded_from_percentage() {
        let mut s = summary(1, 0, 0);
        s.draft = 5;
        s.total = 6;
        assert_eq!(s.approval_percentage(), Some(100));
    }
}
