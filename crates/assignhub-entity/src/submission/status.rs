//! Submission review status and its transition table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Review status of a submission.
///
/// The transition table is enforced centrally by the submission service:
/// `Pending → Verified` (terminal), `Pending → Rejected`, and
/// `Rejected → Pending` via student re-submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "submission_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    /// Awaiting faculty review.
    Pending,
    /// Accepted by faculty. Terminal.
    Verified,
    /// Rejected by faculty. The student may re-submit.
    Rejected,
}

impl SubmissionStatus {
    /// Whether a transition from this status to `next` is allowed.
    pub fn can_transition_to(&self, next: SubmissionStatus) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Verified)
                | (Self::Pending, Self::Rejected)
                | (Self::Rejected, Self::Pending)
        )
    }

    /// Whether a faculty review action (verify/reject) is allowed.
    pub fn is_reviewable(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Whether the owning student may replace the submitted file.
    ///
    /// Pending submissions may be replaced in place; rejected submissions
    /// re-submit back to pending. Verified submissions are immutable.
    pub fn allows_resubmission(&self) -> bool {
        matches!(self, Self::Pending | Self::Rejected)
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Verified => "verified",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SubmissionStatus {
    type Err = assignhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "verified" => Ok(Self::Verified),
            "rejected" => Ok(Self::Rejected),
            _ => Err(assignhub_core::AppError::validation(format!(
                "Invalid submission status: '{s}'. Expected one of: pending, verified, rejected"
            ))),
        }
    }
}
