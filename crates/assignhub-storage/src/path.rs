//! Submission blob key layout.
//!
//! Keys are `submissions/{student}/{assignment}/{timestamp}_{name}`.
//! The file name is sanitized so a hostile name cannot escape the key
//! space.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Build the storage key for a submission upload.
pub fn submission_key(
    student_id: Uuid,
    assignment_id: Uuid,
    uploaded_at: DateTime<Utc>,
    file_name: &str,
) -> String {
    format!(
        "submissions/{}/{}/{}_{}",
        student_id,
        assignment_id,
        uploaded_at.timestamp_millis(),
        sanitize_file_name(file_name)
    )
}

/// Strip path separators and control characters from an uploaded name.
pub fn sanitize_file_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    // A name of only separators would leave nothing useful behind.
    let trimmed = cleaned.trim_matches('.').trim();
    if trimmed.is_empty() {
        "upload".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_layout() {
        let student = Uuid::new_v4();
        let assignment = Uuid::new_v4();
        let at = Utc::now();
        let key = submission_key(student, assignment, at, "report.pdf");

        assert!(key.starts_with(&format!("submissions/{student}/{assignment}/")));
        assert!(key.ends_with("_report.pdf"));
    }

    #[test]
    fn test_sanitize_strips_separators() {
        assert_eq!(sanitize_file_name("../../etc/passwd"), "etc_passwd");
        assert_eq!(sanitize_file_name("a\\b.txt"), "a_b.txt");
        assert_eq!(sanitize_file_name("///"), "upload");
    }
}
