//! Assignment target audience.
//!
//! The audience is four independent membership filters, not a list of
//! explicit (branch, year, semester, section) tuples: a student is in
//! the audience when each of their attributes appears in the matching
//! array. Years and semesters are stored as strings.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// The audience filter attached to an assignment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct TargetAudience {
    /// Branch ids (as strings) the assignment targets.
    pub target_branches: Vec<String>,
    /// Years of study the assignment targets.
    pub target_years: Vec<String>,
    /// Semesters the assignment targets.
    pub target_semesters: Vec<String>,
    /// Sections the assignment targets. Empty means every section.
    pub target_sections: Vec<String>,
}

impl TargetAudience {
    /// Decide whether a student with the given attributes is in the audience.
    ///
    /// Visible iff the branch, year, and semester are each members of their
    /// filter array, and either `target_sections` is empty or the section
    /// is a member too. The four checks are independent; a single
    /// assignment can target several branches, years, semesters, and
    /// sections at once.
    pub fn includes(&self, branch_id: Uuid, year: i32, semester: i32, section: &str) -> bool {
        self.target_branches.contains(&branch_id.to_string())
            && self.target_years.contains(&year.to_string())
            && self.target_semesters.contains(&semester.to_string())
            && (self.target_sections.is_empty()
                || self.target_sections.iter().any(|s| s == section))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn audience(branch: Uuid) -> TargetAudience {
        TargetAudience {
            target_branches: vec![branch.to_string()],
            target_years: vec!["2".to_string()],
            target_semesters: vec!["1".to_string()],
            target_sections: vec![],
        }
    }

    #[test]
    fn test_empty_sections_means_all_sections() {
        let branch = Uuid::new_v4();
        assert!(audience(branch).includes(branch, 2, 1, "B"));
    }

    #[test]
    fn test_branch_mismatch_hides_assignment() {
        let branch = Uuid::new_v4();
        assert!(!audience(branch).includes(Uuid::new_v4(), 2, 1, "A"));
    }

    #[test]
    fn test_year_and_semester_are_string_membership() {
        let branch = Uuid::new_v4();
        let aud = audience(branch);
        assert!(!aud.includes(branch, 3, 1, "A"));
        assert!(!aud.includes(branch, 2, 2, "A"));
    }

    #[test]
    fn test_section_filter_when_present() {
        let branch = Uuid::new_v4();
        let mut aud = audience(branch);
        aud.target_sections = vec!["A".to_string()];
        assert!(aud.includes(branch, 2, 1, "A"));
        assert!(!aud.includes(branch, 2, 1, "B"));
    }

    #[test]
    fn test_independent_dimensions_are_not_a_cross_product() {
        // Targeting two branches and two years admits every combination,
        // including pairs the creator may not have intended together.
        let cse = Uuid::new_v4();
        let ece = Uuid::new_v4();
        let aud = TargetAudience {
            target_branches: vec![cse.to_string(), ece.to_string()],
            target_years: vec!["2".to_string(), "3".to_string()],
            target_semesters: vec!["1".to_string()],
            target_sections: vec![],
        };
        assert!(aud.includes(cse, 3, 1, "A"));
        assert!(aud.includes(ece, 2, 1, "A"));
    }
}
