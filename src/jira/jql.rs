//! JQL query construction.
//!
//! The dashboard only ever issues three query shapes; they are built here
//! as plain strings so they can be tested without any I/O.

/// All issues in a project.
pub fn all_issues(project: &str) -> String {
    format!("project = {}", project)
}

/// Issues marked Done with a resolution date within the last 7 days.
pub fn completed_last_week(project: &str) -> String {
    format!("project = {} AND status = Done AND resolved >= -7d", project)
}

/// Issues whose story point estimate is at least `min_points`, optionally
/// bounded above by `max_points` (both bounds inclusive).
pub fn story_points_in_range(project: &str, min_points: u32, max_points: Option<u32>) -> String {
    match max_points {
        Some(max) => format!(
            "project = {} AND \"Story point estimate\" >= {} AND \"Story point estimate\" <= {}",
            project, min_points, max
        ),
        None => format!(
            "project = {} AND \"Story point estimate\" >= {}",
            project, min_points
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_issues() {
        assert_eq!(all_issues("MOP"), "project = MOP");
    }

    #[test]
    fn test_completed_last_week() {
        assert_eq!(
            completed_last_week("MOP"),
            "project = MOP AND status = Done AND resolved >= -7d"
        );
    }

    #[test]
    fn test_story_points_open_range() {
        assert_eq!(
            story_points_in_range("MOP", 3, None),
            "project = MOP AND \"Story point estimate\" >= 3"
        );
    }

    #[test]
    fn test_story_points_closed_range() {
        assert_eq!(
            story_points_in_range("MOP", 5, Some(8)),
            "project = MOP AND \"Story point estimate\" >= 5 AND \"Story point estimate\" <= 8"
        );
    }

    #[test]
    fn test_other_project_key() {
        assert_eq!(all_issues("WEB"), "project = WEB");
    }
}
