//! Pure analysis over fetched work logs. Everything here is synchronous
//! and side-effect free so the decision logic stays testable without a
//! Jira endpoint.

use crate::core::{Issue, WorkLog};
use std::collections::{HashMap, HashSet};

pub fn group_by_author(worklogs: &[WorkLog]) -> HashMap<String, Vec<&WorkLog>> {
    let mut groups: HashMap<String, Vec<&WorkLog>> = HashMap::new();
    for worklog in worklogs {
        groups.entry(worklog.author.clone()).or_default().push(worklog);
    }
    groups
}

/// Keys of every issue anyone logged work on inside the window.
pub fn worked_issue_keys(worklogs: &[WorkLog]) -> HashSet<String> {
    worklogs.iter().map(|w| w.issue_key.clone()).collect()
}

/// The entry against the most urgent issue (smallest priority id) among
/// an author's work logs.
pub fn top_worked<'a>(entries: &[&'a WorkLog]) -> Option<&'a WorkLog> {
    entries.iter().min_by_key(|w| w.priority).copied()
}

/// Walks the author's assigned issues in priority-then-rank order and
/// returns the first one nobody logged work on. The walk stops once the
/// author's top worked issue is reached: everything after it was, by
/// ranking, less urgent than what they actually did.
pub fn find_skipped(
    ranked: &[Issue],
    worked_keys: &HashSet<String>,
    top_worked_key: &str,
) -> Option<Issue> {
    for issue in ranked {
        if !worked_keys.contains(&issue.key) {
            return Some(issue.clone());
        }
        if issue.key == top_worked_key {
            break;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn worklog(issue_key: &str, author: &str, priority: i64) -> WorkLog {
        WorkLog {
            issue_key: issue_key.to_string(),
            summary: format!("Summary of {}", issue_key),
            author: author.to_string(),
            started: DateTime::parse_from_rfc3339("2024-05-21T09:30:00+02:00").unwrap(),
            time_spent: "1h".to_string(),
            priority,
        }
    }

    fn issue(key: &str, priority: i64) -> Issue {
        Issue {
            key: key.to_string(),
            summary: format!("Summary of {}", key),
            priority,
        }
    }

    #[test]
    fn test_group_by_author() {
        let worklogs = vec![
            worklog("PROJ-1", "Ada", 2),
            worklog("PROJ-2", "Grace", 3),
            worklog("PROJ-3", "Ada", 1),
        ];

        let groups = group_by_author(&worklogs);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups["Ada"].len(), 2);
        assert_eq!(groups["Grace"].len(), 1);
    }

    #[test]
    fn test_worked_issue_keys_dedupes() {
        let worklogs = vec![
            worklog("PROJ-1", "Ada", 2),
            worklog("PROJ-1", "Grace", 2),
            worklog("PROJ-2", "Ada", 3),
        ];

        let keys = worked_issue_keys(&worklogs);

        assert_eq!(keys.len(), 2);
        assert!(keys.contains("PROJ-1"));
        assert!(keys.contains("PROJ-2"));
    }

    #[test]
    fn test_top_worked_picks_smallest_priority_id() {
        let a = worklog("PROJ-1", "Ada", 3);
        let b = worklog("PROJ-2", "Ada", 1);
        let c = worklog("PROJ-3", "Ada", 2);
        let entries = vec![&a, &b, &c];

        let top = top_worked(&entries).unwrap();

        assert_eq!(top.issue_key, "PROJ-2");
    }

    #[test]
    fn test_top_worked_empty() {
        assert!(top_worked(&[]).is_none());
    }

    #[test]
    fn test_find_skipped_reports_untouched_issue_ahead_of_worked() {
        let ranked = vec![issue("PROJ-9", 1), issue("PROJ-1", 2)];
        let worked: HashSet<String> = ["PROJ-1".to_string()].into_iter().collect();

        let skipped = find_skipped(&ranked, &worked, "PROJ-1");

        assert_eq!(skipped.unwrap().key, "PROJ-9");
    }

    #[test]
    fn test_find_skipped_none_when_top_worked_ranks_first() {
        let ranked = vec![issue("PROJ-1", 1), issue("PROJ-9", 2)];
        let worked: HashSet<String> = ["PROJ-1".to_string()].into_iter().collect();

        assert!(find_skipped(&ranked, &worked, "PROJ-1").is_none());
    }

    #[test]
    fn test_find_skipped_stops_at_top_worked() {
        // PROJ-5 is untouched but ranks below the worked issue, so it is
        // not a finding.
        let ranked = vec![issue("PROJ-2", 1), issue("PROJ-1", 2), issue("PROJ-5", 3)];
        let worked: HashSet<String> =
            ["PROJ-2".to_string(), "PROJ-1".to_string()].into_iter().collect();

        assert!(find_skipped(&ranked, &worked, "PROJ-1").is_none());
    }

    #[test]
    fn test_find_skipped_empty_ranked_list() {
        let worked: HashSet<String> = ["PROJ-1".to_string()].into_iter().collect();
        assert!(find_skipped(&[], &worked, "PROJ-1").is_none());
    }
}
