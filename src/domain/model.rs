use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

/// One work-log entry, joined with the key, summary and priority of the
/// issue it was logged against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkLog {
    pub issue_key: String,
    pub summary: String,
    pub author: String,
    pub started: DateTime<FixedOffset>,
    pub time_spent: String,
    /// Jira priority id. Smaller ids are more urgent priorities.
    pub priority: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub key: String,
    pub summary: String,
    pub priority: i64,
}

/// Audit outcome for a single author.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorFinding {
    pub author: String,
    /// Work-log entries this author recorded inside the audit window.
    pub logged_entries: usize,
    /// The most urgent issue the author actually logged work on.
    pub top_worked: Issue,
    /// An assigned issue ranked ahead of `top_worked` that nobody logged
    /// work on, if one exists.
    pub skipped: Option<Issue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditReport {
    pub generated_at: DateTime<Utc>,
    pub window_hours: i64,
    pub worklog_entries: usize,
    pub findings: Vec<AuthorFinding>,
}
