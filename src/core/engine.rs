use crate::core::{audit, AuditReport, AuthorFinding, Issue, JiraSearch, ReportSink, Result};
use chrono::Utc;

pub struct AuditEngine<J: JiraSearch, S: ReportSink> {
    jira: J,
    sink: S,
    window_hours: i64,
}

impl<J: JiraSearch, S: ReportSink> AuditEngine<J, S> {
    pub fn new(jira: J, sink: S, window_hours: i64) -> Self {
        Self {
            jira,
            sink,
            window_hours,
        }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!(
            "Fetching work logs from the last {} hours",
            self.window_hours
        );
        let worklogs = self.jira.search_worklogs().await?;
        tracing::info!("Fetched {} work-log entries", worklogs.len());
        for worklog in &worklogs {
            tracing::info!(
                "  {} [{}] {} ({})",
                worklog.author,
                worklog.issue_key,
                worklog.summary,
                worklog.time_spent
            );
        }

        let by_author = audit::group_by_author(&worklogs);
        let worked_keys = audit::worked_issue_keys(&worklogs);

        // Deterministic report ordering.
        let mut authors: Vec<String> = by_author.keys().cloned().collect();
        authors.sort();

        let mut findings = Vec::new();
        for author in authors {
            let entries = &by_author[&author];
            let Some(top) = audit::top_worked(entries) else {
                continue;
            };
            tracing::info!(
                "{}: most urgent issue worked on was {} ({})",
                author,
                top.issue_key,
                top.summary
            );

            let ranked = self.jira.search_ranked_issues(&author).await?;
            let skipped = audit::find_skipped(&ranked, &worked_keys, &top.issue_key);
            match &skipped {
                Some(issue) => tracing::warn!(
                    "{}: skipped more urgent issue {} ({})",
                    author,
                    issue.key,
                    issue.summary
                ),
                None => tracing::info!("{}: no more urgent issue was skipped", author),
            }

            findings.push(AuthorFinding {
                author,
                logged_entries: entries.len(),
                top_worked: Issue {
                    key: top.issue_key.clone(),
                    summary: top.summary.clone(),
                    priority: top.priority,
                },
                skipped,
            });
        }

        let report = AuditReport {
            generated_at: Utc::now(),
            window_hours: self.window_hours,
            worklog_entries: worklogs.len(),
            findings,
        };

        let path = self.sink.write_report(&report).await?;
        tracing::debug!("Report written to {}", path);
        Ok(path)
    }
}
