use crate::core::{ConfigProvider, Issue, WorkLog};
use crate::utils::error::{AuditError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use reqwest::Client;
use serde::Deserialize;

/// Jira cloud returns work-log timestamps like `2024-05-21T09:30:00.000+0200`.
const STARTED_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%z";

pub struct JiraClient {
    base_url: String,
    email: String,
    api_token: String,
    window_hours: i64,
    client: Client,
}

impl JiraClient {
    pub fn new<C: ConfigProvider>(config: &C) -> Self {
        Self {
            base_url: config.jira_url().trim_end_matches('/').to_string(),
            email: config.email().to_string(),
            api_token: config.api_token().to_string(),
            window_hours: config.window_hours(),
            client: Client::new(),
        }
    }

    async fn search(&self, jql: &str, fields: &str) -> Result<SearchResponse> {
        let url = format!("{}/rest/api/2/search", self.base_url);
        tracing::debug!("Searching Jira: jql={}", jql);

        let response = self
            .client
            .get(&url)
            .basic_auth(&self.email, Some(&self.api_token))
            .query(&[("jql", jql), ("fields", fields)])
            .send()
            .await?;

        tracing::debug!("Jira response status: {}", response.status());

        if !response.status().is_success() {
            return Err(AuditError::ApiStatusError {
                status: response.status().as_u16(),
                url,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl crate::core::JiraSearch for JiraClient {
    async fn search_worklogs(&self) -> Result<Vec<WorkLog>> {
        // worklogDate has day granularity in JQL; the exact window is
        // applied client-side against each entry's start timestamp.
        let days = (self.window_hours + 23) / 24;
        let jql = format!("worklogDate >= -{}d", days);
        let response = self.search(&jql, "worklog,summary,priority").await?;

        let cutoff = Utc::now() - Duration::hours(self.window_hours);
        let mut worklogs = Vec::new();

        for issue in response.issues {
            let priority = issue.fields.priority_id(&issue.key)?;
            let entries = issue
                .fields
                .worklog
                .map(|block| block.worklogs)
                .unwrap_or_default();

            for entry in entries {
                let started = DateTime::parse_from_str(&entry.started, STARTED_FORMAT)?;
                if started.with_timezone(&Utc) <= cutoff {
                    continue;
                }
                worklogs.push(WorkLog {
                    issue_key: issue.key.clone(),
                    summary: issue.fields.summary.clone(),
                    author: entry.author.display_name,
                    started,
                    time_spent: entry.time_spent,
                    priority,
                });
            }
        }

        Ok(worklogs)
    }

    async fn search_ranked_issues(&self, author: &str) -> Result<Vec<Issue>> {
        let jql = format!("assignee=\"{}\" ORDER BY priority DESC, rank ASC", author);
        let response = self.search(&jql, "summary,priority").await?;

        response
            .issues
            .into_iter()
            .map(|issue| {
                let priority = issue.fields.priority_id(&issue.key)?;
                Ok(Issue {
                    key: issue.key,
                    summary: issue.fields.summary,
                    priority,
                })
            })
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    issues: Vec<WireIssue>,
}

#[derive(Debug, Deserialize)]
struct WireIssue {
    key: String,
    fields: WireFields,
}

#[derive(Debug, Deserialize)]
struct WireFields {
    summary: String,
    priority: Option<WirePriority>,
    worklog: Option<WireWorklogBlock>,
}

impl WireFields {
    /// Jira serializes the priority id as a numeric string.
    fn priority_id(&self, issue_key: &str) -> Result<i64> {
        let priority = self
            .priority
            .as_ref()
            .ok_or_else(|| AuditError::ProcessingError {
                message: format!("Issue {} has no priority field", issue_key),
            })?;
        priority
            .id
            .parse()
            .map_err(|_| AuditError::ProcessingError {
                message: format!(
                    "Issue {} has a non-numeric priority id '{}'",
                    issue_key, priority.id
                ),
            })
    }
}

#[derive(Debug, Deserialize)]
struct WirePriority {
    id: String,
}

#[derive(Debug, Deserialize)]
struct WireWorklogBlock {
    #[serde(default)]
    worklogs: Vec<WireWorklogEntry>,
}

#[derive(Debug, Deserialize)]
struct WireWorklogEntry {
    author: WireAuthor,
    started: String,
    #[serde(rename = "timeSpent")]
    time_spent: String,
}

#[derive(Debug, Deserialize)]
struct WireAuthor {
    #[serde(rename = "displayName")]
    display_name: String,
}
