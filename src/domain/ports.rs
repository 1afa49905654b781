use crate::domain::model::{AuditReport, Issue, WorkLog};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Search surface of the Jira REST API that the audit consumes.
#[async_trait]
pub trait JiraSearch: Send + Sync {
    /// All work-log entries started inside the configured window.
    async fn search_worklogs(&self) -> Result<Vec<WorkLog>>;

    /// Issues assigned to `author`, most urgent first (priority, then rank).
    async fn search_ranked_issues(&self, author: &str) -> Result<Vec<Issue>>;
}

pub trait ReportSink: Send + Sync {
    /// Persists the report and returns the path it was written to.
    fn write_report(
        &self,
        report: &AuditReport,
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn jira_url(&self) -> &str;
    fn email(&self) -> &str;
    fn api_token(&self) -> &str;
    fn window_hours(&self) -> i64;
    fn output_path(&self) -> &str;
}
