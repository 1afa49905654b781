use anyhow::Result;
use chrono::{Duration, Utc};
use httpmock::prelude::*;
use jira_worklog_audit::{AuditEngine, CliConfig, FileReportSink, JiraClient};
use clap::Parser;
use tempfile::TempDir;

fn started_stamp(hours_ago: i64) -> String {
    (Utc::now() - Duration::hours(hours_ago))
        .format("%Y-%m-%dT%H:%M:%S%.3f%z")
        .to_string()
}

/// Full run against a mocked Jira site: work-log search, per-author
/// ranked search, report on disk.
#[tokio::test]
async fn test_full_audit_flow() -> Result<()> {
    let server = MockServer::start();
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let worklog_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/rest/api/2/search")
            .query_param("jql", "worklogDate >= -1d")
            .query_param("fields", "worklog,summary,priority");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "issues": [
                    {
                        "key": "PROJ-1",
                        "fields": {
                            "summary": "Fix login flow",
                            "priority": {"id": "2", "name": "High"},
                            "worklog": {
                                "worklogs": [
                                    {
                                        "author": {"displayName": "Ada"},
                                        "started": started_stamp(3),
                                        "timeSpent": "2h"
                                    },
                                    {
                                        // Outside the 24h window, must be dropped.
                                        "author": {"displayName": "Ada"},
                                        "started": started_stamp(40),
                                        "timeSpent": "4h"
                                    }
                                ]
                            }
                        }
                    }
                ]
            }));
    });

    let ranked_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/rest/api/2/search")
            .query_param("jql", "assignee=\"Ada\" ORDER BY priority DESC, rank ASC")
            .query_param("fields", "summary,priority");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "issues": [
                    {"key": "PROJ-9", "fields": {"summary": "Outage follow-up", "priority": {"id": "1"}}},
                    {"key": "PROJ-1", "fields": {"summary": "Fix login flow", "priority": {"id": "2"}}}
                ]
            }));
    });

    let cli = CliConfig::try_parse_from([
        "jira-worklog-audit",
        "--jira-url",
        &server.base_url(),
        "--email",
        "dev@example.com",
        "--api-token",
        "secret",
        "--output-path",
        &output_path,
    ])?;
    let config = cli.resolve()?;

    let client = JiraClient::new(&config);
    let sink = FileReportSink::new(config.output_path.clone());
    let engine = AuditEngine::new(client, sink, config.window_hours);

    let report_path = engine.run().await?;

    worklog_mock.assert();
    ranked_mock.assert();

    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report_path)?)?;

    assert_eq!(report["window_hours"], 24);
    assert_eq!(report["worklog_entries"], 1);

    let findings = report["findings"].as_array().unwrap();
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0]["author"], "Ada");
    assert_eq!(findings[0]["logged_entries"], 1);
    assert_eq!(findings[0]["top_worked"]["key"], "PROJ-1");
    assert_eq!(findings[0]["skipped"]["key"], "PROJ-9");

    Ok(())
}

#[tokio::test]
async fn test_audit_flow_surfaces_auth_failure() -> Result<()> {
    let server = MockServer::start();
    let temp_dir = TempDir::new()?;

    server.mock(|when, then| {
        when.method(GET).path("/rest/api/2/search");
        then.status(401);
    });

    let cli = CliConfig::try_parse_from([
        "jira-worklog-audit",
        "--jira-url",
        &server.base_url(),
        "--email",
        "dev@example.com",
        "--api-token",
        "wrong",
        "--output-path",
        temp_dir.path().to_str().unwrap(),
    ])?;
    let config = cli.resolve()?;

    let client = JiraClient::new(&config);
    let sink = FileReportSink::new(config.output_path.clone());
    let engine = AuditEngine::new(client, sink, config.window_hours);

    let err = engine.run().await.unwrap_err();
    assert_eq!(err.exit_code(), 2);
    assert!(err.to_string().contains("401"));

    Ok(())
}
