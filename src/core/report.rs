use crate::core::{AuditReport, ReportSink, Result};
use std::fs;
use std::path::Path;

pub const REPORT_FILENAME: &str = "worklog_audit.json";

/// Writes the audit report as pretty-printed JSON under a base directory.
#[derive(Debug, Clone)]
pub struct FileReportSink {
    base_path: String,
}

impl FileReportSink {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl ReportSink for FileReportSink {
    async fn write_report(&self, report: &AuditReport) -> Result<String> {
        let full_path = Path::new(&self.base_path).join(REPORT_FILENAME);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(report)?;
        fs::write(&full_path, json)?;

        Ok(full_path.to_string_lossy().into_owned())
    }
}
