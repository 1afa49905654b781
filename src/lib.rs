pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{file::FileConfig, CliConfig, ResolvedConfig};
pub use core::{client::JiraClient, engine::AuditEngine, report::FileReportSink};
pub use domain::model::{AuditReport, AuthorFinding, Issue, WorkLog};
pub use domain::ports::{ConfigProvider, JiraSearch, ReportSink};
pub use utils::error::{AuditError, Result};
