pub mod audit;
pub mod client;
pub mod engine;
pub mod report;

pub use crate::domain::model::{AuditReport, AuthorFinding, Issue, WorkLog};
pub use crate::domain::ports::{ConfigProvider, JiraSearch, ReportSink};
pub use crate::utils::error::Result;
