use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// TOML configuration file. Every field is optional so the file can
/// carry just the values the CLI does not supply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub jira: JiraSection,
    pub audit: Option<AuditSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JiraSection {
    pub url: Option<String>,
    pub email: Option<String>,
    pub token: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditSection {
    pub window_hours: Option<i64>,
    pub output_path: Option<String>,
}

impl FileConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: FileConfig = toml::from_str(&content)?;
        Ok(config)
    }
}
