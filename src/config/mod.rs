pub mod file;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    self, validate_required_field, Validate,
};
use clap::Parser;
use file::FileConfig;

pub const DEFAULT_WINDOW_HOURS: i64 = 24;
pub const DEFAULT_OUTPUT_PATH: &str = "./output";

#[derive(Debug, Clone, Parser)]
#[command(name = "jira-worklog-audit")]
#[command(about = "Audits recent Jira work logs against each author's priority queue")]
pub struct CliConfig {
    /// Jira site base URL, e.g. https://yourteam.atlassian.net
    #[arg(long, env = "JIRA_DOMAIN")]
    pub jira_url: Option<String>,

    /// Account email for Basic auth
    #[arg(long, env = "JIRA_EMAIL")]
    pub email: Option<String>,

    /// API token for Basic auth
    #[arg(long, env = "JIRA_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// Audit window in hours
    #[arg(long)]
    pub window_hours: Option<i64>,

    /// Directory the JSON report is written to
    #[arg(long)]
    pub output_path: Option<String>,

    /// Optional TOML config file; flags and env vars take precedence
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Merges flags, env vars and the optional config file into a
    /// fully-resolved configuration. CLI values win over file values.
    pub fn resolve(self) -> Result<ResolvedConfig> {
        let file = match &self.config {
            Some(path) => Some(FileConfig::load(path)?),
            None => None,
        };

        let jira = file.as_ref().map(|f| f.jira.clone()).unwrap_or_default();
        let audit = file.as_ref().and_then(|f| f.audit.clone()).unwrap_or_default();

        let jira_url = self.jira_url.or(jira.url);
        let email = self.email.or(jira.email);
        let api_token = self.api_token.or(jira.token);

        Ok(ResolvedConfig {
            jira_url: validate_required_field("jira_url", &jira_url)?.clone(),
            email: validate_required_field("email", &email)?.clone(),
            api_token: validate_required_field("api_token", &api_token)?.clone(),
            window_hours: self
                .window_hours
                .or(audit.window_hours)
                .unwrap_or(DEFAULT_WINDOW_HOURS),
            output_path: self
                .output_path
                .or(audit.output_path)
                .unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string()),
        })
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub jira_url: String,
    pub email: String,
    pub api_token: String,
    pub window_hours: i64,
    pub output_path: String,
}

impl ConfigProvider for ResolvedConfig {
    fn jira_url(&self) -> &str {
        &self.jira_url
    }

    fn email(&self) -> &str {
        &self.email
    }

    fn api_token(&self) -> &str {
        &self.api_token
    }

    fn window_hours(&self) -> i64 {
        self.window_hours
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl Validate for ResolvedConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("jira_url", &self.jira_url)?;
        validation::validate_non_empty_string("email", &self.email)?;
        validation::validate_non_empty_string("api_token", &self.api_token)?;
        validation::validate_non_empty_string("output_path", &self.output_path)?;
        validation::validate_positive_number("window_hours", self.window_hours, 1)?;
        Ok(())
    }
}
