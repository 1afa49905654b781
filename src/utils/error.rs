use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Jira returned HTTP {status} for {url}")]
    ApiStatusError { status: u16, url: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid timestamp in Jira response: {0}")]
    TimestampError(#[from] chrono::ParseError),

    #[error("Configuration file error: {0}")]
    ConfigFileError(#[from] toml::de::Error),

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Recoverable, run still counts as a success.
    Low,
    /// Transient, retrying may help.
    Medium,
    /// The audit could not complete.
    High,
    /// Misconfiguration, nothing to retry.
    Critical,
}

impl AuditError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AuditError::ApiError(_) | AuditError::ApiStatusError { .. } => ErrorSeverity::Medium,
            AuditError::IoError(_)
            | AuditError::SerializationError(_)
            | AuditError::TimestampError(_)
            | AuditError::ProcessingError { .. } => ErrorSeverity::High,
            AuditError::ConfigFileError(_)
            | AuditError::MissingConfigError { .. }
            | AuditError::InvalidConfigValueError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            AuditError::ApiError(_) => {
                "Check network connectivity and the Jira base URL".to_string()
            }
            AuditError::ApiStatusError { status: 401, .. }
            | AuditError::ApiStatusError { status: 403, .. } => {
                "Verify JIRA_EMAIL and JIRA_TOKEN are valid for this site".to_string()
            }
            AuditError::ApiStatusError { .. } => {
                "Inspect the Jira response; the JQL may be rejected by this site".to_string()
            }
            AuditError::IoError(_) => "Check that the output path is writable".to_string(),
            AuditError::SerializationError(_) | AuditError::TimestampError(_) => {
                "The Jira response shape was unexpected; re-run with --verbose".to_string()
            }
            AuditError::ConfigFileError(_) => "Fix the TOML syntax in the config file".to_string(),
            AuditError::MissingConfigError { field } => {
                format!("Provide '{}' via flag, env var or config file", field)
            }
            AuditError::InvalidConfigValueError { field, .. } => {
                format!("Correct the value supplied for '{}'", field)
            }
            AuditError::ProcessingError { .. } => {
                "Re-run with --verbose and inspect the offending record".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AuditError::ApiError(_) => "Could not reach Jira".to_string(),
            AuditError::ApiStatusError { status, .. } => {
                format!("Jira rejected the request (HTTP {})", status)
            }
            AuditError::IoError(_) => "Failed to write the audit report".to_string(),
            AuditError::SerializationError(_)
            | AuditError::TimestampError(_)
            | AuditError::ProcessingError { .. } => {
                "Jira returned data the auditor could not process".to_string()
            }
            AuditError::ConfigFileError(_)
            | AuditError::MissingConfigError { .. }
            | AuditError::InvalidConfigValueError { .. } => {
                format!("Configuration problem: {}", self)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AuditError>;
