use clap::Parser;
use jira_worklog_audit::utils::{logger, validation::Validate};
use jira_worklog_audit::{AuditEngine, CliConfig, FileReportSink, JiraClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting jira-worklog-audit");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration resolution failed: {}", e);
            eprintln!("{}", e.user_friendly_message());
            eprintln!("Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        eprintln!("Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    let client = JiraClient::new(&config);
    let sink = FileReportSink::new(config.output_path.clone());
    let engine = AuditEngine::new(client, sink, config.window_hours);

    match engine.run().await {
        Ok(report_path) => {
            tracing::info!("Audit completed");
            println!("Audit completed. Report written to {}", report_path);
        }
        Err(e) => {
            tracing::error!("Audit failed: {} (severity {:?})", e, e.severity());
            tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("{}", e.user_friendly_message());
            eprintln!("Suggestion: {}", e.recovery_suggestion());

            let exit_code = e.exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
