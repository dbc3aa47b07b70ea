//! Ticketdash - Jira ticket dashboard generator
//!
//! A CLI tool that queries a Jira project for label and story-point
//! breakdowns and renders the result as a self-contained HTML page.
//!
//! Exit codes:
//!   0 - Success (dashboard written, possibly with degraded tiles)
//!   1 - Runtime error (config, auth, or a required query failed)

mod analysis;
mod cli;
mod config;
mod jira;
mod models;
mod report;

use anyhow::{bail, Context, Result};
use chrono::Utc;
use cli::{Args, OutputFormat};
use config::Config;
use jira::{JiraClient, JiraError, JiraSettings};
use models::{Dashboard, SearchResult, ThresholdTile};
use std::path::PathBuf;
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

/// Story-point thresholds shown on the dashboard: three open-ended
/// minimums and one closed range.
const STORY_POINT_THRESHOLDS: [(u32, Option<u32>); 4] =
    [(2, None), (3, None), (4, None), (5, Some(8))];

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        return handle_init_config();
    }

    // Initialize logging
    init_logging(&args);

    info!("Ticketdash v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    match run_dashboard(args).await {
        Ok(()) => Ok(()),
        Err(e) => {
            error!("Dashboard generation failed: {}", e);
            eprintln!("\n❌ Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Handle --init-config: generate a default .ticketdash.toml.
fn handle_init_config() -> Result<()> {
    let path = std::path::Path::new(".ticketdash.toml");

    if path.exists() {
        eprintln!("⚠️  .ticketdash.toml already exists. Remove it first or edit it manually.");
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content).context("Failed to write .ticketdash.toml")?;

    println!("✅ Created .ticketdash.toml with default settings.");
    println!("   Edit it to set your Jira base URL, username, and project key.");
    Ok(())
}

/// Initialize logging based on verbosity settings.
fn init_logging(args: &Args) {
    let level = args.log_level();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

/// Run the complete fetch, aggregate, render pipeline.
async fn run_dashboard(args: Args) -> Result<()> {
    // Load configuration and apply CLI overrides
    let mut config = load_config(&args)?;
    config.merge_with_args(&args);

    if let Err(e) = config.validate() {
        bail!("{}", e);
    }

    let Some(token) = args.token.clone() else {
        bail!("Jira API token is not set (use --token or the JIRA_API_TOKEN environment variable)");
    };

    let project = config.jira.project.clone();
    let output = PathBuf::from(&config.report.output);

    println!("📥 Querying Jira project {} at {}", project, config.jira.base_url);

    let client = JiraClient::new(JiraSettings {
        base_url: config.jira.base_url.clone(),
        username: config.jira.username.clone(),
        api_token: token,
        timeout_seconds: config.jira.timeout_seconds,
    })?;

    // The four query shapes are independent and read-only, so they are
    // issued concurrently and joined before aggregation.
    let threshold_fetches = futures::future::join_all(
        STORY_POINT_THRESHOLDS
            .iter()
            .map(|&(min, max)| client.by_story_points(&project, min, max)),
    );

    let (all, completed, threshold_results) = futures::join!(
        client.all_issues(&project),
        client.completed_last_week(&project),
        threshold_fetches,
    );

    // The project-wide and completed counts are required; without them
    // there is no dashboard to render.
    let all = require_result(all, "all tickets")?;
    let completed = require_result(completed, "completed tickets")?;
    info!(
        "Project {}: {} tickets total, {} completed last 7 days",
        project, all.total, completed.total
    );

    // Threshold queries degrade to per-tile failure notes.
    let thresholds: Vec<ThresholdTile> = STORY_POINT_THRESHOLDS
        .iter()
        .zip(threshold_results)
        .map(|(&(min, max), result)| {
            let label = ThresholdTile::describe(min, max);
            match result {
                Ok(result) => ThresholdTile {
                    label,
                    min_points: min,
                    max_points: max,
                    count: Some(result.total),
                    error: None,
                },
                Err(e) => {
                    warn!("Threshold query ({}) failed: {}", label, e);
                    ThresholdTile {
                        label,
                        min_points: min,
                        max_points: max,
                        count: None,
                        error: Some(e.to_string()),
                    }
                }
            }
        })
        .collect();

    // Aggregate
    println!("🧮 Aggregating {} tickets...", all.total);
    let tally = analysis::aggregate(&all);
    let percentages = analysis::percentages(&tally, all.total);

    let dashboard = Dashboard {
        project: project.clone(),
        generated_at: Utc::now(),
        total_tickets: all.total,
        completed_last_week: completed.total,
        tally,
        percentages,
        thresholds,
    };

    // Render and save
    println!("📝 Rendering dashboard...");
    let rendered = match args.format {
        OutputFormat::Html => report::generate_html_report(&dashboard),
        OutputFormat::Json => report::generate_json_report(&dashboard)?,
    };

    std::fs::write(&output, &rendered)
        .with_context(|| format!("Failed to write dashboard to {}", output.display()))?;

    print_summary(&dashboard);
    println!("\n✅ Dashboard saved to: {}", output.display());

    Ok(())
}

/// Unwrap a query result the dashboard cannot be rendered without,
/// calling out authentication failures separately.
fn require_result(
    result: Result<SearchResult, JiraError>,
    what: &str,
) -> Result<SearchResult> {
    match result {
        Ok(result) => Ok(result),
        Err(e) if e.is_auth_error() => {
            Err(e).context("Jira authentication failed; no dashboard was rendered")
        }
        Err(e) => Err(e).with_context(|| format!("failed to fetch {}", what)),
    }
}

/// Print the console summary of the generated dashboard.
fn print_summary(dashboard: &Dashboard) {
    println!("\n📊 Dashboard Summary:");
    println!("   Total tickets: {}", dashboard.total_tickets);
    println!(
        "   Completed last 7 days: {}",
        dashboard.completed_last_week
    );
    println!(
        "   Frontend: {}% | Backend: {}% | Fullstack: {}% | Other: {}%",
        dashboard.percentages.frontend,
        dashboard.percentages.backend,
        dashboard.percentages.fullstack,
        dashboard.percentages.other
    );
    for threshold in &dashboard.thresholds {
        match threshold.count {
            Some(count) => println!("   {}: {}", threshold.label, count),
            None => println!("   {}: unavailable", threshold.label),
        }
    }
    if !dashboard.all_thresholds_resolved() {
        println!("   ⚠️  Some story-point queries failed; see the dashboard for details.");
    }
}

/// Load configuration from file or use defaults.
fn load_config(args: &Args) -> Result<Config> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        info!("Loading config from: {}", config_path.display());
        return Config::load(config_path);
    }

    // Try default location
    match Config::load_default() {
        Ok(Some(config)) => {
            info!("Loaded default config from .ticketdash.toml");
            Ok(config)
        }
        Ok(None) => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
        Err(e) => {
            warn!("Failed to load config: {}", e);
            Ok(Config::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_result_passthrough() {
        let result = require_result(
            Ok(SearchResult {
                total: 3,
                issues: vec![],
            }),
            "all tickets",
        )
        .unwrap();
        assert_eq!(result.total, 3);
    }

    #[test]
    fn test_require_result_auth_failure_aborts_with_auth_message() {
        let err = require_result(
            Err(JiraError::Unauthorized {
                status: 401,
                body: String::new(),
            }),
            "all tickets",
        )
        .unwrap_err();

        let message = format!("{:#}", err);
        assert!(message.contains("authentication failed"));
        assert!(message.contains("JIRA_API_TOKEN"));
    }

    #[test]
    fn test_require_result_names_the_failed_query() {
        let err = require_result(
            Err(JiraError::Http {
                status: 500,
                body: "boom".to_string(),
            }),
            "completed tickets",
        )
        .unwrap_err();

        assert!(format!("{:#}", err).contains("failed to fetch completed tickets"));
    }
}
