//! faceops-export — Export match logs from the face recognition API to CSV.

use anyhow::{anyhow, Result};
use chrono::{Duration, NaiveDate, NaiveTime, Utc};
use clap::Parser;
use faceops_api::{ApiClient, ApiConfig, LogQuery};
use faceops_core::export::write_csv;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Parser)]
#[command(name = "faceops-export", about = "Export match logs from the face recognition API to CSV")]
struct Cli {
    /// Output CSV filename
    #[arg(short, long, default_value = "match_logs.csv")]
    output: PathBuf,
    /// Number of days back to export
    #[arg(short, long, default_value_t = 30)]
    days: i64,
    /// Start date in YYYY-MM-DD format
    #[arg(long)]
    start_date: Option<String>,
    /// End date in YYYY-MM-DD format
    #[arg(long)]
    end_date: Option<String>,
    /// Filter by a specific profile ID
    #[arg(long)]
    profile_id: Option<String>,
    /// Filter by a specific device ID
    #[arg(long)]
    device_id: Option<String>,
    /// Show a summary of available logs without exporting
    #[arg(long)]
    summary: bool,
    /// Export all available logs (ignores --days)
    #[arg(long)]
    all: bool,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = match ApiConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    let interrupt_delay_secs = config.interrupt_delay_secs;

    let outcome = tokio::select! {
        result = run(cli, config) => result,
        _ = tokio::signal::ctrl_c() => {
            println!("\nOperation cancelled by user");
            shutdown_delay(interrupt_delay_secs).await;
            std::process::exit(1);
        }
    };

    if let Err(e) = outcome {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Shutdown-delay policy: wait before exiting after a manual interrupt, so an
/// accidental cancel-and-retry loop cannot hammer the API. Tune with
/// FACEOPS_INTERRUPT_DELAY_SECS.
async fn shutdown_delay(secs: u64) {
    if secs > 0 {
        println!("Waiting {secs}s before exit...");
        tokio::time::sleep(std::time::Duration::from_secs(secs)).await;
    }
}

async fn run(cli: Cli, config: ApiConfig) -> Result<()> {
    let client = ApiClient::new(config)?;

    if cli.summary {
        return print_summary(&client).await;
    }

    let mut query = LogQuery {
        profile_id: cli.profile_id.clone(),
        device_id: cli.device_id.clone(),
        ..LogQuery::default()
    };

    if cli.all {
        println!("Exporting ALL available match logs...");
    } else if cli.start_date.is_some() || cli.end_date.is_some() {
        println!(
            "Exporting match logs from {} to {}...",
            cli.start_date.as_deref().unwrap_or("beginning"),
            cli.end_date.as_deref().unwrap_or("now"),
        );
        query.start_date = cli
            .start_date
            .as_deref()
            .map(|v| parse_date(v, "start-date"))
            .transpose()?;
        query.end_date = cli
            .end_date
            .as_deref()
            .map(|v| parse_date(v, "end-date"))
            .transpose()?;
    } else {
        println!("Exporting match logs from the last {} days...", cli.days);
        let (start, end) = last_days_range(cli.days);
        query.start_date = Some(start);
        query.end_date = Some(end);
    }

    println!("Fetching match logs...");
    let records = client.get_all_match_logs(&query).await?;
    tracing::debug!(records = records.len(), "fetch complete");
    println!("Total match logs fetched: {}", records.len());

    if records.is_empty() {
        return Err(anyhow!("No match logs found to export"));
    }

    let written = write_csv(&cli.output, &records)?;
    println!(
        "Successfully exported {} match logs to '{}'",
        written,
        cli.output.display()
    );
    Ok(())
}

/// Probe the API and report recent volume with a few sample lines.
async fn print_summary(client: &ApiClient) -> Result<()> {
    println!("Getting match logs summary...");

    let sample = client
        .get_match_logs(10, 0, &LogQuery::default())
        .await
        .map_err(|e| anyhow!("API is not working properly: {e}"))?;

    let (start, end) = last_days_range(7);
    let week_query = LogQuery {
        start_date: Some(start),
        end_date: Some(end),
        ..LogQuery::default()
    };
    let recent = client.get_all_match_logs(&week_query).await?;

    println!("API is working");
    println!("Recent logs (last 7 days): {}", recent.len());

    if !sample.is_empty() {
        println!("\nSample logs:");
        for (i, log) in sample.iter().take(5).enumerate() {
            println!(
                "  {}. {} - {} ({:.1}% confidence) - {}",
                i + 1,
                log.matched_at.as_deref().unwrap_or("unknown"),
                log.profile_name.as_deref().unwrap_or("unknown"),
                log.confidence.unwrap_or(0.0) * 100.0,
                log.device_name.as_deref().unwrap_or("unknown"),
            );
        }
    }
    Ok(())
}

/// Parse a `YYYY-MM-DD` flag value into the ISO-8601 day start.
fn parse_date(value: &str, flag: &str) -> Result<String> {
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| anyhow!("{flag} must be in YYYY-MM-DD format"))?;
    Ok(date.and_time(NaiveTime::MIN).format(ISO_FORMAT).to_string())
}

/// ISO-8601 range covering the last `days` days, ending now.
fn last_days_range(days: i64) -> (String, String) {
    let end = Utc::now().naive_utc();
    let start = end - Duration::days(days);
    (
        start.format(ISO_FORMAT).to_string(),
        end.format(ISO_FORMAT).to_string(),
    )
}
