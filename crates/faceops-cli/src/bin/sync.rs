//! faceops-sync — Reconcile every profile's active status against a CSV of
//! active names.

use anyhow::Result;
use faceops_api::{ApiClient, ApiConfig};
use faceops_core::namelist::read_active_names;
use faceops_core::reconcile::{desired_active, plan, ReconcileAction, SyncStats};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Fixed input file, by operator convention.
const ACTIVE_NAMES_CSV: &str = "active_names.csv";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match ApiConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let outcome = tokio::select! {
        result = run(config) => result,
        _ = tokio::signal::ctrl_c() => {
            println!("\nOperation cancelled by user");
            std::process::exit(1);
        }
    };

    if let Err(e) = outcome {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(config: ApiConfig) -> Result<()> {
    println!("=== Profile Status Sync ===");
    let client = ApiClient::new(config)?;

    let active_names = match read_active_names(Path::new(ACTIVE_NAMES_CSV)) {
        Ok(names) => names,
        Err(e) => {
            println!("{e}");
            println!("No names found in CSV file. Exiting.");
            return Ok(());
        }
    };
    if active_names.is_empty() {
        println!("No names found in CSV file. Exiting.");
        return Ok(());
    }
    println!("Read {} names from {}", active_names.len(), ACTIVE_NAMES_CSV);

    let profiles = client.get_all_profiles().await?;
    if profiles.is_empty() {
        println!("No profiles found in account. Exiting.");
        return Ok(());
    }
    println!("Found {} profiles in account", profiles.len());

    let mut stats = SyncStats::default();
    for step in plan(&profiles, &active_names) {
        let profile = &step.profile;
        let desired = desired_active(&profile.name, &active_names);

        println!("\nProcessing: {}", profile.name);
        println!("  Current status: {}", status_word(profile.active));
        println!("  Should be: {}", status_word(desired));

        match step.action {
            ReconcileAction::Skip => {
                println!("  Already in correct state - skipping");
                stats.record(step.action, true);
            }
            action => match client.set_profile_active(&profile.id, desired).await {
                Ok(()) => {
                    println!("  Successfully {}", action_word(action));
                    stats.record(action, true);
                }
                Err(e) => {
                    println!("  Failed to update: {e}");
                    stats.record(action, false);
                }
            },
        }
    }

    println!("\n=== Summary ===");
    println!("Profiles activated: {}", stats.activated);
    println!("Profiles deactivated: {}", stats.deactivated);
    println!("Profiles skipped (already correct): {}", stats.skipped);
    println!("Errors: {}", stats.errors);
    println!("Total processed: {}", stats.total());
    Ok(())
}

fn status_word(active: bool) -> &'static str {
    if active {
        "Active"
    } else {
        "Inactive"
    }
}

fn action_word(action: ReconcileAction) -> &'static str {
    match action {
        ReconcileAction::Activate => "activated",
        ReconcileAction::Deactivate => "deactivated",
        ReconcileAction::Skip => "skipped",
    }
}
