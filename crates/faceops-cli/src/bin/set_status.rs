//! faceops-set — Set one profile's active status by name.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use faceops_api::{ApiClient, ApiConfig};
use faceops_core::reconcile::find_by_name;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "faceops-set", about = "Update a single profile's status in the face recognition API")]
struct Cli {
    /// Name of the profile to update (case-insensitive)
    name: String,
    /// Status to set
    #[arg(value_enum)]
    status: Status,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Status {
    Active,
    Inactive,
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

    if let Err(e) = run(cli, config).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: ApiConfig) -> Result<()> {
    let client = ApiClient::new(config)?;
    let desired = matches!(cli.status, Status::Active);

    println!("Looking for profile: {}", cli.name);
    let profiles = client
        .get_all_profiles()
        .await
        .context("could not fetch profiles from API")?;

    let Some(profile) = find_by_name(&profiles, &cli.name) else {
        println!("Profile '{}' not found", cli.name);
        println!("\nAvailable profiles:");
        for p in &profiles {
            println!("  - {}", p.name);
        }
        std::process::exit(1);
    };

    println!("Found profile: {}", profile.name);
    println!("Current status: {}", status_word(profile.active));
    println!("Target status: {}", status_word(desired));

    if profile.active == desired {
        println!(
            "Profile is already {}. No changes needed.",
            status_word(desired).to_lowercase()
        );
        return Ok(());
    }

    client
        .set_profile_active(&profile.id, desired)
        .await
        .with_context(|| format!("failed to update profile '{}'", profile.name))?;

    println!(
        "Successfully {} profile '{}'",
        if desired { "activated" } else { "deactivated" },
        profile.name
    );
    Ok(())
}

fn status_word(active: bool) -> &'static str {
    if active {
        "Active"
    } else {
        "Inactive"
    }
}
