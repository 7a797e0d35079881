use std::time::Duration;

use anyhow::Context;
use arena::{RandomOrgClient, Ring, random::DEFAULT_RANDOM_ORG_URL};
use clap::{Parser, Subcommand};
use storage::{
    Database,
    dto::{boxer::CreateBoxerRequest, leaderboard::SortBy},
    repository::{boxer::BoxerRepository, leaderboard::LeaderboardRepository},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "boxing-ring")]
#[command(about = "Boxer registry and fight simulator", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://boxing.db")]
    database_url: String,

    #[arg(long, env = "RANDOM_ORG_URL", default_value = DEFAULT_RANDOM_ORG_URL)]
    random_url: String,

    #[arg(long, env = "RANDOM_TIMEOUT_SECS", default_value_t = 5)]
    random_timeout_secs: u64,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new boxer
    Create {
        name: String,
        #[arg(long)]
        weight: i64,
        #[arg(long)]
        height: i64,
        #[arg(long)]
        reach: f64,
        #[arg(long)]
        age: i64,
    },
    /// Remove a boxer by id
    Delete { id: i64 },
    /// Show one boxer
    Get {
        #[command(flatten)]
        lookup: Lookup,
    },
    /// Show a boxer's fight and win counters
    Stats { id: i64 },
    /// Rank boxers that have fought at least once
    Leaderboard {
        #[arg(long, default_value = "wins")]
        sort_by: String,
    },
    /// Put two boxers in the ring and fight
    Fight { first: String, second: String },
}

#[derive(clap::Args)]
#[group(required = true, multiple = false)]
struct Lookup {
    #[arg(long)]
    id: Option<i64>,

    #[arg(long)]
    name: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "boxing_ring={},arena={},storage={}",
                    log_level, log_level, log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let db = Database::new(&cli.database_url)
        .await
        .context("Failed to open boxer database")?;
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;

    match cli.command {
        Commands::Create {
            name,
            weight,
            height,
            reach,
            age,
        } => {
            let req = CreateBoxerRequest::new(name, weight, height, reach, age);
            let boxer = BoxerRepository::new(db.pool()).create(&req).await?;
            println!("{}", serde_json::to_string_pretty(&boxer)?);
        }
        Commands::Delete { id } => {
            BoxerRepository::new(db.pool()).delete(id).await?;
            println!("Deleted boxer {}", id);
        }
        Commands::Get { lookup } => {
            let repo = BoxerRepository::new(db.pool());
            let boxer = if let Some(id) = lookup.id {
                repo.find_by_id(id).await?
            } else {
                let name = lookup.name.context("Either --id or --name is required")?;
                repo.find_by_name(&name).await?
            };
            println!("{}", serde_json::to_string_pretty(&boxer)?);
        }
        Commands::Stats { id } => {
            let (fights, wins) = BoxerRepository::new(db.pool()).stats(id).await?;
            println!("{}", serde_json::json!({ "id": id, "fights": fights, "wins": wins }));
        }
        Commands::Leaderboard { sort_by } => {
            let sort_by: SortBy = sort_by.parse()?;
            let entries = LeaderboardRepository::new(db.pool())
                .get_leaderboard(sort_by)
                .await?;
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        Commands::Fight { first, second } => {
            let random = RandomOrgClient::new(
                cli.random_url,
                Duration::from_secs(cli.random_timeout_secs),
            )?;
            tracing::debug!("Drawing fight randomness from {}", random.url());

            let repo = BoxerRepository::new(db.pool());
            let mut ring = Ring::new();
            ring.enter(repo.find_by_name(&first).await?)?;
            ring.enter(repo.find_by_name(&second).await?)?;

            let winner = ring.fight(db.pool(), &random).await?;
            println!("{} wins", winner);
        }
    }

    Ok(())
}
