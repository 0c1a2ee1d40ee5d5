use anyhow::Context;
use chrono::{Datelike, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use comfy_table::Table;
use configuration::ConfigArgs;
use core_types::{GolfCourse, Tournament};
use web_server::AppState;

/// The main entry point for the golf club management backend.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = cli
        .command
        .config_args()
        .load()
        .context("Failed to load configuration")?;
    let _log_guard =
        configuration::init_tracing(&config.logging).context("Failed to initialize logging")?;

    match cli.command {
        Commands::Serve(args) => {
            let state = if args.in_memory {
                tracing::warn!("Serving from in-memory storage; data is lost on exit.");
                AppState::in_memory(&config.validation)
            } else {
                AppState::postgres(&config).await?
            };
            web_server::run_server(&config.server, state).await?;
        }
        Commands::Migrate(_) => {
            let pool = database::connect(&config.database)
                .await
                .context("Failed to connect to the database")?;
            database::run_migrations(&pool)
                .await
                .context("Failed to run database migrations")?;
        }
        Commands::Seed(_) => {
            let state = AppState::postgres(&config).await?;
            handle_seed(&state).await?;
        }
    }

    Ok(())
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// REST backend for managing a golf club's tournaments and courses.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API.
    Serve(ServeArgs),
    /// Apply database migrations and exit.
    Migrate(ConfigArgs),
    /// Insert a small demo data set.
    Seed(ConfigArgs),
}

#[derive(Parser)]
struct ServeArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Keep all data in process memory instead of PostgreSQL.
    #[arg(long)]
    in_memory: bool,
}

impl Commands {
    fn config_args(&self) -> &ConfigArgs {
        match self {
            Commands::Serve(args) => &args.config,
            Commands::Migrate(args) | Commands::Seed(args) => args,
        }
    }
}

// ==============================================================================
// Seed Command Logic
// ==============================================================================

/// Inserts two upcoming tournaments and two courses, then prints what was stored.
async fn handle_seed(state: &AppState) -> anyhow::Result<()> {
    let next_year = Utc::now().year() + 1;
    let spring = NaiveDate::from_ymd_opt(next_year, 4, 12).context("invalid seed date")?;
    let autumn = NaiveDate::from_ymd_opt(next_year, 9, 20).context("invalid seed date")?;

    let mut tournaments = Table::new();
    tournaments.set_header(vec!["id", "tournament", "date"]);
    for tournament in [
        Tournament::new("Spring Championship", spring),
        Tournament::new("Autumn Classic", autumn),
    ] {
        let saved = state.tournaments.add_tournament(Some(tournament)).await?;
        tournaments.add_row(vec![
            display(saved.id),
            display(saved.name),
            display(saved.date),
        ]);
    }

    let mut courses = Table::new();
    courses.set_header(vec!["id", "course", "location"]);
    for course in [
        GolfCourse::new("Sunny Hills", "Mountain View"),
        GolfCourse::new("Green Valley", "Lake Side"),
    ] {
        let saved = state.golf_courses.save_golf_course(Some(course)).await?;
        courses.add_row(vec![
            display(saved.id),
            display(saved.name),
            display(saved.location),
        ]);
    }

    tracing::info!("Seed data inserted.");
    println!("{tournaments}");
    println!("{courses}");
    Ok(())
}

fn display<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
