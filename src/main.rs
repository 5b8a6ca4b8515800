use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use liftbook::config::Config;
use liftbook::stats::{self, SessionStats};
use liftbook::{csv, Store};

#[derive(Parser)]
#[command(name = "liftbook", version = env!("GIT_VERSION"))]
#[command(about = "Workout log: CSV export/import and history", long_about = None)]
struct Cli {
    /// Store directory (overrides LIFTBOOK_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export finished sessions as CSV
    Export {
        /// Print to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,
    },
    /// Import sessions from a CSV export
    Import { file: PathBuf },
    /// Show totals over the whole history
    Summary,
    /// Show every finished session containing an exercise
    History { exercise: String },
    /// Delete all data and reseed the default muscle groups
    Reset {
        #[arg(long)]
        yes: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "liftbook=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = Config::from_env();
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }

    tracing::debug!("Using store at {}", config.data_dir.display());
    let mut store = Store::open(&config.data_dir);

    match cli.command {
        Commands::Export { stdout: true } => println!("{}", csv::export_csv(&store)),
        Commands::Export { stdout: false } => {
            let path = csv::export_to_dir(&store, &config.export_dir)
                .with_context(|| format!("Cannot write export to {}", config.export_dir.display()))?;
            println!("{}", path.display());
        }
        Commands::Import { file } => {
            let result = csv::import_csv(&file, &mut store);
            println!("{}", result.summary());
            for error in &result.errors {
                eprintln!("  {error}");
            }
        }
        Commands::Summary => {
            let summary = stats::history_summary(&store);
            println!("Sessions:  {}", summary.sessions);
            println!("Sets:      {}", summary.sets);
            println!("Reps:      {}", summary.total_reps);
            println!("Volume:    {:.1}", summary.total_volume);
            println!("Exercises: {}", store.exercises().len());
            println!("Templates: {}", store.templates().len());
        }
        Commands::History { exercise } => {
            let Some(found) = store.find_exercise_by_name(&exercise) else {
                bail!("No exercise named {exercise:?}");
            };
            println!(
                "{} ({}, {})",
                found.name,
                found.category,
                store.muscle_group_names_joined(found)
            );
            for entry in store.sessions_for_exercise(found.id) {
                let session_stats = SessionStats::of(entry.session);
                println!(
                    "{}  {}  ({} sets total)",
                    csv::format_date(entry.session.start_date),
                    entry.session.template_name,
                    session_stats.set_count
                );
                for set in entry.sets {
                    println!(
                        "    #{} {} x {}{}",
                        set.set_number,
                        set.weight,
                        set.reps,
                        if set.completed { "" } else { " (not completed)" }
                    );
                }
            }
            if let Some(best) = stats::personal_best(&store, found.id) {
                println!("Best: {} x {} on {}", best.weight, best.reps, csv::format_date(best.date));
            }
        }
        Commands::Reset { yes } => {
            if !yes {
                bail!("Refusing to delete all data without --yes");
            }
            store.delete_all_data();
            println!("All data deleted");
        }
    }

    Ok(())
}
