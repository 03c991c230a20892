use clap::{Parser, Subcommand, ValueEnum};
use importer::{
    ImporterError, RosterFile, RosterTransformer, RosterValidator,
    roster::{load_roster, save_roster},
};
use std::path::{Path, PathBuf};
use storage::{
    dto::{
        ranking::{LeaderboardFilter, RankingOrder},
        team::TeamMetric,
    },
    models::{Category, Distance, Gender},
    repository::ParticipantStore,
    services::{
        ScoringTable, TeamCriterion, TeamQuota, assemble_teams, build_leaderboard,
        build_overall_leaderboard, check_order,
    },
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "relay-import")]
#[command(about = "Participant roster importer and ranking tool", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Scoring table JSON; the built-in table is used when absent
    #[arg(long, env = "SCORING_CONFIG")]
    scoring_config: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a roster file without loading it
    Validate { file: PathBuf },
    /// Print a ranking for a roster file
    Leaderboard {
        file: PathBuf,

        #[arg(long)]
        gender: Option<Gender>,

        #[arg(long)]
        category: Option<Category>,

        #[arg(long)]
        distance: Option<Distance>,

        #[arg(long, value_enum, default_value_t = Order::Points)]
        order: Order,

        /// Rank by the sum of best points per distance instead
        #[arg(long)]
        overall: bool,
    },
    /// Assemble affiliation squads from a roster file
    Teams {
        file: PathBuf,

        #[arg(long, default_value_t = 2)]
        males: usize,

        #[arg(long, default_value_t = 2)]
        females: usize,

        #[arg(long)]
        distance: Option<Distance>,

        #[arg(long, value_enum, default_value_t = Order::Points)]
        metric: Order,
    },
    /// Merge every roster in a directory and write the combined export
    BulkImport {
        #[arg(long, default_value = "./imports")]
        directory: PathBuf,

        #[arg(long, default_value = "./imports/merged.json")]
        output: PathBuf,

        #[arg(long)]
        validate_only: bool,
    },
    /// Rewrite a roster with freshly computed points
    Export {
        file: PathBuf,

        #[arg(long)]
        output: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Order {
    Points,
    Time,
}

impl From<Order> for RankingOrder {
    fn from(order: Order) -> Self {
        match order {
            Order::Points => RankingOrder::Points,
            Order::Time => RankingOrder::Time,
        }
    }
}

impl From<Order> for TeamMetric {
    fn from(order: Order) -> Self {
        match order {
            Order::Points => TeamMetric::Points,
            Order::Time => TeamMetric::Time,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("import={},importer={},storage={}", log_level, log_level, log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let scoring = match &cli.scoring_config {
        Some(path) => {
            tracing::info!("Loading scoring table from: {}", path.display());
            ScoringTable::from_path(path)?
        }
        None => ScoringTable::default(),
    };

    match cli.command {
        Commands::Validate { file } => {
            handle_validate(&file).await?;
        }
        Commands::Leaderboard {
            file,
            gender,
            category,
            distance,
            order,
            overall,
        } => {
            let filter = LeaderboardFilter {
                gender,
                category,
                distance,
            };
            handle_leaderboard(&file, scoring, filter, order.into(), overall).await?;
        }
        Commands::Teams {
            file,
            males,
            females,
            distance,
            metric,
        } => {
            handle_teams(&file, scoring, males, females, distance, metric.into()).await?;
        }
        Commands::BulkImport {
            directory,
            output,
            validate_only,
        } => {
            handle_bulk_import(&directory, &output, validate_only, scoring).await?;
        }
        Commands::Export { file, output } => {
            let store = load_store(&file, scoring).await?;
            save_roster(&RosterFile::from_participants(store.list()), &output).await?;
            tracing::info!("Exported {} participants to: {}", store.len(), output.display());
        }
    }

    Ok(())
}

async fn handle_validate(file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Loading roster from: {}", file.display());
    let roster = load_roster(file).await?;

    tracing::info!(
        "Loaded {} participants (v{})",
        roster.participants.len(),
        roster.format_version
    );

    let validation_report = RosterValidator::validate(&roster)?;
    validation_report.log_warnings();
    tracing::info!("✓ Validation successful!");

    Ok(())
}

/// Validates a roster and loads it into a fresh store scored with `scoring`.
async fn load_store(
    file: &Path,
    scoring: ScoringTable,
) -> Result<ParticipantStore, Box<dyn std::error::Error>> {
    let roster = load_roster(file).await?;
    RosterValidator::validate(&roster)?.log_warnings();

    let mut store = ParticipantStore::new(scoring);
    RosterTransformer::new(&mut store).import_to_store(&roster)?;

    Ok(store)
}

async fn handle_leaderboard(
    file: &Path,
    scoring: ScoringTable,
    filter: LeaderboardFilter,
    order: RankingOrder,
    overall: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !overall {
        check_order(&filter, order)?;
    }
    let store = load_store(file, scoring).await?;

    if overall {
        for entry in build_overall_leaderboard(store.list(), &filter) {
            println!(
                "{:>3}. {:<28} {:<20} {:>4} pts",
                entry.rank, entry.name, entry.team, entry.total_points
            );
        }
        return Ok(());
    }

    for entry in build_leaderboard(store.list(), &filter, order) {
        println!(
            "{:>3}. {:<28} {:<20} {:<6} {:>10} {:>4} pts",
            entry.rank,
            entry.name,
            entry.team,
            entry.distance,
            entry.time,
            entry.points
        );
    }

    Ok(())
}

async fn handle_teams(
    file: &Path,
    scoring: ScoringTable,
    males: usize,
    females: usize,
    distance: Option<Distance>,
    metric: TeamMetric,
) -> Result<(), Box<dyn std::error::Error>> {
    let quota = TeamQuota::new(males, females)?;
    let criterion = TeamCriterion::new(metric, distance)?;
    let precision = scoring.precision();
    let store = load_store(file, scoring).await?;

    let assembly = assemble_teams(store.list(), quota, criterion, precision);

    for team in &assembly.teams {
        let total = match (&team.total_points, &team.total_time) {
            (Some(points), _) => format!("{} pts", points),
            (None, Some(time)) => time.clone(),
            (None, None) => String::new(),
        };
        println!("{:>3}. {:<24} {}", team.rank, team.team, total);
        for member in &team.members {
            println!("       - {} ({})", member.name, member.gender);
        }
    }

    if !assembly.unassigned.is_empty() {
        tracing::info!("{} participant(s) not placed in a team", assembly.unassigned.len());
    }

    Ok(())
}

async fn handle_bulk_import(
    directory: &Path,
    output: &Path,
    validate_only: bool,
    scoring: ScoringTable,
) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Scanning directory for roster JSON files: {}", directory.display());

    let mut json_files = Vec::new();
    let mut entries = tokio::fs::read_dir(directory).await?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.is_dir() {
            let mut sub_entries = tokio::fs::read_dir(&path).await?;
            while let Some(sub_entry) = sub_entries.next_entry().await? {
                let sub_path = sub_entry.path();
                if sub_path.extension().is_some_and(|ext| ext == "json") {
                    json_files.push(sub_path);
                }
            }
        } else if path.extension().is_some_and(|ext| ext == "json") && path != output {
            json_files.push(path);
        }
    }

    if json_files.is_empty() {
        tracing::warn!("No JSON files found in {}", directory.display());
        return Ok(());
    }

    json_files.sort();
    tracing::info!("Found {} roster JSON file(s)", json_files.len());

    let mut store = ParticipantStore::new(scoring);
    let mut success_count = 0;
    let mut error_count = 0;

    for (idx, file_path) in json_files.iter().enumerate() {
        tracing::info!("[{}/{}] Processing: {}", idx + 1, json_files.len(), file_path.display());

        match process_roster_file(file_path, validate_only, &mut store).await {
            Ok(_) => {
                success_count += 1;
                tracing::info!("  ✓ Success");
            }
            Err(e) => {
                error_count += 1;
                tracing::error!("  ✗ Error: {}", e);
            }
        }
    }

    tracing::info!("Summary: {} succeeded, {} failed", success_count, error_count);

    if error_count > 0 {
        return Err(ImporterError::ImportError(format!(
            "{} file(s) failed to import",
            error_count
        ))
        .into());
    }

    if !validate_only {
        save_roster(&RosterFile::from_participants(store.list()), output).await?;
        tracing::info!("Wrote {} participants to: {}", store.len(), output.display());
    }

    Ok(())
}

async fn process_roster_file(
    file_path: &Path,
    validate_only: bool,
    store: &mut ParticipantStore,
) -> Result<(), Box<dyn std::error::Error>> {
    let roster = load_roster(file_path).await?;

    let validation_report = RosterValidator::validate(&roster)?;

    if !validation_report.warnings.is_empty() {
        for warning in &validation_report.warnings {
            tracing::warn!("  {}", warning);
        }
    }

    if !validate_only {
        let summary = RosterTransformer::new(store).import_to_store(&roster)?;
        tracing::info!(
            "  {} created, {} updated, {} results",
            summary.created,
            summary.updated,
            summary.results
        );
    }

    Ok(())
}
