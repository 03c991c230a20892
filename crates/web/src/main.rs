use anyhow::Context;
use importer::{RosterTransformer, RosterValidator, roster::load_roster};
use storage::{Database, services::ScoringTable};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod routes;

use config::Config;
use features::{participants, rankings, roster, scoring, teams};

#[derive(OpenApi)]
#[openapi(
    paths(
        participants::handlers::list_participants,
        participants::handlers::get_participant,
        participants::handlers::create_participant,
        participants::handlers::update_participant,
        participants::handlers::delete_participant,
        participants::handlers::record_result,
        participants::handlers::delete_result,
        participants::handlers::get_history,
        scoring::handlers::get_scoring_table,
        scoring::handlers::replace_scoring_table,
        scoring::handlers::score_time,
        scoring::handlers::get_score_chart,
        scoring::handlers::recalculate_all,
        rankings::handlers::get_individual_ranking,
        rankings::handlers::get_overall_ranking,
        rankings::handlers::get_affiliation_standings,
        teams::handlers::get_teams,
        roster::handlers::import_roster,
        roster::handlers::export_roster,
    ),
    components(
        schemas(
            storage::dto::participant::ParticipantResponse,
            storage::dto::participant::CreateParticipantRequest,
            storage::dto::participant::UpdateParticipantRequest,
            storage::dto::participant::RecordResultRequest,
            storage::dto::participant::ParticipantHistoryResponse,
            storage::dto::participant::ImportSummary,
            storage::dto::scoring::ScoringTableResponse,
            storage::dto::scoring::DistanceReference,
            storage::dto::scoring::ScoringConfig,
            storage::dto::scoring::ReferenceClocks,
            storage::dto::scoring::ScoreRequest,
            storage::dto::scoring::ScoreResponse,
            storage::dto::scoring::ScoreChartRow,
            storage::dto::scoring::RecalculateResponse,
            storage::dto::ranking::RankingOrder,
            storage::dto::ranking::LeaderboardEntry,
            storage::dto::ranking::OverallEntry,
            storage::dto::ranking::DistanceScore,
            storage::dto::ranking::AffiliationStanding,
            storage::dto::team::TeamMetric,
            storage::dto::team::SquadMember,
            storage::dto::team::AssembledTeam,
            storage::dto::team::TeamAssemblyResponse,
            storage::dto::common::PaginationMeta,
            storage::models::Participant,
            storage::models::RaceResult,
            storage::models::Distance,
            storage::models::Gender,
            storage::models::Category,
            storage::services::TimePrecision,
            importer::RosterFile,
            importer::RosterParticipant,
            importer::RosterResult,
        )
    ),
    tags(
        (name = "participants", description = "Participant and result management"),
        (name = "scoring", description = "Scoring table and point computation"),
        (name = "rankings", description = "Leaderboards and affiliation standings"),
        (name = "teams", description = "Quota-based team assembly"),
        (name = "roster", description = "Roster import and export"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting relay scoring API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    let mut scoring = match &config.scoring_config {
        Some(path) => {
            tracing::info!("Loading scoring table from: {}", path.display());
            ScoringTable::from_path(path)
                .with_context(|| format!("Failed to load scoring table {}", path.display()))?
        }
        None => ScoringTable::default(),
    };
    if let Some(precision) = config.time_precision {
        scoring = scoring.with_precision(precision);
    }

    let db = Database::new(scoring).context("Failed to initialize participant store")?;

    if let Some(path) = &config.roster_file {
        tracing::info!("Loading roster from: {}", path.display());
        let roster = load_roster(path)
            .await
            .with_context(|| format!("Failed to read roster {}", path.display()))?;
        RosterValidator::validate(&roster)?.log_warnings();

        let mut store = db.write()?;
        let summary = RosterTransformer::new(&mut store).import_to_store(&roster)?;
        tracing::info!(
            "Roster loaded: {} participants, {} results",
            summary.created + summary.updated,
            summary.results
        );
    }

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);

    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let app = routes::router(db)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;
    axum::serve(listener, app).await?;

    Ok(())
}
