use axum::{
    extract::DefaultBodyLimit,
    routing::get,
    Router,
};
use configuration::{Config, ServerSettings, ValidationSettings};
use database::{
    GolfCourseRepository, InMemoryGolfCourseRepository, InMemoryTournamentRepository,
    PgGolfCourseRepository, PgTournamentRepository, TournamentRepository,
};
use services::{GolfCourseService, TournamentService};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer, ExposeHeaders},
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;

/// The shared application state that all handlers can access.
#[derive(Clone)]
pub struct AppState {
    pub tournaments: TournamentService,
    pub golf_courses: GolfCourseService,
}

impl AppState {
    pub fn new(
        tournament_repo: Arc<dyn TournamentRepository>,
        golf_course_repo: Arc<dyn GolfCourseRepository>,
        validation: &ValidationSettings,
    ) -> Self {
        Self {
            tournaments: TournamentService::new(tournament_repo)
                .with_rules_enforced(validation.enforce_tournament_rules),
            golf_courses: GolfCourseService::new(golf_course_repo),
        }
    }

    /// State backed by process-local storage; nothing survives a restart.
    pub fn in_memory(validation: &ValidationSettings) -> Self {
        Self::new(
            Arc::new(InMemoryTournamentRepository::new()),
            Arc::new(InMemoryGolfCourseRepository::new()),
            validation,
        )
    }

    /// Connects to PostgreSQL, applies migrations and wires the repositories.
    pub async fn postgres(config: &Config) -> anyhow::Result<Self> {
        let pool = database::connect(&config.database).await?;
        database::run_migrations(&pool).await?;
        Ok(Self::new(
            Arc::new(PgTournamentRepository::new(pool.clone())),
            Arc::new(PgGolfCourseRepository::new(pool)),
            &config.validation,
        ))
    }
}

/// Builds the full router: API routes plus CORS, request tracing and the body limit.
pub fn app(state: AppState, settings: &ServerSettings) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any())
        .expose_headers(ExposeHeaders::any());

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route(
            "/api/v1/tournaments",
            get(handlers::tournaments::get_all_tournaments)
                .post(handlers::tournaments::add_tournament),
        )
        .route(
            "/api/v1/tournaments/findByName",
            get(handlers::tournaments::find_by_name),
        )
        .route(
            "/api/v1/tournaments/findByDate",
            get(handlers::tournaments::find_by_date),
        )
        .route(
            "/api/v1/tournaments/:id",
            get(handlers::tournaments::get_tournament)
                .put(handlers::tournaments::update_tournament)
                .delete(handlers::tournaments::delete_tournament),
        )
        .route(
            "/api/v1/golfcourses",
            get(handlers::golf_courses::get_all_golf_courses)
                .post(handlers::golf_courses::add_golf_course),
        )
        .route(
            "/api/v1/golfcourses/findByName",
            get(handlers::golf_courses::find_by_name),
        )
        .route(
            "/api/v1/golfcourses/:id",
            get(handlers::golf_courses::get_golf_course)
                .delete(handlers::golf_courses::delete_golf_course),
        )
        .with_state(Arc::new(state))
        .layer(cors)
        // Logs every incoming request and its response status.
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(settings.body_limit_bytes))
}

/// Serves `app` on an already bound listener until Ctrl-C.
pub async fn serve(listener: TcpListener, app: Router) -> anyhow::Result<()> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("Web server stopped.");
    Ok(())
}

/// Binds the configured address and serves the API.
pub async fn run_server(settings: &ServerSettings, state: AppState) -> anyhow::Result<()> {
    let addr = settings.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Web server listening on http://{}", listener.local_addr()?);

    serve(listener, app(state, settings)).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal.");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received.");
}
