use web_server::AppState;

// This main function is the entry point when running `cargo run -p web-server`.
// It serves the API against PostgreSQL using ./config.toml and GOLFCLUB__* overrides.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = configuration::load_config(None)?;
    let _log_guard = configuration::init_tracing(&config.logging)?;

    let state = AppState::postgres(&config).await?;
    web_server::run_server(&config.server, state).await
}
