use tracing_subscriber::EnvFilter;

use raads_lambda::config::ApiConfig;
use raads_lambda::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = ApiConfig::from_env();
    let state = AppState::from_config(config)?;
    tracing::info!(service = %state.config.service_name, "starting scoring api");

    let app = raads_lambda::build_router(state);
    lambda_http::run(app).await.map_err(|e| eyre::eyre!(e))
}
