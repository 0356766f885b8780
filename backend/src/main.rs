use backend::{config::Config, router, AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| EnvFilter::new("backend=info,tower_http=info"))
		)
		.init();

	let config = Config::from_env();

	if config.api_key.is_none() {
		tracing::warn!("RESEND_API_KEY is not set; submissions will be accepted but no email will be sent");
	}

	tracing::info!(assets = %config.asset_dir, "Serving assets");

	let state = AppState::new(&config);
	let app = router(state, &config);

	let addr = config.addr();
	let listener = tokio::net::TcpListener::bind(addr).await?;

	tracing::info!(%addr, "Serving axum...");

	axum::serve(listener, app).await?;

	Ok(())
}
