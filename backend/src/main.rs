use backend::{config::Config, router};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	// RUST_LOG may well be in .env, so that has to be loaded before the subscriber looks for it
	_ = dotenv::dotenv();

	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
		.init();

	let config = Config::from_env();

	if !config.index_html().is_file() {
		error!(
			"FRONTEND_DIST ({}) doesn't contain an index.html; build the frontend with `trunk build` \
			and point FRONTEND_DIST at its dist/ directory before running the server.",
			config.frontend_dist.display()
		);
		return Ok(());
	}

	info!("Serving the frontend from {}", config.frontend_dist.display());
	info!("WhatsApp: {}, phone: {}", config.contact.whatsapp, config.contact.phone);

	let listener = tokio::net::TcpListener::bind(config.addr).await?;

	info!("Serving axum on {}...", config.addr);

	axum::serve(listener, router(config)).await?;

	Ok(())
}
