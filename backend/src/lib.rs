use std::sync::Arc;

use axum::{
	extract::DefaultBodyLimit,
	routing::{get, post},
	Router
};
use tower_http::{services::ServeDir, trace::TraceLayer};

pub mod config;
pub mod email_body;
pub mod error;
pub mod mailer;
pub mod pages;
pub mod relay;

use config::{Config, EmailConfig};
use mailer::{Mailer, ResendMailer};

/// Everything a handler needs. None of it changes after startup.
#[derive(Clone)]
pub struct AppState {
	/// `None` when there's no API key to send with
	pub mailer: Option<Arc<dyn Mailer>>,
	pub email: Arc<EmailConfig>,
}

impl AppState {
	pub fn new(config: &Config) -> Self {
		let mailer = config.api_key.as_ref().map(|key| {
			Arc::new(ResendMailer::new(config.api_url.clone(), key.clone())) as Arc<dyn Mailer>
		});

		Self { mailer, email: Arc::new(config.email.clone()) }
	}
}

pub fn router(state: AppState, config: &Config) -> Router {
	Router::new()
		.route("/", get(pages::home::home_page))
		.route("/pricing", get(pages::pricing::pricing_page))
		.route("/about", get(pages::about::about_page))
		.route("/how-it-works", get(pages::how_it_works::how_it_works_page))
		.route("/api/contact", post(relay::contact::submit_contact))
		.route("/api/submit-form", post(relay::intake::submit_intake))
		.nest_service("/assets", ServeDir::new(&config.asset_dir))
		.fallback(pages::not_found)
		// axum only lets 2mb through by default, and the photos people upload are often bigger
		.layer(DefaultBodyLimit::max(config.upload_limit_bytes()))
		.layer(TraceLayer::new_for_http())
		.with_state(state)
}
