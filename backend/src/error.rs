use axum::{
	http::StatusCode,
	response::{IntoResponse, Response},
	Json
};
use serde::Serialize;
use shared_data::{ValidationError, SUPPORT_EMAIL};

use crate::mailer::SendError;

/// Everything that can make a relay endpoint say no. Each variant knows what status it maps to
/// and what the client is allowed to see.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
	#[error(transparent)]
	Validation(#[from] ValidationError),
	/// The body couldn't be read. `public` is what the client sees; `reason` only goes to the log
	#[error("{public}")]
	Parse {
		public: &'static str,
		reason: String
	},
	#[error("Failed to send email. Please contact {} directly.", SUPPORT_EMAIL)]
	Upstream(#[source] SendError),
	#[error("Couldn't render email: {0}")]
	Render(String),
}

#[derive(Serialize)]
struct ErrorBody {
	error: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	details: Option<String>,
}

impl RelayError {
	pub fn parse(public: &'static str, reason: impl ToString) -> Self {
		Self::Parse { public, reason: reason.to_string() }
	}

	#[must_use]
	pub fn status(&self) -> StatusCode {
		match self {
			Self::Validation(_) => StatusCode::BAD_REQUEST,
			Self::Parse { .. } | Self::Upstream(_) | Self::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

impl IntoResponse for RelayError {
	fn into_response(self) -> Response {
		let status = self.status();

		match &self {
			Self::Validation(e) => tracing::info!(error = %e, "Rejected submission"),
			Self::Parse { reason, .. } => tracing::error!(%reason, "Couldn't read submission"),
			Self::Upstream(e) => tracing::error!(error = %e, "Primary email send failed"),
			Self::Render(e) => tracing::error!(error = %e, "Couldn't render email body"),
		}

		let details = match &self {
			Self::Upstream(e) => Some(e.to_string()),
			_ => None
		};

		let body = ErrorBody { error: self.to_string(), details };
		(status, Json(body)).into_response()
	}
}
