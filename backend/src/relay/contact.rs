use axum::{body::Bytes, extract::State, Json};
use serde::Serialize;
use shared_data::ContactSubmission;

use crate::{email_body, error::RelayError, AppState};

use super::best_effort;

const PARSE_ERROR: &str = "Failed to send message";

#[derive(Serialize)]
pub struct MessageSent {
	message: &'static str,
}

/// `POST /api/contact`. Once the submission is valid this always says it worked, whether or not
/// the email actually went anywhere.
pub async fn submit_contact(
	State(state): State<AppState>,
	body: Bytes
) -> Result<Json<MessageSent>, RelayError> {
	// taken as raw bytes so that a bad body is our error, not axum's 4xx
	let sub: ContactSubmission = serde_json::from_slice(&body)
		.map_err(|e| RelayError::parse(PARSE_ERROR, e))?;

	sub.validate()?;

	match state.mailer {
		None => tracing::warn!("RESEND_API_KEY not set; contact form submission won't be emailed"),
		Some(ref mailer) => match email_body::contact_notification(&sub, &state.email.contact_from, &state.email.contact_inbox) {
			Ok(email) => {
				best_effort("contact notification", mailer.send(email).await);
			},
			Err(e) => tracing::error!(error = %e, "Couldn't build contact notification"),
		}
	}

	tracing::info!(
		name = %sub.name,
		business = %sub.restaurant,
		city = %sub.city,
		message = %sub.message,
		"Contact form submission received"
	);

	Ok(Json(MessageSent { message: "Message sent successfully" }))
}
