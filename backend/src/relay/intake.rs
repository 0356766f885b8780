use axum::{
	body::Bytes,
	extract::{multipart::MultipartRejection, Multipart, State},
	Json
};
use base64::{prelude::BASE64_STANDARD, Engine};
use serde::Serialize;
use shared_data::{fields, IntakeForm};

use crate::{email_body, error::RelayError, mailer::Attachment, AppState};

use super::settle;

const PARSE_ERROR: &str = "Failed to process form submission";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSubmitted {
	message: &'static str,
	submitted_email: String,
}

impl FormSubmitted {
	fn new(email: String) -> Self {
		Self { message: "Form submitted successfully", submitted_email: email }
	}
}

struct Upload {
	filename: String,
	bytes: Bytes,
}

impl Upload {
	fn into_attachment(self) -> Attachment {
		Attachment {
			filename: self.filename,
			content: BASE64_STANDARD.encode(&self.bytes),
		}
	}
}

async fn read_form(mut multipart: Multipart) -> Result<(IntakeForm, Option<Upload>), RelayError> {
	let mut form = IntakeForm::default();
	let mut upload = None;

	while let Some(field) = multipart.next_field()
		.await
		.map_err(|e| RelayError::parse(PARSE_ERROR, e))?
	{
		let Some(name) = field.name().map(str::to_owned) else {
			continue;
		};

		if name == fields::FILE {
			let filename = field.file_name().unwrap_or_default().to_owned();
			let bytes = field.bytes()
				.await
				.map_err(|e| RelayError::parse(PARSE_ERROR, e))?;

			// this is what browsers send when the input is there but nothing was picked
			if filename.is_empty() && bytes.is_empty() {
				continue;
			}

			let filename = if filename.is_empty() { "upload".to_owned() } else { filename };
			upload = Some(Upload { filename, bytes });
		} else {
			let value = field.text()
				.await
				.map_err(|e| RelayError::parse(PARSE_ERROR, e))?;

			if !form.set_field(&name, value) {
				tracing::debug!(field = %name, "Ignoring unknown intake field");
			}
		}
	}

	Ok((form, upload))
}

/// `POST /api/submit-form`. The operator notification has to go out for this to succeed; the
/// customer's confirmation is nice to have.
pub async fn submit_intake(
	State(state): State<AppState>,
	multipart: Result<Multipart, MultipartRejection>
) -> Result<Json<FormSubmitted>, RelayError> {
	let multipart = multipart.map_err(|e| RelayError::parse(PARSE_ERROR, e))?;
	let (form, upload) = read_form(multipart).await?;

	form.validate()?;

	let file_name = upload.as_ref().map(|u| u.filename.clone());

	if let Some(ref mailer) = state.mailer {
		let notification = email_body::intake_notification(
			&form,
			upload.map(Upload::into_attachment),
			&state.email.intake_from,
			&state.email.intake_inbox
		)?;
		let confirmation = email_body::confirmation(&form, &state.email.confirmation_from)?;

		let primary = mailer.send(notification).await;
		let confirmation = match primary {
			Ok(_) => Some(mailer.send(confirmation).await),
			Err(_) => None
		};

		settle(primary, confirmation)?;
	} else {
		tracing::warn!("RESEND_API_KEY not set; intake submission won't be emailed");
	}

	tracing::info!(
		email = %form.email,
		phone = %form.phone,
		usage = %form.usage,
		specifics = %form.specifics,
		file = ?file_name,
		"Form submission received"
	);

	Ok(Json(FormSubmitted::new(form.email)))
}
