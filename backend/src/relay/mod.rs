use crate::{
	error::RelayError,
	mailer::{SendError, SentEmail}
};

pub mod contact;
pub mod intake;

/// What actually went out for one submission
#[derive(Debug, PartialEq, Eq)]
pub struct Delivery {
	pub primary: SentEmail,
	pub confirmation: Option<SentEmail>,
}

/// Log the outcome of a send we don't care enough about to fail a request over
pub fn best_effort(what: &'static str, res: Result<SentEmail, SendError>) -> Option<SentEmail> {
	match res {
		Ok(sent) => {
			tracing::info!(id = ?sent.id, "Sent {what}");
			Some(sent)
		},
		Err(e) => {
			tracing::warn!(error = %e, "Couldn't send {what}");
			None
		}
	}
}

/// The primary send decides whether the request worked. The confirmation (which should only
/// exist if the primary went through) is only ever logged.
pub fn settle(
	primary: Result<SentEmail, SendError>,
	confirmation: Option<Result<SentEmail, SendError>>
) -> Result<Delivery, RelayError> {
	let primary = primary.map_err(RelayError::Upstream)?;
	tracing::info!(id = ?primary.id, "Sent intake notification");

	let confirmation = confirmation.and_then(|res| best_effort("customer confirmation", res));
	Ok(Delivery { primary, confirmation })
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use axum::{
		body::{to_bytes, Body},
		http::{header, Request, StatusCode},
		Router
	};
	use serde_json::{json, Value};
	use tower::ServiceExt;

	use super::*;
	use crate::{
		config::{Config, EmailConfig},
		mailer::{testing::{Reply, ScriptedMailer}, Mailer},
		router,
		AppState
	};

	const BOUNDARY: &str = "jewelai-test-boundary";

	fn sent(id: &str) -> SentEmail {
		SentEmail { id: Some(id.into()) }
	}

	fn rejected(message: &str) -> SendError {
		SendError::Rejected { status: 422, message: message.into() }
	}

	fn app(mailer: Option<Arc<ScriptedMailer>>) -> Router {
		let state = AppState {
			mailer: mailer.map(|m| m as Arc<dyn Mailer>),
			email: Arc::new(EmailConfig::default()),
		};
		router(state, &Config::from_lookup(|_| None))
	}

	fn multipart_body(texts: &[(&str, &str)], file: Option<(&str, &str, &[u8])>) -> Vec<u8> {
		let mut body = Vec::new();
		for (name, value) in texts {
			body.extend_from_slice(format!(
				"--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
			).as_bytes());
		}
		if let Some((filename, mime, bytes)) = file {
			body.extend_from_slice(format!(
				"--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\nContent-Type: {mime}\r\n\r\n"
			).as_bytes());
			body.extend_from_slice(bytes);
			body.extend_from_slice(b"\r\n");
		}
		body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
		body
	}

	async fn call(app: Router, req: Request<Body>) -> (StatusCode, Value) {
		let resp = app.oneshot(req).await.unwrap();
		let status = resp.status();
		let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
		(status, serde_json::from_slice(&bytes).unwrap())
	}

	async fn post_contact(app: Router, body: impl Into<Body>) -> (StatusCode, Value) {
		let req = Request::post("/api/contact")
			.header(header::CONTENT_TYPE, "application/json")
			.body(body.into())
			.unwrap();
		call(app, req).await
	}

	async fn post_intake(app: Router, body: Vec<u8>) -> (StatusCode, Value) {
		let req = Request::post("/api/submit-form")
			.header(header::CONTENT_TYPE, format!("multipart/form-data; boundary={BOUNDARY}"))
			.body(Body::from(body))
			.unwrap();
		call(app, req).await
	}

	#[test]
	fn settle_primary_failure_is_fatal() {
		let err = settle(Err(rejected("nope")), None).unwrap_err();
		assert!(matches!(err, RelayError::Upstream(SendError::Rejected { .. })));
	}

	#[test]
	fn settle_confirmation_failure_is_logged() {
		let delivery = settle(Ok(sent("1")), Some(Err(rejected("nope")))).unwrap();
		assert_eq!(delivery, Delivery { primary: sent("1"), confirmation: None });

		let delivery = settle(Ok(sent("1")), Some(Ok(sent("2")))).unwrap();
		assert_eq!(delivery.confirmation, Some(sent("2")));
	}

	#[tokio::test]
	async fn contact_ok() {
		let mailer = Arc::new(ScriptedMailer::default());
		let (status, body) = post_contact(app(Some(mailer.clone())), r#"{"name":"Al","message":"Hi"}"#).await;

		assert_eq!(status, StatusCode::OK);
		assert_eq!(body, json!({ "message": "Message sent successfully" }));

		let sent = mailer.sent();
		assert_eq!(sent.len(), 1);
		assert_eq!(sent[0].to, "hello@platedbyai.com");
		assert_eq!(sent[0].from, "JewelAI Contact Form <onboarding@resend.dev>");
		assert_eq!(sent[0].subject, "New Contact Form Submission from Al");
	}

	#[tokio::test]
	async fn contact_missing_fields_sends_nothing() {
		for body in [
			r#"{"name":"","message":"Hi"}"#,
			r#"{"name":"Al","message":""}"#,
			r#"{"name":"Al"}"#,
			r#"{"name":null,"message":"Hi","city":"Paris"}"#,
			"{}",
		] {
			let mailer = Arc::new(ScriptedMailer::default());
			let (status, resp) = post_contact(app(Some(mailer.clone())), body).await;

			assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
			assert_eq!(resp, json!({ "error": "Name and message are required" }));
			assert!(mailer.sent().is_empty());
		}
	}

	#[tokio::test]
	async fn contact_send_failure_still_ok() {
		let mailer = Arc::new(ScriptedMailer::new([Reply::Rejected("domain not verified")]));
		let (status, body) = post_contact(app(Some(mailer.clone())), r#"{"name":"Al","message":"Hi"}"#).await;

		assert_eq!(status, StatusCode::OK);
		assert_eq!(body["message"], "Message sent successfully");
		assert_eq!(mailer.sent().len(), 1);
	}

	#[tokio::test]
	async fn contact_without_key_still_ok() {
		let (status, body) = post_contact(app(None), r#"{"name":"Al","message":"Hi"}"#).await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(body["message"], "Message sent successfully");
	}

	#[tokio::test]
	async fn contact_garbage_body() {
		let (status, body) = post_contact(app(None), "this isn't json").await;
		assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
		assert_eq!(body, json!({ "error": "Failed to send message" }));
	}

	#[tokio::test]
	async fn intake_invalid_email_sends_nothing() {
		for email in ["not-an-email", "", "a@b", "a b@c.de"] {
			let mailer = Arc::new(ScriptedMailer::default());
			let body = multipart_body(&[("email", email), ("usage", "instagram")], None);
			let (status, resp) = post_intake(app(Some(mailer.clone())), body).await;

			assert_eq!(status, StatusCode::BAD_REQUEST, "{email:?}");
			assert_eq!(resp, json!({ "error": "Invalid email address" }));
			assert!(mailer.sent().is_empty());
		}
	}

	#[tokio::test]
	async fn intake_missing_email_field() {
		let body = multipart_body(&[("phone", "555-0100")], None);
		let (status, resp) = post_intake(app(None), body).await;
		assert_eq!(status, StatusCode::BAD_REQUEST);
		assert_eq!(resp["error"], "Invalid email address");
	}

	#[tokio::test]
	async fn intake_sends_both_with_attachment() {
		let mailer = Arc::new(ScriptedMailer::new([Reply::Sent("primary"), Reply::Sent("confirm")]));
		let body = multipart_body(
			&[("email", "a@b.co"), ("phone", "555-0100"), ("usage", "instagram"), ("specifics", "on a model")],
			Some(("ring.png", "image/png", b"ring"))
		);
		let (status, resp) = post_intake(app(Some(mailer.clone())), body).await;

		assert_eq!(status, StatusCode::OK);
		assert_eq!(resp, json!({ "message": "Form submitted successfully", "submittedEmail": "a@b.co" }));

		let sent = mailer.sent();
		assert_eq!(sent.len(), 2);

		assert_eq!(sent[0].to, "meezee@acquismart.com");
		assert_eq!(sent[0].subject, "New JewelAI Request from a@b.co");
		assert_eq!(sent[0].attachments.len(), 1);
		assert_eq!(sent[0].attachments[0].filename, "ring.png");
		assert_eq!(sent[0].attachments[0].content, "cmluZw==");

		assert_eq!(sent[1].to, "a@b.co");
		assert_eq!(sent[1].from, "JewelAI <onboarding@resend.dev>");
		assert!(sent[1].attachments.is_empty());
	}

	#[tokio::test]
	async fn intake_empty_file_part_is_no_file() {
		let mailer = Arc::new(ScriptedMailer::default());
		let body = multipart_body(&[("email", "a@b.co")], Some(("", "application/octet-stream", b"")));
		let (status, _) = post_intake(app(Some(mailer.clone())), body).await;

		assert_eq!(status, StatusCode::OK);
		assert!(mailer.sent()[0].attachments.is_empty());
	}

	#[tokio::test]
	async fn intake_primary_failure_skips_confirmation() {
		let mailer = Arc::new(ScriptedMailer::new([Reply::Rejected("API key is invalid")]));
		let body = multipart_body(&[("email", "a@b.co")], None);
		let (status, resp) = post_intake(app(Some(mailer.clone())), body).await;

		assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
		assert_eq!(resp, json!({
			"error": "Failed to send email. Please contact hello@platedbyai.com directly.",
			"details": "Email API error: API key is invalid"
		}));
		assert_eq!(mailer.sent().len(), 1);
	}

	#[tokio::test]
	async fn intake_confirmation_failure_still_ok() {
		let mailer = Arc::new(ScriptedMailer::new([Reply::Sent("primary"), Reply::Rejected("can't send there")]));
		let body = multipart_body(&[("email", "a@b.co")], None);
		let (status, resp) = post_intake(app(Some(mailer.clone())), body).await;

		assert_eq!(status, StatusCode::OK);
		assert_eq!(resp["submittedEmail"], "a@b.co");
		assert_eq!(mailer.sent().len(), 2);
	}

	#[tokio::test]
	async fn intake_without_key_still_ok() {
		let body = multipart_body(&[("email", "a@b.co")], Some(("ring.jpg", "image/jpeg", b"jpeg")));
		let (status, resp) = post_intake(app(None), body).await;

		assert_eq!(status, StatusCode::OK);
		assert_eq!(resp["submittedEmail"], "a@b.co");
	}

	#[tokio::test]
	async fn intake_not_multipart() {
		let req = Request::post("/api/submit-form")
			.header(header::CONTENT_TYPE, "application/json")
			.body(Body::from(r#"{"email":"a@b.co"}"#))
			.unwrap();
		let (status, resp) = call(app(None), req).await;

		assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
		assert_eq!(resp, json!({ "error": "Failed to process form submission" }));
	}
}
