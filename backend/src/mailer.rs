use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Attachment {
	pub filename: String,
	/// base64 of the raw file bytes
	pub content: String,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct OutboundEmail {
	pub from: String,
	pub to: String,
	pub subject: String,
	pub html: String,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub attachments: Vec<Attachment>,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct SentEmail {
	#[serde(default)]
	pub id: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum SendError {
	#[error("Couldn't reach the email API: {0}")]
	Transport(#[from] reqwest::Error),
	#[error("Email API error: {message}")]
	Rejected {
		status: u16,
		message: String
	}
}

#[async_trait]
pub trait Mailer: Send + Sync {
	async fn send(&self, email: OutboundEmail) -> Result<SentEmail, SendError>;
}

#[derive(Deserialize)]
struct ErrorBody {
	message: Option<String>,
}

/// Talks to resend (or anything that speaks its `POST /emails` dialect)
pub struct ResendMailer {
	client: reqwest::Client,
	url: String,
	api_key: String,
}

impl ResendMailer {
	pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
		Self {
			client: reqwest::Client::new(),
			url: url.into(),
			api_key: api_key.into(),
		}
	}
}

#[async_trait]
impl Mailer for ResendMailer {
	async fn send(&self, email: OutboundEmail) -> Result<SentEmail, SendError> {
		let resp = self.client
			.post(&self.url)
			.bearer_auth(&self.api_key)
			.json(&email)
			.send()
			.await?;

		let status = resp.status();
		if status.is_success() {
			return Ok(resp.json::<SentEmail>().await?);
		}

		// they don't always give us json back when things go really wrong, so fall back to the
		// raw body, or the status if even that's empty
		let text = resp.text().await.unwrap_or_default();
		let message = serde_json::from_str::<ErrorBody>(&text)
			.ok()
			.and_then(|b| b.message)
			.or_else(|| (!text.trim().is_empty()).then(|| text.trim().to_string()))
			.unwrap_or_else(|| status.to_string());

		Err(SendError::Rejected { status: status.as_u16(), message })
	}
}

#[cfg(test)]
pub(crate) mod testing {
	use std::{collections::VecDeque, sync::Mutex};

	use super::*;

	pub(crate) enum Reply {
		Sent(&'static str),
		Rejected(&'static str),
	}

	/// Answers each send with the next scripted reply (and success once it runs out) and keeps
	/// everything it was asked to send
	#[derive(Default)]
	pub(crate) struct ScriptedMailer {
		replies: Mutex<VecDeque<Reply>>,
		sent: Mutex<Vec<OutboundEmail>>,
	}

	impl ScriptedMailer {
		pub(crate) fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
			Self {
				replies: Mutex::new(replies.into_iter().collect()),
				sent: Mutex::default(),
			}
		}

		pub(crate) fn sent(&self) -> Vec<OutboundEmail> {
			self.sent.lock().unwrap().clone()
		}
	}

	#[async_trait]
	impl Mailer for ScriptedMailer {
		async fn send(&self, email: OutboundEmail) -> Result<SentEmail, SendError> {
			self.sent.lock().unwrap().push(email);
			match self.replies.lock().unwrap().pop_front() {
				None => Ok(SentEmail { id: Some("scripted".into()) }),
				Some(Reply::Sent(id)) => Ok(SentEmail { id: Some(id.into()) }),
				Some(Reply::Rejected(message)) => Err(SendError::Rejected {
					status: 422,
					message: message.into()
				})
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use mockito::Matcher;
	use serde_json::json;

	use super::*;

	fn email() -> OutboundEmail {
		OutboundEmail {
			from: "JewelAI <onboarding@resend.dev>".into(),
			to: "a@b.co".into(),
			subject: "Hi".into(),
			html: "<p>Hi</p>".into(),
			attachments: vec![],
		}
	}

	#[tokio::test]
	async fn posts_json_with_bearer() {
		let mut server = mockito::Server::new_async().await;
		let mock = server.mock("POST", "/emails")
			.match_header("authorization", "Bearer re_test")
			.match_header("content-type", "application/json")
			.match_body(Matcher::Json(json!({
				"from": "JewelAI <onboarding@resend.dev>",
				"to": "a@b.co",
				"subject": "Hi",
				"html": "<p>Hi</p>"
			})))
			.with_status(200)
			.with_body(r#"{"id":"email_1"}"#)
			.create_async()
			.await;

		let mailer = ResendMailer::new(format!("{}/emails", server.url()), "re_test");
		let sent = mailer.send(email()).await.unwrap();

		assert_eq!(sent.id.as_deref(), Some("email_1"));
		mock.assert_async().await;
	}

	#[tokio::test]
	async fn sends_attachments() {
		let mut server = mockito::Server::new_async().await;
		let mock = server.mock("POST", "/emails")
			.match_body(Matcher::PartialJson(json!({
				"attachments": [{ "filename": "ring.png", "content": "cmluZw==" }]
			})))
			.with_status(200)
			.with_body(r#"{"id":"email_2"}"#)
			.create_async()
			.await;

		let mailer = ResendMailer::new(format!("{}/emails", server.url()), "re_test");
		let mut email = email();
		email.attachments.push(Attachment { filename: "ring.png".into(), content: "cmluZw==".into() });
		mailer.send(email).await.unwrap();

		mock.assert_async().await;
	}

	#[tokio::test]
	async fn rejection_uses_provider_message() {
		let mut server = mockito::Server::new_async().await;
		let _mock = server.mock("POST", "/emails")
			.with_status(403)
			.with_body(r#"{"statusCode":403,"message":"You can only send testing emails to your own address","name":"validation_error"}"#)
			.create_async()
			.await;

		let mailer = ResendMailer::new(format!("{}/emails", server.url()), "re_test");
		let err = mailer.send(email()).await.unwrap_err();

		assert!(matches!(err, SendError::Rejected { status: 403, .. }), "expected a rejection, got {err:?}");
		assert_eq!(err.to_string(), "Email API error: You can only send testing emails to your own address");
	}

	#[tokio::test]
	async fn rejection_without_json_body() {
		let mut server = mockito::Server::new_async().await;
		let _mock = server.mock("POST", "/emails")
			.with_status(502)
			.with_body("bad gateway")
			.create_async()
			.await;

		let mailer = ResendMailer::new(format!("{}/emails", server.url()), "re_test");
		let err = mailer.send(email()).await.unwrap_err();
		assert!(matches!(err, SendError::Rejected { status: 502, ref message } if message == "bad gateway"));
	}

	#[tokio::test]
	async fn unreachable_is_transport() {
		// nothing listens on port 9 on any box we run tests on
		let mailer = ResendMailer::new("http://127.0.0.1:9/emails", "re_test");
		let err = mailer.send(email()).await.unwrap_err();
		assert!(matches!(err, SendError::Transport(_)));
	}
}
