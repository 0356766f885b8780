use horrorshow::{html, Template};
use shared_data::{ContactSubmission, IntakeForm, SUPPORT_EMAIL};

use crate::{error::RelayError, mailer::{Attachment, OutboundEmail}};

const NOT_SPECIFIED: &str = "Not specified";

fn or_not_specified(s: &str) -> &str {
	if s.is_empty() { NOT_SPECIFIED } else { s }
}

pub fn contact_notification(
	sub: &ContactSubmission,
	from: &str,
	to: &str
) -> Result<OutboundEmail, RelayError> {
	let html = html! {
		h2 : "New Contact Form Submission";
		p {
			strong : "Name:";
			: " ";
			: &sub.name;
		}
		@ if !sub.restaurant.is_empty() {
			p {
				strong : "Business:";
				: " ";
				: &sub.restaurant;
			}
		}
		@ if !sub.city.is_empty() {
			p {
				strong : "City:";
				: " ";
				: &sub.city;
			}
		}
		p {
			strong : "Message:";
		}
		p {
			@ for (idx, line) in sub.message.split('\n').enumerate() {
				@ if idx != 0 {
					br;
				}
				: line;
			}
		}
	}.into_string().map_err(|e| RelayError::Render(e.to_string()))?;

	Ok(OutboundEmail {
		from: from.into(),
		to: to.into(),
		subject: format!("New Contact Form Submission from {}", sub.name),
		html,
		attachments: vec![],
	})
}

pub fn intake_notification(
	form: &IntakeForm,
	attachment: Option<Attachment>,
	from: &str,
	to: &str
) -> Result<OutboundEmail, RelayError> {
	let filename = attachment.as_ref().map(|a| a.filename.as_str());

	let html = html! {
		h2 : "New JewelAI Image Request";
		p {
			strong : "Customer Email:";
			: " ";
			: &form.email;
		}
		@ if !form.phone.is_empty() {
			p {
				strong : "Phone:";
				: " ";
				: &form.phone;
			}
		}
		p {
			strong : "Image Usage:";
			br;
			: or_not_specified(&form.usage);
		}
		p {
			strong : "Specific Requirements:";
			br;
			: or_not_specified(&form.specifics);
		}
		@ if let Some(name) = filename {
			p {
				strong : "Attached File:";
				: " ";
				: name;
			}
		}
	}.into_string().map_err(|e| RelayError::Render(e.to_string()))?;

	Ok(OutboundEmail {
		from: from.into(),
		to: to.into(),
		subject: format!("New JewelAI Request from {}", form.email),
		html,
		attachments: attachment.into_iter().collect(),
	})
}

pub fn confirmation(form: &IntakeForm, from: &str) -> Result<OutboundEmail, RelayError> {
	let html = html! {
		h2 : "Thank you for your request!";
		p : "Hi there,";
		p : "We've received your jewellery image and will process your AI-generated photos within 24 hours.";
		p {
			strong : "What's next:";
		}
		ul {
			li : "Our AI is analyzing your image";
			li : "You'll receive a free sample within 24 hours";
			li {
				: "We'll email you at ";
				: &form.email;
				: " when it's ready";
			}
		}
		p {
			: "Questions? Reply to this email or contact us at ";
			: SUPPORT_EMAIL;
		}
		p {
			: "Best regards,";
			br;
			: "The JewelAI Team";
		}
	}.into_string().map_err(|e| RelayError::Render(e.to_string()))?;

	Ok(OutboundEmail {
		from: from.into(),
		to: form.email.clone(),
		subject: "Your JewelAI Request is Confirmed".into(),
		html,
		attachments: vec![],
	})
}
