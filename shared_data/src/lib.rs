use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};

pub mod carousel;
pub mod wizard;

pub use carousel::{Carousel, Gallery, Slide};

/// Where customers are told to write to when something goes wrong
pub const SUPPORT_EMAIL: &str = "hello@platedbyai.com";

/// The only mime types the intake wizard will take. `image/jpg` isn't real but some browsers
/// still hand it to us
pub const ACCEPTED_IMAGE_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/jpg"];

/// Names of the multipart fields that `/api/submit-form` reads
pub mod fields {
	pub const EMAIL: &str = "email";
	pub const PHONE: &str = "phone";
	pub const USAGE: &str = "usage";
	pub const SPECIFICS: &str = "specifics";
	pub const FILE: &str = "file";
}

// this is a literal, so the only way it can fail is if someone edits it badly
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(||
	Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
);

/// Same check on both sides of the wire, so the wizard never lets through something the relay
/// would reject (or the other way around)
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
	EMAIL_PATTERN.is_match(email)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
	#[error("Name and message are required")]
	MissingNameOrMessage,
	#[error("Invalid email address")]
	InvalidEmail,
}

// `null` and a missing key both just mean "empty" for us
fn null_as_empty<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
	Option::<String>::deserialize(de).map(Option::unwrap_or_default)
}

/// What the contact form on the about page sends to `/api/contact`
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactSubmission {
	#[serde(default, deserialize_with = "null_as_empty")]
	pub name: String,
	// this is the store/business name; the key is kept as-is since that's what the form has
	// always posted
	#[serde(default, deserialize_with = "null_as_empty")]
	pub restaurant: String,
	#[serde(default, deserialize_with = "null_as_empty")]
	pub city: String,
	#[serde(default, deserialize_with = "null_as_empty")]
	pub message: String,
}

impl ContactSubmission {
	pub fn validate(&self) -> Result<(), ValidationError> {
		if self.name.is_empty() || self.message.is_empty() {
			Err(ValidationError::MissingNameOrMessage)
		} else {
			Ok(())
		}
	}
}

/// The text half of an intake request. The file, if there is one, travels next to it as its own
/// multipart part.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct IntakeForm {
	pub email: String,
	pub phone: String,
	pub usage: String,
	pub specifics: String,
}

impl IntakeForm {
	pub fn validate(&self) -> Result<(), ValidationError> {
		if is_valid_email(&self.email) {
			Ok(())
		} else {
			Err(ValidationError::InvalidEmail)
		}
	}

	#[must_use]
	pub fn text_fields(&self) -> [(&'static str, &str); 4] {
		[
			(fields::EMAIL, &self.email),
			(fields::PHONE, &self.phone),
			(fields::USAGE, &self.usage),
			(fields::SPECIFICS, &self.specifics),
		]
	}

	/// Returns false if `name` isn't one of our text fields
	pub fn set_field(&mut self, name: &str, value: String) -> bool {
		let slot = match name {
			fields::EMAIL => &mut self.email,
			fields::PHONE => &mut self.phone,
			fields::USAGE => &mut self.usage,
			fields::SPECIFICS => &mut self.specifics,
			_ => return false
		};
		*slot = value;
		true
	}
}

/// Metadata about the image picked in the wizard. The bytes themselves stay in the browser until
/// we actually submit.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
	pub name: String,
	pub mime: String,
}

impl SelectedFile {
	pub fn new(name: impl Into<String>, mime: impl Into<String>) -> Self {
		Self { name: name.into(), mime: mime.into() }
	}

	#[must_use]
	pub fn is_accepted(&self) -> bool {
		ACCEPTED_IMAGE_TYPES.contains(&self.mime.as_str())
	}
}
