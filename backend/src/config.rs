use std::net::{IpAddr, Ipv4Addr, SocketAddr};

macro_rules! dotenv_num{
	($lookup:expr, $key:expr, $default:expr, $type:ident) => {
		$lookup($key)
			.and_then(|v| v.parse::<$type>().ok())
			.unwrap_or($default)
	}
}

pub const DEFAULT_EMAIL_API_URL: &str = "https://api.resend.com/emails";

/// Who the relays send as and to. Everything here has a sensible default so that a bare
/// `RESEND_API_KEY` is enough to get mail flowing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailConfig {
	pub contact_inbox: String,
	pub intake_inbox: String,
	pub contact_from: String,
	pub intake_from: String,
	pub confirmation_from: String,
}

impl Default for EmailConfig {
	fn default() -> Self {
		Self {
			contact_inbox: shared_data::SUPPORT_EMAIL.into(),
			intake_inbox: "meezee@acquismart.com".into(),
			contact_from: "JewelAI Contact Form <onboarding@resend.dev>".into(),
			intake_from: "JewelAI Form <onboarding@resend.dev>".into(),
			confirmation_from: "JewelAI <onboarding@resend.dev>".into(),
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
	pub host: IpAddr,
	pub port: u16,
	pub asset_dir: String,
	pub upload_limit_mb: usize,
	/// `None` means we don't send anything at all; the relays still answer as if they had
	pub api_key: Option<String>,
	pub api_url: String,
	pub email: EmailConfig,
}

impl Config {
	pub fn from_env() -> Self {
		Self::from_lookup(|key| dotenv::var(key).ok())
	}

	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
		// an empty var is treated the same as one that isn't there
		let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
		let or = |key: &str, default: &str| var(key).unwrap_or_else(|| default.to_string());

		let defaults = EmailConfig::default();

		Self {
			host: dotenv_num!(var, "BACKEND_HOST", IpAddr::V4(Ipv4Addr::LOCALHOST), IpAddr),
			port: dotenv_num!(var, "BACKEND_PORT", 8080, u16),
			asset_dir: or("ASSET_DIR", "frontend/dist"),
			upload_limit_mb: dotenv_num!(var, "UPLOAD_LIMIT_MB", 12, usize),
			api_key: var("RESEND_API_KEY"),
			api_url: or("EMAIL_API_URL", DEFAULT_EMAIL_API_URL),
			email: EmailConfig {
				contact_inbox: or("CONTACT_INBOX", &defaults.contact_inbox),
				intake_inbox: or("INTAKE_INBOX", &defaults.intake_inbox),
				contact_from: or("CONTACT_FROM", &defaults.contact_from),
				intake_from: or("INTAKE_FROM", &defaults.intake_from),
				confirmation_from: or("CONFIRMATION_FROM", &defaults.confirmation_from),
			}
		}
	}

	#[must_use]
	pub fn addr(&self) -> SocketAddr {
		SocketAddr::new(self.host, self.port)
	}

	#[must_use]
	pub fn upload_limit_bytes(&self) -> usize {
		self.upload_limit_mb.saturating_mul(1024 * 1024)
	}
}
