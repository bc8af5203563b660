use std::{collections::HashMap, time::Duration};

use parking_lot::RwLock;

pub const API_URL: &str = "api.url";
pub const API_USERNAME: &str = "api.username";
pub const API_PASSWORD: &str = "api.password";
pub const API_TIMEOUT: &str = "api.timeout";
pub const TOKEN: &str = "gh.token";
pub const USER_AGENT: &str = "userAgent";

/// Key/value option store shared by every package of a `Github` instance.
///
/// Values are only written through `set`; request building reads them.
#[derive(Debug, Default)]
pub struct Options {
	values: RwLock<HashMap<String, String>>,
}

impl Options {
	pub fn new() -> Self {
		Self::default()
	}

	/// Reads the GitHub settings from the environment, loading `.env` first
	/// when one exists. Unset variables are left out of the store.
	pub fn from_env() -> Self {
		dotenv::dotenv().ok();

		let options = Self::new();
		for (var, key) in [
			("GITHUB_API_URL", API_URL),
			("GITHUB_USERNAME", API_USERNAME),
			("GITHUB_PASSWORD", API_PASSWORD),
			("GITHUB_TOKEN", TOKEN),
			("GITHUB_USER_AGENT", USER_AGENT),
			("GITHUB_TIMEOUT_SECS", API_TIMEOUT),
		] {
			if let Ok(value) = dotenv::var(var) {
				options.set(key, value);
			}
		}
		options
	}

	pub fn with<K: Into<String>, V: Into<String>>(
		self,
		key: K,
		value: V,
	) -> Self {
		self.set(key, value);
		self
	}

	/// Empty strings count as unset, matching how the API treats blank
	/// credentials.
	pub fn get(&self, key: &str) -> Option<String> {
		self.values
			.read()
			.get(key)
			.filter(|value| !value.is_empty())
			.cloned()
	}

	pub fn set<K: Into<String>, V: Into<String>>(&self, key: K, value: V) {
		self.values.write().insert(key.into(), value.into());
	}

	pub fn remove(&self, key: &str) -> Option<String> {
		self.values.write().remove(key)
	}

	pub fn contains(&self, key: &str) -> bool {
		self.get(key).is_some()
	}

	/// The API root without a trailing slash, so request paths can be
	/// appended as they are.
	pub fn api_url(&self) -> String {
		self.get(API_URL)
			.map(|url| url.trim_end_matches('/').to_string())
			.unwrap_or_else(|| crate::constants::DEFAULT_API_URL.to_string())
	}

	pub fn username(&self) -> Option<String> {
		self.get(API_USERNAME)
	}

	pub fn password(&self) -> Option<String> {
		self.get(API_PASSWORD)
	}

	pub fn token(&self) -> Option<String> {
		self.get(TOKEN)
	}

	pub fn user_agent(&self) -> String {
		self.get(USER_AGENT)
			.unwrap_or_else(|| crate::constants::DEFAULT_USER_AGENT.to_string())
	}

	/// Request timeout in seconds. Values that are not a positive integer are
	/// ignored.
	pub fn timeout(&self) -> Option<Duration> {
		self.get(API_TIMEOUT)
			.and_then(|secs| secs.parse::<u64>().ok())
			.filter(|secs| *secs > 0)
			.map(Duration::from_secs)
	}
}
