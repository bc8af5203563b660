use serde_json::{json, Value};
use snafu::ensure;

use crate::{
	error,
	object::process_response,
	package::ensure_hook_events,
	Result,
};

package!(Hooks);

/// Settings of an organization webhook. Events default to `push`.
#[derive(Debug, Clone)]
pub struct OrgHook {
	pub url: String,
	/// `form` or `json`.
	pub content_type: String,
	pub secret: Option<String>,
	pub insecure_ssl: bool,
	pub events: Vec<String>,
	pub active: bool,
}

impl OrgHook {
	pub fn new<U: Into<String>, C: Into<String>>(
		url: U,
		content_type: C,
	) -> Self {
		Self {
			url: url.into(),
			content_type: content_type.into(),
			secret: None,
			insecure_ssl: false,
			events: vec!["push".to_string()],
			active: true,
		}
	}

	fn body(&self) -> Result<Value> {
		ensure!(
			self.content_type == "form" || self.content_type == "json",
			error::Validation {
				msg: "Content type must be either \"form\" or \"json\"."
			}
		);
		ensure_hook_events(&self.events)?;

		let mut config = json!({
			"url": self.url,
			"content_type": self.content_type,
			"insecure_ssl": if self.insecure_ssl { "1" } else { "0" },
		});
		if let Some(secret) = &self.secret {
			config["secret"] = json!(secret);
		}

		Ok(json!({
			"name": "web",
			"active": self.active,
			"events": self.events,
			"config": config,
		}))
	}
}

impl Hooks {
	pub async fn get_list(&self, org: &str) -> Result<Value> {
		let url = self.object.fetch_url(&format!("/orgs/{}/hooks", org), 0, 0)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}

	pub async fn get(&self, org: &str, id: u64) -> Result<Value> {
		let url = self
			.object
			.fetch_url(&format!("/orgs/{}/hooks/{}", org, id), 0, 0)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}

	pub async fn create(&self, org: &str, hook: &OrgHook) -> Result<Value> {
		let body = hook.body()?;
		let url = self.object.fetch_url(&format!("/orgs/{}/hooks", org), 0, 0)?;
		let response = self.object.post(url, &body).await?;
		process_response(&response, 201)
	}

	pub async fn edit(
		&self,
		org: &str,
		id: u64,
		hook: &OrgHook,
	) -> Result<Value> {
		let body = hook.body()?;
		let url = self
			.object
			.fetch_url(&format!("/orgs/{}/hooks/{}", org, id), 0, 0)?;
		let response = self.object.patch(url, &body).await?;
		process_response(&response, 200)
	}

	/// Asks GitHub to send a `ping` event to the hook.
	pub async fn ping(&self, org: &str, id: u64) -> Result<Value> {
		let url = self
			.object
			.fetch_url(&format!("/orgs/{}/hooks/{}/pings", org, id), 0, 0)?;
		let response = self
			.object
			.post_raw(url, Some(String::new()), &[])
			.await?;
		process_response(&response, 204)
	}

	pub async fn delete(&self, org: &str, id: u64) -> Result<Value> {
		let url = self
			.object
			.fetch_url(&format!("/orgs/{}/hooks/{}", org, id), 0, 0)?;
		let response = self.object.delete(url).await?;
		process_response(&response, 204)
	}
}
