use serde::Serialize;
use serde_json::{json, Value};

use crate::{
	object::process_response,
	package::ensure_hook_events,
	Result,
};

package!(Hooks);

/// New settings for a repository hook. Every field is sent.
#[derive(Debug, Clone, Serialize)]
pub struct HookEdit {
	pub name: String,
	pub config: Value,
	pub events: Vec<String>,
	pub add_events: Vec<String>,
	pub remove_events: Vec<String>,
	pub active: bool,
}

impl Hooks {
	pub async fn get_list(&self, owner: &str, repo: &str) -> Result<Value> {
		let path = format!("/repos/{}/{}/hooks", owner, repo);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}

	pub async fn get(&self, owner: &str, repo: &str, id: u64) -> Result<Value> {
		let path = format!("/repos/{}/{}/hooks/{}", owner, repo, id);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}

	/// Creates a hook for service `name` (`web` for plain webhooks) with
	/// the service specific `config`.
	pub async fn create(
		&self,
		owner: &str,
		repo: &str,
		name: &str,
		config: &Value,
		events: &[&str],
		active: bool,
	) -> Result<Value> {
		ensure_hook_events(events)?;

		let body = json!({
			"name": name,
			"config": config,
			"events": events,
			"active": active,
		});

		let path = format!("/repos/{}/{}/hooks", owner, repo);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.post(url, &body).await?;
		process_response(&response, 201)
	}

	pub async fn edit(
		&self,
		owner: &str,
		repo: &str,
		id: u64,
		edit: &HookEdit,
	) -> Result<Value> {
		ensure_hook_events(&edit.events)?;
		ensure_hook_events(&edit.add_events)?;
		ensure_hook_events(&edit.remove_events)?;

		let path = format!("/repos/{}/{}/hooks/{}", owner, repo, id);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.patch(url, edit).await?;
		process_response(&response, 200)
	}

	pub async fn delete(
		&self,
		owner: &str,
		repo: &str,
		id: u64,
	) -> Result<Value> {
		let path = format!("/repos/{}/{}/hooks/{}", owner, repo, id);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.delete(url).await?;
		process_response(&response, 204)
	}

	/// Triggers the hook with the latest push to the repository.
	pub async fn test(
		&self,
		owner: &str,
		repo: &str,
		id: u64,
	) -> Result<Value> {
		let path = format!("/repos/{}/{}/hooks/{}/tests", owner, repo, id);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.post(url, &json!({})).await?;
		process_response(&response, 204)
	}

	pub async fn ping(
		&self,
		owner: &str,
		repo: &str,
		id: u64,
	) -> Result<Value> {
		let path = format!("/repos/{}/{}/hooks/{}/pings", owner, repo, id);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.post(url, &json!({})).await?;
		process_response(&response, 204)
	}
}
