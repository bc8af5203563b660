use serde_json::{json, Value};

use crate::{object::process_response, Result};

package!(Forks);

impl Forks {
	/// Forks a repository into the authenticated user's account, or into
	/// `org`. GitHub creates forks asynchronously and answers 202.
	pub async fn create(
		&self,
		owner: &str,
		repo: &str,
		org: Option<&str>,
	) -> Result<Value> {
		let body = match org.filter(|org| !org.is_empty()) {
			Some(org) => json!({ "org": org }),
			None => json!({}),
		};

		let path = format!("/repos/{}/{}/forks", owner, repo);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.post(url, &body).await?;
		process_response(&response, 202)
	}

	pub async fn get_list(
		&self,
		owner: &str,
		repo: &str,
		page: u32,
		limit: u32,
	) -> Result<Value> {
		let path = format!("/repos/{}/{}/forks", owner, repo);
		let url = self.object.fetch_url(&path, page, limit)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}
}
