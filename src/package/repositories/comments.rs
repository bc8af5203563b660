use serde_json::{json, Value};

use crate::{object::process_response, Result};

package!(
	/// Commit comments.
	Comments
);

impl Comments {
	/// Commit comments across the whole repository.
	pub async fn get_list_repository(
		&self,
		owner: &str,
		repo: &str,
		page: u32,
		limit: u32,
	) -> Result<Value> {
		let path = format!("/repos/{}/{}/comments", owner, repo);
		let url = self.object.fetch_url(&path, page, limit)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}

	/// Comments on the commit `sha`.
	pub async fn get_list(
		&self,
		owner: &str,
		repo: &str,
		sha: &str,
		page: u32,
		limit: u32,
	) -> Result<Value> {
		let path =
			format!("/repos/{}/{}/commits/{}/comments", owner, repo, sha);
		let url = self.object.fetch_url(&path, page, limit)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}

	pub async fn get(&self, owner: &str, repo: &str, id: u64) -> Result<Value> {
		let path = format!("/repos/{}/{}/comments/{}", owner, repo, id);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}

	pub async fn edit(
		&self,
		owner: &str,
		repo: &str,
		id: u64,
		body: &str,
	) -> Result<Value> {
		let path = format!("/repos/{}/{}/comments/{}", owner, repo, id);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.patch(url, &json!({ "body": body })).await?;
		process_response(&response, 200)
	}

	pub async fn delete(
		&self,
		owner: &str,
		repo: &str,
		id: u64,
	) -> Result<Value> {
		let path = format!("/repos/{}/{}/comments/{}", owner, repo, id);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.delete(url).await?;
		process_response(&response, 204)
	}

	pub async fn create(
		&self,
		owner: &str,
		repo: &str,
		sha: &str,
		body: &str,
		line: u64,
		path: &str,
		position: u64,
	) -> Result<Value> {
		let url = self.object.fetch_url(
			&format!("/repos/{}/{}/commits/{}/comments", owner, repo, sha),
			0,
			0,
		)?;
		let body = json!({
			"body": body,
			"path": path,
			"position": position,
			"line": line,
		});
		let response = self.object.post(url, &body).await?;
		process_response(&response, 201)
	}
}
