use serde_json::{json, Value};

use crate::{object::process_response, Result};

package!(Trees);

impl Trees {
	pub async fn get(
		&self,
		owner: &str,
		repo: &str,
		sha: &str,
	) -> Result<Value> {
		let path = format!("/repos/{}/{}/git/trees/{}", owner, repo, sha);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}

	pub async fn get_recursively(
		&self,
		owner: &str,
		repo: &str,
		sha: &str,
	) -> Result<Value> {
		let path = format!("/repos/{}/{}/git/trees/{}", owner, repo, sha);
		let url =
			self.object
				.fetch_url_with(
					&path,
					&[("recursive", "1".to_string())],
					0,
					0,
				)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}

	/// Creates a tree from `tree` entries, optionally on top of `base_tree`.
	pub async fn create(
		&self,
		owner: &str,
		repo: &str,
		tree: &Value,
		base_tree: Option<&str>,
	) -> Result<Value> {
		let mut body = json!({ "tree": tree });
		if let Some(base_tree) = base_tree.filter(|base| !base.is_empty()) {
			body["base_tree"] = json!(base_tree);
		}

		let path = format!("/repos/{}/{}/git/trees", owner, repo);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.post(url, &body).await?;
		process_response(&response, 201)
	}
}
