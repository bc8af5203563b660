use serde_json::{json, Value};

use crate::{object::process_response, Result};

package!(Comments);

impl Comments {
	pub async fn create(&self, gist_id: &str, body: &str) -> Result<Value> {
		let path = format!("/gists/{}/comments", gist_id);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.post(url, &json!({ "body": body })).await?;
		process_response(&response, 201)
	}

	pub async fn delete(&self, comment_id: u64) -> Result<Value> {
		let path = format!("/gists/comments/{}", comment_id);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.delete(url).await?;
		process_response(&response, 204)
	}

	pub async fn edit(&self, comment_id: u64, body: &str) -> Result<Value> {
		let path = format!("/gists/comments/{}", comment_id);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.patch(url, &json!({ "body": body })).await?;
		process_response(&response, 200)
	}

	pub async fn get(&self, comment_id: u64) -> Result<Value> {
		let path = format!("/gists/comments/{}", comment_id);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}

	pub async fn get_list(
		&self,
		gist_id: &str,
		page: u32,
		limit: u32,
	) -> Result<Value> {
		let path = format!("/gists/{}/comments", gist_id);
		let url = self.object.fetch_url(&path, page, limit)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}
}
