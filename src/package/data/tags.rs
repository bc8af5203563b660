use serde::Serialize;
use serde_json::{json, Value};

use crate::{object::process_response, Result};

package!(Tags);

/// Author of an annotated tag.
#[derive(Debug, Clone, Serialize)]
pub struct Tagger {
	pub name: String,
	pub email: String,
	/// ISO 8601 timestamp.
	pub date: String,
}

impl Tags {
	pub async fn get(
		&self,
		owner: &str,
		repo: &str,
		sha: &str,
	) -> Result<Value> {
		let path = format!("/repos/{}/{}/git/tags/{}", owner, repo, sha);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}

	/// Creates an annotated tag object pointing at `object` of kind
	/// `object_type` (`commit`, `tree` or `blob`).
	pub async fn create(
		&self,
		owner: &str,
		repo: &str,
		tag: &str,
		message: &str,
		object: &str,
		object_type: &str,
		tagger: &Tagger,
	) -> Result<Value> {
		let body = json!({
			"tag": tag,
			"message": message,
			"object": object,
			"type": object_type,
			"tagger": tagger,
		});

		let path = format!("/repos/{}/{}/git/tags", owner, repo);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.post(url, &body).await?;
		process_response(&response, 201)
	}
}
