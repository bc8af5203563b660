use serde_json::{json, Value};

use crate::{
	error,
	object::{decode_body, error_message},
	Result,
};

package!(Merging);

impl Merging {
	/// Merges `head` into `base` and returns the merge commit.
	pub async fn perform(
		&self,
		owner: &str,
		repo: &str,
		base: &str,
		head: &str,
		commit_message: Option<&str>,
	) -> Result<Value> {
		let mut body = json!({ "base": base, "head": head });
		if let Some(message) = commit_message.filter(|m| !m.is_empty()) {
			body["commit_message"] = json!(message);
		}

		let path = format!("/repos/{}/{}/merges", owner, repo);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.post(url, &body).await?;

		let message = match response.status {
			201 => return decode_body(&response.body),
			204 => "Nothing to merge".to_string(),
			404 => error_message(&response)
				.unwrap_or_else(
					|| format!("Missing base or head: {}", response.status),
				),
			409 => error_message(&response)
				.unwrap_or_else(
					|| format!("Merge conflict {}", response.status),
				),
			status => format!("Unexpected response code: {}", status),
		};
		log::warn!("Merging {} into {} failed: {}", head, base, message);
		error::UnexpectedResponse {
			status: response.status,
			message,
		}
		.fail()
	}
}
