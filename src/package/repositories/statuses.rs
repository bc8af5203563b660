use serde_json::{json, Value};

use crate::{
	object::{ensure_allowed, process_response},
	Result,
};

package!(Statuses);

impl Statuses {
	/// Sets a commit status. `state` is `error`, `failure`, `pending` or
	/// `success`.
	pub async fn create(
		&self,
		owner: &str,
		repo: &str,
		sha: &str,
		state: &str,
		target_url: Option<&str>,
		description: Option<&str>,
		context: Option<&str>,
	) -> Result<Value> {
		ensure_allowed(
			"state",
			state,
			&["error", "failure", "pending", "success"],
		)?;

		let mut body = json!({ "state": state });
		for (key, value) in [
			("target_url", target_url),
			("description", description),
			("context", context),
		] {
			if let Some(value) = value {
				body[key] = json!(value);
			}
		}

		let path = format!("/repos/{}/{}/statuses/{}", owner, repo, sha);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.post(url, &body).await?;
		process_response(&response, 201)
	}

	pub async fn get_list(
		&self,
		owner: &str,
		repo: &str,
		sha: &str,
		page: u32,
		limit: u32,
	) -> Result<Value> {
		let path = format!("/repos/{}/{}/statuses/{}", owner, repo, sha);
		let url = self.object.fetch_url(&path, page, limit)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}

	/// The combined state of every status on `reference`.
	pub async fn get_combined_status(
		&self,
		owner: &str,
		repo: &str,
		reference: &str,
	) -> Result<Value> {
		let path =
			format!("/repos/{}/{}/commits/{}/status", owner, repo, reference);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}
}

#[cfg(test)]
mod tests {
	use crate::testing;

	#[tokio::test]
	async fn create() {
		let (github, transport) = testing::github(201, testing::SAMPLE);

		github
			.repositories()
			.statuses()
			.create(
				"joomla",
				"joomla-platform",
				"6dcb09b5b57875f334f61aebed695e2e4193db5e",
				"success",
				Some("http://example.com/my_url"),
				Some("Success is the only option - failure is not."),
				None,
			)
			.await
			.unwrap();

		assert_eq!(
			transport.last_path(),
			"/repos/joomla/joomla-platform/statuses/6dcb09b5b57875f334f61aebed695e2e4193db5e"
		);
		assert_eq!(
			transport.last_body().as_deref(),
			Some(concat!(
				r#"{"state":"success","target_url":"http://example.com/my_url","#,
				r#""description":"Success is the only option - failure is not."}"#
			))
		);
	}

	#[tokio::test]
	async fn create_rejects_state() {
		let (github, transport) = testing::github(201, testing::SAMPLE);

		let err = github
			.repositories()
			.statuses()
			.create(
				"joomla",
				"joomla-platform",
				"123abc",
				"INVALID",
				None,
				None,
				None,
			)
			.await
			.unwrap_err();

		assert!(err.is_validation());
		assert!(transport.requests().is_empty());
	}

	#[tokio::test]
	async fn get_combined_status() {
		let (github, transport) = testing::github(200, testing::SAMPLE);

		github
			.repositories()
			.statuses()
			.get_combined_status("joomla", "joomla-platform", "master")
			.await
			.unwrap();

		assert_eq!(
			transport.last_path(),
			"/repos/joomla/joomla-platform/commits/master/status"
		);
	}
}
