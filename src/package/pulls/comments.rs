use serde_json::{json, Value};

use crate::{object::process_response, Result};

package!(Comments);

impl Comments {
	/// Comments on `position` of `path` in the diff of `commit_id`.
	pub async fn create(
		&self,
		owner: &str,
		repo: &str,
		pull: u64,
		body: &str,
		commit_id: &str,
		path: &str,
		position: u64,
	) -> Result<Value> {
		let url = self.object.fetch_url(
			&format!("/repos/{}/{}/pulls/{}/comments", owner, repo, pull),
			0,
			0,
		)?;
		let body = json!({
			"body": body,
			"commit_id": commit_id,
			"path": path,
			"position": position,
		});
		let response = self.object.post(url, &body).await?;
		process_response(&response, 201)
	}

	pub async fn create_reply(
		&self,
		owner: &str,
		repo: &str,
		pull: u64,
		body: &str,
		in_reply_to: u64,
	) -> Result<Value> {
		let url = self.object.fetch_url(
			&format!("/repos/{}/{}/pulls/{}/comments", owner, repo, pull),
			0,
			0,
		)?;
		let response = self
			.object
			.post(url, &json!({ "body": body, "in_reply_to": in_reply_to }))
			.await?;
		process_response(&response, 201)
	}

	pub async fn delete(
		&self,
		owner: &str,
		repo: &str,
		id: u64,
	) -> Result<Value> {
		let path = format!("/repos/{}/{}/pulls/comments/{}", owner, repo, id);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.delete(url).await?;
		process_response(&response, 204)
	}

	pub async fn edit(
		&self,
		owner: &str,
		repo: &str,
		id: u64,
		body: &str,
	) -> Result<Value> {
		let path = format!("/repos/{}/{}/pulls/comments/{}", owner, repo, id);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.patch(url, &json!({ "body": body })).await?;
		process_response(&response, 200)
	}

	pub async fn get(&self, owner: &str, repo: &str, id: u64) -> Result<Value> {
		let path = format!("/repos/{}/{}/pulls/comments/{}", owner, repo, id);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}

	pub async fn get_list(
		&self,
		owner: &str,
		repo: &str,
		pull: u64,
		page: u32,
		limit: u32,
	) -> Result<Value> {
		let path = format!("/repos/{}/{}/pulls/{}/comments", owner, repo, pull);
		let url = self.object.fetch_url(&path, page, limit)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}

	/// Review comments on every pull request of a repository.
	pub async fn get_list_for_repo(
		&self,
		owner: &str,
		repo: &str,
		page: u32,
		limit: u32,
	) -> Result<Value> {
		let path = format!("/repos/{}/{}/pulls/comments", owner, repo);
		let url = self.object.fetch_url(&path, page, limit)?;
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
			.pulls()
			.comments()
			.create(
				"joomla",
				"joomla-platform",
				1,
				"The Body",
				"abc1234",
				"path/to/file",
				254,
			)
			.await
			.unwrap();

		assert_eq!(
			transport.last_path(),
			"/repos/joomla/joomla-platform/pulls/1/comments"
		);
		assert_eq!(
			transport.last_body().as_deref(),
			Some(r#"{"body":"The Body","commit_id":"abc1234","path":"path/to/file","position":254}"#)
		);
	}

	#[tokio::test]
	async fn create_reply() {
		let (github, transport) = testing::github(201, testing::SAMPLE);

		github
			.pulls()
			.comments()
			.create_reply("joomla", "joomla-platform", 1, "The Body", 254)
			.await
			.unwrap();

		assert_eq!(
			transport.last_body().as_deref(),
			Some(r#"{"body":"The Body","in_reply_to":254}"#)
		);
	}

	#[tokio::test]
	async fn get_list_for_repo() {
		let (github, transport) = testing::github(200, testing::SAMPLE);

		github
			.pulls()
			.comments()
			.get_list_for_repo("joomla", "joomla-platform", 2, 50)
			.await
			.unwrap();

		assert_eq!(
			transport.last_path(),
			"/repos/joomla/joomla-platform/pulls/comments?page=2&per_page=50"
		);
	}

	#[tokio::test]
	async fn delete_failure() {
		let (github, _) = testing::github(500, testing::ERROR);

		let err = github
			.pulls()
			.comments()
			.delete("joomla", "joomla-platform", 254)
			.await
			.unwrap_err();

		assert_eq!(err.to_string(), "Generic Error");
	}
}
