use chrono::{DateTime, Utc};
use serde_json::{json, Value};

use crate::{
	constants::SORT_DIRECTIONS,
	object::{ensure_allowed, process_response},
	Result,
};

package!(Comments);

impl Comments {
	/// Comments on a single issue.
	pub async fn get_list(
		&self,
		owner: &str,
		repo: &str,
		issue: u64,
		page: u32,
		limit: u32,
	) -> Result<Value> {
		let path =
			format!("/repos/{}/{}/issues/{}/comments", owner, repo, issue);
		let url = self.object.fetch_url(&path, page, limit)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}

	/// Comments on every issue of a repository. `direction` is only sent
	/// together with `sort`.
	pub async fn get_repository_list(
		&self,
		owner: &str,
		repo: &str,
		sort: Option<&str>,
		direction: Option<&str>,
		since: Option<DateTime<Utc>>,
		page: u32,
		limit: u32,
	) -> Result<Value> {
		let mut query = Vec::new();
		if let Some(sort) = sort {
			ensure_allowed("sort", sort, &["created", "updated"])?;
			query.push(("sort", sort.to_string()));

			if let Some(direction) = direction {
				ensure_allowed("direction", direction, &SORT_DIRECTIONS)?;
				query.push(("direction", direction.to_string()));
			}
		}
		if let Some(since) = since {
			query.push(("since", since.to_rfc3339()));
		}

		let path = format!("/repos/{}/{}/issues/comments", owner, repo);
		let url = self.object.fetch_url_with(&path, &query, page, limit)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}

	pub async fn get(&self, owner: &str, repo: &str, id: u64) -> Result<Value> {
		let path = format!("/repos/{}/{}/issues/comments/{}", owner, repo, id);
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
		let path = format!("/repos/{}/{}/issues/comments/{}", owner, repo, id);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.patch(url, &json!({ "body": body })).await?;
		process_response(&response, 200)
	}

	pub async fn create(
		&self,
		owner: &str,
		repo: &str,
		issue: u64,
		body: &str,
	) -> Result<Value> {
		let path =
			format!("/repos/{}/{}/issues/{}/comments", owner, repo, issue);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.post(url, &json!({ "body": body })).await?;
		process_response(&response, 201)
	}

	pub async fn delete(
		&self,
		owner: &str,
		repo: &str,
		id: u64,
	) -> Result<Value> {
		let path = format!("/repos/{}/{}/issues/comments/{}", owner, repo, id);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.delete(url).await?;
		process_response(&response, 204)
	}
}

#[cfg(test)]
mod tests {
	use crate::testing;

	#[tokio::test]
	async fn get_repository_list_direction_needs_sort() {
		let (github, transport) = testing::github(200, testing::SAMPLE);
		let comments = github.issues().comments();

		comments
			.get_repository_list(
				"joomla",
				"joomla-platform",
				None,
				Some("asc"),
				None,
				0,
				0,
			)
			.await
			.unwrap();
		assert_eq!(
			transport.last_path(),
			"/repos/joomla/joomla-platform/issues/comments"
		);

		comments
			.get_repository_list(
				"joomla",
				"joomla-platform",
				Some("created"),
				Some("asc"),
				None,
				0,
				0,
			)
			.await
			.unwrap();
		assert_eq!(
			transport.last_path(),
			"/repos/joomla/joomla-platform/issues/comments?sort=created&direction=asc"
		);
	}

	#[tokio::test]
	async fn get_repository_list_rejects_sort() {
		let (github, _) = testing::github(200, testing::SAMPLE);

		let err = github
			.issues()
			.comments()
			.get_repository_list(
				"joomla",
				"joomla-platform",
				Some("color"),
				None,
				None,
				0,
				0,
			)
			.await
			.unwrap_err();

		assert_eq!(
			err.to_string(),
			"The sort value \"color\" is invalid. Allowed values are: created, updated"
		);
	}

	#[tokio::test]
	async fn create() {
		let (github, transport) = testing::github(201, testing::SAMPLE);

		github
			.issues()
			.comments()
			.create("joomla", "joomla-platform", 523, "My Insightful Comment")
			.await
			.unwrap();

		assert_eq!(
			transport.last_path(),
			"/repos/joomla/joomla-platform/issues/523/comments"
		);
		assert_eq!(
			transport.last_body().as_deref(),
			Some(r#"{"body":"My Insightful Comment"}"#)
		);
	}

	#[tokio::test]
	async fn delete_failure() {
		let (github, _) = testing::github(504, testing::ERROR);

		let err = github
			.issues()
			.comments()
			.delete("joomla", "joomla-platform", 254)
			.await
			.unwrap_err();

		assert_eq!(err.to_string(), "Generic Error");
	}
}
