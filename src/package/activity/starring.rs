use serde_json::Value;

use crate::{
	constants::SORT_DIRECTIONS,
	object::{ensure_allowed, presence_by_status, process_response},
	Result,
};

package!(Starring);

impl Starring {
	/// Users who starred a repository.
	pub async fn get_list(
		&self,
		owner: &str,
		repo: &str,
		page: u32,
		limit: u32,
	) -> Result<Value> {
		let path = format!("/repos/{}/{}/stargazers", owner, repo);
		let url = self.object.fetch_url(&path, page, limit)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}

	/// Repositories starred by `user`, or by the authenticated user when
	/// `None`.
	pub async fn get_repositories(
		&self,
		user: Option<&str>,
		sort: &str,
		direction: &str,
	) -> Result<Value> {
		ensure_allowed("sort", sort, &["created", "updated"])?;
		ensure_allowed("direction", direction, &SORT_DIRECTIONS)?;

		let path = match user.filter(|user| !user.is_empty()) {
			Some(user) => format!("/users/{}/starred", user),
			None => "/user/starred".to_string(),
		};
		let query =
			[("sort", sort.to_string()), ("direction", direction.to_string())];
		let url = self.object.fetch_url_with(&path, &query, 0, 0)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}

	/// Whether the authenticated user starred the repository.
	pub async fn check(&self, owner: &str, repo: &str) -> Result<bool> {
		let path = format!("/user/starred/{}/{}", owner, repo);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.get(url).await?;
		presence_by_status(&response, 204)
	}

	pub async fn star(&self, owner: &str, repo: &str) -> Result<Value> {
		let path = format!("/user/starred/{}/{}", owner, repo);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.put_raw(url, Some(String::new())).await?;
		process_response(&response, 204)
	}

	pub async fn unstar(&self, owner: &str, repo: &str) -> Result<Value> {
		let path = format!("/user/starred/{}/{}", owner, repo);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.delete(url).await?;
		process_response(&response, 204)
	}
}

#[cfg(test)]
mod tests {
	use crate::{http::HttpMethod, testing};

	#[tokio::test]
	async fn get_repositories_for_user() {
		let (github, transport) = testing::github(200, testing::SAMPLE);

		github
			.activity()
			.starring()
			.get_repositories(Some("joomla"), "updated", "asc")
			.await
			.unwrap();

		assert_eq!(
			transport.last_path(),
			"/users/joomla/starred?sort=updated&direction=asc"
		);
	}

	#[tokio::test]
	async fn get_repositories_rejects_sort() {
		let (github, transport) = testing::github(200, testing::SAMPLE);

		let err = github
			.activity()
			.starring()
			.get_repositories(None, "invalid", "asc")
			.await
			.unwrap_err();

		assert!(err.is_validation());
		assert!(transport.requests().is_empty());
	}

	#[tokio::test]
	async fn check() {
		let (github, _) = testing::github(204, "");
		assert!(
			github.activity().starring().check("joomla", "cms").await.unwrap()
		);

		let (github, _) = testing::github(404, "");
		assert!(
			!github.activity().starring().check("joomla", "cms").await.unwrap()
		);

		let (github, _) = testing::github(500, testing::ERROR);
		let err = github
			.activity()
			.starring()
			.check("joomla", "cms")
			.await
			.unwrap_err();
		assert_eq!(err.to_string(), "Unexpected response code: 500");
	}

	#[tokio::test]
	async fn star_sends_empty_body() {
		let (github, transport) = testing::github(204, "");

		github.activity().starring().star("joomla", "cms").await.unwrap();

		let request = transport.last_request();
		assert_eq!(request.method, HttpMethod::Put);
		assert_eq!(request.body.as_deref(), Some(""));
		assert_eq!(transport.last_path(), "/user/starred/joomla/cms");
	}
}
