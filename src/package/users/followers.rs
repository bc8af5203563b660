use serde_json::Value;

use crate::{
	object::{presence, process_response},
	Result,
};

package!(Followers);

fn user_path(user: Option<&str>, tail: &str) -> String {
	match user.filter(|user| !user.is_empty()) {
		Some(user) => format!("/users/{}/{}", user, tail),
		None => format!("/user/{}", tail),
	}
}

impl Followers {
	/// Followers of `user`, or of the authenticated user.
	pub async fn get_list(&self, user: Option<&str>) -> Result<Value> {
		let url = self.object.fetch_url(&user_path(user, "followers"), 0, 0)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}

	/// Users followed by `user`, or by the authenticated user.
	pub async fn get_list_followed_by(
		&self,
		user: Option<&str>,
	) -> Result<Value> {
		let url = self.object.fetch_url(&user_path(user, "following"), 0, 0)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}

	/// Whether the authenticated user follows `user`.
	pub async fn check(&self, user: &str) -> Result<bool> {
		let url = self
			.object
			.fetch_url(&format!("/user/following/{}", user), 0, 0)?;
		let response = self.object.get(url).await?;
		presence(&response, 204)
	}

	pub async fn follow(&self, user: &str) -> Result<Value> {
		let url = self
			.object
			.fetch_url(&format!("/user/following/{}", user), 0, 0)?;
		let response = self.object.put_raw(url, Some(String::new())).await?;
		process_response(&response, 204)
	}

	pub async fn unfollow(&self, user: &str) -> Result<Value> {
		let url = self
			.object
			.fetch_url(&format!("/user/following/{}", user), 0, 0)?;
		let response = self.object.delete(url).await?;
		process_response(&response, 204)
	}

	/// Whether `user` follows `target`.
	pub async fn check_user_following(
		&self,
		user: &str,
		target: &str,
	) -> Result<bool> {
		let url = self
			.object
			.fetch_url(&format!("/users/{}/following/{}", user, target), 0, 0)?;
		let response = self.object.get(url).await?;
		presence(&response, 204)
	}
}

#[cfg(test)]
mod tests {
	use crate::{http::HttpMethod, testing};

	#[tokio::test]
	async fn get_lists() {
		let (github, transport) = testing::github(200, "[]");
		let followers = github.users().followers();

		followers.get_list(None).await.unwrap();
		assert_eq!(transport.last_path(), "/user/followers");

		followers.get_list(Some("joomla")).await.unwrap();
		assert_eq!(transport.last_path(), "/users/joomla/followers");

		followers.get_list(Some("")).await.unwrap();
		assert_eq!(transport.last_path(), "/user/followers");

		followers.get_list_followed_by(None).await.unwrap();
		assert_eq!(transport.last_path(), "/user/following");

		followers.get_list_followed_by(Some("joomla")).await.unwrap();
		assert_eq!(transport.last_path(), "/users/joomla/following");
	}

	#[tokio::test]
	async fn check() {
		let (github, _) = testing::github(204, "");
		assert!(github.users().followers().check("joomla").await.unwrap());

		let (github, _) = testing::github(404, "");
		assert!(!github.users().followers().check("joomla").await.unwrap());

		let (github, _) = testing::github(666, "");
		let err = github.users().followers().check("joomla").await.unwrap_err();
		assert_eq!(err.to_string(), "Unexpected response code: 666");
	}

	#[tokio::test]
	async fn follow_and_unfollow() {
		let (github, transport) = testing::github(204, "");
		let followers = github.users().followers();

		followers.follow("joomla").await.unwrap();
		assert_eq!(transport.last_request().method, HttpMethod::Put);
		assert_eq!(transport.last_path(), "/user/following/joomla");

		followers.unfollow("joomla").await.unwrap();
		assert_eq!(transport.last_request().method, HttpMethod::Delete);
	}

	#[tokio::test]
	async fn check_user_following() {
		let (github, transport) = testing::github(404, "");

		let follows = github
			.users()
			.followers()
			.check_user_following("octocat", "joomla")
			.await
			.unwrap();

		assert!(!follows);
		assert_eq!(transport.last_path(), "/users/octocat/following/joomla");
	}
}
