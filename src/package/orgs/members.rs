use serde_json::{json, Value};

use crate::{
	object::{ensure_allowed, presence, process_response},
	Result,
};

package!(Members);

impl Members {
	/// Members of an organization. `None` when GitHub redirects, which it
	/// does when the requester is not a member.
	pub async fn get_list(&self, org: &str) -> Result<Option<Value>> {
		let url = self
			.object
			.fetch_url(&format!("/orgs/{}/members", org), 0, 0)?;
		let response = self.object.get(url).await?;
		match response.status {
			302 => Ok(None),
			_ => process_response(&response, 200).map(Some),
		}
	}

	/// Whether `user` is a member of `org`. A redirect, sent to non-members
	/// asking about someone else, also counts as not a member.
	pub async fn check(&self, org: &str, user: &str) -> Result<bool> {
		let path = format!("/orgs/{}/members/{}", org, user);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.get(url).await?;
		match response.status {
			302 => Ok(false),
			_ => presence(&response, 204),
		}
	}

	pub async fn remove(&self, org: &str, user: &str) -> Result<Value> {
		let path = format!("/orgs/{}/members/{}", org, user);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.delete(url).await?;
		process_response(&response, 204)
	}

	pub async fn get_list_public(&self, org: &str) -> Result<Value> {
		let url = self
			.object
			.fetch_url(&format!("/orgs/{}/public_members", org), 0, 0)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}

	pub async fn check_public(&self, org: &str, user: &str) -> Result<bool> {
		let path = format!("/orgs/{}/public_members/{}", org, user);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.get(url).await?;
		presence(&response, 204)
	}

	/// Makes the authenticated user's membership public.
	pub async fn publicize(&self, org: &str, user: &str) -> Result<Value> {
		let path = format!("/orgs/{}/public_members/{}", org, user);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.put_raw(url, Some(String::new())).await?;
		process_response(&response, 204)
	}

	pub async fn conceal(&self, org: &str, user: &str) -> Result<Value> {
		let path = format!("/orgs/{}/public_members/{}", org, user);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.delete(url).await?;
		process_response(&response, 204)
	}

	pub async fn get_membership(&self, org: &str, user: &str) -> Result<Value> {
		let path = format!("/orgs/{}/memberships/{}", org, user);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}

	/// Invites `user` or changes their role. `role` is `admin` or `member`.
	pub async fn update_membership(
		&self,
		org: &str,
		user: &str,
		role: &str,
	) -> Result<Value> {
		ensure_allowed("role", role, &["admin", "member"])?;

		let path = format!("/orgs/{}/memberships/{}", org, user);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.put(url, &json!({ "role": role })).await?;
		process_response(&response, 200)
	}

	pub async fn remove_membership(
		&self,
		org: &str,
		user: &str,
	) -> Result<Value> {
		let path = format!("/orgs/{}/memberships/{}", org, user);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.delete(url).await?;
		process_response(&response, 204)
	}

	/// Organization memberships of the authenticated user.
	pub async fn list_memberships(&self) -> Result<Value> {
		let url = self.object.fetch_url("/user/memberships/orgs", 0, 0)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}

	pub async fn list_organization_membership(
		&self,
		org: &str,
	) -> Result<Value> {
		let url = self
			.object
			.fetch_url(&format!("/user/memberships/orgs/{}", org), 0, 0)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}

	/// Accepts a pending invitation; `state` can only be `active`.
	pub async fn edit_organization_membership(
		&self,
		org: &str,
		state: &str,
	) -> Result<Value> {
		ensure_allowed("state", state, &["active"])?;

		let url = self
			.object
			.fetch_url(&format!("/user/memberships/orgs/{}", org), 0, 0)?;
		let response = self
			.object
			.patch(url, &json!({ "state": state }))
			.await?;
		process_response(&response, 200)
	}
}

#[cfg(test)]
mod tests {
	use crate::{http::HttpMethod, testing};

	#[tokio::test]
	async fn get_list() {
		let (github, transport) = testing::github(200, testing::SAMPLE);
		assert_eq!(
			github.orgs().members().get_list("joomla").await.unwrap(),
			Some(testing::sample())
		);
		assert_eq!(transport.last_path(), "/orgs/joomla/members");

		let (github, _) = testing::github(302, "");
		assert_eq!(
			github.orgs().members().get_list("joomla").await.unwrap(),
			None
		);

		let (github, _) = testing::github(666, "");
		let err = github.orgs().members().get_list("joomla").await.unwrap_err();
		assert_eq!(err.status(), Some(666));
	}

	#[tokio::test]
	async fn check() {
		let cases = [(204, true), (404, false), (302, false)];
		for (status, expected) in cases {
			let (github, transport) = testing::github(status, "");
			assert_eq!(
				github
					.orgs()
					.members()
					.check("joomla", "elkuku")
					.await
					.unwrap(),
				expected
			);
			assert_eq!(transport.last_path(), "/orgs/joomla/members/elkuku");
		}

		let (github, _) = testing::github(666, "");
		let err = github
			.orgs()
			.members()
			.check("joomla", "elkuku")
			.await
			.unwrap_err();
		assert_eq!(err.to_string(), "Unexpected response code: 666");
	}

	#[tokio::test]
	async fn publicize() {
		let (github, transport) = testing::github(204, "");

		github.orgs().members().publicize("joomla", "elkuku").await.unwrap();

		assert_eq!(transport.last_request().method, HttpMethod::Put);
		assert_eq!(transport.last_path(), "/orgs/joomla/public_members/elkuku");
	}

	#[tokio::test]
	async fn update_membership() {
		let (github, transport) = testing::github(200, testing::SAMPLE);
		let members = github.orgs().members();

		members.update_membership("joomla", "elkuku", "member").await.unwrap();
		assert_eq!(
			transport.last_body().as_deref(),
			Some(r#"{"role":"member"}"#)
		);

		let err = members
			.update_membership("joomla", "elkuku", "INVALID")
			.await
			.unwrap_err();
		assert!(err.is_validation());
		assert_eq!(transport.requests().len(), 1);
	}

	#[tokio::test]
	async fn edit_organization_membership() {
		let (github, transport) = testing::github(200, testing::SAMPLE);
		let members = github.orgs().members();

		members.edit_organization_membership("joomla", "active").await.unwrap();
		assert_eq!(transport.last_path(), "/user/memberships/orgs/joomla");
		assert_eq!(
			transport.last_body().as_deref(),
			Some(r#"{"state":"active"}"#)
		);

		assert!(members
			.edit_organization_membership("joomla", "INVALID")
			.await
			.unwrap_err()
			.is_validation());
	}
}
