use serde_json::{json, Value};

use crate::{
	constants::FALLBACK_ERROR_MESSAGE,
	object::{
		decode_body, ensure_allowed, presence, process_response, unexpected,
	},
	Result,
};

package!(Teams);

const PERMISSIONS: [&str; 3] = ["pull", "push", "admin"];

impl Teams {
	pub async fn get_list(&self, org: &str) -> Result<Value> {
		self.get_path(&format!("/orgs/{}/teams", org)).await
	}

	pub async fn get(&self, id: u64) -> Result<Value> {
		self.get_path(&format!("/teams/{}", id)).await
	}

	/// Creates a team with access to `repo_names` (`owner/repo`).
	/// `permission` is `pull`, `push` or `admin`.
	pub async fn create(
		&self,
		org: &str,
		name: &str,
		repo_names: &[&str],
		permission: &str,
	) -> Result<Value> {
		ensure_allowed("permission", permission, &PERMISSIONS)?;

		let mut body = json!({ "name": name });
		if !repo_names.is_empty() {
			body["repo_names"] = json!(repo_names);
		}
		body["permission"] = json!(permission);

		let url = self.object.fetch_url(&format!("/orgs/{}/teams", org), 0, 0)?;
		let response = self.object.post(url, &body).await?;
		process_response(&response, 201)
	}

	pub async fn edit(
		&self,
		id: u64,
		name: &str,
		permission: &str,
	) -> Result<Value> {
		ensure_allowed("permission", permission, &PERMISSIONS)?;

		let url = self.object.fetch_url(&format!("/teams/{}", id), 0, 0)?;
		let response = self
			.object
			.patch(url, &json!({ "name": name, "permission": permission }))
			.await?;
		process_response(&response, 200)
	}

	pub async fn delete(&self, id: u64) -> Result<Value> {
		let url = self.object.fetch_url(&format!("/teams/{}", id), 0, 0)?;
		let response = self.object.delete(url).await?;
		process_response(&response, 204)
	}

	pub async fn get_list_members(&self, id: u64) -> Result<Value> {
		self.get_path(&format!("/teams/{}/members", id)).await
	}

	pub async fn is_member(&self, id: u64, user: &str) -> Result<bool> {
		let url = self
			.object
			.fetch_url(&format!("/teams/{}/members/{}", id, user), 0, 0)?;
		let response = self.object.get(url).await?;
		presence(&response, 204)
	}

	pub async fn add_member(&self, id: u64, user: &str) -> Result<Value> {
		let url = self
			.object
			.fetch_url(&format!("/teams/{}/members/{}", id, user), 0, 0)?;
		let response = self.object.put_raw(url, Some(String::new())).await?;
		process_response(&response, 204)
	}

	pub async fn remove_member(&self, id: u64, user: &str) -> Result<Value> {
		let url = self
			.object
			.fetch_url(&format!("/teams/{}/members/{}", id, user), 0, 0)?;
		let response = self.object.delete(url).await?;
		process_response(&response, 204)
	}

	pub async fn get_list_repos(&self, id: u64) -> Result<Value> {
		self.get_path(&format!("/teams/{}/repos", id)).await
	}

	pub async fn check_repo(
		&self,
		id: u64,
		owner: &str,
		repo: &str,
	) -> Result<bool> {
		let path = format!("/teams/{}/repos/{}/{}", id, owner, repo);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.get(url).await?;
		presence(&response, 204)
	}

	pub async fn add_repo(
		&self,
		id: u64,
		owner: &str,
		repo: &str,
	) -> Result<Value> {
		let path = format!("/teams/{}/repos/{}/{}", id, owner, repo);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.put_raw(url, Some(String::new())).await?;
		process_response(&response, 204)
	}

	pub async fn remove_repo(
		&self,
		id: u64,
		owner: &str,
		repo: &str,
	) -> Result<Value> {
		let path = format!("/teams/{}/repos/{}/{}", id, owner, repo);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.delete(url).await?;
		process_response(&response, 204)
	}

	/// State of the membership of `user` in the team (`active` or
	/// `pending`), `None` when they are not a member.
	pub async fn get_team_membership(
		&self,
		id: u64,
		user: &str,
	) -> Result<Option<String>> {
		let url = self
			.object
			.fetch_url(&format!("/teams/{}/memberships/{}", id, user), 0, 0)?;
		let response = self.object.get(url).await?;
		match response.status {
			200 => {
				let body = decode_body(&response.body)?;
				match body.get("state").and_then(Value::as_str) {
					Some(state) => Ok(Some(state.to_string())),
					None => unexpected(&response, FALLBACK_ERROR_MESSAGE),
				}
			}
			404 => Ok(None),
			status => unexpected(
				&response,
				&format!("Unexpected response code: {}", status),
			),
		}
	}

	/// `role` is `member` or `maintainer`.
	pub async fn add_team_membership(
		&self,
		id: u64,
		user: &str,
		role: &str,
	) -> Result<Value> {
		ensure_allowed("role", role, &["member", "maintainer"])?;

		let url = self
			.object
			.fetch_url(&format!("/teams/{}/memberships/{}", id, user), 0, 0)?;
		let response = self.object.put(url, &json!({ "role": role })).await?;
		process_response(&response, 200)
	}

	pub async fn remove_team_membership(
		&self,
		id: u64,
		user: &str,
	) -> Result<Value> {
		let url = self
			.object
			.fetch_url(&format!("/teams/{}/memberships/{}", id, user), 0, 0)?;
		let response = self.object.delete(url).await?;
		process_response(&response, 204)
	}

	/// Teams of the authenticated user across all organizations.
	pub async fn get_user_teams(&self) -> Result<Value> {
		self.get_path("/user/teams").await
	}

	async fn get_path(&self, path: &str) -> Result<Value> {
		let url = self.object.fetch_url(path, 0, 0)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}
}
