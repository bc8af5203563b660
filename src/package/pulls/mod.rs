use serde::Serialize;
use serde_json::{json, Value};

use crate::{
	constants::FALLBACK_ERROR_MESSAGE,
	object::{ensure_allowed, presence_or, process_response},
	Result,
};

mod comments;

pub use comments::Comments;

package!(Pulls);

/// Fields to change on a pull request; `None` leaves a field as it is.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PullEdit {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub body: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub state: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub base: Option<String>,
}

impl Pulls {
	pub fn comments(&self) -> Comments {
		Comments::new(self.object.clone())
	}

	/// Opens a pull request merging `head` (`user:branch`) into `base`.
	pub async fn create(
		&self,
		owner: &str,
		repo: &str,
		title: &str,
		base: &str,
		head: &str,
		body: &str,
	) -> Result<Value> {
		let path = format!("/repos/{}/{}/pulls", owner, repo);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let body =
			json!({ "title": title, "base": base, "head": head, "body": body });
		let response = self.object.post(url, &body).await?;
		process_response(&response, 201)
	}

	/// Turns an existing issue into a pull request.
	pub async fn create_from_issue(
		&self,
		owner: &str,
		repo: &str,
		issue: u64,
		base: &str,
		head: &str,
	) -> Result<Value> {
		let path = format!("/repos/{}/{}/pulls", owner, repo);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let body = json!({ "issue": issue, "base": base, "head": head });
		let response = self.object.post(url, &body).await?;
		process_response(&response, 201)
	}

	pub async fn edit(
		&self,
		owner: &str,
		repo: &str,
		number: u64,
		edit: &PullEdit,
	) -> Result<Value> {
		if let Some(state) = &edit.state {
			ensure_allowed("state", state, &["open", "closed"])?;
		}

		let path = format!("/repos/{}/{}/pulls/{}", owner, repo, number);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.patch(url, edit).await?;
		process_response(&response, 200)
	}

	pub async fn get(
		&self,
		owner: &str,
		repo: &str,
		number: u64,
	) -> Result<Value> {
		let path = format!("/repos/{}/{}/pulls/{}", owner, repo, number);
		self.get_path(&path, &[], 0, 0).await
	}

	pub async fn get_commits(
		&self,
		owner: &str,
		repo: &str,
		number: u64,
		page: u32,
		limit: u32,
	) -> Result<Value> {
		let path =
			format!("/repos/{}/{}/pulls/{}/commits", owner, repo, number);
		self.get_path(&path, &[], page, limit).await
	}

	pub async fn get_files(
		&self,
		owner: &str,
		repo: &str,
		number: u64,
		page: u32,
		limit: u32,
	) -> Result<Value> {
		let path = format!("/repos/{}/{}/pulls/{}/files", owner, repo, number);
		self.get_path(&path, &[], page, limit).await
	}

	/// Pull requests in `state`; `open`, GitHub's default, is not sent.
	pub async fn get_list(
		&self,
		owner: &str,
		repo: &str,
		state: &str,
		page: u32,
		limit: u32,
	) -> Result<Value> {
		let path = format!("/repos/{}/{}/pulls", owner, repo);
		if state == "open" {
			self.get_path(&path, &[], page, limit).await
		} else {
			self.get_path(&path, &[("state", state.to_string())], page, limit)
				.await
		}
	}

	pub async fn is_merged(
		&self,
		owner: &str,
		repo: &str,
		number: u64,
	) -> Result<bool> {
		let path = format!("/repos/{}/{}/pulls/{}/merge", owner, repo, number);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.get(url).await?;
		presence_or(&response, 204, FALLBACK_ERROR_MESSAGE)
	}

	pub async fn merge(
		&self,
		owner: &str,
		repo: &str,
		number: u64,
		message: &str,
	) -> Result<Value> {
		let path = format!("/repos/{}/{}/pulls/{}/merge", owner, repo, number);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self
			.object
			.put(url, &json!({ "commit_message": message }))
			.await?;
		process_response(&response, 200)
	}

	async fn get_path(
		&self,
		path: &str,
		query: &[(&str, String)],
		page: u32,
		limit: u32,
	) -> Result<Value> {
		let url = self.object.fetch_url_with(path, query, page, limit)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}
}
