use serde::Serialize;
use serde_json::Value;

use crate::{
	constants::SORT_DIRECTIONS,
	object::{ensure_allowed, process_response},
	Result,
};

mod branches;
mod collaborators;
mod comments;
mod commits;
mod contents;
mod deployments;
mod downloads;
mod forks;
mod hooks;
mod keys;
mod merging;
mod releases;
mod statuses;

pub use branches::Branches;
pub use collaborators::Collaborators;
pub use comments::Comments;
pub use commits::{CommitFilter, Commits};
pub use contents::{ArchiveFormat, Contents, Identity};
pub use deployments::{DeploymentFilter, Deployments, NewDeployment};
pub use downloads::Downloads;
pub use forks::Forks;
pub use hooks::{HookEdit, Hooks};
pub use keys::Keys;
pub use merging::Merging;
pub use releases::{NewRelease, ReleaseEdit, Releases};
pub use statuses::Statuses;

package!(
	/// Repositories and everything hanging off them.
	Repositories
);

const SORTS: [&str; 4] = ["created", "updated", "pushed", "full_name"];

/// A repository to create, for the authenticated user or for `org`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewRepository {
	#[serde(skip)]
	pub org: Option<String>,
	pub name: String,
	pub description: String,
	pub homepage: String,
	pub private: bool,
	pub has_issues: bool,
	pub has_wiki: bool,
	pub has_downloads: bool,
	pub team_id: u64,
	pub auto_init: bool,
	pub gitignore_template: String,
}

/// Repository settings. Every field is sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RepositoryEdit {
	pub name: String,
	pub description: String,
	pub homepage: String,
	pub private: bool,
	pub has_issues: bool,
	pub has_wiki: bool,
	pub has_downloads: bool,
	pub default_branch: String,
}

/// `asc` for `full_name`, `desc` for the date sorts, unless given.
fn sort_query(
	sort: &str,
	direction: Option<&str>,
) -> Result<[(&'static str, String); 2]> {
	ensure_allowed("sort", sort, &SORTS)?;
	let direction =
		direction.unwrap_or(if sort == "full_name" { "asc" } else { "desc" });
	ensure_allowed("direction", direction, &SORT_DIRECTIONS)?;
	Ok([("sort", sort.to_string()), ("direction", direction.to_string())])
}

impl Repositories {
	pub fn branches(&self) -> Branches {
		Branches::new(self.object.clone())
	}

	pub fn collaborators(&self) -> Collaborators {
		Collaborators::new(self.object.clone())
	}

	pub fn comments(&self) -> Comments {
		Comments::new(self.object.clone())
	}

	pub fn commits(&self) -> Commits {
		Commits::new(self.object.clone())
	}

	pub fn contents(&self) -> Contents {
		Contents::new(self.object.clone())
	}

	pub fn deployments(&self) -> Deployments {
		Deployments::new(self.object.clone())
	}

	pub fn downloads(&self) -> Downloads {
		Downloads::new(self.object.clone())
	}

	pub fn forks(&self) -> Forks {
		Forks::new(self.object.clone())
	}

	pub fn hooks(&self) -> Hooks {
		Hooks::new(self.object.clone())
	}

	pub fn keys(&self) -> Keys {
		Keys::new(self.object.clone())
	}

	pub fn merging(&self) -> Merging {
		Merging::new(self.object.clone())
	}

	pub fn releases(&self) -> Releases {
		Releases::new(self.object.clone())
	}

	pub fn statuses(&self) -> Statuses {
		Statuses::new(self.object.clone())
	}

	/// Repositories of the authenticated user.
	pub async fn get_list_own(
		&self,
		repo_type: &str,
		sort: &str,
		direction: Option<&str>,
	) -> Result<Value> {
		ensure_allowed(
			"type",
			repo_type,
			&["all", "owner", "public", "private", "member"],
		)?;
		let [sort, direction] = sort_query(sort, direction)?;

		let query = [("type", repo_type.to_string()), sort, direction];
		self.get_path("/user/repos", &query).await
	}

	pub async fn get_list_user(
		&self,
		user: &str,
		repo_type: &str,
		sort: &str,
		direction: Option<&str>,
	) -> Result<Value> {
		ensure_allowed("type", repo_type, &["all", "owner", "member"])?;
		let [sort, direction] = sort_query(sort, direction)?;

		let query = [("type", repo_type.to_string()), sort, direction];
		self.get_path(&format!("/users/{}/repos", user), &query).await
	}

	pub async fn get_list_org(
		&self,
		org: &str,
		repo_type: &str,
	) -> Result<Value> {
		ensure_allowed(
			"type",
			repo_type,
			&["all", "public", "private", "forks", "sources", "member"],
		)?;

		let query = [("type", repo_type.to_string())];
		self.get_path(&format!("/orgs/{}/repos", org), &query).await
	}

	/// Every public repository, in creation order, after the one with id
	/// `since`.
	pub async fn get_list(&self, since: Option<u64>) -> Result<Value> {
		match since {
			Some(since) => {
				self.get_path("/repositories", &[("since", since.to_string())])
					.await
			}
			None => self.get_path("/repositories", &[]).await,
		}
	}

	pub async fn create(&self, repository: &NewRepository) -> Result<Value> {
		let org = repository.org.as_deref().filter(|org| !org.is_empty());
		let path = match org {
			Some(org) => format!("/orgs/{}/repos", org),
			None => "/user/repos".to_string(),
		};
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.post(url, repository).await?;
		process_response(&response, 201)
	}

	pub async fn get(&self, owner: &str, repo: &str) -> Result<Value> {
		self.get_path(&format!("/repos/{}/{}", owner, repo), &[]).await
	}

	pub async fn edit(
		&self,
		owner: &str,
		repo: &str,
		edit: &RepositoryEdit,
	) -> Result<Value> {
		let url = self
			.object
			.fetch_url(&format!("/repos/{}/{}", owner, repo), 0, 0)?;
		let response = self.object.patch(url, edit).await?;
		process_response(&response, 200)
	}

	/// Contributors sorted by contributions; `anon` includes anonymous ones.
	pub async fn get_list_contributors(
		&self,
		owner: &str,
		repo: &str,
		anon: bool,
	) -> Result<Value> {
		let path = format!("/repos/{}/{}/contributors", owner, repo);
		if anon {
			self.get_path(&path, &[("anon", "true".to_string())]).await
		} else {
			self.get_path(&path, &[]).await
		}
	}

	pub async fn get_list_languages(
		&self,
		owner: &str,
		repo: &str,
	) -> Result<Value> {
		self.get_path(&format!("/repos/{}/{}/languages", owner, repo), &[])
			.await
	}

	pub async fn get_list_teams(
		&self,
		owner: &str,
		repo: &str,
	) -> Result<Value> {
		self.get_path(&format!("/repos/{}/{}/teams", owner, repo), &[])
			.await
	}

	pub async fn get_list_tags(
		&self,
		owner: &str,
		repo: &str,
	) -> Result<Value> {
		self.get_path(&format!("/repos/{}/{}/tags", owner, repo), &[])
			.await
	}

	pub async fn delete(&self, owner: &str, repo: &str) -> Result<Value> {
		let url = self
			.object
			.fetch_url(&format!("/repos/{}/{}", owner, repo), 0, 0)?;
		let response = self.object.delete(url).await?;
		process_response(&response, 204)
	}

	async fn get_path(
		&self,
		path: &str,
		query: &[(&str, String)],
	) -> Result<Value> {
		let url = self.object.fetch_url_with(path, query, 0, 0)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}
}
