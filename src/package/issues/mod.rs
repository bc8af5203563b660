use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::{
	constants::SORT_DIRECTIONS,
	object::{ensure_allowed, process_response},
	Result,
};

mod comments;
mod labels;
mod milestones;

pub use comments::Comments;
pub use labels::Labels;
pub use milestones::{MilestoneEdit, Milestones, NewMilestone};

package!(Issues);

/// Body of a new issue. Empty lists and `None` fields are left out.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewIssue {
	pub title: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub milestone: Option<u64>,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub labels: Vec<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub body: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub assignee: Option<String>,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub assignees: Vec<String>,
}

/// Fields to change on an issue; `None` leaves a field as it is.
#[derive(Debug, Clone, Default, Serialize)]
pub struct IssueEdit {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub body: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub state: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub assignee: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub milestone: Option<u64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub labels: Option<Vec<String>>,
}

/// Filter for the issues of the authenticated user.
#[derive(Debug, Clone, Default)]
pub struct IssueListFilter {
	/// `assigned`, `created`, `mentioned`, `subscribed` or `all`.
	pub filter: Option<String>,
	pub state: Option<String>,
	/// Comma separated label names.
	pub labels: Option<String>,
	pub sort: Option<String>,
	pub direction: Option<String>,
	pub since: Option<DateTime<Utc>>,
}

/// Filter for the issues of a repository.
#[derive(Debug, Clone, Default)]
pub struct RepositoryIssueFilter {
	/// A milestone number, `none` or `*`.
	pub milestone: Option<String>,
	pub state: Option<String>,
	/// A login, `none` or `*`.
	pub assignee: Option<String>,
	pub mentioned: Option<String>,
	pub labels: Option<String>,
	pub sort: Option<String>,
	pub direction: Option<String>,
	pub since: Option<DateTime<Utc>>,
}

fn push(
	query: &mut Vec<(&'static str, String)>,
	key: &'static str,
	value: &Option<String>,
) {
	if let Some(value) = value {
		query.push((key, value.clone()));
	}
}

impl IssueListFilter {
	fn query(&self) -> Vec<(&'static str, String)> {
		let mut query = Vec::new();
		push(&mut query, "filter", &self.filter);
		push(&mut query, "state", &self.state);
		push(&mut query, "labels", &self.labels);
		push(&mut query, "sort", &self.sort);
		push(&mut query, "direction", &self.direction);
		push(&mut query, "since", &self.since.map(|since| since.to_rfc3339()));
		query
	}
}

impl RepositoryIssueFilter {
	fn query(&self) -> Vec<(&'static str, String)> {
		let mut query = Vec::new();
		push(&mut query, "milestone", &self.milestone);
		push(&mut query, "state", &self.state);
		push(&mut query, "assignee", &self.assignee);
		push(&mut query, "mentioned", &self.mentioned);
		push(&mut query, "labels", &self.labels);
		push(&mut query, "sort", &self.sort);
		push(&mut query, "direction", &self.direction);
		push(&mut query, "since", &self.since.map(|since| since.to_rfc3339()));
		query
	}
}

fn check_direction(direction: &Option<String>) -> Result<()> {
	match direction {
		Some(direction) => {
			ensure_allowed("direction", direction, &SORT_DIRECTIONS)
		}
		None => Ok(()),
	}
}

impl Issues {
	pub fn comments(&self) -> Comments {
		Comments::new(self.object.clone())
	}

	pub fn labels(&self) -> Labels {
		Labels::new(self.object.clone())
	}

	pub fn milestones(&self) -> Milestones {
		Milestones::new(self.object.clone())
	}

	pub async fn create(
		&self,
		owner: &str,
		repo: &str,
		issue: &NewIssue,
	) -> Result<Value> {
		let path = format!("/repos/{}/{}/issues", owner, repo);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.post(url, issue).await?;
		process_response(&response, 201)
	}

	pub async fn edit(
		&self,
		owner: &str,
		repo: &str,
		number: u64,
		edit: &IssueEdit,
	) -> Result<Value> {
		if let Some(state) = &edit.state {
			ensure_allowed("state", state, &["open", "closed"])?;
		}

		let path = format!("/repos/{}/{}/issues/{}", owner, repo, number);
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
		let path = format!("/repos/{}/{}/issues/{}", owner, repo, number);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}

	/// Issues assigned to, created by or otherwise involving the
	/// authenticated user.
	pub async fn get_list(
		&self,
		filter: &IssueListFilter,
		page: u32,
		limit: u32,
	) -> Result<Value> {
		check_direction(&filter.direction)?;

		let url = self
			.object
			.fetch_url_with("/issues", &filter.query(), page, limit)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}

	pub async fn get_list_by_repository(
		&self,
		owner: &str,
		repo: &str,
		filter: &RepositoryIssueFilter,
		page: u32,
		limit: u32,
	) -> Result<Value> {
		check_direction(&filter.direction)?;

		let path = format!("/repos/{}/{}/issues", owner, repo);
		let url = self
			.object
			.fetch_url_with(&path, &filter.query(), page, limit)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}

	pub async fn lock(
		&self,
		owner: &str,
		repo: &str,
		number: u64,
	) -> Result<Value> {
		let path = format!("/repos/{}/{}/issues/{}/lock", owner, repo, number);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.put_raw(url, Some(String::new())).await?;
		process_response(&response, 204)
	}

	pub async fn unlock(
		&self,
		owner: &str,
		repo: &str,
		number: u64,
	) -> Result<Value> {
		let path = format!("/repos/{}/{}/issues/{}/lock", owner, repo, number);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.delete(url).await?;
		process_response(&response, 204)
	}
}
