use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::{
	constants::SORT_DIRECTIONS,
	object::{ensure_allowed, process_response},
	Result,
};

package!(Milestones);

const STATES: [&str; 2] = ["open", "closed"];

fn due_on<S: Serializer>(
	value: &Option<DateTime<Utc>>,
	serializer: S,
) -> Result<S::Ok, S::Error> {
	match value {
		Some(date) => {
			let date = date.to_rfc3339_opts(SecondsFormat::Secs, true);
			serializer.serialize_str(&date)
		}
		None => serializer.serialize_none(),
	}
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct NewMilestone {
	pub title: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub state: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none", serialize_with = "due_on")]
	pub due_on: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct MilestoneEdit {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub state: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none", serialize_with = "due_on")]
	pub due_on: Option<DateTime<Utc>>,
}

impl Milestones {
	/// Milestones of a repository. `sort` is `due_date` or `completeness`.
	pub async fn get_list(
		&self,
		owner: &str,
		repo: &str,
		state: &str,
		sort: &str,
		direction: &str,
		page: u32,
		limit: u32,
	) -> Result<Value> {
		ensure_allowed("state", state, &STATES)?;
		ensure_allowed("sort", sort, &["due_date", "completeness"])?;
		ensure_allowed("direction", direction, &SORT_DIRECTIONS)?;

		let path = format!("/repos/{}/{}/milestones", owner, repo);
		let query = [
			("state", state.to_string()),
			("sort", sort.to_string()),
			("direction", direction.to_string()),
		];
		let url = self.object.fetch_url_with(&path, &query, page, limit)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}

	pub async fn get(
		&self,
		owner: &str,
		repo: &str,
		number: u64,
	) -> Result<Value> {
		let path = format!("/repos/{}/{}/milestones/{}", owner, repo, number);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}

	pub async fn create(
		&self,
		owner: &str,
		repo: &str,
		milestone: &NewMilestone,
	) -> Result<Value> {
		if let Some(state) = &milestone.state {
			ensure_allowed("state", state, &STATES)?;
		}

		let path = format!("/repos/{}/{}/milestones", owner, repo);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.post(url, milestone).await?;
		process_response(&response, 201)
	}

	pub async fn edit(
		&self,
		owner: &str,
		repo: &str,
		number: u64,
		edit: &MilestoneEdit,
	) -> Result<Value> {
		if let Some(state) = &edit.state {
			ensure_allowed("state", state, &STATES)?;
		}

		let path = format!("/repos/{}/{}/milestones/{}", owner, repo, number);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.patch(url, edit).await?;
		process_response(&response, 200)
	}

	pub async fn delete(
		&self,
		owner: &str,
		repo: &str,
		number: u64,
	) -> Result<Value> {
		let path = format!("/repos/{}/{}/milestones/{}", owner, repo, number);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.delete(url).await?;
		process_response(&response, 204)
	}
}
