use serde::Serialize;
use serde_json::{json, Value};

use crate::{
	object::{ensure_allowed, process_response, unexpected},
	Result,
};

package!(Deployments);

/// Narrows down a deployment listing; unset fields are not sent.
#[derive(Debug, Clone, Default)]
pub struct DeploymentFilter {
	pub sha: Option<String>,
	pub reference: Option<String>,
	pub task: Option<String>,
	pub environment: Option<String>,
}

impl DeploymentFilter {
	fn query(&self) -> Vec<(&'static str, String)> {
		[
			("sha", &self.sha),
			("ref", &self.reference),
			("task", &self.task),
			("environment", &self.environment),
		]
		.into_iter()
		.filter_map(|(key, value)| value.clone().map(|value| (key, value)))
		.collect()
	}
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct NewDeployment {
	#[serde(rename = "ref")]
	pub reference: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub task: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub auto_merge: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub required_contexts: Option<Vec<String>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub payload: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub environment: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
}

impl Deployments {
	pub async fn get_list(
		&self,
		owner: &str,
		repo: &str,
		filter: &DeploymentFilter,
		page: u32,
		limit: u32,
	) -> Result<Value> {
		let path = format!("/repos/{}/{}/deployments", owner, repo);
		let url = self
			.object
			.fetch_url_with(&path, &filter.query(), page, limit)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}

	/// Creates a deployment. A 409 means GitHub tried to merge the default
	/// branch into the ref first and hit a conflict.
	pub async fn create(
		&self,
		owner: &str,
		repo: &str,
		deployment: &NewDeployment,
	) -> Result<Value> {
		let path = format!("/repos/{}/{}/deployments", owner, repo);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.post(url, deployment).await?;
		match response.status {
			409 => unexpected(&response, "Merge conflict"),
			_ => process_response(&response, 201),
		}
	}

	pub async fn get_deployment_statuses(
		&self,
		owner: &str,
		repo: &str,
		id: u64,
		page: u32,
		limit: u32,
	) -> Result<Value> {
		let path =
			format!("/repos/{}/{}/deployments/{}/statuses", owner, repo, id);
		let url = self.object.fetch_url(&path, page, limit)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}

	/// `state` is `pending`, `success`, `error` or `failure`.
	pub async fn create_status(
		&self,
		owner: &str,
		repo: &str,
		id: u64,
		state: &str,
		target_url: Option<&str>,
		description: Option<&str>,
	) -> Result<Value> {
		ensure_allowed(
			"state",
			state,
			&["pending", "success", "error", "failure"],
		)?;

		let mut body = json!({ "state": state });
		if let Some(target_url) = target_url {
			body["target_url"] = json!(target_url);
		}
		if let Some(description) = description {
			body["description"] = json!(description);
		}

		let path =
			format!("/repos/{}/{}/deployments/{}/statuses", owner, repo, id);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.post(url, &body).await?;
		process_response(&response, 201)
	}
}
