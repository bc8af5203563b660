use serde_json::{json, Value};

use crate::{object::process_response, Result};

package!(Labels);

fn encode(name: &str) -> String {
	urlencoding::encode(name).into_owned()
}

impl Labels {
	pub async fn get_list(&self, owner: &str, repo: &str) -> Result<Value> {
		let path = format!("/repos/{}/{}/labels", owner, repo);
		self.get_path(&path).await
	}

	pub async fn get(
		&self,
		owner: &str,
		repo: &str,
		name: &str,
	) -> Result<Value> {
		let path = format!("/repos/{}/{}/labels/{}", owner, repo, encode(name));
		self.get_path(&path).await
	}

	pub async fn create(
		&self,
		owner: &str,
		repo: &str,
		name: &str,
		color: &str,
	) -> Result<Value> {
		let path = format!("/repos/{}/{}/labels", owner, repo);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self
			.object
			.post(url, &json!({ "name": name, "color": color }))
			.await?;
		process_response(&response, 201)
	}

	/// Renames and recolors `label`.
	pub async fn update(
		&self,
		owner: &str,
		repo: &str,
		label: &str,
		name: &str,
		color: &str,
	) -> Result<Value> {
		let path =
			format!("/repos/{}/{}/labels/{}", owner, repo, encode(label));
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self
			.object
			.patch(url, &json!({ "name": name, "color": color }))
			.await?;
		process_response(&response, 200)
	}

	pub async fn delete(
		&self,
		owner: &str,
		repo: &str,
		name: &str,
	) -> Result<Value> {
		let path = format!("/repos/{}/{}/labels/{}", owner, repo, encode(name));
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.delete(url).await?;
		process_response(&response, 204)
	}

	pub async fn get_list_by_issue(
		&self,
		owner: &str,
		repo: &str,
		number: u64,
	) -> Result<Value> {
		let path =
			format!("/repos/{}/{}/issues/{}/labels", owner, repo, number);
		self.get_path(&path).await
	}

	pub async fn add(
		&self,
		owner: &str,
		repo: &str,
		number: u64,
		labels: &[&str],
	) -> Result<Value> {
		let path =
			format!("/repos/{}/{}/issues/{}/labels", owner, repo, number);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.post(url, labels).await?;
		process_response(&response, 200)
	}

	pub async fn remove_from_issue(
		&self,
		owner: &str,
		repo: &str,
		number: u64,
		name: &str,
	) -> Result<Value> {
		let path = format!(
			"/repos/{}/{}/issues/{}/labels/{}",
			owner,
			repo,
			number,
			encode(name)
		);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.delete(url).await?;
		process_response(&response, 200)
	}

	/// Replaces every label of an issue with `labels`.
	pub async fn replace(
		&self,
		owner: &str,
		repo: &str,
		number: u64,
		labels: &[&str],
	) -> Result<Value> {
		let path =
			format!("/repos/{}/{}/issues/{}/labels", owner, repo, number);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.put(url, labels).await?;
		process_response(&response, 200)
	}

	pub async fn remove_all_from_issue(
		&self,
		owner: &str,
		repo: &str,
		number: u64,
	) -> Result<Value> {
		let path =
			format!("/repos/{}/{}/issues/{}/labels", owner, repo, number);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.delete(url).await?;
		process_response(&response, 204)
	}

	/// Labels of every issue in a milestone.
	pub async fn get_list_by_milestone(
		&self,
		owner: &str,
		repo: &str,
		number: u64,
	) -> Result<Value> {
		let path =
			format!("/repos/{}/{}/milestones/{}/labels", owner, repo, number);
		self.get_path(&path).await
	}

	async fn get_path(&self, path: &str) -> Result<Value> {
		let url = self.object.fetch_url(path, 0, 0)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}
}

#[cfg(test)]
mod tests {
	use crate::{http::HttpMethod, testing};

	#[tokio::test]
	async fn create() {
		let (github, transport) = testing::github(201, testing::SAMPLE);

		github
			.issues()
			.labels()
			.create("joomla", "joomla-platform", "foobar", "red")
			.await
			.unwrap();

		assert_eq!(
			transport.last_path(),
			"/repos/joomla/joomla-platform/labels"
		);
		assert_eq!(
			transport.last_body().as_deref(),
			Some(r#"{"name":"foobar","color":"red"}"#)
		);
	}

	#[tokio::test]
	async fn create_failure() {
		let (github, _) = testing::github(500, testing::ERROR);

		let err = github
			.issues()
			.labels()
			.create("joomla", "joomla-platform", "foobar", "red")
			.await
			.unwrap_err();

		assert_eq!(err.to_string(), "Generic Error");
	}

	#[tokio::test]
	async fn names_are_percent_encoded() {
		let (github, transport) = testing::github(200, testing::SAMPLE);

		github
			.issues()
			.labels()
			.update(
				"joomla",
				"joomla-platform",
				"needs review",
				"boofaz",
				"red",
			)
			.await
			.unwrap();

		assert_eq!(
			transport.last_request().url.path(),
			"/repos/joomla/joomla-platform/labels/needs%20review"
		);
		assert_eq!(
			transport.last_body().as_deref(),
			Some(r#"{"name":"boofaz","color":"red"}"#)
		);
	}

	#[tokio::test]
	async fn add_and_replace_send_arrays() {
		let (github, transport) = testing::github(200, testing::SAMPLE);
		let labels = github.issues().labels();

		labels.add("joomla", "joomla-platform", 1, &["A", "B"]).await.unwrap();
		assert_eq!(transport.last_request().method, HttpMethod::Post);
		assert_eq!(transport.last_body().as_deref(), Some(r#"["A","B"]"#));

		labels
			.replace("joomla", "joomla-platform", 1, &["A", "B"])
			.await
			.unwrap();
		assert_eq!(transport.last_request().method, HttpMethod::Put);
		assert_eq!(
			transport.last_path(),
			"/repos/joomla/joomla-platform/issues/1/labels"
		);
	}

	#[tokio::test]
	async fn remove_all_from_issue() {
		let (github, transport) = testing::github(204, "");

		github
			.issues()
			.labels()
			.remove_all_from_issue("joomla", "joomla-platform", 1)
			.await
			.unwrap();

		assert_eq!(transport.last_request().method, HttpMethod::Delete);
	}
}
