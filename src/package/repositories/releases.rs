use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::{object::process_response, Result};

package!(Releases);

#[derive(Debug, Clone, Default, Serialize)]
pub struct NewRelease {
	pub tag_name: String,
	pub target_commitish: String,
	pub name: String,
	pub body: String,
	pub draft: bool,
	pub prerelease: bool,
}

/// Changes to a release. The tag is always sent, the rest only when set.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReleaseEdit {
	pub tag_name: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub target_commitish: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub body: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub draft: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub prerelease: Option<bool>,
}

impl Releases {
	pub async fn create(
		&self,
		owner: &str,
		repo: &str,
		release: &NewRelease,
	) -> Result<Value> {
		let path = format!("/repos/{}/{}/releases", owner, repo);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.post(url, release).await?;
		process_response(&response, 201)
	}

	pub async fn edit(
		&self,
		owner: &str,
		repo: &str,
		id: u64,
		edit: &ReleaseEdit,
	) -> Result<Value> {
		let path = format!("/repos/{}/{}/releases/{}", owner, repo, id);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.patch(url, edit).await?;
		process_response(&response, 200)
	}

	pub async fn delete(
		&self,
		owner: &str,
		repo: &str,
		id: u64,
	) -> Result<Value> {
		let path = format!("/repos/{}/{}/releases/{}", owner, repo, id);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.delete(url).await?;
		process_response(&response, 204)
	}

	pub async fn get(&self, owner: &str, repo: &str, id: u64) -> Result<Value> {
		self
			.get_path(
				&format!("/repos/{}/{}/releases/{}", owner, repo, id),
				0,
				0,
			)
			.await
	}

	/// The latest published, non-prerelease release.
	pub async fn get_latest(&self, owner: &str, repo: &str) -> Result<Value> {
		self
			.get_path(
				&format!("/repos/{}/{}/releases/latest", owner, repo),
				0,
				0,
			)
			.await
	}

	pub async fn get_by_tag(
		&self,
		owner: &str,
		repo: &str,
		tag: &str,
	) -> Result<Value> {
		self
			.get_path(
				&format!("/repos/{}/{}/releases/tags/{}", owner, repo, tag),
				0,
				0,
			)
			.await
	}

	/// Releases keyed by their tag name, in the order GitHub lists them.
	pub async fn get_list(
		&self,
		owner: &str,
		repo: &str,
		page: u32,
		limit: u32,
	) -> Result<Map<String, Value>> {
		let releases = self
			.get_path(
				&format!("/repos/{}/{}/releases", owner, repo),
				page,
				limit,
			)
			.await?;

		let mut by_tag = Map::new();
		if let Value::Array(releases) = releases {
			for release in releases {
				let tag = release
					.get("tag_name")
					.and_then(Value::as_str)
					.map(str::to_owned);
				if let Some(tag) = tag {
					by_tag.insert(tag, release);
				}
			}
		}
		Ok(by_tag)
	}

	pub async fn get_list_assets(
		&self,
		owner: &str,
		repo: &str,
		id: u64,
		page: u32,
		limit: u32,
	) -> Result<Value> {
		self.get_path(
			&format!("/repos/{}/{}/releases/{}/assets", owner, repo, id),
			page,
			limit,
		)
		.await
	}

	pub async fn get_asset(
		&self,
		owner: &str,
		repo: &str,
		id: u64,
	) -> Result<Value> {
		self
			.get_path(
				&format!("/repos/{}/{}/releases/assets/{}", owner, repo, id),
				0,
				0,
			)
			.await
	}

	pub async fn edit_asset(
		&self,
		owner: &str,
		repo: &str,
		id: u64,
		name: &str,
		label: Option<&str>,
	) -> Result<Value> {
		let mut body = json!({ "name": name });
		if let Some(label) = label.filter(|label| !label.is_empty()) {
			body["label"] = json!(label);
		}

		let path = format!("/repos/{}/{}/releases/assets/{}", owner, repo, id);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.patch(url, &body).await?;
		process_response(&response, 200)
	}

	pub async fn delete_asset(
		&self,
		owner: &str,
		repo: &str,
		id: u64,
	) -> Result<Value> {
		let path = format!("/repos/{}/{}/releases/assets/{}", owner, repo, id);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.delete(url).await?;
		process_response(&response, 204)
	}

	async fn get_path(
		&self,
		path: &str,
		page: u32,
		limit: u32,
	) -> Result<Value> {
		let url = self.object.fetch_url(path, page, limit)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::{NewRelease, ReleaseEdit};
	use crate::testing;

	#[tokio::test]
	async fn create() {
		let (github, transport) = testing::github(201, testing::SAMPLE);
		let release = NewRelease {
			tag_name: "0.1".into(),
			target_commitish: "targetCommitish".into(),
			name: "name".into(),
			body: "body".into(),
			..Default::default()
		};

		github
			.repositories()
			.releases()
			.create("joomla", "joomla-platform", &release)
			.await
			.unwrap();

		assert_eq!(
			transport.last_body().as_deref(),
			Some(concat!(
				r#"{"tag_name":"0.1","target_commitish":"targetCommitish","name":"name","#,
				r#""body":"body","draft":false,"prerelease":false}"#
			))
		);
	}

	#[tokio::test]
	async fn edit() {
		let (github, transport) = testing::github(200, testing::SAMPLE);
		let edit = ReleaseEdit {
			tag_name: "tagName".into(),
			draft: Some(true),
			..Default::default()
		};

		github
			.repositories()
			.releases()
			.edit("joomla", "joomla-platform", 12345, &edit)
			.await
			.unwrap();

		assert_eq!(
			transport.last_path(),
			"/repos/joomla/joomla-platform/releases/12345"
		);
		assert_eq!(
			transport.last_body().as_deref(),
			Some(r#"{"tag_name":"tagName","draft":true}"#)
		);
	}

	#[tokio::test]
	async fn get_list_keyed_by_tag() {
		let body = r#"[{"tag_name":"1.0","id":1},{"tag_name":"1.1","id":2}]"#;
		let (github, _) = testing::github(200, body);

		let releases = github
			.repositories()
			.releases()
			.get_list("joomla", "joomla-platform", 0, 0)
			.await
			.unwrap();

		assert_eq!(releases.keys().collect::<Vec<_>>(), vec!["1.0", "1.1"]);
		assert_eq!(releases["1.1"], json!({ "tag_name": "1.1", "id": 2 }));
	}

	#[tokio::test]
	async fn edit_asset() {
		let (github, transport) = testing::github(200, testing::SAMPLE);
		let releases = github.repositories().releases();

		releases
			.edit_asset("joomla", "joomla-platform", 123, "name", Some("label"))
			.await
			.unwrap();
		assert_eq!(
			transport.last_body().as_deref(),
			Some(r#"{"name":"name","label":"label"}"#)
		);

		releases
			.edit_asset("joomla", "joomla-platform", 123, "name", None)
			.await
			.unwrap();
		assert_eq!(
			transport.last_body().as_deref(),
			Some(r#"{"name":"name"}"#)
		);
	}

	#[tokio::test]
	async fn delete_asset_failure() {
		let (github, _) = testing::github(500, testing::ERROR);

		let err = github
			.repositories()
			.releases()
			.delete_asset("joomla", "joomla-platform", 123)
			.await
			.unwrap_err();

		assert_eq!(err.to_string(), "Generic Error");
	}
}
