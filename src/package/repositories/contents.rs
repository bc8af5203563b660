use serde::Serialize;
use serde_json::{json, Value};
use snafu::ensure;

use crate::{
	error,
	object::{process_response, unexpected},
	Result,
};

package!(
	/// Repository files: readme, contents, archives and commits through the
	/// contents API.
	Contents
);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
	Tarball,
	Zipball,
}

impl ArchiveFormat {
	fn as_str(self) -> &'static str {
		match self {
			ArchiveFormat::Tarball => "tarball",
			ArchiveFormat::Zipball => "zipball",
		}
	}
}

impl Default for ArchiveFormat {
	fn default() -> Self {
		ArchiveFormat::Zipball
	}
}

/// Author or committer of a change made through the contents API.
#[derive(Debug, Clone, Serialize)]
pub struct Identity {
	pub name: String,
	pub email: String,
}

impl Identity {
	pub fn new<N: Into<String>, E: Into<String>>(name: N, email: E) -> Self {
		Self {
			name: name.into(),
			email: email.into(),
		}
	}
}

fn ensure_email(role: &str, identity: Option<&Identity>) -> Result<()> {
	if let Some(identity) = identity {
		ensure!(
			!identity.email.is_empty(),
			error::Validation {
				msg: format!("Missing {} e-mail for {}", role, identity.name)
			}
		);
	}
	Ok(())
}

/// Adds `branch`, `committer` and `author` to a change body when given.
fn with_signature(
	mut body: Value,
	branch: Option<&str>,
	committer: Option<&Identity>,
	author: Option<&Identity>,
) -> Result<Value> {
	ensure_email("committer", committer)?;
	ensure_email("author", author)?;

	if let Some(branch) = branch {
		body["branch"] = json!(branch);
	}
	if let Some(committer) = committer {
		body["committer"] = json!(committer);
	}
	if let Some(author) = author {
		body["author"] = json!(author);
	}
	Ok(body)
}

fn with_ref(reference: Option<&str>) -> Vec<(&'static str, String)> {
	reference
		.map(|reference| vec![("ref", reference.to_string())])
		.unwrap_or_default()
}

impl Contents {
	/// The README of the repository, at `reference` or the default branch.
	pub async fn get_readme(
		&self,
		owner: &str,
		repo: &str,
		reference: Option<&str>,
	) -> Result<Value> {
		let path = format!("/repos/{}/{}/readme", owner, repo);
		let url = self
			.object
			.fetch_url_with(&path, &with_ref(reference), 0, 0)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}

	/// A file or directory listing.
	pub async fn get(
		&self,
		owner: &str,
		repo: &str,
		path: &str,
		reference: Option<&str>,
	) -> Result<Value> {
		let path = format!("/repos/{}/{}/contents/{}", owner, repo, path);
		let url = self
			.object
			.fetch_url_with(&path, &with_ref(reference), 0, 0)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}

	/// The download location of an archive of the repository. GitHub answers
	/// with a redirect, whose `Location` is returned without following it.
	pub async fn get_archive_link(
		&self,
		owner: &str,
		repo: &str,
		format: ArchiveFormat,
		reference: Option<&str>,
	) -> Result<String> {
		let path = format!("/repos/{}/{}/{}", owner, repo, format.as_str());
		let url = self
			.object
			.fetch_url_with(&path, &with_ref(reference), 0, 0)?;
		let response = self.object.get(url).await?;

		match (response.status, response.header("Location")) {
			(302, Some(location)) => Ok(location.to_string()),
			(status, _) => unexpected(
				&response,
				&format!("Unexpected response code: {}", status),
			),
		}
	}

	/// Commits a new file. `content` is sent base64 encoded.
	pub async fn create(
		&self,
		owner: &str,
		repo: &str,
		path: &str,
		message: &str,
		content: &str,
		branch: Option<&str>,
		committer: Option<&Identity>,
		author: Option<&Identity>,
	) -> Result<Value> {
		let body = with_signature(
			json!({ "message": message, "content": base64::encode(content) }),
			branch,
			committer,
			author,
		)?;

		let url = self
			.object
			.fetch_url(
				&format!("/repos/{}/{}/contents/{}", owner, repo, path),
				0,
				0,
			)?;
		let response = self.object.put(url, &body).await?;
		process_response(&response, 201)
	}

	/// Replaces the file whose current blob is `sha`.
	pub async fn update(
		&self,
		owner: &str,
		repo: &str,
		path: &str,
		message: &str,
		content: &str,
		sha: &str,
		branch: Option<&str>,
		committer: Option<&Identity>,
		author: Option<&Identity>,
	) -> Result<Value> {
		let body = with_signature(
			json!({
				"message": message,
				"content": base64::encode(content),
				"sha": sha,
			}),
			branch,
			committer,
			author,
		)?;

		let url = self
			.object
			.fetch_url(
				&format!("/repos/{}/{}/contents/{}", owner, repo, path),
				0,
				0,
			)?;
		let response = self.object.put(url, &body).await?;
		process_response(&response, 200)
	}

	pub async fn delete(
		&self,
		owner: &str,
		repo: &str,
		path: &str,
		message: &str,
		sha: &str,
		branch: Option<&str>,
		committer: Option<&Identity>,
		author: Option<&Identity>,
	) -> Result<Value> {
		let body = with_signature(
			json!({ "message": message, "sha": sha }),
			branch,
			committer,
			author,
		)?;

		let url = self
			.object
			.fetch_url(
				&format!("/repos/{}/{}/contents/{}", owner, repo, path),
				0,
				0,
			)?;
		let response = self.object.delete_with_body(url, &body).await?;
		process_response(&response, 200)
	}
}

#[cfg(test)]
mod tests {
	use super::{ArchiveFormat, Identity};
	use crate::{http::HttpMethod, testing};

	#[tokio::test]
	async fn get_readme_with_ref() {
		let (github, transport) = testing::github(200, testing::SAMPLE);
		let contents = github.repositories().contents();

		contents.get_readme("joomla", "joomla-platform", None).await.unwrap();
		assert_eq!(
			transport.last_path(),
			"/repos/joomla/joomla-platform/readme"
		);

		contents
			.get_readme("joomla", "joomla-platform", Some("123abc"))
			.await
			.unwrap();
		assert_eq!(
			transport.last_path(),
			"/repos/joomla/joomla-platform/readme?ref=123abc"
		);
	}

	#[tokio::test]
	async fn get_file() {
		let (github, transport) = testing::github(200, testing::SAMPLE);

		github
			.repositories()
			.contents()
			.get(
				"joomla",
				"joomla-platform",
				"path/to/file.php",
				Some("123abc"),
			)
			.await
			.unwrap();

		assert_eq!(
			transport.last_path(),
			"/repos/joomla/joomla-platform/contents/path/to/file.php?ref=123abc"
		);
	}

	#[tokio::test]
	async fn get_archive_link() {
		let transport = std::sync::Arc::new(
			crate::testing::MockTransport::respond(302, "").with_header(
				"Location",
				"https://codeload.github.com/joomla/joomla-platform/legacy.zip/123abc",
			),
		);
		let github = crate::Github::with_transport(
			crate::Options::new(),
			transport.clone(),
		);

		let link = github
			.repositories()
			.contents()
			.get_archive_link(
				"joomla",
				"joomla-platform",
				ArchiveFormat::default(),
				Some("123abc"),
			)
			.await
			.unwrap();

		assert_eq!(
			link,
			"https://codeload.github.com/joomla/joomla-platform/legacy.zip/123abc"
		);
		assert_eq!(
			transport.last_path(),
			"/repos/joomla/joomla-platform/zipball?ref=123abc"
		);
	}

	#[tokio::test]
	async fn get_archive_link_without_redirect() {
		let (github, _) = testing::github(200, testing::SAMPLE);

		let err = github
			.repositories()
			.contents()
			.get_archive_link(
				"joomla",
				"joomla-platform",
				ArchiveFormat::Tarball,
				None,
			)
			.await
			.unwrap_err();

		assert_eq!(err.to_string(), "Unexpected response code: 200");
	}

	#[tokio::test]
	async fn create() {
		let (github, transport) = testing::github(201, testing::SAMPLE);
		let committer = Identity::new("eddieajau", "eddieajau@example.com");
		let author = Identity::new("elkuku", "elkuku@example.com");

		github
			.repositories()
			.contents()
			.create(
				"joomla",
				"joomla-platform",
				"src/foo",
				"my Message",
				"ABC123def",
				Some("xxbranch"),
				Some(&committer),
				Some(&author),
			)
			.await
			.unwrap();

		assert_eq!(transport.last_request().method, HttpMethod::Put);
		assert_eq!(
			transport.last_path(),
			"/repos/joomla/joomla-platform/contents/src/foo"
		);
		assert_eq!(
			transport.last_body().as_deref(),
			Some(concat!(
				r#"{"message":"my Message","content":"QUJDMTIzZGVm","branch":"xxbranch","#,
				r#""committer":{"name":"eddieajau","email":"eddieajau@example.com"},"#,
				r#""author":{"name":"elkuku","email":"elkuku@example.com"}}"#
			))
		);
	}

	#[tokio::test]
	async fn create_requires_emails() {
		let (github, transport) = testing::github(201, testing::SAMPLE);
		let contents = github.repositories().contents();
		let complete = Identity::new("elkuku", "elkuku@example.com");
		let missing = Identity::new("eddieajau", "");

		let err = contents
			.create(
				"joomla",
				"joomla-platform",
				"src/foo",
				"m",
				"c",
				None,
				Some(&complete),
				Some(&missing),
			)
			.await
			.unwrap_err();
		assert_eq!(err.to_string(), "Missing author e-mail for eddieajau");

		let err = contents
			.update(
				"joomla",
				"joomla-platform",
				"src/foo",
				"m",
				"c",
				"abc",
				None,
				Some(&missing),
				None,
			)
			.await
			.unwrap_err();
		assert_eq!(err.to_string(), "Missing committer e-mail for eddieajau");

		assert!(transport.requests().is_empty());
	}

	#[tokio::test]
	async fn delete_sends_body() {
		let (github, transport) = testing::github(200, testing::SAMPLE);

		github
			.repositories()
			.contents()
			.delete(
				"joomla",
				"joomla-platform",
				"src/foo",
				"my Message",
				"ABC123def",
				Some("xxbranch"),
				None,
				None,
			)
			.await
			.unwrap();

		let request = transport.last_request();
		assert_eq!(request.method, HttpMethod::Delete);
		assert_eq!(
			request.body.as_deref(),
			Some(r#"{"message":"my Message","sha":"ABC123def","branch":"xxbranch"}"#)
		);
	}
}
