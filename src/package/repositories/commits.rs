use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::{
	constants::SHA_MEDIA_TYPE,
	object::{process_response, process_response_text},
	Result,
};

package!(Commits);

/// Narrows down a commit listing; unset fields are not sent.
#[derive(Debug, Clone, Default)]
pub struct CommitFilter {
	/// Branch or SHA to start listing from.
	pub sha: Option<String>,
	/// Only commits touching this path.
	pub path: Option<String>,
	pub author: Option<String>,
	pub since: Option<DateTime<Utc>>,
	pub until: Option<DateTime<Utc>>,
}

impl CommitFilter {
	fn query(&self) -> Vec<(&'static str, String)> {
		let mut query = Vec::new();
		if let Some(sha) = &self.sha {
			query.push(("sha", sha.clone()));
		}
		if let Some(path) = &self.path {
			query.push(("path", path.clone()));
		}
		if let Some(author) = &self.author {
			query.push(("author", author.clone()));
		}
		if let Some(since) = self.since {
			query.push(("since", since.to_rfc3339()));
		}
		if let Some(until) = self.until {
			query.push(("until", until.to_rfc3339()));
		}
		query
	}
}

impl Commits {
	pub async fn get_list(
		&self,
		owner: &str,
		repo: &str,
		filter: &CommitFilter,
		page: u32,
		limit: u32,
	) -> Result<Value> {
		let path = format!("/repos/{}/{}/commits", owner, repo);
		let url = self
			.object
			.fetch_url_with(&path, &filter.query(), page, limit)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}

	pub async fn get(
		&self,
		owner: &str,
		repo: &str,
		sha: &str,
	) -> Result<Value> {
		let path = format!("/repos/{}/{}/commits/{}", owner, repo, sha);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}

	/// The SHA `reference` (a branch, tag or SHA prefix) resolves to.
	pub async fn get_sha(
		&self,
		owner: &str,
		repo: &str,
		reference: &str,
	) -> Result<String> {
		let path = format!("/repos/{}/{}/commits/{}", owner, repo, reference);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self
			.object
			.get_with_headers(url, &[("Accept", SHA_MEDIA_TYPE)])
			.await?;
		process_response_text(&response, 200)
	}

	/// The diff between two commits, branches or tags.
	pub async fn compare(
		&self,
		owner: &str,
		repo: &str,
		base: &str,
		head: &str,
	) -> Result<Value> {
		let path =
			format!("/repos/{}/{}/compare/{}...{}", owner, repo, base, head);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}
}

#[cfg(test)]
mod tests {
	use chrono::{DateTime, Utc};

	use super::CommitFilter;
	use crate::testing;

	#[tokio::test]
	async fn get_list_filter() {
		let (github, transport) = testing::github(200, testing::SAMPLE);
		let since: DateTime<Utc> = "2012-01-01T00:00:00Z".parse().unwrap();
		let filter = CommitFilter {
			sha: Some("master".into()),
			path: Some("src/lib.rs".into()),
			since: Some(since),
			..Default::default()
		};

		github
			.repositories()
			.commits()
			.get_list("joomla", "joomla-platform", &filter, 0, 0)
			.await
			.unwrap();

		assert_eq!(
			transport.last_path(),
			"/repos/joomla/joomla-platform/commits?sha=master&path=src%2Flib.rs&since=2012-01-01T00%3A00%3A00%2B00%3A00"
		);
	}

	#[tokio::test]
	async fn get_sha() {
		let (github, transport) =
			testing::github(200, "6dcb09b5b57875f334f61aebed695e2e4193db5e");

		let sha = github
			.repositories()
			.commits()
			.get_sha("joomla", "joomla-platform", "master")
			.await
			.unwrap();

		assert_eq!(sha, "6dcb09b5b57875f334f61aebed695e2e4193db5e");
		assert_eq!(
			transport.last_request().header("Accept"),
			Some("application/vnd.github.VERSION.sha")
		);
	}

	#[tokio::test]
	async fn compare() {
		let (github, transport) = testing::github(200, testing::SAMPLE);

		github
			.repositories()
			.commits()
			.compare("joomla", "joomla-platform", "123abc", "456def")
			.await
			.unwrap();

		assert_eq!(
			transport.last_path(),
			"/repos/joomla/joomla-platform/compare/123abc...456def"
		);
	}

	#[tokio::test]
	async fn get_failure() {
		let (github, _) = testing::github(500, testing::ERROR);

		let err = github
			.repositories()
			.commits()
			.get("joomla", "joomla-platform", "abc")
			.await
			.unwrap_err();

		assert_eq!(err.to_string(), "Generic Error");
	}
}
