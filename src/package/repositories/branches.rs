use serde_json::Value;

use crate::{object::process_response, Result};

package!(Branches);

impl Branches {
	pub async fn get_list(
		&self,
		owner: &str,
		repo: &str,
		page: u32,
		limit: u32,
	) -> Result<Value> {
		let path = format!("/repos/{}/{}/branches", owner, repo);
		let url = self.object.fetch_url(&path, page, limit)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}

	pub async fn get(
		&self,
		owner: &str,
		repo: &str,
		branch: &str,
	) -> Result<Value> {
		let path = format!("/repos/{}/{}/branches/{}", owner, repo, branch);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}
}

#[cfg(test)]
mod tests {
	use crate::testing;

	#[tokio::test]
	async fn get_list() {
		let (github, transport) = testing::github(200, testing::SAMPLE);

		let branches = github
			.repositories()
			.branches()
			.get_list("joomla", "joomla-platform", 0, 0)
			.await
			.unwrap();

		assert_eq!(branches, testing::sample());
		assert_eq!(
			transport.last_path(),
			"/repos/joomla/joomla-platform/branches"
		);
	}

	#[tokio::test]
	async fn get_failure() {
		let (github, _) = testing::github(500, testing::ERROR);

		let err = github
			.repositories()
			.branches()
			.get("joomla", "joomla-platform", "master")
			.await
			.unwrap_err();

		assert_eq!(err.to_string(), "Generic Error");
	}
}
