use serde_json::Value;

use crate::{object::process_response, Result};

package!(
	/// Legacy repository downloads. GitHub no longer accepts new ones, so
	/// only reading and deleting is offered.
	Downloads
);

impl Downloads {
	pub async fn get_list(&self, owner: &str, repo: &str) -> Result<Value> {
		let path = format!("/repos/{}/{}/downloads", owner, repo);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}

	pub async fn get(&self, owner: &str, repo: &str, id: u64) -> Result<Value> {
		let path = format!("/repos/{}/{}/downloads/{}", owner, repo, id);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}

	pub async fn delete(
		&self,
		owner: &str,
		repo: &str,
		id: u64,
	) -> Result<Value> {
		let path = format!("/repos/{}/{}/downloads/{}", owner, repo, id);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.delete(url).await?;
		process_response(&response, 204)
	}
}

#[cfg(test)]
mod tests {
	use crate::testing;

	#[tokio::test]
	async fn get() {
		let (github, transport) = testing::github(200, testing::SAMPLE);

		github
			.repositories()
			.downloads()
			.get("joomla", "joomla-platform", 1)
			.await
			.unwrap();

		assert_eq!(
			transport.last_path(),
			"/repos/joomla/joomla-platform/downloads/1"
		);
	}

	#[tokio::test]
	async fn delete() {
		let (github, _) = testing::github(204, "");
		assert!(github
			.repositories()
			.downloads()
			.delete("joomla", "joomla-platform", 1)
			.await
			.unwrap()
			.is_null());
	}
}
