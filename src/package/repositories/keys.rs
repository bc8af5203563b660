use serde_json::{json, Value};

use crate::{object::process_response, Result};

package!(
	/// Deploy keys.
	Keys
);

impl Keys {
	pub async fn get_list(&self, owner: &str, repo: &str) -> Result<Value> {
		let path = format!("/repos/{}/{}/keys", owner, repo);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}

	pub async fn get(&self, owner: &str, repo: &str, id: u64) -> Result<Value> {
		let path = format!("/repos/{}/{}/keys/{}", owner, repo, id);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}

	pub async fn create(
		&self,
		owner: &str,
		repo: &str,
		title: &str,
		key: &str,
	) -> Result<Value> {
		let path = format!("/repos/{}/{}/keys", owner, repo);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self
			.object
			.post(url, &json!({ "title": title, "key": key }))
			.await?;
		process_response(&response, 201)
	}

	pub async fn edit(
		&self,
		owner: &str,
		repo: &str,
		id: u64,
		title: &str,
		key: &str,
	) -> Result<Value> {
		let path = format!("/repos/{}/{}/keys/{}", owner, repo, id);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self
			.object
			.patch(url, &json!({ "title": title, "key": key }))
			.await?;
		process_response(&response, 200)
	}

	pub async fn delete(
		&self,
		owner: &str,
		repo: &str,
		id: u64,
	) -> Result<Value> {
		let path = format!("/repos/{}/{}/keys/{}", owner, repo, id);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.delete(url).await?;
		process_response(&response, 204)
	}
}

#[cfg(test)]
mod tests {
	use crate::testing;

	#[tokio::test]
	async fn create() {
		let (github, transport) = testing::github(201, testing::SAMPLE);

		github
			.repositories()
			.keys()
			.create(
				"joomla",
				"joomla-platform",
				"email@example.com",
				"ssh-rsa AAAAB3NzaC1yc2EAAA",
			)
			.await
			.unwrap();

		assert_eq!(transport.last_path(), "/repos/joomla/joomla-platform/keys");
		assert_eq!(
			transport.last_body().as_deref(),
			Some(r#"{"title":"email@example.com","key":"ssh-rsa AAAAB3NzaC1yc2EAAA"}"#)
		);
	}

	#[tokio::test]
	async fn delete_failure() {
		let (github, _) = testing::github(500, testing::ERROR);

		let err = github
			.repositories()
			.keys()
			.delete("joomla", "joomla-platform", 1)
			.await
			.unwrap_err();

		assert_eq!(err.to_string(), "Generic Error");
	}
}
