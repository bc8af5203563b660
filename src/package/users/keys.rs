use serde_json::{json, Value};

use crate::{object::process_response, Result};

package!(
	/// Public SSH keys of users.
	Keys
);

impl Keys {
	/// Public keys of any user; no authentication needed.
	pub async fn get_list_user(&self, user: &str) -> Result<Value> {
		let url = self
			.object
			.fetch_url(&format!("/users/{}/keys", user), 0, 0)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}

	/// Keys of the authenticated user.
	pub async fn get_list(&self) -> Result<Value> {
		let url = self.object.fetch_url("/user/keys", 0, 0)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}

	pub async fn get(&self, id: u64) -> Result<Value> {
		let url = self.object.fetch_url(&format!("/user/keys/{}", id), 0, 0)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}

	pub async fn create(&self, title: &str, key: &str) -> Result<Value> {
		let url = self.object.fetch_url("/user/keys", 0, 0)?;
		let response = self
			.object
			.post(url, &json!({ "title": title, "key": key }))
			.await?;
		process_response(&response, 201)
	}

	pub async fn edit(&self, id: u64, title: &str, key: &str) -> Result<Value> {
		let url = self.object.fetch_url(&format!("/user/keys/{}", id), 0, 0)?;
		let response = self
			.object
			.patch(url, &json!({ "title": title, "key": key }))
			.await?;
		process_response(&response, 200)
	}

	pub async fn delete(&self, id: u64) -> Result<Value> {
		let url = self.object.fetch_url(&format!("/user/keys/{}", id), 0, 0)?;
		let response = self.object.delete(url).await?;
		process_response(&response, 204)
	}
}
