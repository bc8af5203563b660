use serde::Serialize;
use serde_json::Value;

use crate::{object::process_response, Result};

mod followers;
mod keys;

pub use followers::Followers;
pub use keys::Keys;

package!(
	/// Users, their followers and their public keys.
	Users
);

/// Profile changes for the authenticated user; unset fields are left alone.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserEdit {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub email: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub blog: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub company: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub location: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub hireable: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub bio: Option<String>,
}

impl Users {
	pub fn followers(&self) -> Followers {
		Followers::new(self.object.clone())
	}

	pub fn keys(&self) -> Keys {
		Keys::new(self.object.clone())
	}

	pub async fn get(&self, user: &str) -> Result<Value> {
		let url = self.object.fetch_url(&format!("/users/{}", user), 0, 0)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}

	pub async fn get_authenticated_user(&self) -> Result<Value> {
		let url = self.object.fetch_url("/user", 0, 0)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}

	/// Every user in order of sign up, starting after the user id `since`.
	pub async fn get_list(&self, since: Option<u64>) -> Result<Value> {
		let query: Vec<(&str, String)> = since
			.map(|since| vec![("since", since.to_string())])
			.unwrap_or_default();
		let url = self.object.fetch_url_with("/users", &query, 0, 0)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}

	pub async fn edit(&self, edit: &UserEdit) -> Result<Value> {
		let url = self.object.fetch_url("/user", 0, 0)?;
		let response = self.object.patch(url, edit).await?;
		process_response(&response, 200)
	}
}
