use serde::Serialize;
use serde_json::Value;

use crate::{object::process_response, Result};

mod hooks;
mod members;
mod teams;

pub use hooks::{Hooks, OrgHook};
pub use members::Members;
pub use teams::Teams;

package!(
	/// Organizations, their webhooks, members and teams.
	Orgs
);

/// Organization profile fields to change; `None` fields are left out.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OrgEdit {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub billing_email: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub company: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub email: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub location: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
}

impl Orgs {
	pub fn hooks(&self) -> Hooks {
		Hooks::new(self.object.clone())
	}

	pub fn members(&self) -> Members {
		Members::new(self.object.clone())
	}

	pub fn teams(&self) -> Teams {
		Teams::new(self.object.clone())
	}

	pub async fn get(&self, org: &str) -> Result<Value> {
		let url = self.object.fetch_url(&format!("/orgs/{}", org), 0, 0)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}

	/// Public organizations of `user`, or all organizations of the
	/// authenticated user when `None`.
	pub async fn get_list(&self, user: Option<&str>) -> Result<Value> {
		let path = match user.filter(|user| !user.is_empty()) {
			Some(user) => format!("/users/{}/orgs", user),
			None => "/user/orgs".to_string(),
		};
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}

	pub async fn edit(&self, org: &str, edit: &OrgEdit) -> Result<Value> {
		let url = self.object.fetch_url(&format!("/orgs/{}", org), 0, 0)?;
		let response = self.object.patch(url, edit).await?;
		process_response(&response, 200)
	}
}
