use serde_json::{json, Value};

use crate::{object::process_response, Result};

package!(Refs);

impl Refs {
	/// A single reference, e.g. `heads/master`.
	pub async fn get(
		&self,
		owner: &str,
		repo: &str,
		reference: &str,
	) -> Result<Value> {
		let path = format!("/repos/{}/{}/git/refs/{}", owner, repo, reference);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}

	/// All references, or those under `namespace` (e.g. `tags`).
	pub async fn get_list(
		&self,
		owner: &str,
		repo: &str,
		namespace: Option<&str>,
		page: u32,
		limit: u32,
	) -> Result<Value> {
		let mut path = format!("/repos/{}/{}/git/refs", owner, repo);
		if let Some(namespace) = namespace.filter(|ns| !ns.is_empty()) {
			path.push('/');
			path.push_str(namespace);
		}
		let url = self.object.fetch_url(&path, page, limit)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}

	pub async fn create(
		&self,
		owner: &str,
		repo: &str,
		reference: &str,
		sha: &str,
	) -> Result<Value> {
		let path = format!("/repos/{}/{}/git/refs", owner, repo);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self
			.object
			.post(url, &json!({ "ref": reference, "sha": sha }))
			.await?;
		process_response(&response, 201)
	}

	/// Points a reference at `sha`. `force` is only sent when set.
	pub async fn edit(
		&self,
		owner: &str,
		repo: &str,
		reference: &str,
		sha: &str,
		force: bool,
	) -> Result<Value> {
		let path = format!("/repos/{}/{}/git/refs/{}", owner, repo, reference);
		let body = if force {
			json!({ "force": true, "sha": sha })
		} else {
			json!({ "sha": sha })
		};
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.patch(url, &body).await?;
		process_response(&response, 200)
	}

	pub async fn delete(
		&self,
		owner: &str,
		repo: &str,
		reference: &str,
	) -> Result<Value> {
		let path = format!("/repos/{}/{}/git/refs/{}", owner, repo, reference);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.delete(url).await?;
		process_response(&response, 204)
	}
}
