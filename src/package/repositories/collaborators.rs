use serde_json::Value;

use crate::{
	object::{presence, process_response},
	Result,
};

package!(Collaborators);

impl Collaborators {
	pub async fn get_list(&self, owner: &str, repo: &str) -> Result<Value> {
		let path = format!("/repos/{}/{}/collaborators", owner, repo);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}

	/// Whether `user` is a collaborator on the repository.
	pub async fn get(
		&self,
		owner: &str,
		repo: &str,
		user: &str,
	) -> Result<bool> {
		let path = format!("/repos/{}/{}/collaborators/{}", owner, repo, user);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.get(url).await?;
		presence(&response, 204)
	}

	pub async fn add(
		&self,
		owner: &str,
		repo: &str,
		user: &str,
	) -> Result<Value> {
		let path = format!("/repos/{}/{}/collaborators/{}", owner, repo, user);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.put_raw(url, Some(String::new())).await?;
		process_response(&response, 204)
	}

	pub async fn remove(
		&self,
		owner: &str,
		repo: &str,
		user: &str,
	) -> Result<Value> {
		let path = format!("/repos/{}/{}/collaborators/{}", owner, repo, user);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.delete(url).await?;
		process_response(&response, 204)
	}
}
