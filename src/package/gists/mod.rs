use std::path::PathBuf;

use serde_json::{json, Map, Value};
use snafu::ResultExt;

use crate::{
	error,
	object::{presence, process_response},
	Result,
};

mod comments;

pub use comments::Comments;

package!(Gists);

/// A file of a gist, given inline or read from disk.
#[derive(Debug, Clone)]
pub enum GistFile {
	Content { name: String, content: String },
	/// A local file, uploaded under its file name.
	Path(PathBuf),
}

impl GistFile {
	pub fn content<N: Into<String>, C: Into<String>>(
		name: N,
		content: C,
	) -> Self {
		GistFile::Content {
			name: name.into(),
			content: content.into(),
		}
	}

	pub fn path<P: Into<PathBuf>>(path: P) -> Self {
		GistFile::Path(path.into())
	}

	fn read(&self) -> Result<(String, String)> {
		match self {
			GistFile::Content { name, content } => {
				Ok((name.clone(), content.clone()))
			}
			GistFile::Path(path) => {
				let content = std::fs::read_to_string(path)
					.context(error::Io { path: path.clone() })?;
				let name = path
					.file_name()
					.map(|name| name.to_string_lossy().into_owned())
					.unwrap_or_else(|| path.to_string_lossy().into_owned());
				Ok((name, content))
			}
		}
	}
}

/// `{"name": {"content": "..."}}` for every file, in order.
fn file_data(files: &[GistFile]) -> Result<Value> {
	let mut data = Map::new();
	for file in files {
		let (name, content) = file.read()?;
		data.insert(name, json!({ "content": content }));
	}
	Ok(Value::Object(data))
}

impl Gists {
	pub fn comments(&self) -> Comments {
		Comments::new(self.object.clone())
	}

	/// Creates a gist. Files given by path are read before anything is sent.
	pub async fn create(
		&self,
		files: &[GistFile],
		public: bool,
		description: Option<&str>,
	) -> Result<Value> {
		let mut body = json!({ "files": file_data(files)?, "public": public });
		if let Some(description) = description {
			body["description"] = json!(description);
		}

		let url = self.object.fetch_url("/gists", 0, 0)?;
		let response = self.object.post(url, &body).await?;
		process_response(&response, 201)
	}

	pub async fn edit(
		&self,
		id: &str,
		files: &[GistFile],
		public: Option<bool>,
		description: Option<&str>,
	) -> Result<Value> {
		let mut body = Map::new();
		if let Some(description) = description {
			body.insert("description".into(), json!(description));
		}
		if let Some(public) = public {
			body.insert("public".into(), json!(public));
		}
		if !files.is_empty() {
			body.insert("files".into(), file_data(files)?);
		}

		let url = self.object.fetch_url(&format!("/gists/{}", id), 0, 0)?;
		let response = self.object.patch(url, &body).await?;
		process_response(&response, 200)
	}

	pub async fn delete(&self, id: &str) -> Result<Value> {
		let url = self.object.fetch_url(&format!("/gists/{}", id), 0, 0)?;
		let response = self.object.delete(url).await?;
		process_response(&response, 204)
	}

	pub async fn fork(&self, id: &str) -> Result<Value> {
		let url = self.object.fetch_url(&format!("/gists/{}/forks", id), 0, 0)?;
		let response = self
			.object
			.post_raw(url, Some(String::new()), &[])
			.await?;
		process_response(&response, 201)
	}

	pub async fn get(&self, id: &str) -> Result<Value> {
		self.get_path(&format!("/gists/{}", id), 0, 0).await
	}

	pub async fn get_revision(&self, id: &str, sha: &str) -> Result<Value> {
		self.get_path(&format!("/gists/{}/{}", id, sha), 0, 0).await
	}

	pub async fn get_commit_list(
		&self,
		id: &str,
		page: u32,
		limit: u32,
	) -> Result<Value> {
		self.get_path(&format!("/gists/{}/commits", id), page, limit).await
	}

	pub async fn get_fork_list(
		&self,
		id: &str,
		page: u32,
		limit: u32,
	) -> Result<Value> {
		self.get_path(&format!("/gists/{}/forks", id), page, limit).await
	}

	/// Gists of the authenticated user, or public gists when anonymous.
	pub async fn get_list(&self, page: u32, limit: u32) -> Result<Value> {
		self.get_path("/gists", page, limit).await
	}

	pub async fn get_list_by_user(
		&self,
		user: &str,
		page: u32,
		limit: u32,
	) -> Result<Value> {
		self.get_path(&format!("/users/{}/gists", user), page, limit).await
	}

	pub async fn get_list_public(
		&self,
		page: u32,
		limit: u32,
	) -> Result<Value> {
		self.get_path("/gists/public", page, limit).await
	}

	pub async fn get_list_starred(
		&self,
		page: u32,
		limit: u32,
	) -> Result<Value> {
		self.get_path("/gists/starred", page, limit).await
	}

	pub async fn is_starred(&self, id: &str) -> Result<bool> {
		let url = self.object.fetch_url(&format!("/gists/{}/star", id), 0, 0)?;
		let response = self.object.get(url).await?;
		presence(&response, 204)
	}

	pub async fn star(&self, id: &str) -> Result<Value> {
		let url = self.object.fetch_url(&format!("/gists/{}/star", id), 0, 0)?;
		let response = self.object.put_raw(url, Some(String::new())).await?;
		process_response(&response, 204)
	}

	pub async fn unstar(&self, id: &str) -> Result<Value> {
		let url = self.object.fetch_url(&format!("/gists/{}/star", id), 0, 0)?;
		let response = self.object.delete(url).await?;
		process_response(&response, 204)
	}

	async fn get_path(
		&self,
		path: &str,
		page: u32,
		limit: u32,
	) -> Result<Value> {
		let url = self.object.fetch_url(path, page, limit)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}
}
