use serde_json::Value;

use crate::{
	constants::RAW_JSON_MEDIA_TYPE,
	object::{process_response, process_response_text},
	Result,
};

package!(
	/// `.gitignore` templates.
	Gitignore
);

impl Gitignore {
	/// Names of the available templates.
	pub async fn get_list(&self) -> Result<Value> {
		let url = self.object.fetch_url("/gitignore/templates", 0, 0)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}

	/// A single template. With `raw` the template source is returned as a
	/// JSON string instead of the decoded template object.
	pub async fn get(&self, name: &str, raw: bool) -> Result<Value> {
		let url = self
			.object
			.fetch_url(&format!("/gitignore/templates/{}", name), 0, 0)?;

		if raw {
			let response = self
				.object
				.get_with_headers(url, &[("Accept", RAW_JSON_MEDIA_TYPE)])
				.await?;
			process_response_text(&response, 200).map(Value::String)
		} else {
			let response = self.object.get(url).await?;
			process_response(&response, 200)
		}
	}
}
