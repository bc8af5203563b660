use serde_json::json;

use crate::{
	object::{ensure_allowed, process_response_text},
	Result,
};

package!(Markdown);

impl Markdown {
	/// Renders `text` to HTML. `mode` is `gfm` or `markdown`; `context` is
	/// the `owner/repo` used to resolve references in `gfm` mode.
	pub async fn render(
		&self,
		text: &str,
		mode: &str,
		context: Option<&str>,
	) -> Result<String> {
		ensure_allowed("mode", mode, &["gfm", "markdown"])?;

		let url = self.object.fetch_url("/markdown", 0, 0)?;
		let body = json!({ "text": text, "mode": mode, "context": context });
		let response = self.object.post(url, &body).await?;
		process_response_text(&response, 200)
	}
}

#[cfg(test)]
mod tests {
	use crate::testing;

	#[tokio::test]
	async fn render() {
		let html = "<p>Hello world <a href=\"http://github.com/github/linguist/issues/1\" \
			class=\"issue-link\" title=\"This is a simple issue\">github/linguist#1</a> \
			<strong>cool</strong>, and #1!</p>";
		let (github, transport) = testing::github(200, html);

		let rendered = github
			.markdown()
			.render(
				"Hello world github/linguist#1 **cool**, and #1!",
				"gfm",
				Some("github/gollum"),
			)
			.await
			.unwrap();

		assert_eq!(rendered, html);
		assert_eq!(
			transport.last_body().as_deref(),
			Some(r#"{"text":"Hello world github/linguist#1 **cool**, and #1!","mode":"gfm","context":"github/gollum"}"#)
		);
	}

	#[tokio::test]
	async fn render_rejects_mode() {
		let (github, transport) = testing::github(200, "");

		let err = github
			.markdown()
			.render("text", "xml", None)
			.await
			.unwrap_err();

		assert!(err.is_validation());
		assert!(transport.requests().is_empty());
	}

	#[tokio::test]
	async fn render_failure() {
		let (github, _) = testing::github(500, testing::ERROR);

		let err = github
			.markdown()
			.render("text", "markdown", None)
			.await
			.unwrap_err();

		assert_eq!(err.to_string(), "Generic Error");
	}
}
