use serde_json::{json, Map, Value};
use snafu::{ensure, ResultExt};
use url::{form_urlencoded, Url};

use crate::{
	constants::{FORM_MEDIA_TYPE, OAUTH_ACCESS_TOKEN_URL, OAUTH_AUTHORIZE_URL},
	error,
	object::{process_response, process_response_text, unexpected},
	Result,
};

package!(
	/// OAuth authorizations, grants and the web application flow.
	Authorization
);

/// Response format requested from the OAuth token exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenFormat {
	/// GitHub's default, a form-encoded body.
	Default,
	Json,
	Xml,
}

impl TokenFormat {
	fn accept(self) -> Option<&'static str> {
		match self {
			TokenFormat::Default => None,
			TokenFormat::Json => Some("application/json"),
			TokenFormat::Xml => Some("application/xml"),
		}
	}
}

impl Authorization {
	pub async fn create(
		&self,
		scopes: &[&str],
		note: &str,
		note_url: &str,
	) -> Result<Value> {
		let url = self.object.fetch_url("/authorizations", 0, 0)?;
		let body =
			json!({ "scopes": scopes, "note": note, "note_url": note_url });
		let response = self.object.post(url, &body).await?;
		process_response(&response, 201)
	}

	pub async fn delete(&self, id: u64) -> Result<Value> {
		let url = self
			.object
			.fetch_url(&format!("/authorizations/{}", id), 0, 0)?;
		let response = self.object.delete(url).await?;
		process_response(&response, 204)
	}

	pub async fn delete_grant(&self, id: u64) -> Result<Value> {
		let path = format!("/authorizations/grants/{}", id);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.delete(url).await?;
		process_response(&response, 204)
	}

	/// Updates an authorization. At most one of `scopes` (replace),
	/// `add_scopes` and `remove_scopes` may be non-empty.
	pub async fn edit(
		&self,
		id: u64,
		scopes: &[&str],
		add_scopes: &[&str],
		remove_scopes: &[&str],
		note: &str,
		note_url: &str,
	) -> Result<Value> {
		let lists = [
			("scopes", scopes),
			("add_scopes", add_scopes),
			("remove_scopes", remove_scopes),
		];
		let mut given = lists.iter().filter(|(_, list)| !list.is_empty());
		let scope = given.next();
		ensure!(
			given.next().is_none(),
			error::Validation {
				msg: "You can only send one scope key in this request."
			}
		);

		let mut body = Map::new();
		if let Some((key, list)) = scope {
			body.insert(key.to_string(), json!(list));
		}
		body.insert("note".into(), json!(note));
		body.insert("note_url".into(), json!(note_url));

		let url = self
			.object
			.fetch_url(&format!("/authorizations/{}", id), 0, 0)?;
		let response = self.object.patch(url, &body).await?;
		process_response(&response, 200)
	}

	pub async fn get(&self, id: u64) -> Result<Value> {
		let url = self
			.object
			.fetch_url(&format!("/authorizations/{}", id), 0, 0)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}

	pub async fn get_grant(&self, id: u64) -> Result<Value> {
		let path = format!("/authorizations/grants/{}", id);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}

	pub async fn get_list(&self) -> Result<Value> {
		let url = self.object.fetch_url("/authorizations", 0, 0)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}

	pub async fn get_list_grants(&self) -> Result<Value> {
		let url = self.object.fetch_url("/authorizations/grants", 0, 0)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}

	/// The rate limit of the current credentials. Servers without rate
	/// limiting (GitHub Enterprise) answer 404, reported as
	/// `{"limit": false, "remaining": null}`.
	pub async fn get_rate_limit(&self) -> Result<Value> {
		let url = self.object.fetch_url("/rate_limit", 0, 0)?;
		let response = self.object.get(url).await?;
		match response.status {
			200 => process_response(&response, 200),
			404 => Ok(json!({ "limit": false, "remaining": null })),
			status => unexpected(
				&response,
				&format!("Unexpected response code: {}", status),
			),
		}
	}

	/// The URL to send a user to in order to authorize an application.
	pub fn get_authorization_link(
		&self,
		client_id: &str,
		redirect_uri: Option<&str>,
		scope: Option<&str>,
		state: Option<&str>,
	) -> Result<String> {
		let mut url = Url::parse(OAUTH_AUTHORIZE_URL)
			.context(error::InvalidUrl { url: OAUTH_AUTHORIZE_URL })?;
		{
			let mut query = url.query_pairs_mut();
			query.append_pair("client_id", client_id);
			for (key, value) in [
				("redirect_uri", redirect_uri),
				("scope", scope),
				("state", state),
			] {
				if let Some(value) = value.filter(|value| !value.is_empty()) {
					query.append_pair(key, value);
				}
			}
		}
		Ok(url.into())
	}

	/// Exchanges an OAuth `code` for an access token, posting the
	/// credentials as a form. The JSON format
	/// returns the decoded body; the other formats return the body text as
	/// a JSON string.
	pub async fn request_token(
		&self,
		client_id: &str,
		client_secret: &str,
		code: &str,
		redirect_uri: Option<&str>,
		format: TokenFormat,
	) -> Result<Value> {
		let url = Url::parse(OAUTH_ACCESS_TOKEN_URL)
			.context(error::InvalidUrl { url: OAUTH_ACCESS_TOKEN_URL })?;

		let mut form = form_urlencoded::Serializer::new(String::new());
		form.append_pair("client_id", client_id)
			.append_pair("client_secret", client_secret)
			.append_pair("code", code);
		if let Some(redirect_uri) = redirect_uri.filter(|uri| !uri.is_empty()) {
			form.append_pair("redirect_uri", redirect_uri);
		}

		let mut headers = vec![("Content-Type", FORM_MEDIA_TYPE)];
		headers.extend(format.accept().map(|accept| ("Accept", accept)));
		let response = self
			.object
			.post_raw(url, Some(form.finish()), &headers)
			.await?;

		match format {
			TokenFormat::Json => process_response(&response, 200),
			_ => process_response_text(&response, 200).map(Value::String),
		}
	}

	pub async fn revoke_grant_for_application(
		&self,
		client_id: &str,
		access_token: &str,
	) -> Result<Value> {
		let path =
			format!("/applications/{}/grants/{}", client_id, access_token);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.delete(url).await?;
		process_response(&response, 204)
	}
}
