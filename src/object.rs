//! Request building and response decoding shared by every package.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use snafu::{ensure, ResultExt};
use url::Url;

use crate::{
	config::Options,
	constants::FALLBACK_ERROR_MESSAGE,
	error,
	http::{Client, HttpResponse},
	Result,
};

/// Query parameters appended to a request path, in order.
pub type Query<'a> = [(&'a str, String)];

/// The options and HTTP client every package works with. Cloning is cheap;
/// clones share both.
#[derive(Clone)]
pub struct GithubObject {
	options: Arc<Options>,
	client: Arc<Client>,
}

impl GithubObject {
	pub fn new(options: Arc<Options>, client: Arc<Client>) -> Self {
		Self { options, client }
	}

	pub fn options(&self) -> &Options {
		&self.options
	}

	pub fn client(&self) -> &Client {
		&self.client
	}

	/// Builds the URL for `path` relative to the configured API url and
	/// applies authentication. `page` and `limit` are left out when zero.
	///
	/// Token authentication goes through the shared `Authorization` header,
	/// which is only set when the client does not carry one yet. Without a
	/// token, a configured username and password are embedded in the URL.
	pub fn fetch_url(&self, path: &str, page: u32, limit: u32) -> Result<Url> {
		self.fetch_url_with(path, &[], page, limit)
	}

	/// `fetch_url` with extra query parameters, placed before the pagination
	/// parameters.
	pub fn fetch_url_with(
		&self,
		path: &str,
		query: &Query<'_>,
		page: u32,
		limit: u32,
	) -> Result<Url> {
		ensure!(
			!path.is_empty(),
			error::Validation {
				msg: "The request path must not be empty."
			}
		);

		let raw = format!("{}{}", self.options.api_url(), path);
		let mut url =
			Url::parse(&raw).context(error::InvalidUrl { url: &raw })?;

		if let Some(token) = self.options.token() {
			self.client
				.ensure_header("Authorization", &format!("token {}", token));
		} else {
			let username = self.options.username();
			let password = self.options.password();
			if username.is_some() || password.is_some() {
				let embedded = url
					.set_username(username.as_deref().unwrap_or_default())
					.and_then(|()| url.set_password(password.as_deref()));
				ensure!(
					embedded.is_ok(),
					error::Validation {
						msg: format!(
							"The API url {} cannot carry credentials.",
							self.options.api_url()
						)
					}
				);
			}
		}

		if !query.is_empty() || page > 0 || limit > 0 {
			let mut pairs = url.query_pairs_mut();
			for (key, value) in query {
				pairs.append_pair(key, value);
			}
			if page > 0 {
				pairs.append_pair("page", &page.to_string());
			}
			if limit > 0 {
				pairs.append_pair("per_page", &limit.to_string());
			}
		}

		Ok(url)
	}

	fn headers(&self, extra: &[(&str, &str)]) -> Vec<(String, String)> {
		let mut headers =
			vec![("User-Agent".to_string(), self.options.user_agent())];
		headers.extend(
			extra
				.iter()
				.map(|(name, value)| (name.to_string(), value.to_string())),
		);
		headers
	}

	pub async fn get(&self, url: Url) -> Result<HttpResponse> {
		self.get_with_headers(url, &[]).await
	}

	pub async fn get_with_headers(
		&self,
		url: Url,
		headers: &[(&str, &str)],
	) -> Result<HttpResponse> {
		self.client
			.get(url, &self.headers(headers), self.options.timeout())
			.await
	}

	pub async fn post<B: Serialize + ?Sized>(
		&self,
		url: Url,
		body: &B,
	) -> Result<HttpResponse> {
		let body = encode(body)?;
		self.post_raw(url, Some(body), &[]).await
	}

	pub async fn post_raw(
		&self,
		url: Url,
		body: Option<String>,
		headers: &[(&str, &str)],
	) -> Result<HttpResponse> {
		self.client
			.post(url, body, &self.headers(headers), self.options.timeout())
			.await
	}

	pub async fn put<B: Serialize + ?Sized>(
		&self,
		url: Url,
		body: &B,
	) -> Result<HttpResponse> {
		let body = encode(body)?;
		self.put_raw(url, Some(body)).await
	}

	/// PUT with a verbatim body, e.g. the empty body of star/follow calls.
	pub async fn put_raw(
		&self,
		url: Url,
		body: Option<String>,
	) -> Result<HttpResponse> {
		self.client
			.put(url, body, &self.headers(&[]), self.options.timeout())
			.await
	}

	pub async fn patch<B: Serialize + ?Sized>(
		&self,
		url: Url,
		body: &B,
	) -> Result<HttpResponse> {
		let body = encode(body)?;
		self.client
			.patch(url, Some(body), &self.headers(&[]), self.options.timeout())
			.await
	}

	pub async fn delete(&self, url: Url) -> Result<HttpResponse> {
		self.client
			.delete(url, None, &self.headers(&[]), self.options.timeout())
			.await
	}

	pub async fn delete_with_body<B: Serialize + ?Sized>(
		&self,
		url: Url,
		body: &B,
	) -> Result<HttpResponse> {
		let body = encode(body)?;
		self.client
			.delete(url, Some(body), &self.headers(&[]), self.options.timeout())
			.await
	}
}

pub fn encode<B: Serialize + ?Sized>(body: &B) -> Result<String> {
	serde_json::to_string(body).context(error::Json)
}

/// Parses a body as JSON. An empty body decodes to `Value::Null`.
pub fn decode_body(body: &str) -> Result<Value> {
	if body.trim().is_empty() {
		return Ok(Value::Null);
	}
	serde_json::from_str(body).context(error::Json)
}

/// The `message` field of an error body, if the body is JSON and has one.
pub fn error_message(response: &HttpResponse) -> Option<String> {
	serde_json::from_str::<Value>(&response.body)
		.ok()
		.and_then(|body| {
			body.get("message")
				.and_then(Value::as_str)
				.map(str::to_owned)
		})
}

/// Fails with the domain error for `response`, using `fallback` when the
/// body carries no message.
pub fn unexpected<T>(response: &HttpResponse, fallback: &str) -> Result<T> {
	let message =
		error_message(response).unwrap_or_else(|| fallback.to_string());
	log::warn!("GitHub responded {}: {}", response.status, message);
	error::UnexpectedResponse {
		status: response.status,
		message,
	}
	.fail()
}

/// Checks the status code against the single code expected for the call
/// and decodes the body.
pub fn process_response(
	response: &HttpResponse,
	expected: u16,
) -> Result<Value> {
	ensure_status(response, expected)?;
	decode_body(&response.body)
}

/// `process_response` for endpoints whose success body is not JSON.
pub fn process_response_text(
	response: &HttpResponse,
	expected: u16,
) -> Result<String> {
	ensure_status(response, expected)?;
	Ok(response.body.clone())
}

fn ensure_status(response: &HttpResponse, expected: u16) -> Result<()> {
	if response.status != expected {
		return unexpected(response, FALLBACK_ERROR_MESSAGE);
	}
	Ok(())
}

/// Decodes a yes-or-no endpoint: `present` means true, 404 means false,
/// anything else is an error carrying the body's message or `fallback`.
pub fn presence_or(
	response: &HttpResponse,
	present: u16,
	fallback: &str,
) -> Result<bool> {
	match response.status {
		status if status == present => Ok(true),
		404 => Ok(false),
		_ => unexpected(response, fallback),
	}
}

/// `presence_or` falling back to "Unexpected response code: N".
pub fn presence(response: &HttpResponse, present: u16) -> Result<bool> {
	let fallback = format!("Unexpected response code: {}", response.status);
	presence_or(response, present, &fallback)
}

/// `presence` that reports the status code even when the body has a message.
pub fn presence_by_status(
	response: &HttpResponse,
	present: u16,
) -> Result<bool> {
	match response.status {
		status if status == present => Ok(true),
		404 => Ok(false),
		status => {
			let message = format!("Unexpected response code: {}", status);
			log::warn!("GitHub responded {}: {}", status, message);
			error::UnexpectedResponse { status, message }.fail()
		}
	}
}

/// Rejects `value` unless it is one of `allowed`.
pub fn ensure_allowed(what: &str, value: &str, allowed: &[&str]) -> Result<()> {
	ensure!(
		allowed.contains(&value),
		error::Validation {
			msg: format!(
				"The {} value \"{}\" is invalid. Allowed values are: {}",
				what,
				value,
				allowed.join(", ")
			)
		}
	);
	Ok(())
}
