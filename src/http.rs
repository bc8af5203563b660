use std::{fmt, sync::Arc, time::Duration};

use async_trait::async_trait;
use parking_lot::RwLock;
use snafu::ResultExt;
use url::Url;

use crate::{error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
	Get,
	Post,
	Put,
	Patch,
	Delete,
}

impl fmt::Display for HttpMethod {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			HttpMethod::Get => "GET",
			HttpMethod::Post => "POST",
			HttpMethod::Put => "PUT",
			HttpMethod::Patch => "PATCH",
			HttpMethod::Delete => "DELETE",
		})
	}
}

/// A request described as plain data, handed to a `Transport` for execution.
#[derive(Debug, Clone)]
pub struct HttpRequest {
	pub method: HttpMethod,
	pub url: Url,
	pub headers: Vec<(String, String)>,
	pub body: Option<String>,
	pub timeout: Option<Duration>,
}

impl HttpRequest {
	/// Header lookup, case-insensitive on the name.
	pub fn header(&self, name: &str) -> Option<&str> {
		find_header(&self.headers, name)
	}
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HttpResponse {
	pub status: u16,
	pub headers: Vec<(String, String)>,
	pub body: String,
}

impl HttpResponse {
	pub fn new<B: Into<String>>(status: u16, body: B) -> Self {
		Self {
			status,
			headers: Vec::new(),
			body: body.into(),
		}
	}

	pub fn header(&self, name: &str) -> Option<&str> {
		find_header(&self.headers, name)
	}
}

fn find_header<'a>(
	headers: &'a [(String, String)],
	name: &str,
) -> Option<&'a str> {
	headers
		.iter()
		.find(|(key, _)| key.eq_ignore_ascii_case(name))
		.map(|(_, value)| value.as_str())
}

/// Executes requests on behalf of a `Client`. Every status code, including
/// 4xx and 5xx, must come back as an `HttpResponse`; errors are reserved for
/// failures to talk to the server at all.
#[async_trait]
pub trait Transport: Send + Sync {
	async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}

macro_rules! impl_methods_with_body {
    ($($method:ident : $variant:ident),*) => {
        $(
            pub async fn $method(
                &self,
                url: Url,
                body: Option<String>,
                headers: &[(String, String)],
                timeout: Option<Duration>,
            ) -> Result<HttpResponse> {
                self.request(HttpMethod::$variant, url, body, headers, timeout)
                    .await
            }
        )*
    }
}

/// The HTTP client shared by every package: a transport plus the headers
/// sent with every request.
pub struct Client {
	transport: Arc<dyn Transport>,
	headers: RwLock<Vec<(String, String)>>,
}

/// HTTP util methods.
impl Client {
	pub fn new<T: Transport + 'static>(transport: T) -> Self {
		Self::from_shared(Arc::new(transport))
	}

	pub fn from_shared(transport: Arc<dyn Transport>) -> Self {
		Self {
			transport,
			headers: RwLock::new(Vec::new()),
		}
	}

	/// Adds `name: value` to the shared headers unless a header with that
	/// name is already present. Returns whether the header was inserted.
	pub fn ensure_header(&self, name: &str, value: &str) -> bool {
		if find_header(&self.headers.read(), name).is_some() {
			return false;
		}

		let mut headers = self.headers.write();
		if find_header(&headers, name).is_some() {
			return false;
		}
		headers.push((name.to_string(), value.to_string()));
		true
	}

	pub fn headers(&self) -> Vec<(String, String)> {
		self.headers.read().clone()
	}

	pub fn header(&self, name: &str) -> Option<String> {
		find_header(&self.headers.read(), name).map(str::to_owned)
	}

	impl_methods_with_body! {
		post: Post,
		put: Put,
		patch: Patch,
		delete: Delete
	}

	pub async fn get(
		&self,
		url: Url,
		headers: &[(String, String)],
		timeout: Option<Duration>,
	) -> Result<HttpResponse> {
		self.request(HttpMethod::Get, url, None, headers, timeout)
			.await
	}

	/// Sends a request carrying the shared headers. Per-call headers replace
	/// shared ones with the same name.
	pub async fn request(
		&self,
		method: HttpMethod,
		url: Url,
		body: Option<String>,
		headers: &[(String, String)],
		timeout: Option<Duration>,
	) -> Result<HttpResponse> {
		let mut all_headers: Vec<(String, String)> = self
			.headers()
			.into_iter()
			.filter(|(name, _)| find_header(headers, name).is_none())
			.collect();
		all_headers.extend(headers.iter().cloned());

		let display_url = redacted(&url);
		log::debug!("{} {}", method, display_url);

		let response = self
			.transport
			.send(HttpRequest {
				method,
				url,
				headers: all_headers,
				body,
				timeout,
			})
			.await?;

		log::debug!("{} {} -> {}", method, display_url, response.status);
		Ok(response)
	}
}

/// The URL with any embedded credentials removed, for logging.
pub fn redacted(url: &Url) -> String {
	let mut url = url.clone();
	let _ = url.set_password(None);
	let _ = url.set_username("");
	url.to_string()
}

/// Default transport backed by `reqwest`. Redirects are not followed so
/// that callers can read `Location` headers themselves.
pub struct ReqwestTransport {
	client: reqwest::Client,
}

impl ReqwestTransport {
	pub fn new() -> Result<Self> {
		let client = reqwest::Client::builder()
			.redirect(reqwest::redirect::Policy::none())
			.build()
			.context(error::Http)?;
		Ok(Self { client })
	}

	pub fn with_client(client: reqwest::Client) -> Self {
		Self { client }
	}
}

/// Moves URL user-info out of the URL so it can be sent as basic auth.
fn take_credentials(url: &mut Url) -> Option<(String, Option<String>)> {
	if url.username().is_empty() && url.password().is_none() {
		return None;
	}

	let decode = |value: &str| {
		urlencoding::decode(value)
			.map(|decoded| decoded.into_owned())
			.unwrap_or_else(|_| value.to_string())
	};
	let username = decode(url.username());
	let password = url.password().map(decode);

	let _ = url.set_username("");
	let _ = url.set_password(None);

	Some((username, password))
}

#[async_trait]
impl Transport for ReqwestTransport {
	async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
		let HttpRequest {
			method,
			mut url,
			headers,
			body,
			timeout,
		} = request;

		let method = match method {
			HttpMethod::Get => reqwest::Method::GET,
			HttpMethod::Post => reqwest::Method::POST,
			HttpMethod::Put => reqwest::Method::PUT,
			HttpMethod::Patch => reqwest::Method::PATCH,
			HttpMethod::Delete => reqwest::Method::DELETE,
		};
		let credentials = take_credentials(&mut url);

		let mut builder = self.client.request(method, url);
		if let Some((username, password)) = credentials {
			builder = builder.basic_auth(username, password);
		}
		for (name, value) in &headers {
			builder = builder.header(name.as_str(), value.as_str());
		}
		if let Some(body) = body {
			if find_header(&headers, "content-type").is_none() {
				builder = builder
					.header(reqwest::header::CONTENT_TYPE, "application/json");
			}
			builder = builder.body(body);
		}
		if let Some(timeout) = timeout {
			builder = builder.timeout(timeout);
		}

		let response = builder.send().await.context(error::Http)?;
		let status = response.status().as_u16();
		let headers = response
			.headers()
			.iter()
			.filter_map(|(name, value)| {
				value
					.to_str()
					.ok()
					.map(|value| (name.as_str().to_string(), value.to_string()))
			})
			.collect();
		let body = response.text().await.context(error::Http)?;

		Ok(HttpResponse {
			status,
			headers,
			body,
		})
	}
}
