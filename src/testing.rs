//! Recording transport for unit tests.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::{
	config::Options,
	http::{HttpRequest, HttpResponse, Transport},
	Github, Result,
};

pub const SAMPLE: &str = r#"{"a":1,"b":2,"c":3,"d":4,"e":5}"#;

pub const ERROR: &str = r#"{"message":"Generic Error"}"#;

pub struct MockTransport {
	response: Mutex<HttpResponse>,
	requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
	pub fn new() -> Self {
		Self::respond(200, SAMPLE)
	}

	pub fn respond(status: u16, body: &str) -> Self {
		Self {
			response: Mutex::new(HttpResponse::new(status, body)),
			requests: Mutex::new(Vec::new()),
		}
	}

	pub fn with_header(self, name: &str, value: &str) -> Self {
		self.response
			.lock()
			.headers
			.push((name.to_string(), value.to_string()));
		self
	}

	pub fn requests(&self) -> Vec<HttpRequest> {
		self.requests.lock().clone()
	}

	pub fn last_request(&self) -> HttpRequest {
		self.requests
			.lock()
			.last()
			.cloned()
			.expect("no request was sent")
	}

	/// The URL of the last request relative to the API root, e.g.
	/// `/repos/joomla/joomla-platform/issues?state=closed`.
	pub fn last_path(&self) -> String {
		let url = self.last_request().url;
		match url.query() {
			Some(query) => format!("{}?{}", url.path(), query),
			None => url.path().to_string(),
		}
	}

	pub fn last_body(&self) -> Option<String> {
		self.last_request().body
	}
}

#[async_trait]
impl Transport for MockTransport {
	async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
		self.requests.lock().push(request);
		Ok(self.response.lock().clone())
	}
}

/// A `Github` instance on the default API url whose transport answers every
/// request with `status` and `body`.
pub fn github(status: u16, body: &str) -> (Github, Arc<MockTransport>) {
	let transport = Arc::new(MockTransport::respond(status, body));
	let github = Github::with_transport(Options::new(), transport.clone());
	(github, transport)
}

pub fn sample() -> serde_json::Value {
	serde_json::from_str(SAMPLE).unwrap()
}
