use std::path::PathBuf;

use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility = "pub")]
pub enum Error {
	/// An error occurred while sending or receiving a HTTP request or response
	/// respectively.
	#[snafu(display("HTTP transport error: {}", source))]
	Http { source: reqwest::Error },

	/// An error occurred while parsing or serializing JSON.
	#[snafu(display("JSON error: {}", source))]
	Json { source: serde_json::Error },

	/// The API url combined with the request path is not a valid URL.
	#[snafu(display("Invalid URL {}: {}", url, source))]
	InvalidUrl {
		url: String,
		source: url::ParseError,
	},

	/// GitHub answered with a status code other than the one expected for
	/// the call. The message is taken from the error body when present.
	#[snafu(display("{}", message))]
	UnexpectedResponse { status: u16, message: String },

	/// The arguments of a call were rejected before anything was sent.
	#[snafu(display("{}", msg))]
	Validation { msg: String },

	/// A local file referenced by a request could not be read.
	#[snafu(display("Unable to read {}: {}", path.display(), source))]
	Io {
		path: PathBuf,
		source: std::io::Error,
	},
}

impl Error {
	/// Status code of the response that caused the error, if any.
	pub fn status(&self) -> Option<u16> {
		match self {
			Error::UnexpectedResponse { status, .. } => Some(*status),
			Error::Http { source } => source.status().map(|s| s.as_u16()),
			_ => None,
		}
	}

	pub fn is_validation(&self) -> bool {
		matches!(self, Error::Validation { .. })
	}
}
