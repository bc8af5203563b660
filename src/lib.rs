pub mod config;
pub mod constants;
pub mod error;
mod github;
pub mod http;
pub mod object;
pub mod package;
#[cfg(test)]
mod testing;

pub use config::Options;
pub use error::Error;
pub use github::Github;
pub use http::{
	Client, HttpMethod, HttpRequest, HttpResponse, ReqwestTransport, Transport,
};

pub type Result<T, E = error::Error> = std::result::Result<T, E>;
