use github_v3::{config, Github, Options};
use httptest::Server;

pub fn init_logger() {
	let _ = env_logger::builder().is_test(true).try_init();
}

/// A client talking to `server` through the reqwest transport.
pub fn setup_github(server: &Server, options: Options) -> Github {
	init_logger();
	let api_url = server.url_str("");
	Github::new(options.with(config::API_URL, api_url.trim_end_matches('/')))
		.unwrap()
}
